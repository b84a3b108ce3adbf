//! Batch trial execution across worker threads.
//!
//! Worker `w` of `k` runs trials `w, w + k, w + 2k, ...`, each on its own
//! grid with its own [`trial_rng`] stream, and reports outcomes over a
//! crossbeam channel. Nothing is shared between workers, so the batch
//! result depends only on the config, not on the thread count.

use std::error::Error;
use std::fmt;
use std::thread;

use crossbeam_channel::Sender;
use seep_core::PercolationError;

use crate::config::{ConfigError, TrialConfig};
use crate::summary::ThresholdSummary;
use crate::trial::{run_trial, trial_rng, TrialOutcome};

// ── RunError ───────────────────────────────────────────────────────

/// Errors from [`run_trials`].
#[derive(Debug, PartialEq)]
pub enum RunError {
    /// The configuration failed validation; no trial was started.
    Config(ConfigError),
    /// A trial or the summary rejected its input.
    Trial(PercolationError),
    /// A worker thread panicked before reporting its trials.
    WorkerPanicked,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid trial configuration: {e}"),
            Self::Trial(e) => write!(f, "trial failed: {e}"),
            Self::WorkerPanicked => write!(f, "a trial worker thread panicked"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Trial(e) => Some(e),
            Self::WorkerPanicked => None,
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PercolationError> for RunError {
    fn from(e: PercolationError) -> Self {
        Self::Trial(e)
    }
}

// ── Batch execution ────────────────────────────────────────────────

/// Outcomes and summary of a trial batch.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialReport {
    /// The configuration that produced this report.
    pub config: TrialConfig,
    /// Per-trial outcomes, ordered by trial index.
    pub outcomes: Vec<TrialOutcome>,
    /// Statistics over the outcome thresholds.
    pub summary: ThresholdSummary,
}

impl TrialReport {
    /// Threshold of each trial, in trial order.
    pub fn thresholds(&self) -> Vec<f64> {
        self.outcomes.iter().map(TrialOutcome::threshold).collect()
    }
}

/// Validate `config`, run every trial, and summarise the thresholds.
pub fn run_trials(config: &TrialConfig) -> Result<TrialReport, RunError> {
    config.validate()?;
    let threads = config.resolved_threads();
    tracing::info!(
        grid_size = config.grid_size,
        trials = config.trials,
        seed = config.seed,
        threads,
        "running percolation trials"
    );

    let mut outcomes = if threads == 1 {
        let (tx, rx) = crossbeam_channel::unbounded();
        worker_loop(config, 0, 1, &tx);
        drop(tx);
        rx.iter().collect::<Result<Vec<_>, _>>()?
    } else {
        run_parallel(config, threads)?
    };
    outcomes.sort_unstable_by_key(|o| o.index);

    let thresholds: Vec<f64> = outcomes.iter().map(TrialOutcome::threshold).collect();
    let summary = ThresholdSummary::from_samples(&thresholds)?;
    tracing::info!(
        mean = summary.mean,
        stddev = summary.stddev,
        lo = summary.confidence_lo,
        hi = summary.confidence_hi,
        "trials complete"
    );

    Ok(TrialReport {
        config: config.clone(),
        outcomes,
        summary,
    })
}

fn run_parallel(config: &TrialConfig, threads: usize) -> Result<Vec<TrialOutcome>, RunError> {
    let (tx, rx) = crossbeam_channel::unbounded();
    let panicked = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|worker| {
                let tx = tx.clone();
                s.spawn(move || worker_loop(config, worker, threads, &tx))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join())
            .filter(Result::is_err)
            .count()
    });
    drop(tx);
    if panicked > 0 {
        return Err(RunError::WorkerPanicked);
    }
    Ok(rx.iter().collect::<Result<Vec<_>, _>>()?)
}

fn worker_loop(
    config: &TrialConfig,
    worker: usize,
    stride: usize,
    tx: &Sender<Result<TrialOutcome, PercolationError>>,
) {
    for index in (worker..config.trials).step_by(stride) {
        let mut rng = trial_rng(config.seed, index);
        let result = run_trial(config.grid_size, index, &mut rng);
        match &result {
            Ok(outcome) => tracing::debug!(
                trial = index,
                worker,
                opened = outcome.opened,
                threshold = outcome.threshold(),
                "trial percolated"
            ),
            Err(e) => tracing::warn!(trial = index, worker, error = %e, "trial failed"),
        }
        let failed = result.is_err();
        if tx.send(result).is_err() || failed {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_rejected_before_running() {
        assert!(matches!(
            run_trials(&TrialConfig::new(0, 3)),
            Err(RunError::Config(ConfigError::Percolation(
                PercolationError::InvalidArgument { .. }
            )))
        ));
        assert_eq!(
            run_trials(&TrialConfig::new(3, 3).threads(0)),
            Err(RunError::Config(ConfigError::NoThreads))
        );
    }

    #[test]
    fn errors_chain_to_their_cause() {
        let err = RunError::from(ConfigError::NoThreads);
        assert_eq!(
            err.to_string(),
            "invalid trial configuration: threads must be at least 1"
        );
        assert!(err.source().is_some());
        let err = RunError::from(PercolationError::InvalidArgument {
            name: "grid_size",
            value: 0,
        });
        assert!(matches!(err, RunError::Trial(_)));
        assert!(err.source().is_some());
        assert!(RunError::WorkerPanicked.source().is_none());
    }

    #[test]
    fn outcomes_ordered_and_complete() {
        let report = run_trials(&TrialConfig::new(8, 10).seed(3).threads(3)).unwrap();
        assert_eq!(report.outcomes.len(), 10);
        for (i, o) in report.outcomes.iter().enumerate() {
            assert_eq!(o.index, i);
            assert_eq!(o.cells, 64);
        }
        assert_eq!(report.summary.trials, 10);
    }

    #[test]
    fn thread_count_does_not_change_results() {
        let base = TrialConfig::new(10, 12).seed(99);
        let serial = run_trials(&base.clone().threads(1)).unwrap();
        let parallel = run_trials(&base.clone().threads(4)).unwrap();
        assert_eq!(serial.outcomes, parallel.outcomes);
        assert_eq!(serial.thresholds(), parallel.thresholds());
    }

    #[test]
    fn single_trial_single_cell() {
        let report = run_trials(&TrialConfig::new(1, 1)).unwrap();
        assert_eq!(report.thresholds(), vec![1.0]);
        assert_eq!(report.summary.mean, 1.0);
        assert!(report.summary.stddev.is_nan());
    }
}
