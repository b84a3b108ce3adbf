//! Trial configuration, validation, and error types.
//!
//! [`TrialConfig`] describes a batch of independent percolation trials.
//! [`validate()`](TrialConfig::validate) checks it before any grid is
//! allocated; [`run_trials`](crate::runner::run_trials) calls it first.

use std::error::Error;
use std::fmt;

use seep_core::PercolationError;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`TrialConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A grid or trial parameter was rejected.
    Percolation(PercolationError),
    /// `threads` was explicitly set to zero.
    NoThreads,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percolation(e) => write!(f, "{e}"),
            Self::NoThreads => write!(f, "threads must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Percolation(e) => Some(e),
            Self::NoThreads => None,
        }
    }
}

impl From<PercolationError> for ConfigError {
    fn from(e: PercolationError) -> Self {
        Self::Percolation(e)
    }
}

// ── TrialConfig ────────────────────────────────────────────────────

/// Configuration for a batch of Monte-Carlo percolation trials.
///
/// # Examples
///
/// ```
/// use seep_stats::TrialConfig;
///
/// let config = TrialConfig::new(20, 30).seed(7).threads(2);
/// assert!(config.validate().is_ok());
/// assert!(TrialConfig::new(0, 30).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialConfig {
    /// Side length of each trial's grid. Must be positive.
    pub grid_size: usize,
    /// Number of independent trials. Must be positive.
    pub trials: usize,
    /// Base seed. Trial `i` derives its own stream from `seed` and `i`,
    /// so results do not depend on thread count. Default: 0.
    pub seed: u64,
    /// Worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, trials]`).
    pub threads: Option<usize>,
}

impl TrialConfig {
    /// Create a config for `trials` trials on a `grid_size`×`grid_size`
    /// grid with seed 0 and auto-detected threads.
    pub fn new(grid_size: usize, trials: usize) -> Self {
        Self {
            grid_size,
            trials,
            seed: 0,
            threads: None,
        }
    }

    /// Set the base seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set an explicit worker thread count.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(PercolationError::InvalidArgument {
                name: "grid_size",
                value: self.grid_size,
            }
            .into());
        }
        if self.trials == 0 {
            return Err(PercolationError::InvalidArgument {
                name: "trials",
                value: self.trials,
            }
            .into());
        }
        if self.threads == Some(0) {
            return Err(ConfigError::NoThreads);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Never exceeds the number of trials.
    pub fn resolved_threads(&self) -> usize {
        let wanted = match self.threads {
            Some(n) => n,
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        };
        wanted.clamp(1, self.trials.max(1))
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::new(200, 100)
    }
}
