//! Aggregate statistics over percolation thresholds.

use std::fmt;

use seep_core::PercolationError;

/// z-score for a two-sided 95% confidence interval.
pub const CONFIDENCE_95_Z: f64 = 1.96;

/// Sample statistics over a batch of threshold samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdSummary {
    /// Number of samples.
    pub trials: usize,
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation (Bessel-corrected). NaN for one sample.
    pub stddev: f64,
    /// Low endpoint of the 95% confidence interval.
    pub confidence_lo: f64,
    /// High endpoint of the 95% confidence interval.
    pub confidence_hi: f64,
}

impl ThresholdSummary {
    /// Summarise `samples`.
    ///
    /// Returns `Err(PercolationError::InvalidArgument)` if `samples` is
    /// empty. With a single sample the standard deviation and both
    /// confidence bounds are NaN.
    pub fn from_samples(samples: &[f64]) -> Result<Self, PercolationError> {
        let trials = samples.len();
        if trials == 0 {
            return Err(PercolationError::InvalidArgument {
                name: "trials",
                value: 0,
            });
        }
        let t = trials as f64;
        let mean = samples.iter().sum::<f64>() / t;
        let stddev = if trials == 1 {
            f64::NAN
        } else {
            let ss: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
            (ss / (t - 1.0)).sqrt()
        };
        let half_width = CONFIDENCE_95_Z * stddev / t.sqrt();
        Ok(Self {
            trials,
            mean,
            stddev,
            confidence_lo: mean - half_width,
            confidence_hi: mean + half_width,
        })
    }
}

impl fmt::Display for ThresholdSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mean                    = {}", self.mean)?;
        writeln!(f, "stddev                  = {}", self.stddev)?;
        write!(
            f,
            "95% confidence interval = [{}, {}]",
            self.confidence_lo, self.confidence_hi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn empty_rejected() {
        assert!(ThresholdSummary::from_samples(&[])
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn hand_computed_values() {
        // mean 0.6, deviations ±0.1 / 0: ss = 0.02, var = 0.01, sd = 0.1
        let s = ThresholdSummary::from_samples(&[0.5, 0.6, 0.7]).unwrap();
        assert_eq!(s.trials, 3);
        assert!(close(s.mean, 0.6));
        assert!(close(s.stddev, 0.1));
        let hw = 1.96 * 0.1 / 3f64.sqrt();
        assert!(close(s.confidence_lo, 0.6 - hw));
        assert!(close(s.confidence_hi, 0.6 + hw));
    }

    #[test]
    fn identical_samples_have_zero_spread() {
        let s = ThresholdSummary::from_samples(&[0.59; 10]).unwrap();
        assert!(close(s.mean, 0.59));
        assert!(s.stddev < 1e-12);
        assert!(close(s.confidence_lo, s.confidence_hi));
    }

    #[test]
    fn single_sample_stddev_is_nan() {
        let s = ThresholdSummary::from_samples(&[0.4]).unwrap();
        assert_eq!(s.mean, 0.4);
        assert!(s.stddev.is_nan());
        assert!(s.confidence_lo.is_nan());
        assert!(s.confidence_hi.is_nan());
    }

    #[test]
    fn display_layout() {
        let s = ThresholdSummary::from_samples(&[0.5, 0.5]).unwrap();
        let text = s.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "mean                    = 0.5");
        assert_eq!(lines[1], "stddev                  = 0");
        assert_eq!(lines[2], "95% confidence interval = [0.5, 0.5]");
    }
}
