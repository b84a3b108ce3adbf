//! Monte-Carlo percolation threshold estimation.
//!
//! Each trial opens sites of a fresh [`SiteGrid`](seep_grid::SiteGrid)
//! uniformly at random until it percolates; the fraction of open sites at
//! that moment is one threshold sample. [`run_trials`] runs a batch
//! described by a [`TrialConfig`] and aggregates the samples into a
//! [`ThresholdSummary`] (mean, sample standard deviation, 95% confidence
//! interval).
//!
//! Trials are reproducible: trial `i` of a batch seeded with `s` always
//! draws from the same [`trial_rng`] stream, whichever worker thread
//! runs it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod runner;
pub mod summary;
pub mod trial;

pub use config::{ConfigError, TrialConfig};
pub use runner::{run_trials, RunError, TrialReport};
pub use summary::{ThresholdSummary, CONFIDENCE_95_Z};
pub use trial::{percolate, run_trial, simulate, trial_rng, TrialOutcome};
