//! Seep: incremental percolation on square grids, backed by a weighted
//! union-find.
//!
//! This is the facade crate that re-exports the public API of the Seep
//! sub-crates. For most users, adding `seep` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! let mut grid = SiteGrid::new(3).unwrap();
//! for row in 1..=3 {
//!     grid.open(Site::new(row, 2)).unwrap();
//! }
//! assert!(grid.percolates());
//! assert!(grid.is_full(Site::new(3, 2)).unwrap());
//!
//! let report = run_trials(&TrialConfig::new(20, 10).seed(42)).unwrap();
//! assert!(report.summary.mean > 0.0 && report.summary.mean <= 1.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seep-core` | `Site`, `PercolationError`, `PercolationModel` |
//! | [`forest`] | `seep-forest` | Weighted disjoint-set forest |
//! | [`grid`] | `seep-grid` | Square lattice and the backwash-free `SiteGrid` |
//! | [`stats`] | `seep-stats` | Monte-Carlo threshold estimation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the percolation trait (`seep-core`).
pub use seep_core as types;

/// Weighted union-find with path halving (`seep-forest`).
///
/// See [`forest::DisjointSetForest`].
pub use seep_forest as forest;

/// Square lattice geometry and the percolation grid (`seep-grid`).
///
/// [`grid::SiteGrid`] answers `is_full` and `percolates` without
/// backwash by tracking per-component boundary contact.
pub use seep_grid as grid;

/// Monte-Carlo percolation threshold estimation (`seep-stats`).
pub use seep_stats as stats;

/// Common imports for typical Seep usage.
///
/// ```rust
/// use seep::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use seep_core::{PercolationError, PercolationModel, Site};

    // Forest
    pub use seep_forest::DisjointSetForest;

    // Grid
    pub use seep_grid::SiteGrid;

    // Statistics
    pub use seep_stats::{
        run_trials, ConfigError, RunError, ThresholdSummary, TrialConfig, TrialReport,
    };
}
