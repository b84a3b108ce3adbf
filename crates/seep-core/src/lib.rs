//! Core types and traits for the Seep percolation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Seep workspace:
//! the 1-indexed [`Site`] coordinate, the [`PercolationError`] type,
//! and the [`PercolationModel`] contract that orchestration and
//! rendering code consume.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod site;
pub mod traits;

pub use error::PercolationError;
pub use site::Site;
pub use traits::PercolationModel;
