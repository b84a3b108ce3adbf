//! Test utilities and reference oracles for Seep development.
//!
//! - [`ReferenceGrid`]: a brute-force [`PercolationModel`] that answers
//!   every query by flood fill. Slow, obviously correct, and immune to
//!   backwash by construction.
//! - [`fixtures`]: scripted open sequences for known scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use reference::ReferenceGrid;
pub use seep_core::PercolationModel;
