//! Grid percolation model for the Seep engine.
//!
//! [`SiteGrid`] owns an N×N open/closed state and drives a
//! [`DisjointSetForest`](seep_forest::DisjointSetForest) as cells open.
//! [`SquareLattice`] supplies the index arithmetic and 4-connected
//! adjacency; [`BoundaryWitness`] records, per component root, which
//! boundary rows the component touches.
//!
//! # Backwash
//!
//! The common shortcut of merging every top-row cell into one virtual
//! node and every bottom-row cell into another makes `percolates` a single
//! connectivity query, but once the grid percolates the virtual nodes share
//! a component, and every bottom-connected cell then reads as full. Keeping
//! boundary contact as per-root bits means fullness is decided by the
//! cell's own component only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod lattice;
pub mod witness;

#[cfg(test)]
pub(crate) mod compliance;

pub use grid::SiteGrid;
pub use lattice::SquareLattice;
pub use witness::BoundaryWitness;
