//! Disjoint-set forest for the Seep percolation engine.
//!
//! [`DisjointSetForest`] tracks a partition of `n` integer-labelled
//! elements into components. It is stored as two parallel arrays
//! (`parent`, `size`) indexed by element, so there are no pointer-linked
//! nodes and no per-node allocation.
//!
//! - **Union by size**: the smaller tree is attached under the root of
//!   the larger one, bounding tree height by `log2(n)`.
//! - **Path halving**: `find` redirects every visited node to its
//!   grandparent, flattening paths for later calls.
//!
//! Together these give near-constant amortised `find`/`union`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod forest;

pub use forest::DisjointSetForest;
pub use seep_core::PercolationError;
