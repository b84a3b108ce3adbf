//! The percolation contract shared by models, oracles, and front ends.

use crate::error::PercolationError;
use crate::site::Site;

/// Incremental percolation over an N×N grid of sites.
///
/// Sites start closed and can only be opened. A site is *full* when it
/// is open and joined to the top row through a chain of open N/S/E/W
/// neighbours. The grid *percolates* once some such chain also reaches
/// the bottom row; that state is sticky.
///
/// Every site-taking method validates both coordinates against `[1, n]`
/// and returns [`PercolationError::IndexOutOfRange`] otherwise.
///
/// `is_full` takes `&mut self` because implementations may compress
/// internal paths while answering.
pub trait PercolationModel {
    /// Side length `n` of the grid.
    fn size(&self) -> usize;

    /// Open `site`. Opening an already-open site is a no-op.
    fn open(&mut self, site: Site) -> Result<(), PercolationError>;

    /// Whether `site` has been opened.
    fn is_open(&self, site: Site) -> Result<bool, PercolationError>;

    /// Whether `site` is open and connected to the top row.
    fn is_full(&mut self, site: Site) -> Result<bool, PercolationError>;

    /// Whether the top and bottom rows are connected.
    fn percolates(&self) -> bool;

    /// Number of distinct sites opened so far.
    fn open_count(&self) -> usize;
}
