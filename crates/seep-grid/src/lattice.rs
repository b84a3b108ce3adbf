//! N×N square lattice with 4-connected neighbourhood (N/S/W/E).

use seep_core::{PercolationError, Site};
use smallvec::SmallVec;

/// Offsets for the four cardinal neighbours, in north, south, west, east
/// order.
const OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Index arithmetic and adjacency for an `n`×`n` grid.
///
/// Sites are 1-indexed [`Site`] values; internally every cell is a
/// row-major linear index `(row - 1) * n + (col - 1)` in `[0, n*n)`.
/// Edges absorb: off-grid neighbours are simply omitted, so corners have
/// 2 neighbours, other edge cells 3, interior cells 4.
///
/// # Examples
///
/// ```
/// use seep_core::Site;
/// use seep_grid::SquareLattice;
///
/// let lattice = SquareLattice::new(4).unwrap();
/// assert_eq!(lattice.cell_count(), 16);
///
/// let corner = lattice.check(Site::new(1, 1)).unwrap();
/// assert_eq!(corner, 0);
/// assert_eq!(lattice.neighbours(corner).len(), 2);
/// assert!(lattice.check(Site::new(5, 1)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareLattice {
    n: usize,
}

impl SquareLattice {
    /// Create an `n`×`n` lattice.
    ///
    /// Returns `Err(PercolationError::InvalidArgument)` if `n == 0` or
    /// `n * n` does not fit in `usize`.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 || n.checked_mul(n).is_none() {
            return Err(PercolationError::InvalidArgument {
                name: "grid_size",
                value: n,
            });
        }
        Ok(Self { n })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Total number of cells, `n * n`. Cannot overflow: `new` rejects
    /// any `n` whose square does not fit.
    pub fn cell_count(&self) -> usize {
        self.n * self.n
    }

    /// Validate `site` and return its linear index.
    ///
    /// The row is checked before the column, so a site with both
    /// coordinates out of range reports the row.
    pub fn check(&self, site: Site) -> Result<usize, PercolationError> {
        if site.row < 1 || site.row > self.n {
            return Err(PercolationError::axis_out_of_range("row", site.row, self.n));
        }
        if site.col < 1 || site.col > self.n {
            return Err(PercolationError::axis_out_of_range("col", site.col, self.n));
        }
        Ok((site.row - 1) * self.n + (site.col - 1))
    }

    /// Inverse of [`check`](Self::check) for an in-range index.
    pub fn site_of(&self, index: usize) -> Site {
        debug_assert!(index < self.cell_count());
        Site::new(index / self.n + 1, index % self.n + 1)
    }

    /// Whether `index` lies in row 1.
    pub fn is_top(&self, index: usize) -> bool {
        index < self.n
    }

    /// Whether `index` lies in row `n`.
    pub fn is_bottom(&self, index: usize) -> bool {
        index >= self.cell_count() - self.n
    }

    /// In-grid cardinal neighbours of `index`, north, south, west, east.
    pub fn neighbours(&self, index: usize) -> SmallVec<[usize; 4]> {
        let n = self.n as isize;
        let r = (index / self.n) as isize;
        let c = (index % self.n) as isize;
        let mut result = SmallVec::new();
        for (dr, dc) in OFFSETS {
            let nr = r + dr;
            let nc = c + dc;
            if (0..n).contains(&nr) && (0..n).contains(&nc) {
                result.push((nr * n + nc) as usize);
            }
        }
        result
    }
}
