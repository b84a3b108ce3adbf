//! Incremental percolation model over a [`SquareLattice`].

use seep_core::{PercolationError, PercolationModel, Site};
use seep_forest::DisjointSetForest;

use crate::lattice::SquareLattice;
use crate::witness::BoundaryWitness;

/// An `n`×`n` grid of sites answering open/full/percolates queries.
///
/// Open cells are merged with their open neighbours in a
/// [`DisjointSetForest`] of exactly `n*n` elements. Instead of virtual
/// top/bottom sentinel elements, each forest root carries a
/// [`BoundaryWitness`]; merging two components ORs their witnesses onto
/// the surviving root. Fullness reads only the `TOP` bit of a cell's own
/// component, so a bottom connection elsewhere can never leak into it
/// (no backwash), and percolation is detected at merge time in O(1).
///
/// # Examples
///
/// ```
/// use seep_core::Site;
/// use seep_grid::SiteGrid;
///
/// let mut grid = SiteGrid::new(3).unwrap();
/// for row in 1..=3 {
///     grid.open(Site::new(row, 1)).unwrap();
/// }
/// grid.open(Site::new(3, 3)).unwrap();
///
/// assert!(grid.percolates());
/// assert!(grid.is_full(Site::new(3, 1)).unwrap());
/// assert!(!grid.is_full(Site::new(3, 3)).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct SiteGrid {
    lattice: SquareLattice,
    open: Vec<bool>,
    witness: Vec<BoundaryWitness>,
    forest: DisjointSetForest,
    open_count: usize,
    percolates: bool,
}

impl SiteGrid {
    /// Create an `n`×`n` grid with every site closed.
    ///
    /// Returns `Err(PercolationError::InvalidArgument)` if `n == 0` or
    /// `n * n` overflows `usize`.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        let lattice = SquareLattice::new(n)?;
        let cells = lattice.cell_count();
        Ok(Self {
            lattice,
            open: vec![false; cells],
            witness: vec![BoundaryWitness::NONE; cells],
            forest: DisjointSetForest::new(cells)?,
            open_count: 0,
            percolates: false,
        })
    }

    /// Side length `n`.
    pub fn size(&self) -> usize {
        self.lattice.size()
    }

    /// Total number of sites, `n * n`.
    pub fn cell_count(&self) -> usize {
        self.lattice.cell_count()
    }

    /// The lattice this grid is laid out on.
    pub fn lattice(&self) -> &SquareLattice {
        &self.lattice
    }

    /// Number of distinct sites opened so far.
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Whether the top and bottom rows are connected. Sticky.
    pub fn percolates(&self) -> bool {
        self.percolates
    }

    /// Open `site` and merge it with each open neighbour.
    ///
    /// Idempotent: re-opening an open site changes nothing.
    pub fn open(&mut self, site: Site) -> Result<(), PercolationError> {
        let index = self.lattice.check(site)?;
        if self.open[index] {
            return Ok(());
        }
        self.open[index] = true;
        self.open_count += 1;

        // A closed cell is never merged, so `index` is still its own root.
        let mut own = BoundaryWitness::NONE;
        if self.lattice.is_top(index) {
            own |= BoundaryWitness::TOP;
        }
        if self.lattice.is_bottom(index) {
            own |= BoundaryWitness::BOTTOM;
        }
        self.witness[index] = own;
        self.note_witness(own);

        for neighbour in self.lattice.neighbours(index) {
            if self.open[neighbour] {
                self.merge(index, neighbour)?;
            }
        }
        Ok(())
    }

    /// Whether `site` has been opened.
    pub fn is_open(&self, site: Site) -> Result<bool, PercolationError> {
        let index = self.lattice.check(site)?;
        Ok(self.open[index])
    }

    /// Whether `site` is open and its component reaches the top row.
    pub fn is_full(&mut self, site: Site) -> Result<bool, PercolationError> {
        let index = self.lattice.check(site)?;
        if !self.open[index] {
            return Ok(false);
        }
        let root = self.forest.find(index)?;
        Ok(self.witness[root].touches_top())
    }

    /// Boundary witness of the component containing `site`, or `None`
    /// if the site is closed.
    pub fn witness(&mut self, site: Site) -> Result<Option<BoundaryWitness>, PercolationError> {
        let index = self.lattice.check(site)?;
        if !self.open[index] {
            return Ok(None);
        }
        let root = self.forest.find(index)?;
        Ok(Some(self.witness[root]))
    }

    fn merge(&mut self, a: usize, b: usize) -> Result<(), PercolationError> {
        let root_a = self.forest.find(a)?;
        let root_b = self.forest.find(b)?;
        let combined = self.witness[root_a] | self.witness[root_b];
        if let Some(root) = self.forest.union_roots(root_a, root_b)? {
            self.witness[root] = combined;
            self.note_witness(combined);
        }
        Ok(())
    }

    fn note_witness(&mut self, witness: BoundaryWitness) {
        if witness.spans() && !self.percolates {
            self.percolates = true;
            tracing::trace!(
                n = self.lattice.size(),
                open = self.open_count,
                "grid percolates"
            );
        }
    }
}

impl PercolationModel for SiteGrid {
    fn size(&self) -> usize {
        SiteGrid::size(self)
    }

    fn open(&mut self, site: Site) -> Result<(), PercolationError> {
        SiteGrid::open(self, site)
    }

    fn is_open(&self, site: Site) -> Result<bool, PercolationError> {
        SiteGrid::is_open(self, site)
    }

    fn is_full(&mut self, site: Site) -> Result<bool, PercolationError> {
        SiteGrid::is_full(self, site)
    }

    fn percolates(&self) -> bool {
        SiteGrid::percolates(self)
    }

    fn open_count(&self) -> usize {
        SiteGrid::open_count(self)
    }
}
