//! Flood-fill percolation oracle.

use std::collections::VecDeque;

use seep_core::{PercolationError, PercolationModel, Site};

/// Percolation answered by breadth-first search from the top row.
///
/// Every `is_full`/`percolates` call recomputes reachability from
/// scratch, so cost is O(n²) per query. Only suitable as a test oracle.
#[derive(Clone, Debug)]
pub struct ReferenceGrid {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
}

impl ReferenceGrid {
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        let Some(cells) = n.checked_mul(n).filter(|&c| c > 0) else {
            return Err(PercolationError::InvalidArgument {
                name: "grid_size",
                value: n,
            });
        };
        Ok(Self {
            n,
            open: vec![false; cells],
            open_count: 0,
        })
    }

    fn index(&self, site: Site) -> Result<usize, PercolationError> {
        if site.row < 1 || site.row > self.n {
            return Err(PercolationError::axis_out_of_range("row", site.row, self.n));
        }
        if site.col < 1 || site.col > self.n {
            return Err(PercolationError::axis_out_of_range("col", site.col, self.n));
        }
        Ok((site.row - 1) * self.n + (site.col - 1))
    }

    /// Cells reachable from any open top-row cell through open cells.
    pub fn reachable_from_top(&self) -> Vec<bool> {
        let n = self.n;
        let mut seen = vec![false; n * n];
        let mut queue: VecDeque<usize> = (0..n).filter(|&i| self.open[i]).collect();
        for &i in &queue {
            seen[i] = true;
        }
        while let Some(i) = queue.pop_front() {
            let (r, c) = (i / n, i % n);
            let mut visit = |j: usize| {
                if self.open[j] && !seen[j] {
                    seen[j] = true;
                    queue.push_back(j);
                }
            };
            if r > 0 {
                visit(i - n);
            }
            if r + 1 < n {
                visit(i + n);
            }
            if c > 0 {
                visit(i - 1);
            }
            if c + 1 < n {
                visit(i + 1);
            }
        }
        seen
    }
}

impl PercolationModel for ReferenceGrid {
    fn size(&self) -> usize {
        self.n
    }

    fn open(&mut self, site: Site) -> Result<(), PercolationError> {
        let i = self.index(site)?;
        if !self.open[i] {
            self.open[i] = true;
            self.open_count += 1;
        }
        Ok(())
    }

    fn is_open(&self, site: Site) -> Result<bool, PercolationError> {
        let i = self.index(site)?;
        Ok(self.open[i])
    }

    fn is_full(&mut self, site: Site) -> Result<bool, PercolationError> {
        let i = self.index(site)?;
        Ok(self.reachable_from_top()[i])
    }

    fn percolates(&self) -> bool {
        let n = self.n;
        let reached = self.reachable_from_top();
        reached[n * n - n..].iter().any(|&r| r)
    }

    fn open_count(&self) -> usize {
        self.open_count
    }
}
