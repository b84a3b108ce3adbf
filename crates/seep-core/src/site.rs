//! The 1-indexed [`Site`] coordinate.

use std::fmt;

/// A cell position on an N×N grid.
///
/// Both `row` and `col` are 1-indexed: `(1, 1)` is the upper-left cell
/// and `(n, n)` the lower-right. Row 1 is the top boundary, row `n` the
/// bottom boundary. A `Site` carries no grid size; validation happens
/// against a concrete grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    /// Row, in `[1, n]`.
    pub row: usize,
    /// Column, in `[1, n]`.
    pub col: usize,
}

impl Site {
    /// Create a site from 1-indexed coordinates.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major iterator over every site of an `n`×`n` grid:
    /// `(1,1), (1,2), ..., (n,n)`.
    pub fn all(n: usize) -> impl Iterator<Item = Site> {
        (1..=n).flat_map(move |row| (1..=n).map(move |col| Site { row, col }))
    }
}

impl From<(usize, usize)> for Site {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
