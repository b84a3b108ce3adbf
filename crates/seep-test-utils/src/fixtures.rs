//! Scripted open sequences.
//!
//! Each fixture returns the sites to open, in order. Grid sizes are given
//! alongside in [`all_scenarios`].

use seep_core::{PercolationError, PercolationModel, Site};

/// Open every site of `sites` in order.
pub fn open_all<M: PercolationModel + ?Sized>(
    model: &mut M,
    sites: &[Site],
) -> Result<(), PercolationError> {
    for &site in sites {
        model.open(site)?;
    }
    Ok(())
}

/// 3×3: a column-1 path from bottom to top plus an isolated bottom-right
/// cell. The grid percolates, `(3, 1)` is full, `(3, 3)` is not.
pub fn backwash_scenario() -> Vec<Site> {
    vec![
        Site::new(3, 1),
        Site::new(2, 1),
        Site::new(1, 1),
        Site::new(3, 3),
    ]
}

/// A straight top-to-bottom path down column `col`, opened top first.
pub fn column_path(n: usize, col: usize) -> Vec<Site> {
    (1..=n).map(|row| Site::new(row, col)).collect()
}

/// A serpentine walk: right along row 1, down one cell at the last
/// column, left along row 3, and so on. Percolates as soon as the walk
/// reaches row `n`.
pub fn serpentine(n: usize) -> Vec<Site> {
    let mut out = Vec::new();
    for row in 1..=n {
        if row % 2 == 1 {
            let cols: Vec<usize> = if (row / 2) % 2 == 0 {
                (1..=n).collect()
            } else {
                (1..=n).rev().collect()
            };
            out.extend(cols.into_iter().map(|col| Site::new(row, col)));
        } else {
            let col = if (row / 2) % 2 == 1 { n } else { 1 };
            out.push(Site::new(row, col));
        }
    }
    out
}

/// 5×5: two bottom-anchored stalks and a top-anchored stalk. The last
/// cell bridges the top stalk to the column-5 stalk; the column-1 stalk
/// stays bottom-only.
pub fn bridged_stalks() -> Vec<Site> {
    vec![
        Site::new(5, 1),
        Site::new(4, 1),
        Site::new(5, 5),
        Site::new(4, 5),
        Site::new(3, 5),
        Site::new(1, 3),
        Site::new(2, 3),
        Site::new(3, 3),
        Site::new(3, 4),
    ]
}

/// Every site of an `n`×`n` grid in row-major order.
pub fn fill(n: usize) -> Vec<Site> {
    Site::all(n).collect()
}

/// All orderings of `items`.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            out.push(tail);
        }
    }
    out
}

/// `(grid size, open sequence)` pairs covering every fixture.
pub fn all_scenarios() -> Vec<(usize, Vec<Site>)> {
    vec![
        (1, fill(1)),
        (3, backwash_scenario()),
        (4, column_path(4, 2)),
        (5, serpentine(5)),
        (5, bridged_stalks()),
        (4, fill(4)),
    ]
}
