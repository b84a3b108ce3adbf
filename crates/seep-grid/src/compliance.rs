//! PercolationModel contract test helpers.
//!
//! These functions verify that a model satisfies the invariants of the
//! `PercolationModel` contract by replaying an open sequence against the
//! brute-force `ReferenceGrid`.

use seep_core::{PercolationModel, Site};
use seep_test_utils::ReferenceGrid;

/// Observable state of every site: `(open, full)` in row-major order.
fn snapshot<M: PercolationModel>(model: &mut M) -> Vec<(bool, bool)> {
    Site::all(model.size())
        .map(|site| {
            let open = model.is_open(site).unwrap();
            let full = model.is_full(site).unwrap();
            (open, full)
        })
        .collect()
}

/// Assert that `is_full` implies `is_open` for every site.
pub fn assert_full_implies_open<M: PercolationModel>(model: &mut M) {
    for (i, (open, full)) in snapshot(model).into_iter().enumerate() {
        assert!(!full || open, "cell {i} is full but not open");
    }
}

/// Assert that every query agrees with the reference oracle.
pub fn assert_matches_reference<M: PercolationModel>(model: &mut M, reference: &mut ReferenceGrid) {
    assert_eq!(model.percolates(), reference.percolates(), "percolates");
    assert_eq!(model.open_count(), reference.open_count(), "open_count");
    assert_eq!(snapshot(model), snapshot(reference), "site states");
}

/// Assert that re-opening `site` changes no observable state.
pub fn assert_open_idempotent<M: PercolationModel>(model: &mut M, site: Site) {
    let before = snapshot(model);
    let percolates = model.percolates();
    let count = model.open_count();
    model.open(site).unwrap();
    assert_eq!(snapshot(model), before, "re-opening {site} changed state");
    assert_eq!(model.percolates(), percolates);
    assert_eq!(model.open_count(), count);
}

/// Replay `sites` into a fresh `model`, checking every invariant after
/// each open.
pub fn run_full_compliance<M: PercolationModel>(model: &mut M, sites: &[Site]) {
    let mut reference = ReferenceGrid::new(model.size()).unwrap();
    assert_matches_reference(model, &mut reference);
    let mut percolated = false;
    for &site in sites {
        model.open(site).unwrap();
        reference.open(site).unwrap();
        assert_full_implies_open(model);
        assert_matches_reference(model, &mut reference);
        assert_open_idempotent(model, site);
        if percolated {
            assert!(model.percolates(), "percolation reverted after {site}");
        }
        percolated = model.percolates();
    }
}
