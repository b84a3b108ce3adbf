//! A single Monte-Carlo percolation trial.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seep_core::{PercolationError, PercolationModel, Site};
use seep_grid::SiteGrid;

/// Result of one trial: how many sites were open when the grid first
/// percolated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Position of this trial within its batch.
    pub index: usize,
    /// Open sites at the moment of percolation.
    pub opened: usize,
    /// Total sites, `n * n`.
    pub cells: usize,
}

impl TrialOutcome {
    /// Fraction of open sites at percolation, in `(0, 1]`.
    pub fn threshold(&self) -> f64 {
        self.opened as f64 / self.cells as f64
    }
}

/// Deterministic RNG for trial `index` of a batch seeded with `seed`.
///
/// All trials share the key derived from `seed` and differ by ChaCha
/// stream, so each trial's sequence is independent of which thread runs
/// it.
pub fn trial_rng(seed: u64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index as u64);
    rng
}

/// Open closed sites of `model`, uniformly at random, until it
/// percolates. Returns the number of sites opened by this call.
///
/// Sites already open are left alone, so a partially opened model can be
/// driven to completion. Returns immediately if the model already
/// percolates.
pub fn percolate<M, R>(model: &mut M, rng: &mut R) -> Result<usize, PercolationError>
where
    M: PercolationModel + ?Sized,
    R: Rng + ?Sized,
{
    let n = model.size();
    let mut closed = Vec::with_capacity(n * n - model.open_count());
    for site in Site::all(n) {
        if !model.is_open(site)? {
            closed.push(site);
        }
    }
    closed.shuffle(rng);

    let mut opened = 0;
    for site in closed {
        if model.percolates() {
            break;
        }
        model.open(site)?;
        opened += 1;
    }
    Ok(opened)
}

/// Run one trial on a fresh `n`×`n` grid, returning the final grid along
/// with the outcome.
pub fn simulate<R>(
    n: usize,
    index: usize,
    rng: &mut R,
) -> Result<(SiteGrid, TrialOutcome), PercolationError>
where
    R: Rng + ?Sized,
{
    let mut grid = SiteGrid::new(n)?;
    let opened = percolate(&mut grid, rng)?;
    let outcome = TrialOutcome {
        index,
        opened,
        cells: grid.cell_count(),
    };
    Ok((grid, outcome))
}

/// Run one trial on a fresh `n`×`n` grid.
pub fn run_trial<R>(
    n: usize,
    index: usize,
    rng: &mut R,
) -> Result<TrialOutcome, PercolationError>
where
    R: Rng + ?Sized,
{
    simulate(n, index, rng).map(|(_, outcome)| outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seep_test_utils::ReferenceGrid;

    #[test]
    fn single_cell_threshold_is_one() {
        let mut rng = trial_rng(0, 0);
        let outcome = run_trial(1, 0, &mut rng).unwrap();
        assert_eq!(outcome.opened, 1);
        assert_eq!(outcome.cells, 1);
        assert_eq!(outcome.threshold(), 1.0);
    }

    #[test]
    fn zero_size_rejected() {
        let mut rng = trial_rng(0, 0);
        assert!(run_trial(0, 0, &mut rng).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn simulate_stops_at_first_percolation() {
        let mut rng = trial_rng(11, 3);
        let (grid, outcome) = simulate(12, 3, &mut rng).unwrap();
        assert!(grid.percolates());
        assert_eq!(grid.open_count(), outcome.opened);
        assert!(outcome.opened >= 12, "needs at least one cell per row");
        assert!(outcome.opened <= 144);
        assert_eq!(outcome.index, 3);
    }

    #[test]
    fn same_seed_same_outcome() {
        let a = run_trial(15, 0, &mut trial_rng(42, 5)).unwrap();
        let b = run_trial(15, 0, &mut trial_rng(42, 5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn streams_differ_between_trials() {
        let thresholds: Vec<usize> = (0..8)
            .map(|i| run_trial(20, i, &mut trial_rng(42, i)).unwrap().opened)
            .collect();
        assert!(thresholds.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn percolate_respects_already_open_sites() {
        let mut grid = ReferenceGrid::new(4).unwrap();
        for row in 1..=3 {
            grid.open(Site::new(row, 2)).unwrap();
        }
        let opened = percolate(&mut grid, &mut trial_rng(1, 0)).unwrap();
        assert!(grid.percolates());
        assert_eq!(grid.open_count(), opened + 3);
    }

    #[test]
    fn percolate_is_noop_when_already_percolating() {
        let mut grid = SiteGrid::new(2).unwrap();
        grid.open(Site::new(1, 1)).unwrap();
        grid.open(Site::new(2, 1)).unwrap();
        assert_eq!(percolate(&mut grid, &mut trial_rng(0, 0)).unwrap(), 0);
        assert_eq!(grid.open_count(), 2);
    }
}
