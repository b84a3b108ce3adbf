//! Library half of the `seep` binary.
//!
//! Subcommands write to any [`Write`] and read from any [`BufRead`], so
//! they can be driven from tests without spawning a process.

#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod error;
pub mod render;
pub mod unions;

use std::io::{BufRead, Write};

use seep_stats::{run_trials, simulate, trial_rng, TrialConfig};

pub use args::{Cli, Command};
pub use error::CliError;

/// Execute `command`, reading pair input from `input` and writing
/// results to `output`.
///
/// A missing seed is drawn at random; the seed in use is logged at info
/// level so a run can be repeated.
pub fn run<R, W>(command: Command, input: R, output: &mut W) -> Result<(), CliError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    match command {
        Command::Stats {
            grid_size,
            trials,
            seed,
            threads,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            let mut config = TrialConfig::new(grid_size, trials).seed(seed);
            if let Some(threads) = threads {
                config = config.threads(threads);
            }
            let report = run_trials(&config)?;
            writeln!(output, "{}", report.summary)?;
        }
        Command::Simulate { grid_size, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            tracing::info!(grid_size, seed, "simulating one trial");
            let (mut grid, outcome) = simulate(grid_size, 0, &mut trial_rng(seed, 0))?;
            write!(output, "{}", render::render(&mut grid)?)?;
            writeln!(
                output,
                "{} open sites ({:.4} of {}), percolates: {}",
                outcome.opened,
                outcome.threshold(),
                outcome.cells,
                grid.percolates()
            )?;
        }
        Command::Unions { elements } => {
            unions::run_unions(elements, input, output)?;
        }
    }
    Ok(())
}
