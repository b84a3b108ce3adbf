//! Command-line arguments.

use clap::{Parser, Subcommand};

/// Percolation on N×N grids, backed by a weighted union-find.
#[derive(Parser, Debug)]
#[command(name = "seep", version, about)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Estimate the percolation threshold over repeated random trials
    Stats {
        /// Grid side length N
        grid_size: usize,
        /// Number of independent trials T
        trials: usize,
        /// Base RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Worker threads (defaults to available parallelism)
        #[arg(long)]
        threads: Option<usize>,
    },
    /// Run one random trial and print the final grid
    Simulate {
        /// Grid side length N
        grid_size: usize,
        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Union `p q` pairs read from stdin and report connected components
    Unions {
        /// Number of elements in the forest
        elements: usize,
    },
}
