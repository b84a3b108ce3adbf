//! Errors surfaced by the `seep` binary.

use std::error::Error;
use std::fmt;
use std::io;

use seep_core::PercolationError;
use seep_stats::RunError;

/// Anything that can make a subcommand fail.
#[derive(Debug)]
pub enum CliError {
    /// A trial batch was misconfigured or failed while running.
    Run(RunError),
    /// A grid or forest operation was rejected.
    Percolation(PercolationError),
    /// Reading input or writing output failed.
    Io(io::Error),
    /// A token on the pair stream was not a non-negative integer.
    Parse {
        /// The offending token.
        token: String,
    },
    /// The pair stream ended halfway through a pair.
    UnpairedElement {
        /// The element left without a partner.
        element: usize,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Run(e) => write!(f, "{e}"),
            Self::Percolation(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Parse { token } => write!(f, "expected an element index, got '{token}'"),
            Self::UnpairedElement { element } => {
                write!(f, "input ended after {element} without a second element")
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Run(e) => Some(e),
            Self::Percolation(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RunError> for CliError {
    fn from(e: RunError) -> Self {
        Self::Run(e)
    }
}

impl From<PercolationError> for CliError {
    fn from(e: PercolationError) -> Self {
        Self::Percolation(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
