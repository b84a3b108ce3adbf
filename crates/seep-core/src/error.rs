//! Error types for the Seep percolation engine.
//!
//! Both variants describe caller contract violations. Nothing in the
//! engine retries or degrades; errors surface at the offending call.

use std::error::Error;
use std::fmt;

/// Errors from forest, grid, and trial construction or access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PercolationError {
    /// A size or count that must be positive was zero.
    InvalidArgument {
        /// Name of the offending parameter (e.g. `"grid_size"`).
        name: &'static str,
        /// The value that was passed.
        value: usize,
    },
    /// An index or coordinate fell outside its valid range.
    IndexOutOfRange {
        /// Name of the offending parameter (e.g. `"row"`, `"element"`).
        name: &'static str,
        /// The value that was passed.
        index: usize,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl PercolationError {
    /// Shorthand for an [`IndexOutOfRange`](Self::IndexOutOfRange) over
    /// the half-open range `[0, len)`.
    pub fn element_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            name: "element",
            index,
            bounds: format!("[0, {len})"),
        }
    }

    /// Shorthand for an [`IndexOutOfRange`](Self::IndexOutOfRange) over
    /// the inclusive grid axis `[1, n]`.
    pub fn axis_out_of_range(name: &'static str, index: usize, n: usize) -> Self {
        Self::IndexOutOfRange {
            name,
            index,
            bounds: format!("[1, {n}]"),
        }
    }

    /// Returns `true` for [`InvalidArgument`](Self::InvalidArgument).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` for [`IndexOutOfRange`](Self::IndexOutOfRange).
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, value } => {
                write!(f, "invalid argument: {name} must be positive, got {value}")
            }
            Self::IndexOutOfRange {
                name,
                index,
                bounds,
            } => {
                write!(f, "{name} index {index} out of range: expected {bounds}")
            }
        }
    }
}

impl Error for PercolationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_argument() {
        let e = PercolationError::InvalidArgument {
            name: "grid_size",
            value: 0,
        };
        assert_eq!(
            e.to_string(),
            "invalid argument: grid_size must be positive, got 0"
        );
        assert!(e.is_invalid_argument());
        assert!(!e.is_index_out_of_range());
    }

    #[test]
    fn display_axis_out_of_range() {
        let e = PercolationError::axis_out_of_range("row", 0, 5);
        assert_eq!(e.to_string(), "row index 0 out of range: expected [1, 5]");
        assert!(e.is_index_out_of_range());
    }

    #[test]
    fn display_element_out_of_range() {
        let e = PercolationError::element_out_of_range(7, 7);
        assert_eq!(
            e.to_string(),
            "element index 7 out of range: expected [0, 7)"
        );
    }
}
