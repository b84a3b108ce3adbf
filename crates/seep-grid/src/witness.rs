//! Per-component boundary witness bits.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Which grid boundaries a component touches.
///
/// Stored once per forest root and combined with `|` when two components
/// merge. `TOP` is only ever set by opening a row-1 cell or by merging
/// with a component that already carries `TOP`; a `BOTTOM` bit never
/// implies it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoundaryWitness(u8);

impl BoundaryWitness {
    /// Touches neither boundary.
    pub const NONE: Self = Self(0);
    /// Touches the top row.
    pub const TOP: Self = Self(0b01);
    /// Touches the bottom row.
    pub const BOTTOM: Self = Self(0b10);
    /// Touches both rows: the component spans the grid.
    pub const BOTH: Self = Self(0b11);

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the component reaches the top row.
    pub fn touches_top(self) -> bool {
        self.contains(Self::TOP)
    }

    /// Whether the component reaches the bottom row.
    pub fn touches_bottom(self) -> bool {
        self.contains(Self::BOTTOM)
    }

    /// Whether the component reaches both rows.
    pub fn spans(self) -> bool {
        self.contains(Self::BOTH)
    }
}

impl BitOr for BoundaryWitness {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for BoundaryWitness {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for BoundaryWitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NONE => write!(f, "NONE"),
            Self::TOP => write!(f, "TOP"),
            Self::BOTTOM => write!(f, "BOTTOM"),
            _ => write!(f, "TOP | BOTTOM"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_combines_bits() {
        assert_eq!(BoundaryWitness::TOP | BoundaryWitness::BOTTOM, BoundaryWitness::BOTH);
        let mut w = BoundaryWitness::NONE;
        w |= BoundaryWitness::BOTTOM;
        assert!(w.touches_bottom());
        assert!(!w.touches_top());
        assert!(!w.spans());
    }

    #[test]
    fn bottom_never_implies_top() {
        let w = BoundaryWitness::BOTTOM | BoundaryWitness::BOTTOM | BoundaryWitness::NONE;
        assert!(!w.touches_top());
    }

    #[test]
    fn default_is_none() {
        assert_eq!(BoundaryWitness::default(), BoundaryWitness::NONE);
        assert_eq!(format!("{:?}", BoundaryWitness::BOTH), "TOP | BOTTOM");
    }
}
