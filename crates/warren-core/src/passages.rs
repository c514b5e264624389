//! Per-cell passage mask.

use crate::direction::Direction;
use std::fmt;

/// The set of open passages out of a single cell, one bit per [`Direction`].
///
/// A cell with no bits set is fully walled in; a carved maze cell has at
/// least one bit set (except the single cell of a 1x1 grid). The numeric
/// encoding is private: callers go through [`is_open`](Passages::is_open)
/// and friends rather than the raw bits.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Passages(u8);

impl Passages {
    /// No open passages in any direction.
    pub const NONE: Passages = Passages(0);

    /// Whether the passage toward `dir` is open.
    pub const fn is_open(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Open the passage toward `dir`.
    pub fn open(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    /// A copy of this mask with the passage toward `dir` open.
    pub const fn with(self, dir: Direction) -> Passages {
        Passages(self.0 | dir.bit())
    }

    /// Number of open passages (0 to 4).
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether every direction is walled off.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The open directions, in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.is_open(d))
    }
}

impl fmt::Debug for Passages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passages(")?;
        let mut first = true;
        for dir in self.iter() {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{dir:?}")?;
            first = false;
        }
        write!(f, ")")
    }
}
