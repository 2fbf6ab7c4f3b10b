//! Lane pair identifier.
//!
//! A `LanePair` names one movement through the intersection: the approach
//! lane a vehicle enters on and the exit it leaves by.  Both halves are plain
//! integer indices into the application's lane table.

use std::fmt;

/// An ordered `(from, to)` approach-to-exit movement.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanePair {
    pub from: u32,
    pub to:   u32,
}

impl LanePair {
    #[inline]
    pub const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    /// `from` as a `usize` for direct indexing into lane tables.
    #[inline(always)]
    pub fn from_index(self) -> usize {
        self.from as usize
    }
}

impl From<(u32, u32)> for LanePair {
    #[inline]
    fn from((from, to): (u32, u32)) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for LanePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}
