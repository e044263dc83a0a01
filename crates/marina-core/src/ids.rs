//! Identifiers for marinas and trajectory segments.
//!
//! A `MarinaId` is a position in a snapshot's dense node vector; a
//! `SegmentId` numbers the waypoint pairs in travel order.

use std::fmt;

/// Index of a marina inside a grid snapshot (`0 .. nb_marinas`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarinaId(pub u32);

impl MarinaId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Every marina of a grid holding `nb_marinas` nodes, in index order.
    pub fn all(nb_marinas: usize) -> impl Iterator<Item = MarinaId> {
        (0..nb_marinas as u32).map(MarinaId)
    }
}

impl fmt::Display for MarinaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marina {}", self.0)
    }
}

/// Segment `k` joins waypoints `k` and `k + 1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentId(pub u32);

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "segment {}", self.0)
    }
}
