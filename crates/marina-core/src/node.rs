//! One marina's state at one instant.

use crate::{Point, SimTime};

/// Position and elapsed time of a single marina.
///
/// Nodes are created fresh for every snapshot and never mutated afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub position: Point,
    pub time:     SimTime,
}

impl Node {
    #[inline]
    pub fn new(position: Point, time: SimTime) -> Self {
        Self { position, time }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.position, self.time)
    }
}
