//! Plain data row type written by output backends.

use marina_core::MarinaId;
use marina_motion::GridSnapshot;

/// One marina's position at one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRow {
    pub marina:    u32,
    /// Index of the snapshot in the full sequence.
    pub step:      u64,
    pub time_secs: i64,
    pub x:         i32,
    pub y:         i32,
}

impl PositionRow {
    pub fn new(marina: MarinaId, step: u64, snapshot: &GridSnapshot) -> Option<Self> {
        let node = snapshot.node(marina)?;
        Some(Self {
            marina:    marina.0,
            step,
            time_secs: node.time.secs(),
            x:         node.position.x,
            y:         node.position.y,
        })
    }
}

/// Every marina of `snapshot`, in index order.
pub fn rows_for_snapshot(step: u64, snapshot: &GridSnapshot) -> Vec<PositionRow> {
    snapshot
        .iter()
        .map(|(id, node)| PositionRow {
            marina:    id.0,
            step,
            time_secs: node.time.secs(),
            x:         node.position.x,
            y:         node.position.y,
        })
        .collect()
}
