//! Per-marina views over a snapshot sequence.

use marina_core::{MarinaId, Node, Point, SimTime};

use crate::GridSnapshot;

/// The time/position series of one marina, in snapshot order.
///
/// Empty if `marina` is outside the grid.
pub fn track(snapshots: &[GridSnapshot], marina: MarinaId) -> Vec<Node> {
    snapshots.iter().filter_map(|s| s.node(marina).copied()).collect()
}

/// Movement of one marina between two consecutive snapshots.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepSpeed {
    /// Index of the earlier snapshot.
    pub step:     usize,
    pub from:     Point,
    pub to:       Point,
    pub time:     SimTime,
    pub distance: f64,
    /// `distance / step_duration_secs`.
    pub speed:    f64,
}

/// Observed speed of `marina` over each pair of consecutive snapshots.
///
/// Pairs that straddle a waypoint include the re-anchoring jump, so their
/// speed can differ from the segment speed.
pub fn step_speeds(
    snapshots:          &[GridSnapshot],
    marina:             MarinaId,
    step_duration_secs: u32,
) -> Vec<StepSpeed> {
    let nodes = track(snapshots, marina);
    nodes
        .windows(2)
        .enumerate()
        .map(|(step, pair)| {
            let distance = pair[0].position.distance_to(pair[1].position);
            StepSpeed {
                step,
                from: pair[0].position,
                to:   pair[1].position,
                time: pair[0].time,
                distance,
                speed: distance / step_duration_secs as f64,
            }
        })
        .collect()
}
