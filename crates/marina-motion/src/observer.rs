//! Observer trait for following a trajectory walk as it happens.

use crate::{GridSnapshot, Segment, SegmentPlan};

/// Callbacks invoked by [`walk`][crate::walk] while it advances along a
/// trajectory.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — segment printer
///
/// ```rust,ignore
/// struct SegmentPrinter;
///
/// impl TrajectoryObserver for SegmentPrinter {
///     fn on_segment_start(&mut self, segment: &Segment, plan: &SegmentPlan) {
///         println!("{}: {} steps", segment.id, plan.steps);
///     }
/// }
/// ```
pub trait TrajectoryObserver {
    /// Called before the first snapshot of each segment.
    fn on_segment_start(&mut self, _segment: &Segment, _plan: &SegmentPlan) {}

    /// Called for every emitted snapshot.  `step` counts snapshots from the
    /// start of the whole trajectory.
    fn on_snapshot(&mut self, _step: u64, _snapshot: &GridSnapshot) {}

    /// Called after a segment with the fresh grid laid out at its end
    /// waypoint.  That grid is the anchor of the next segment.
    fn on_reanchor(&mut self, _segment: &Segment, _anchor: &GridSnapshot) {}

    /// Called once after the last segment.
    fn on_walk_end(&mut self, _total_steps: u64) {}
}

/// A [`TrajectoryObserver`] that does nothing.
pub struct NoopObserver;

impl TrajectoryObserver for NoopObserver {}

/// Collects every emitted snapshot, in order, into a fresh `Vec`.
#[derive(Default)]
pub struct SnapshotCollector {
    snapshots: Vec<GridSnapshot>,
}

impl SnapshotCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_snapshots(self) -> Vec<GridSnapshot> {
        self.snapshots
    }
}

impl TrajectoryObserver for SnapshotCollector {
    fn on_snapshot(&mut self, _step: u64, snapshot: &GridSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}
