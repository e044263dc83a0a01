//! Trajectory walker: fixed-step snapshots along each segment, with the grid
//! re-anchored at every waypoint.
//!
//! ```text
//! anchor = layout(waypoint[0], t = 0)
//! for each segment k (waypoint[k] → waypoint[k+1], speed[k]):
//!   step   = step_duration * speed / 1000
//!   steps  = floor(length / step)
//!   for p in 0..steps:
//!     emit anchor moved by p * step along the heading, p * step_duration later
//!   anchor = layout(waypoint[k+1], anchor.time + steps * step_duration)
//! ```
//!
//! Whatever distance is left after the last whole step of a segment is
//! dropped; the next segment starts from a grid laid out exactly at the
//! waypoint rather than from an extrapolated position.

use log::{debug, info, warn};
use marina_core::{GridConfig, SimTime};

use crate::{
    GridSnapshot, MotionResult, Segment, SnapshotCollector, Trajectory, TrajectoryObserver,
    layout,
};

/// Per-segment stepping geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentPlan {
    pub length:        f64,
    pub heading:       f64,
    /// Distance covered by one step.
    pub step_distance: f64,
    pub step_dx:       f64,
    pub step_dy:       f64,
    /// Whole steps that fit in the segment.
    pub steps:         u64,
}

impl SegmentPlan {
    pub fn new(segment: &Segment, config: &GridConfig) -> Self {
        let length = segment.length();
        let heading = segment.heading();
        let step_distance = config.step_distance(segment.speed);
        let steps = (length / step_distance).floor() as u64;
        Self {
            length,
            heading,
            step_distance,
            step_dx: step_distance * heading.cos(),
            step_dy: step_distance * heading.sin(),
            steps,
        }
    }

    /// Displacement of the grid after `p` steps.
    #[inline]
    pub fn offset_at(&self, p: u64) -> (f64, f64) {
        (self.step_dx * p as f64, self.step_dy * p as f64)
    }

    /// Distance left over after the last whole step.
    #[inline]
    pub fn remainder(&self) -> f64 {
        self.length - self.steps as f64 * self.step_distance
    }
}

/// Walk `trajectory`, reporting every snapshot to `observer`.
///
/// Returns the number of snapshots emitted.  Inputs are checked before the
/// first snapshot; nothing is reported to `observer` if they are invalid.
pub fn walk<O>(trajectory: &Trajectory, config: &GridConfig, observer: &mut O) -> MotionResult<u64>
where
    O: TrajectoryObserver + ?Sized,
{
    config.validate()?;
    trajectory.check_step_distances(config)?;
    Ok(walk_checked(trajectory, config, observer))
}

/// Every snapshot of `trajectory`, in time order.  Empty when the trajectory
/// has fewer than two waypoints.
pub fn interpolate(trajectory: &Trajectory, config: &GridConfig) -> MotionResult<Vec<GridSnapshot>> {
    let mut collector = SnapshotCollector::new();
    walk(trajectory, config, &mut collector)?;
    Ok(collector.into_snapshots())
}

/// [`walk`] without the input checks.  Callers must have validated `config`
/// and the trajectory's step distances.
pub(crate) fn walk_checked<O>(trajectory: &Trajectory, config: &GridConfig, observer: &mut O) -> u64
where
    O: TrajectoryObserver + ?Sized,
{
    let mut total: u64 = 0;

    if trajectory.is_stationary() {
        observer.on_walk_end(0);
        return 0;
    }

    let step_secs = config.step_duration_secs as i64;
    let mut anchor = layout(trajectory.waypoints()[0], SimTime::ZERO, config);

    for segment in trajectory.segments() {
        let plan = SegmentPlan::new(&segment, config);
        debug!(
            "{}: {} -> {}, length {:.3}, heading {:.4} rad, step {:.3}, {} steps",
            segment.id, segment.from, segment.to, plan.length, plan.heading, plan.step_distance, plan.steps,
        );
        if plan.length == 0.0 {
            warn!("{} has zero length; no snapshots emitted for it", segment.id);
        }
        observer.on_segment_start(&segment, &plan);

        for p in 0..plan.steps {
            let (dx, dy) = plan.offset_at(p);
            let snapshot = anchor.translated(dx, dy, p as i64 * step_secs);
            observer.on_snapshot(total, &snapshot);
            total += 1;
        }

        let remainder = plan.remainder();
        if remainder > 0.0 {
            debug!("{}: dropping {:.3} of trailing partial step", segment.id, remainder);
        }

        let next_time = anchor.time().after_steps(plan.steps, config.step_duration_secs);
        anchor = layout(segment.to, next_time, config);
        observer.on_reanchor(&segment, &anchor);
    }

    info!(
        "walked {} segments: {} snapshots of {} marinas",
        trajectory.segment_count(),
        total,
        config.nb_marinas(),
    );
    observer.on_walk_end(total);
    total
}
