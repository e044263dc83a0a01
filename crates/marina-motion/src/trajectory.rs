//! Validated trajectory input: ordered waypoints and per-segment speeds.

use marina_core::{GridConfig, Point, SegmentId};

use crate::{MotionError, MotionResult};

/// Upper bound on the snapshots a single segment may produce.
pub const MAX_SEGMENT_STEPS: u64 = 10_000_000;

/// An ordered path of waypoints with one speed per segment.
///
/// Invariant (checked by [`Trajectory::new`]): with two or more waypoints,
/// `speeds.len() == waypoints.len() - 1` and every speed is finite and
/// positive.  Fewer than two waypoints describe no motion; any speeds given
/// alongside them are ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    waypoints: Vec<Point>,
    speeds:    Vec<f32>,
}

impl Trajectory {
    pub fn new(waypoints: Vec<Point>, speeds: Vec<f32>) -> MotionResult<Self> {
        if waypoints.len() >= 2 {
            if speeds.len() != waypoints.len() - 1 {
                return Err(MotionError::MismatchedInputLengths {
                    waypoints: waypoints.len(),
                    speeds:    speeds.len(),
                });
            }
            for (k, &speed) in speeds.iter().enumerate() {
                if !(speed.is_finite() && speed > 0.0) {
                    return Err(MotionError::DegenerateSpeed {
                        segment: SegmentId(k as u32),
                        speed,
                    });
                }
            }
        }
        Ok(Self { waypoints, speeds })
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    /// `true` when there are fewer than two waypoints.
    pub fn is_stationary(&self) -> bool {
        self.waypoints.len() < 2
    }

    pub fn segment_count(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    /// Consecutive waypoint pairs with their speeds, in travel order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.waypoints
            .windows(2)
            .zip(&self.speeds)
            .enumerate()
            .map(|(k, (pair, &speed))| Segment {
                id:    SegmentId(k as u32),
                from:  pair[0],
                to:    pair[1],
                speed,
            })
    }

    /// Check that every segment advances under `config` in at most
    /// [`MAX_SEGMENT_STEPS`] steps.
    ///
    /// A positive speed can still round to a zero step distance in single
    /// precision, which would make the step count unbounded.
    pub fn check_step_distances(&self, config: &GridConfig) -> MotionResult<()> {
        for segment in self.segments() {
            let step = config.step_distance(segment.speed);
            if !(step.is_finite() && step > 0.0) {
                return Err(MotionError::DegenerateSpeed {
                    segment: segment.id,
                    speed:   segment.speed,
                });
            }
            let steps = (segment.length() / step).floor();
            if steps > MAX_SEGMENT_STEPS as f64 {
                return Err(MotionError::TooManySteps {
                    segment: segment.id,
                    steps,
                    limit:   MAX_SEGMENT_STEPS,
                });
            }
        }
        Ok(())
    }
}

/// The straight path between two consecutive waypoints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub id:    SegmentId,
    pub from:  Point,
    pub to:    Point,
    pub speed: f32,
}

impl Segment {
    #[inline]
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }

    /// Radians counter-clockwise from +x.
    #[inline]
    pub fn heading(&self) -> f64 {
        self.from.heading_to(self.to)
    }
}
