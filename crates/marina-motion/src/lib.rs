//! `marina-motion` — grid layout and fixed-step trajectory walking.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                         |
//! |----------------|------------------------------------------------------------------|
//! | [`grid`]       | `GridSnapshot`, `layout` — the grid centred on a reference point |
//! | [`trajectory`] | `Trajectory`, `Segment` — validated waypoints and speeds         |
//! | [`walker`]     | `SegmentPlan`, `walk`, `interpolate`                             |
//! | [`observer`]   | `TrajectoryObserver`, `NoopObserver`, `SnapshotCollector`        |
//! | [`calculator`] | `MarinasCalculator` — validated inputs + memoized snapshots      |
//! | [`track`]      | Per-marina series and observed step speeds                       |
//! | [`error`]      | `MotionError`, `MotionResult<T>`                                 |
//!
//! # Motion model
//!
//! The grid is rigid.  Along each segment it is translated by a whole number
//! of fixed-duration steps; at each waypoint it is laid out afresh, centred
//! on the waypoint, carrying the elapsed time forward.  Speeds are converted
//! to a per-step distance as `step_duration * speed / 1000`.

pub mod calculator;
pub mod error;
pub mod grid;
pub mod observer;
pub mod track;
pub mod trajectory;
pub mod walker;


pub use calculator::MarinasCalculator;
pub use error::{MotionError, MotionResult};
pub use grid::{GridSnapshot, layout};
pub use observer::{NoopObserver, SnapshotCollector, TrajectoryObserver};
pub use track::{StepSpeed, step_speeds, track};
pub use trajectory::{MAX_SEGMENT_STEPS, Segment, Trajectory};
pub use walker::{SegmentPlan, interpolate, walk};
