use marina_core::{CoreError, SegmentId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("zero-speed {segment}: speed {speed} gives no forward step")]
    DegenerateSpeed {
        segment: SegmentId,
        speed:   f32,
    },

    #[error("{segment} needs {steps:.0} steps, more than the limit of {limit}")]
    TooManySteps {
        segment: SegmentId,
        steps:   f64,
        limit:   u64,
    },

    #[error("insufficient speed data: {waypoints} waypoints need {} speeds, got {speeds}", .waypoints.saturating_sub(1))]
    MismatchedInputLengths {
        waypoints: usize,
        speeds:    usize,
    },
}

pub type MotionResult<T> = Result<T, MotionError>;
