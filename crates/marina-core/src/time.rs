//! Simulation time model.
//!
//! Time is an integer count of simulated seconds elapsed since the start of
//! the trajectory.  Every node in a snapshot carries one.  Snapshots inside a
//! segment are exactly `step_duration_secs` apart, so all time arithmetic is
//! exact integer arithmetic.  Additions saturate at `i64::MAX`.

use std::fmt;

/// Elapsed simulated seconds since the first waypoint.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub i64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// The time `steps` steps of `step_duration_secs` after `self`.
    #[inline]
    pub fn after_steps(self, steps: u64, step_duration_secs: u32) -> SimTime {
        let delta = (steps as i64).saturating_mul(step_duration_secs as i64);
        SimTime(self.0.saturating_add(delta))
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: SimTime) -> i64 {
        self.0 - earlier.0
    }

    #[inline]
    pub fn secs(self) -> i64 {
        self.0
    }
}

impl std::ops::Add<i64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: i64) -> SimTime {
        SimTime(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub for SimTime {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: SimTime) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}s", self.0)
    }
}
