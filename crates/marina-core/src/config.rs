//! Grid configuration.
//!
//! One `GridConfig` is fixed for the lifetime of a calculation.  The defaults
//! describe the standard layout: a 4 × 4 block of marinas spaced 125 m apart,
//! sampled every 10 s.

use crate::{CoreError, CoreResult, MarinaId};

/// Standard number of nodes per group (columns, index `i`).
pub const DEFAULT_NODES_PER_GROUP: u32 = 4;

/// Standard number of nodes per line (rows, index `j`).
pub const DEFAULT_NODES_PER_LINE: u32 = 4;

/// Standard duration between two snapshots, in seconds.
pub const DEFAULT_STEP_DURATION_SECS: u32 = 10;

/// Standard distance between neighbouring marinas, in metres.
pub const DEFAULT_MARINAS_DISTANCE: u32 = 125;

/// Fixed conversion applied to `step_duration * speed` to obtain the
/// distance covered by one step.  Not configurable.
pub const SPEED_DIVISOR: f32 = 1000.0;

/// Shape and sampling parameters of the marina grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Marinas along the x axis.
    pub nodes_per_group: u32,

    /// Marinas along the y axis.
    pub nodes_per_line: u32,

    /// Seconds between two consecutive snapshots.
    pub step_duration_secs: u32,

    /// Spacing between neighbouring marinas on both axes.
    pub marinas_distance: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            nodes_per_group:    DEFAULT_NODES_PER_GROUP,
            nodes_per_line:     DEFAULT_NODES_PER_LINE,
            step_duration_secs: DEFAULT_STEP_DURATION_SECS,
            marinas_distance:   DEFAULT_MARINAS_DISTANCE,
        }
    }
}

impl GridConfig {
    pub fn new(
        nodes_per_group:    u32,
        nodes_per_line:     u32,
        step_duration_secs: u32,
        marinas_distance:   u32,
    ) -> Self {
        Self { nodes_per_group, nodes_per_line, step_duration_secs, marinas_distance }
    }

    /// Reject any zero-valued field.
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("nodes_per_group",    self.nodes_per_group),
            ("nodes_per_line",     self.nodes_per_line),
            ("step_duration_secs", self.step_duration_secs),
            ("marinas_distance",   self.marinas_distance),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(CoreError::InvalidConfiguration { field, value });
            }
        }
        Ok(())
    }

    /// Total number of marinas in the grid.
    #[inline]
    pub fn nb_marinas(&self) -> usize {
        self.nodes_per_group as usize * self.nodes_per_line as usize
    }

    /// Dense snapshot index of grid cell `(i, j)`; `i` varies fastest.
    #[inline]
    pub fn marina_at(&self, i: u32, j: u32) -> MarinaId {
        MarinaId(i + j * self.nodes_per_group)
    }

    /// Inverse of [`marina_at`][Self::marina_at].
    #[inline]
    pub fn cell_of(&self, marina: MarinaId) -> (u32, u32) {
        (marina.0 % self.nodes_per_group, marina.0 / self.nodes_per_group)
    }

    /// Distance covered during one step at `speed`.
    ///
    /// Evaluated in single precision, like the speeds themselves, then
    /// widened for the trigonometry that follows.
    #[inline]
    pub fn step_distance(&self, speed: f32) -> f64 {
        ((self.step_duration_secs as f32 * speed) / SPEED_DIVISOR) as f64
    }
}
