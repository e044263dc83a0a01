//! Planar integer coordinates.
//!
//! Positions are whole units (metres in the default configuration).  Any
//! fractional value produced by the motion maths is truncated toward zero
//! when it is stored, and saturates at the `i32` range.

/// A planar coordinate with integer components.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Heading from `self` towards `other` in radians, measured
    /// counter-clockwise from the +x axis.  `0.0` when the points coincide.
    pub fn heading_to(self, other: Point) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dy.atan2(dx)
    }

    /// Translate by a fractional offset, truncating each component toward
    /// zero before adding it.
    #[inline]
    pub fn offset_truncated(self, dx: f64, dy: f64) -> Point {
        Point {
            x: self.x.saturating_add(truncate(dx)),
            y: self.y.saturating_add(truncate(dy)),
        }
    }
}

/// Truncate toward zero, saturating at the `i32` range (`NaN` maps to 0).
#[inline]
pub fn truncate(v: f64) -> i32 {
    v as i32
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}
