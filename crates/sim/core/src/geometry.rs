//! Continuous 2D geometry shared by the board and every movement action.
//!
//! Coordinates follow screen conventions: `x` grows to the right and `y`
//! grows downward, so a heading of `π/2` points down. Angles are radians and
//! are kept in `[0, 2π)` by [`normalize_angle`].
//!
//! Comparisons are tolerance based ([`Tolerance`]); moving entities "arrive"
//! when they are close enough rather than bit-identical.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

/// Absolute thresholds used for position and angle comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    /// Maximum per-axis distance for two points to count as equal.
    pub location: f64,
    /// Maximum difference in radians for two angles to count as equal.
    pub angle: f64,
}

impl Tolerance {
    pub const DEFAULT_LOCATION: f64 = 1.0;
    pub const DEFAULT_ANGLE: f64 = PI / 360.0;

    pub const fn new(location: f64, angle: f64) -> Self {
        Self { location, angle }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOCATION, Self::DEFAULT_ANGLE)
    }
}

/// Position on the board.
///
/// There is intentionally no `PartialEq`: use [`Point::approx_eq`] with the
/// board's [`Tolerance`].
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true when both axes are within `tolerance.location`.
    #[inline]
    pub fn approx_eq(self, other: Point, tolerance: Tolerance) -> bool {
        (self.x - other.x).abs() <= tolerance.location
            && (self.y - other.y).abs() <= tolerance.location
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Wraps each axis into `[0, width)` and `[0, height)`.
    ///
    /// Degenerate (non-positive) extents leave that axis untouched.
    pub fn wrapped(self, width: f64, height: f64) -> Point {
        let wrap = |value: f64, extent: f64| {
            if extent > 0.0 {
                value.rem_euclid(extent)
            } else {
                value
            }
        };
        Point::new(wrap(self.x, width), wrap(self.y, height))
    }

    /// Returns true if the point lies inside `[0, width] x [0, height]`.
    pub fn within(self, width: f64, height: f64) -> bool {
        (0.0..=width).contains(&self.x) && (0.0..=height).contains(&self.y)
    }

    /// Moves the point by `distance` along `heading`.
    #[inline]
    pub fn advanced(self, heading: f64, distance: f64) -> Point {
        Point::new(
            self.x + heading.cos() * distance,
            self.y + heading.sin() * distance,
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Normalizes an angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if normalized >= TAU { 0.0 } else { normalized }
}

/// Returns true when `|a - b| <= tolerance.angle`.
#[inline]
pub fn angle_eq(a: f64, b: f64, tolerance: Tolerance) -> bool {
    (a - b).abs() <= tolerance.angle
}

/// Wrap-aware heading comparison: true when the shortest rotation between
/// `a` and `b` is within `tolerance.angle`.
#[inline]
pub fn heading_eq(a: f64, b: f64, tolerance: Tolerance) -> bool {
    angle_eq(shortest_arc(a, b), 0.0, tolerance)
}

/// Heading from `from` towards `to`, in `[0, 2π)`.
pub fn heading_to(from: Point, to: Point) -> f64 {
    let heading = (to.y - from.y).atan2(to.x - from.x);
    if heading < 0.0 { heading + TAU } else { heading }
}

/// Signed shortest rotation that takes `heading` onto `target`.
///
/// The sign is chosen by comparing `(heading - target + 2π) mod 2π` against
/// `π`: below `π` the heading is ahead of the target and must turn back
/// (negative result), otherwise it turns forward. The magnitude is at most `π`.
pub fn shortest_arc(heading: f64, target: f64) -> f64 {
    let ahead = (heading - target + TAU).rem_euclid(TAU);
    if ahead < PI { -ahead } else { TAU - ahead }
}

/// The four axis-aligned directions a path leg can take.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Cardinal {
    /// +x, heading 0.
    Right,
    /// +y, heading π/2.
    Down,
    /// -x, heading π.
    Left,
    /// -y, heading 3π/2.
    Up,
}

impl Cardinal {
    /// Heading in radians, in `[0, 2π)`.
    pub const fn heading(self) -> f64 {
        match self {
            Cardinal::Right => 0.0,
            Cardinal::Down => FRAC_PI_2,
            Cardinal::Left => PI,
            Cardinal::Up => PI + FRAC_PI_2,
        }
    }

    /// Unit step `(dx, dy)` for this direction.
    pub const fn unit(self) -> (f64, f64) {
        match self {
            Cardinal::Right => (1.0, 0.0),
            Cardinal::Down => (0.0, 1.0),
            Cardinal::Left => (-1.0, 0.0),
            Cardinal::Up => (0.0, -1.0),
        }
    }

    /// Matches a heading to a cardinal direction within `tolerance.angle`.
    ///
    /// Headings just below `2π` match [`Cardinal::Right`].
    pub fn from_heading(heading: f64, tolerance: Tolerance) -> Option<Cardinal> {
        use strum::IntoEnumIterator;

        Cardinal::iter().find(|cardinal| heading_eq(heading, cardinal.heading(), tolerance))
    }

    /// Direction of travel along x for a signed delta.
    pub fn horizontal(dx: f64) -> Cardinal {
        if dx < 0.0 {
            Cardinal::Left
        } else {
            Cardinal::Right
        }
    }

    /// Direction of travel along y for a signed delta.
    pub fn vertical(dy: f64) -> Cardinal {
        if dy < 0.0 { Cardinal::Up } else { Cardinal::Down }
    }
}
