//! Planar helpers over keypoint coordinates.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    /// Sentinel used by the host pipeline when two skeleton lines never meet.
    pub const FAR: Point2 = Point2 {
        x: f32::MAX,
        y: f32::MAX,
    };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point2 {
    fn from(value: (f32, f32)) -> Self {
        Point2::new(value.0, value.1)
    }
}

impl From<[f32; 2]> for Point2 {
    fn from(value: [f32; 2]) -> Self {
        Point2::new(value[0], value[1])
    }
}

/// Unsigned angle at `mid` between the rays mid->first and mid->last, in degrees.
///
/// The difference of the two ray headings lies in (-2pi, 2pi), so one wrap
/// brings it into [-pi, pi]. Zero-length rays read as heading 0 (atan2(0, 0)),
/// which keeps the result finite.
pub fn joint_angle(first: Point2, mid: Point2, last: Point2) -> f32 {
    let to_last = ((last.y - mid.y) as f64).atan2((last.x - mid.x) as f64);
    let to_first = ((first.y - mid.y) as f64).atan2((first.x - mid.x) as f64);
    let mut theta = to_last - to_first;
    if theta > PI {
        theta -= 2.0 * PI;
    }
    if theta < -PI {
        theta += 2.0 * PI;
    }
    (theta * 180.0 / PI).abs() as f32
}

pub fn midpoint(a: Point2, b: Point2) -> Point2 {
    Point2::new((a.x - b.x) / 2.0 + b.x, (a.y - b.y) / 2.0 + b.y)
}

/// Intersection of the infinite lines through `a`-`b` and `c`-`d`.
///
/// Returns `None` when the lines are parallel (zero determinant).
pub fn line_intersection(a: Point2, b: Point2, c: Point2, d: Point2) -> Option<Point2> {
    // a1 * x + b1 * y = c1
    let a1 = b.y - a.y;
    let b1 = a.x - b.x;
    let c1 = a1 * a.x + b1 * a.y;

    let a2 = d.y - c.y;
    let b2 = c.x - d.x;
    let c2 = a2 * c.x + b2 * c.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }
    Some(Point2::new(
        (b2 * c1 - b1 * c2) / det,
        (a1 * c2 - a2 * c1) / det,
    ))
}

#[cfg(test)]
#[path = "../../tests/src_inline/geometry/tests.rs"]
mod tests;
