use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A landmark position in CSS pixels, relative to the top-left corner of the
/// displayed image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Round `value` to `decimals` places, collapsing `-0.0` to `0.0`.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Angle between segment `p0 -> p1` and segment `p1 -> p2`, folded as
/// `min(deg, 90 - deg)` and rounded to two decimals.
///
/// - fewer than three points yield `0.0`; extra points are ignored
/// - a zero-length segment yields `0.0` instead of NaN
/// - raw angles above 90° are not clamped, so the result goes negative there
pub fn compute_angle(points: &[Point]) -> f64 {
    let (p0, p1, p2) = match points {
        [p0, p1, p2, ..] => (*p0, *p1, *p2),
        _ => return 0.0,
    };
    let u = p1.to_vec() - p0.to_vec();
    let v = p2.to_vec() - p1.to_vec();
    let magnitude = u.length() * v.length();
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return 0.0;
    }
    let cos_theta = (u.dot(v) / magnitude).clamp(-1.0, 1.0);
    let degrees = cos_theta.acos().to_degrees();
    let folded = degrees.min(90.0 - degrees);
    if !folded.is_finite() {
        return 0.0;
    }
    round_to(folded, 2)
}
