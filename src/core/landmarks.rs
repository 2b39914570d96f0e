use crate::constants::DEFAULT_LANDMARKS;
use crate::core::geometry::{compute_angle, Point};
use serde::{Deserialize, Serialize};

/// The three ordered landmarks. Segment A runs `0 -> 1`, segment B `1 -> 2`.
///
/// Points are only ever replaced in place; the set never grows, shrinks or
/// reorders.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    points: [Point; 3],
}

impl LandmarkSet {
    pub const LEN: usize = 3;

    pub const fn new(points: [Point; 3]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point; 3] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Replace one point. Returns `false` (and changes nothing) for an index
    /// outside `0..3`.
    pub fn replace(&mut self, index: usize, point: Point) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    pub fn segments(&self) -> [(Point, Point); 2] {
        let [p0, p1, p2] = self.points;
        [(p0, p1), (p1, p2)]
    }

    pub fn angle(&self) -> f64 {
        compute_angle(&self.points)
    }
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self::new(DEFAULT_LANDMARKS.map(Point::from))
    }
}
