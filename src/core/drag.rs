use crate::core::geometry::Point;
use serde::{Deserialize, Serialize};

/// Single-point drag lifecycle: `Idle -> Dragging(i) -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(usize),
}

impl DragState {
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(i) => Some(i),
        }
    }

    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

/// Top-left corner of the displayed image in viewport (client) coordinates,
/// taken from its bounding rect at the time of the pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageOrigin {
    pub left: f64,
    pub top: f64,
}

impl ImageOrigin {
    /// Map a client-space pointer position into image-local pixels.
    #[inline]
    pub fn to_local(self, client: Point) -> Point {
        Point::new(client.x - self.left, client.y - self.top)
    }
}
