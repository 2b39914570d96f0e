use crate::core::capture::{CapturedImage, FacingMode};
use crate::core::drag::{DragState, ImageOrigin};
use crate::core::geometry::Point;
use crate::core::landmarks::LandmarkSet;
use serde::{Deserialize, Serialize};

/// Everything the interaction surface shows, in one place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub image: Option<CapturedImage>,
    pub landmarks: LandmarkSet,
    pub drag: DragState,
    pub facing: FacingMode,
}

impl AppState {
    pub fn angle(&self) -> f64 {
        self.landmarks.angle()
    }

    /// Compact JSON for logging; leaves out the image payload.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "image": self.image.as_ref().map(|img| serde_json::json!({
                "source": img.source,
                "width": img.width,
                "height": img.height,
                "url_len": img.url.len(),
            })),
            "landmarks": self.landmarks,
            "drag": self.drag,
            "facing": self.facing,
            "angle": self.angle(),
        })
    }
}

type Observer = Box<dyn Fn(&AppState)>;

/// Owner of [`AppState`]. Each setter applies one change, notifies observers
/// if something actually changed, and returns the resulting snapshot.
#[derive(Default)]
pub struct Store {
    state: AppState,
    observers: Vec<Observer>,
}

impl Store {
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    pub fn subscribe(&mut self, observer: impl Fn(&AppState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Show a new image. Landmarks keep their coordinates.
    pub fn set_image(&mut self, image: CapturedImage) -> AppState {
        self.state.image = Some(image);
        self.commit(true)
    }

    /// Flip front/back. Only read by the next camera start.
    pub fn toggle_facing(&mut self) -> AppState {
        self.state.facing = self.state.facing.toggled();
        self.commit(true)
    }

    /// Make `index` the one dragged point, replacing any active drag.
    pub fn begin_drag(&mut self, index: usize) -> AppState {
        if index >= LandmarkSet::LEN {
            log::warn!("[drag] ignoring begin on landmark {}", index);
            return self.snapshot();
        }
        let next = DragState::Dragging(index);
        let changed = self.state.drag != next;
        self.state.drag = next;
        self.commit(changed)
    }

    /// Move the dragged point under the pointer. No-op without an active
    /// drag or without a displayed image to measure against.
    pub fn drag_to(&mut self, client: Point, origin: Option<ImageOrigin>) -> AppState {
        let (Some(index), Some(origin)) = (self.state.drag.index(), origin) else {
            return self.snapshot();
        };
        let local = origin.to_local(client);
        let changed = self.state.landmarks.get(index) != Some(local)
            && self.state.landmarks.replace(index, local);
        self.commit(changed)
    }

    pub fn end_drag(&mut self) -> AppState {
        let changed = self.state.drag.is_active();
        self.state.drag = DragState::Idle;
        self.commit(changed)
    }

    fn commit(&self, changed: bool) -> AppState {
        if changed {
            for observer in &self.observers {
                observer(&self.state);
            }
        }
        self.snapshot()
    }
}
