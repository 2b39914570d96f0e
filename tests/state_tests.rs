// Host-side tests for the application state store and drag lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod capture {
        include!("../src/core/capture.rs");
    }
    pub mod drag {
        include!("../src/core/drag.rs");
    }
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod landmarks {
        include!("../src/core/landmarks.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::constants::DEFAULT_LANDMARKS;
use crate::core::capture::*;
use crate::core::drag::*;
use crate::core::geometry::*;
use crate::core::landmarks::*;
use crate::core::state::*;
use std::cell::Cell;
use std::rc::Rc;

const ORIGIN: ImageOrigin = ImageOrigin {
    left: 0.0,
    top: 0.0,
};

fn store_with_image() -> Store {
    let mut store = Store::default();
    store.set_image(CapturedImage::snapshot("data:image/jpeg;base64,AAAA", 640, 480));
    store
}

fn counting(store: &mut Store) -> Rc<Cell<usize>> {
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    store.subscribe(move |_| c.set(c.get() + 1));
    calls
}

#[test]
fn default_state_matches_initial_layout() {
    let state = AppState::default();
    assert!(state.image.is_none());
    assert_eq!(state.drag, DragState::Idle);
    assert_eq!(state.facing, FacingMode::User);
    for (p, raw) in state.landmarks.points().iter().zip(DEFAULT_LANDMARKS) {
        assert_eq!(*p, Point::from(raw));
    }
}

#[test]
fn drag_moves_only_the_dragged_point() {
    let mut store = store_with_image();
    let before = *store.state().landmarks.points();
    store.begin_drag(2);
    let after = store.drag_to(Point::new(320.0, 140.0), Some(ORIGIN));
    let points = after.landmarks.points();
    assert_eq!(points[0], before[0]);
    assert_eq!(points[1], before[1]);
    assert_eq!(points[2], Point::new(320.0, 140.0));
}

#[test]
fn begin_drag_replaces_the_active_index() {
    let mut store = store_with_image();
    let before = *store.state().landmarks.points();
    store.begin_drag(0);
    store.begin_drag(1);
    assert_eq!(store.state().drag, DragState::Dragging(1));

    let state = store.drag_to(Point::new(42.0, 24.0), Some(ORIGIN));
    assert_eq!(state.landmarks.points()[0], before[0]);
    assert_eq!(state.landmarks.points()[1], Point::new(42.0, 24.0));
    assert_eq!(state.landmarks.points()[2], before[2]);
}

#[test]
fn drag_position_is_relative_to_the_image() {
    let mut store = store_with_image();
    store.begin_drag(0);
    let origin = ImageOrigin {
        left: 50.0,
        top: 20.0,
    };
    let state = store.drag_to(Point::new(150.0, 120.0), Some(origin));
    assert_eq!(state.landmarks.points()[0], Point::new(100.0, 100.0));
}

#[test]
fn drag_update_is_a_noop_when_idle_or_without_image() {
    let mut store = store_with_image();
    let before = store.snapshot();
    assert_eq!(store.drag_to(Point::new(1.0, 1.0), Some(ORIGIN)), before);

    store.begin_drag(1);
    let dragging = store.snapshot();
    assert_eq!(store.drag_to(Point::new(1.0, 1.0), None), dragging);
}

#[test]
fn end_drag_is_idempotent() {
    let mut store = store_with_image();
    store.begin_drag(0);
    assert_eq!(store.end_drag().drag, DragState::Idle);
    assert_eq!(store.end_drag().drag, DragState::Idle);

    let before = store.snapshot();
    store.drag_to(Point::new(9.0, 9.0), Some(ORIGIN));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn out_of_range_drag_index_is_ignored() {
    let mut store = store_with_image();
    let state = store.begin_drag(3);
    assert_eq!(state.drag, DragState::Idle);
}

#[test]
fn new_image_replaces_old_and_keeps_points() {
    let mut store = store_with_image();
    store.begin_drag(1);
    store.drag_to(Point::new(210.0, 260.0), Some(ORIGIN));
    store.end_drag();
    let moved = *store.state().landmarks.points();

    let state = store.set_image(CapturedImage::upload("data:image/png;base64,BBBB"));
    let image = state.image.expect("image present");
    assert_eq!(image.source, ImageSource::Upload);
    assert_eq!(&*image.url, "data:image/png;base64,BBBB");
    assert_eq!(image.width, None);
    assert_eq!(*state.landmarks.points(), moved);

    let state = store.set_image(CapturedImage::snapshot("data:image/jpeg;base64,CCCC", 320, 240));
    let image = state.image.expect("image present");
    assert_eq!(image.source, ImageSource::Camera);
    assert_eq!((image.width, image.height), (Some(320), Some(240)));
    assert_eq!(*state.landmarks.points(), moved);
}

#[test]
fn facing_toggles_without_touching_anything_else() {
    let mut store = store_with_image();
    let before = store.snapshot();
    let state = store.toggle_facing();
    assert_eq!(state.facing, FacingMode::Environment);
    assert_eq!(state.facing.as_constraint(), "environment");
    assert_eq!(state.landmarks, before.landmarks);
    assert_eq!(state.image, before.image);
    assert_eq!(store.toggle_facing().facing, FacingMode::User);
}

#[test]
fn angle_follows_the_landmarks() {
    let mut store = store_with_image();
    store.begin_drag(2);
    let state = store.drag_to(Point::new(300.0, 300.0), Some(ORIGIN));
    // (100,100) -> (200,200) -> (300,300) is a straight line.
    assert_eq!(state.angle(), 0.0);
    assert_eq!(state.angle(), compute_angle(state.landmarks.points()));
}

#[test]
fn observers_fire_once_per_change() {
    let mut store = Store::default();
    let calls = counting(&mut store);

    store.set_image(CapturedImage::upload("data:,x"));
    assert_eq!(calls.get(), 1);

    store.begin_drag(0);
    store.begin_drag(0);
    assert_eq!(calls.get(), 2);

    store.drag_to(Point::new(5.0, 5.0), Some(ORIGIN));
    store.drag_to(Point::new(5.0, 5.0), Some(ORIGIN));
    assert_eq!(calls.get(), 3);

    store.end_drag();
    store.end_drag();
    assert_eq!(calls.get(), 4);

    store.drag_to(Point::new(6.0, 6.0), Some(ORIGIN));
    assert_eq!(calls.get(), 4);

    store.toggle_facing();
    assert_eq!(calls.get(), 5);
}

#[test]
fn observers_see_the_new_state() {
    let mut store = store_with_image();
    let seen = Rc::new(Cell::new(Point::default()));
    let s = seen.clone();
    store.subscribe(move |state| s.set(state.landmarks.points()[0]));
    store.begin_drag(0);
    store.drag_to(Point::new(11.0, 12.0), Some(ORIGIN));
    assert_eq!(seen.get(), Point::new(11.0, 12.0));
}

#[test]
fn landmark_replace_rejects_bad_index() {
    let mut set = LandmarkSet::default();
    let before = set;
    assert!(!set.replace(3, Point::new(1.0, 1.0)));
    assert_eq!(set, before);
    assert!(set.replace(0, Point::new(1.0, 1.0)));
    assert_eq!(set.get(0), Some(Point::new(1.0, 1.0)));
}

#[test]
fn segments_share_the_middle_point() {
    let set = LandmarkSet::default();
    let [a, b] = set.segments();
    assert_eq!(a.1, b.0);
    assert_eq!(a.0, set.points()[0]);
    assert_eq!(b.1, set.points()[2]);
}

#[test]
fn summary_leaves_out_the_image_payload() {
    let store = store_with_image();
    let summary = store.state().summary();
    let image = &summary["image"];
    assert_eq!(image["source"], "camera");
    assert_eq!(image["width"], 640);
    assert!(image.get("url").is_none());
    assert_eq!(summary["facing"], "user");
    assert_eq!(summary["drag"], "Idle");
}
