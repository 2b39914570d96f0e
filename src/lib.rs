#![cfg(target_arch = "wasm32")]
use crate::camera::CameraController;
use crate::constants::{SNAPSHOT_CANVAS_ID, VIDEO_ID};
use crate::core::Store;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod input;
mod overlay;
mod upload;

// Release the camera and any drag listeners when the page is hidden for good.
fn wire_teardown(window: &web::Window, camera: CameraController, drag: events::DragWiring) {
    let closure = Closure::wrap(Box::new(move || {
        let stopped = camera.stop();
        drag.teardown();
        log::info!("[app] teardown, stopped {} track(s)", stopped);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("posture-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let video: web::HtmlVideoElement = dom::element_by_id(&document, VIDEO_ID)?;
    let snapshot_canvas: web::HtmlCanvasElement =
        dom::element_by_id(&document, SNAPSHOT_CANVAS_ID)?;
    let overlay = Rc::new(overlay::Overlay::mount(&document)?);

    let store = Rc::new(RefCell::new(Store::default()));
    {
        let mut s = store.borrow_mut();
        let overlay_for_render = overlay.clone();
        s.subscribe(move |state| overlay_for_render.render(state));
        s.subscribe(|state| log::debug!("[state] {}", state.summary()));
        overlay.render(s.state());
    }

    let camera = CameraController::new(video, snapshot_canvas);
    let drag = events::wire_drag_handlers(store.clone(), &overlay);
    events::wire_controls(
        &document,
        events::ControlWiring {
            store,
            camera: camera.clone(),
        },
    )?;
    wire_teardown(&window, camera, drag);

    log::info!("[app] ready");
    Ok(())
}
