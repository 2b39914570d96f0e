use crate::camera::CameraController;
use crate::constants::{
    CAPTURE_PHOTO_ID, IMAGE_UPLOAD_ID, START_CAMERA_ID, STOP_CAMERA_ID, SWITCH_CAMERA_ID,
};
use crate::core::Store;
use crate::dom;
use crate::upload;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
pub struct ControlWiring {
    pub store: Rc<RefCell<Store>>,
    pub camera: CameraController,
}

impl ControlWiring {
    fn start_camera(&self) {
        let facing = self.store.borrow().state().facing;
        let camera = self.camera.clone();
        log::info!("[camera] requesting {} camera", facing.label());
        spawn_local(async move {
            if let Err(e) = camera.start(facing).await {
                dom::report(&e);
            }
        });
    }

    fn capture_photo(&self) {
        match self.camera.capture() {
            Ok(image) => {
                log::info!(
                    "[camera] captured {}x{}",
                    image.width.unwrap_or(0),
                    image.height.unwrap_or(0)
                );
                self.store.borrow_mut().set_image(image);
            }
            Err(e) => dom::report(&e),
        }
    }

    fn stop_camera(&self) {
        let stopped = self.camera.stop();
        log::info!("[camera] stopped {} track(s)", stopped);
    }

    fn switch_camera(&self) {
        let state = self.store.borrow_mut().toggle_facing();
        log::info!("[camera] next start uses the {} camera", state.facing.label());
    }

    fn upload_image(&self, input: &web::HtmlInputElement) {
        let Some(file) = upload::first_selected_file(input) else {
            return;
        };
        let store = self.store.clone();
        spawn_local(async move {
            match upload::read_image(file).await {
                Ok(image) => {
                    store.borrow_mut().set_image(image);
                }
                Err(e) => dom::report(&e),
            }
        });
    }
}

pub fn wire_controls(document: &web::Document, w: ControlWiring) -> anyhow::Result<()> {
    let w0 = w.clone();
    dom::add_click_listener(document, START_CAMERA_ID, move || w0.start_camera());
    let w1 = w.clone();
    dom::add_click_listener(document, CAPTURE_PHOTO_ID, move || w1.capture_photo());
    let w2 = w.clone();
    dom::add_click_listener(document, STOP_CAMERA_ID, move || w2.stop_camera());
    let w3 = w.clone();
    dom::add_click_listener(document, SWITCH_CAMERA_ID, move || w3.switch_camera());

    let input: web::HtmlInputElement = dom::element_by_id(document, IMAGE_UPLOAD_ID)?;
    let input_for_change = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        w.upload_image(&input_for_change);
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}
