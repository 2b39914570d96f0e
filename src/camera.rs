use crate::constants::{SNAPSHOT_MIME, SNAPSHOT_QUALITY};
use crate::core::{frame_size, CaptureError, CapturedImage, FacingMode, StreamSlot, TrackSet};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

impl TrackSet for web::MediaStream {
    fn stop_tracks(&self) -> usize {
        let mut stopped = 0;
        for track in self.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
                track.stop();
                stopped += 1;
            }
        }
        stopped
    }
}

/// Map a rejected browser call onto the capture error taxonomy.
pub fn capture_error(value: JsValue) -> CaptureError {
    match value.dyn_ref::<web::DomException>() {
        Some(ex) => CaptureError::from_dom_exception(&ex.name(), &ex.message()),
        None => CaptureError::Js(format!("{:?}", value)),
    }
}

/// Live preview plus snapshotting for one `<video>` element.
#[derive(Clone)]
pub struct CameraController {
    video: web::HtmlVideoElement,
    canvas: web::HtmlCanvasElement,
    slot: Rc<RefCell<StreamSlot<web::MediaStream>>>,
}

impl CameraController {
    pub fn new(video: web::HtmlVideoElement, canvas: web::HtmlCanvasElement) -> Self {
        Self {
            video,
            canvas,
            slot: Rc::new(RefCell::new(StreamSlot::new())),
        }
    }

    /// Request a stream for `facing` and bind it to the preview. Any stream
    /// bound or pending before this call is released first.
    pub async fn start(&self, facing: FacingMode) -> Result<(), CaptureError> {
        let token = self.slot.borrow_mut().begin_request();
        self.video.set_src_object(None);

        let devices = web::window()
            .ok_or_else(|| CaptureError::DeviceUnavailable("no window".into()))?
            .navigator()
            .media_devices()
            .map_err(|_| CaptureError::DeviceUnavailable("mediaDevices not supported".into()))?;

        let constraints = web::MediaStreamConstraints::new();
        constraints.set_video(&video_constraints(facing)?);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(capture_error)?;
        let stream: web::MediaStream = JsFuture::from(promise)
            .await
            .map_err(capture_error)?
            .dyn_into()
            .map_err(|_| CaptureError::Js("getUserMedia resolved without a MediaStream".into()))?;

        let tracks = stream.get_tracks().length();
        self.slot.borrow_mut().bind(token, stream.clone())?;
        self.video.set_src_object(Some(&stream));
        log::info!(
            "[camera] streaming {} track(s), facing {}",
            tracks,
            facing.as_constraint()
        );
        if let Ok(play) = self.video.play() {
            if let Err(e) = JsFuture::from(play).await {
                log::debug!("[camera] play() rejected: {:?}", e);
            }
        }
        Ok(())
    }

    /// Rasterise the current preview frame into a JPEG data URL.
    pub fn capture(&self) -> Result<CapturedImage, CaptureError> {
        let (width, height) = frame_size(self.video.video_width(), self.video.video_height())?;
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let ctx = self
            .canvas
            .get_context("2d")
            .map_err(capture_error)?
            .ok_or_else(|| CaptureError::Js("2d context unavailable".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(capture_error)?;
        ctx.draw_image_with_html_video_element_and_dw_and_dh(
            &self.video,
            0.0,
            0.0,
            width as f64,
            height as f64,
        )
        .map_err(capture_error)?;

        let url = self
            .canvas
            .to_data_url_with_type_and_encoder_options(
                SNAPSHOT_MIME,
                &JsValue::from_f64(SNAPSHOT_QUALITY),
            )
            .map_err(capture_error)?;
        Ok(CapturedImage::snapshot(url, width, height))
    }

    /// Stop every track and detach the preview. Returns the number of tracks
    /// stopped; zero when nothing was running.
    pub fn stop(&self) -> usize {
        let stopped = self.slot.borrow_mut().release();
        self.video.set_src_object(None);
        stopped
    }
}

fn video_constraints(facing: FacingMode) -> Result<JsValue, CaptureError> {
    let video = js_sys::Object::new();
    js_sys::Reflect::set(
        &video,
        &JsValue::from_str("facingMode"),
        &JsValue::from_str(facing.as_constraint()),
    )
    .map_err(capture_error)?;
    Ok(video.into())
}
