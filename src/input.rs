use crate::core::{ImageOrigin, Point};
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn mouse_client_point(ev: &web::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Primary touch point of a touch event, if any finger is still down.
#[inline]
pub fn touch_client_point(ev: &web::TouchEvent) -> Option<Point> {
    ev.touches()
        .get(0)
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
}

/// Current viewport offset of the displayed image. `None` once the image has
/// left the document.
#[inline]
pub fn image_origin(image: &web::HtmlImageElement) -> Option<ImageOrigin> {
    if !image.is_connected() {
        return None;
    }
    let rect = image.get_bounding_client_rect();
    Some(ImageOrigin {
        left: rect.left(),
        top: rect.top(),
    })
}
