use crate::core::CaptureError;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up a required element and cast it to its concrete type.
pub fn element_by_id<T: JsCast>(document: &web::Document, element_id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong type: {:?}", element_id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] no #{} to wire", element_id);
        return;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Log a failed action and show the blocking notice it calls for, if any.
pub fn report(err: &CaptureError) {
    match err.notice() {
        Some(text) => {
            log::error!("{}", err);
            gloo_dialogs::alert(text);
        }
        None => log::debug!("{}", err),
    }
}

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1("hidden");
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
}
