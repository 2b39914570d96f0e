use crate::core::{CaptureError, CapturedImage};
use web_sys as web;

#[inline]
pub fn first_selected_file(input: &web::HtmlInputElement) -> Option<web::File> {
    input.files().and_then(|files| files.get(0))
}

/// Read a user-picked file into a data URL. The MIME type is not enforced;
/// the picker's `accept` filter is the only gate.
pub async fn read_image(file: web::File) -> Result<CapturedImage, CaptureError> {
    let name = file.name();
    let mime = file.type_();
    if !mime.starts_with("image/") {
        log::warn!("[upload] {} has type {:?}, loading anyway", name, mime);
    }
    let file = gloo_file::File::from(file);
    let url = gloo_file::futures::read_as_data_url(&file)
        .await
        .map_err(|e| CaptureError::FileRead(format!("{}: {}", name, e)))?;
    log::info!("[upload] loaded {} ({} bytes)", name, file.size());
    Ok(CapturedImage::upload(url))
}
