use crate::constants::{
    NOTICE_CAMERA_DENIED, NOTICE_CAMERA_UNAVAILABLE, NOTICE_GENERIC, NOTICE_UPLOAD_FAILED,
};
use thiserror::Error;

/// Failures of a single capture or upload action. None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("camera permission denied: {0}")]
    PermissionDenied(String),
    #[error("camera unavailable: {0}")]
    DeviceUnavailable(String),
    #[error("video has no frame yet")]
    NotReady,
    #[error("reading the image file failed: {0}")]
    FileRead(String),
    #[error("camera request superseded by a newer start or stop")]
    Superseded,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl CaptureError {
    /// Classify a `getUserMedia` rejection by its `DOMException` name.
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        let detail = if message.is_empty() {
            name.to_string()
        } else {
            format!("{name}: {message}")
        };
        match name {
            "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => {
                CaptureError::PermissionDenied(detail)
            }
            "NotFoundError" | "DevicesNotFoundError" | "OverconstrainedError"
            | "NotReadableError" | "TrackStartError" | "AbortError" => {
                CaptureError::DeviceUnavailable(detail)
            }
            _ => CaptureError::Js(detail),
        }
    }

    /// Text for the blocking notice, or `None` when the failure is routine and
    /// should stay silent.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            CaptureError::PermissionDenied(_) => Some(NOTICE_CAMERA_DENIED),
            CaptureError::DeviceUnavailable(_) => Some(NOTICE_CAMERA_UNAVAILABLE),
            CaptureError::FileRead(_) => Some(NOTICE_UPLOAD_FAILED),
            CaptureError::Js(_) => Some(NOTICE_GENERIC),
            CaptureError::NotReady | CaptureError::Superseded => None,
        }
    }
}
