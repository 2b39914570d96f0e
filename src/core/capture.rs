use crate::core::error::CaptureError;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Which camera the next start request asks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    #[default]
    User,
    Environment,
}

impl FacingMode {
    pub fn toggled(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }

    /// Value for the `facingMode` media constraint.
    pub fn as_constraint(self) -> &'static str {
        match self {
            FacingMode::User => "user",
            FacingMode::Environment => "environment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FacingMode::User => "front",
            FacingMode::Environment => "back",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Camera,
    Upload,
}

/// The still image currently on display. Replaced wholesale on every capture
/// or upload; the URL is shared so state snapshots stay cheap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedImage {
    pub source: ImageSource,
    pub url: Rc<str>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl CapturedImage {
    pub fn snapshot(url: impl Into<Rc<str>>, width: u32, height: u32) -> Self {
        Self {
            source: ImageSource::Camera,
            url: url.into(),
            width: Some(width),
            height: Some(height),
        }
    }

    pub fn upload(url: impl Into<Rc<str>>) -> Self {
        Self {
            source: ImageSource::Upload,
            url: url.into(),
            width: None,
            height: None,
        }
    }
}

/// Validate the natural size of the preview video before rasterising it.
#[inline]
pub fn frame_size(video_width: u32, video_height: u32) -> Result<(u32, u32), CaptureError> {
    if video_width == 0 || video_height == 0 {
        return Err(CaptureError::NotReady);
    }
    Ok((video_width, video_height))
}
