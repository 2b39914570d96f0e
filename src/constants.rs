/// Layout, capture and overlay tuning constants.
///
/// Element ids refer to the host page (`index.html`); everything else keeps
/// magic numbers out of the wiring code.
// Host page elements
pub const VIDEO_ID: &str = "camera-preview";
pub const SNAPSHOT_CANVAS_ID: &str = "snapshot-canvas";
pub const STAGE_ID: &str = "capture-stage";
pub const IMAGE_ID: &str = "captured-image";
pub const READOUT_ID: &str = "angle-readout";
pub const FACING_LABEL_ID: &str = "facing-label";

// Controls
pub const START_CAMERA_ID: &str = "start-camera";
pub const CAPTURE_PHOTO_ID: &str = "capture-photo";
pub const STOP_CAMERA_ID: &str = "stop-camera";
pub const SWITCH_CAMERA_ID: &str = "switch-camera";
pub const IMAGE_UPLOAD_ID: &str = "image-upload";

// Initial landmark positions in image pixels (head, shoulder, back)
pub const DEFAULT_LANDMARKS: [[f64; 2]; 3] = [[100.0, 100.0], [200.0, 200.0], [300.0, 100.0]];

// Overlay look
pub const HANDLE_DIAMETER_PX: f64 = 30.0;
pub const HANDLE_COLOR: &str = "red";
pub const SEGMENT_COLOR: &str = "red";
pub const SEGMENT_STROKE_WIDTH: f64 = 2.0;
pub const HANDLE_Z_INDEX: i32 = 10;

// Snapshot encoding
pub const SNAPSHOT_MIME: &str = "image/jpeg";
pub const SNAPSHOT_QUALITY: f64 = 0.92; // browser default for image/jpeg

// Angle readout
pub const ANGLE_DECIMALS: usize = 2;
pub const READOUT_PREFIX: &str = "Angle between lines: ";

// User-facing notices
pub const NOTICE_CAMERA_DENIED: &str = "Camera access denied. Please allow camera access.";
pub const NOTICE_CAMERA_UNAVAILABLE: &str =
    "No usable camera found. Check that a camera is connected and not in use.";
pub const NOTICE_UPLOAD_FAILED: &str = "Could not read the selected image.";
pub const NOTICE_GENERIC: &str = "Something went wrong. Please try again.";
