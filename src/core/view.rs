use crate::constants::{
    ANGLE_DECIMALS, HANDLE_COLOR, HANDLE_DIAMETER_PX, HANDLE_Z_INDEX, READOUT_PREFIX,
};
use crate::core::geometry::Point;

/// Angle with a fixed number of decimals, e.g. `"12.50"`.
pub fn format_angle(angle: f64) -> String {
    let angle = if angle.is_finite() { angle } else { 0.0 };
    format!("{:.*}", ANGLE_DECIMALS, angle)
}

pub fn readout_text(angle: f64) -> String {
    format!("{}{}°", READOUT_PREFIX, format_angle(angle))
}

/// Inline style placing a round handle centred on `point`.
pub fn handle_style(point: Point) -> String {
    format!(
        "position:absolute;left:{}px;top:{}px;width:{d}px;height:{d}px;\
         background-color:{};border-radius:50%;cursor:grab;\
         transform:translate(-50%, -50%);z-index:{};touch-action:none",
        point.x,
        point.y,
        HANDLE_COLOR,
        HANDLE_Z_INDEX,
        d = HANDLE_DIAMETER_PX,
    )
}

/// SVG `<line>` endpoint attributes for one segment.
pub fn segment_attributes(from: Point, to: Point) -> [(&'static str, String); 4] {
    [
        ("x1", from.x.to_string()),
        ("y1", from.y.to_string()),
        ("x2", to.x.to_string()),
        ("y2", to.y.to_string()),
    ]
}
