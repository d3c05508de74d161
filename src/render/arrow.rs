use kurbo::BezPath;

use crate::foundation::core::{Point, Vec2};

/// Stroke geometry shared by every arrow in an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle {
    /// Stroke width of the shaft and both head wings.
    pub line_width: f64,
    /// Length of each head wing.
    pub head_size: f64,
    /// Angle between the shaft and each wing, in degrees.
    pub head_angle_deg: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            line_width: 4.0,
            head_size: 10.0,
            head_angle_deg: 30.0,
        }
    }
}

/// End points of the two wings forming a "V" at `end`, pointing back toward `start`.
///
/// The wings sit at `±(180° - angle_deg)` from the `start -> end` direction. When the two points
/// coincide the direction is taken as 0 rad (pointing right).
pub fn arrowhead_wings(start: Point, end: Point, size: f64, angle_deg: f64) -> [Point; 2] {
    let d = end - start;
    let line_angle = d.y.atan2(d.x);
    let spread = (180.0 - angle_deg).to_radians();
    [line_angle + spread, line_angle - spread].map(|a| end + Vec2::from_angle(a) * size)
}

/// Shaft plus both wings as three open sub-paths, ready to be stroked.
pub fn arrow_path(start: Point, end: Point, style: &ArrowStyle) -> BezPath {
    let [left, right] = arrowhead_wings(start, end, style.head_size, style.head_angle_deg);

    let mut path = BezPath::new();
    path.move_to(start);
    path.line_to(end);
    path.move_to(end);
    path.line_to(left);
    path.move_to(end);
    path.line_to(right);
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/arrow.rs"]
mod tests;
