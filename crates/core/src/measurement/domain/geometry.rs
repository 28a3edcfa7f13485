//! Planar geometry used by the face measurements.

use crate::landmarks::domain::landmark_set::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

/// Interior angle in degrees at `vertex` subtended by `a` and `b`.
///
/// The signed atan2 difference is folded into `[0, 180]` so the result does
/// not depend on which outer point comes first.
pub fn angle_between(a: Point, vertex: Point, b: Point) -> f64 {
    let to_b = (b.1 - vertex.1).atan2(b.0 - vertex.0);
    let to_a = (a.1 - vertex.1).atan2(a.0 - vertex.0);
    let mut angle = (to_b - to_a).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle
}
