//! Synthetic landmark sets with exactly known measurements.

use crate::landmarks::domain::landmark_set::{
    LandmarkSet, CHEEK_LEFT, CHEEK_RIGHT, CHIN_BOTTOM, FOREHEAD_LEFT, FOREHEAD_RIGHT, HEAD_TOP,
    JAW_LEFT, JAW_RIGHT, NOSE_TIP,
};

const CHEEK_WIDTH: f64 = 100.0;
const MID_X: f64 = CHEEK_WIDTH / 2.0;

/// A frontal face whose measured ratios and chin angle equal the arguments.
///
/// Cheek width is 100 px so every ratio maps directly to a pixel length.
pub fn synthetic_face(face_ratio: f64, jaw_ratio: f64, forehead_ratio: f64, chin_angle: f64) -> LandmarkSet {
    let chin_y = face_ratio;
    let half_jaw = jaw_ratio / 2.0;
    let jaw_y = chin_y - half_jaw / (chin_angle / 2.0).to_radians().tan();
    let half_forehead = forehead_ratio / 2.0;
    let ear_y = face_ratio * 0.5;

    LandmarkSet::from_anchors(&[
        (HEAD_TOP, (MID_X, 0.0)),
        (CHIN_BOTTOM, (MID_X, chin_y)),
        (CHEEK_LEFT, (0.0, ear_y)),
        (CHEEK_RIGHT, (CHEEK_WIDTH, ear_y)),
        (JAW_LEFT, (MID_X - half_jaw, jaw_y)),
        (JAW_RIGHT, (MID_X + half_jaw, jaw_y)),
        (FOREHEAD_LEFT, (MID_X - half_forehead, face_ratio * 0.2)),
        (FOREHEAD_RIGHT, (MID_X + half_forehead, face_ratio * 0.2)),
        (NOSE_TIP, (MID_X, face_ratio * 0.55)),
    ])
}

/// Moves the nose onto the ear line so the yaw ratio becomes `ratio`.
pub fn with_yaw_ratio(landmarks: &LandmarkSet, ratio: f64) -> LandmarkSet {
    let mut points = landmarks.points().to_vec();
    let ear_y = points[CHEEK_LEFT].1;
    points[NOSE_TIP] = (CHEEK_WIDTH * ratio / (1.0 + ratio), ear_y);
    LandmarkSet::new(points)
}
