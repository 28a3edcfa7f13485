//! Frontal-pose check that keeps turned heads out of the measurements.
//!
//! Compares nose-to-ear distances on both sides. A turned head shortens one
//! side, which would skew every width ratio downstream.

use crate::landmarks::domain::landmark_set::{LandmarkSet, EAR_LEFT, EAR_RIGHT, NOSE_TIP};
use crate::measurement::domain::geometry::distance;

/// Guards the yaw ratio against a zero right-side distance.
pub const YAW_EPSILON: f64 = 1e-5;

/// Exclusive bounds on the left/right yaw ratio for a frontal face.
pub const MIN_YAW_RATIO: f64 = 0.60;
pub const MAX_YAW_RATIO: f64 = 1.60;

/// `d(nose, left ear) / (d(nose, right ear) + ε)`, or `None` when an anchor
/// is missing.
pub fn yaw_ratio(landmarks: &LandmarkSet) -> Option<f64> {
    let nose = landmarks.get(NOSE_TIP)?;
    let left = landmarks.get(EAR_LEFT)?;
    let right = landmarks.get(EAR_RIGHT)?;
    Some(distance(nose, left) / (distance(nose, right) + YAW_EPSILON))
}

/// Whether a yaw ratio is frontal enough to measure.
pub fn is_frontal_yaw(ratio: f64) -> bool {
    MIN_YAW_RATIO < ratio && ratio < MAX_YAW_RATIO
}
