//! Hand-calibrated decision tree from face measurements to a shape label.
//!
//! Face length splits off elongated faces first. Shorter faces separate by
//! chin sharpness (angular vs soft). Mid-length faces separate by jaw width,
//! then by chin angle and forehead taper.

use crate::classification::domain::face_shape::FaceShape;
use crate::measurement::domain::face_features::FaceFeatures;

/// Face ratio at or above which a face is Oblong.
pub const OBLONG_MIN_FACE_RATIO: f64 = 128.0;
/// Face ratio at or below which a face is Square or Round.
pub const SHORT_MAX_FACE_RATIO: f64 = 123.0;
/// Chin angle at or above which a short face is Square.
pub const SQUARE_MIN_CHIN_ANGLE: f64 = 89.2;
/// Jaw ratio above which a mid-length face is Oval.
pub const WIDE_JAW_RATIO: f64 = 94.0;
/// Chin angle below which a mid-length, narrow-jawed face is Heart or Diamond.
pub const POINTED_CHIN_ANGLE: f64 = 84.0;
/// Forehead ratio above which a pointed-chin face is Heart.
pub const HEART_MIN_FOREHEAD_RATIO: f64 = 70.0;

/// Classifies measurements into exactly one shape. Total over all inputs.
pub fn classify(features: &FaceFeatures) -> FaceShape {
    if features.face_ratio >= OBLONG_MIN_FACE_RATIO {
        return FaceShape::Oblong;
    }

    if features.face_ratio <= SHORT_MAX_FACE_RATIO {
        return if features.chin_angle >= SQUARE_MIN_CHIN_ANGLE {
            FaceShape::Square
        } else {
            FaceShape::Round
        };
    }

    if features.jaw_ratio > WIDE_JAW_RATIO {
        FaceShape::Oval
    } else if features.chin_angle < POINTED_CHIN_ANGLE {
        if features.forehead_ratio > HEART_MIN_FOREHEAD_RATIO {
            FaceShape::Heart
        } else {
            FaceShape::Diamond
        }
    } else {
        FaceShape::Oval
    }
}
