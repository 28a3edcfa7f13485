use serde::Serialize;

use crate::classification::domain::face_shape::FaceShape;
use crate::classification::domain::shape_classifier::classify;
use crate::landmarks::domain::landmark_set::{LandmarkSet, NOSE_TIP};
use crate::measurement::domain::face_features::{FaceFeatures, GeometryError};
use crate::measurement::domain::head_pose_gate::{is_frontal_yaw, yaw_ratio};
use crate::recommendation::domain::eyewear_catalog::EyewearStyle;

/// Stateless per-frame result: measure, gate, classify.
///
/// Safe to compute on any thread; only applying it to a session is ordered.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameMeasurement {
    NoFace,
    Invalid(GeometryError),
    NotFrontal { yaw_ratio: f64 },
    Measured { features: FaceFeatures, shape: FaceShape },
}

impl FrameMeasurement {
    pub fn measure(landmarks: Option<&LandmarkSet>) -> Self {
        let Some(landmarks) = landmarks else {
            return FrameMeasurement::NoFace;
        };

        let features = match FaceFeatures::extract(landmarks) {
            Ok(f) => f,
            Err(e) => return FrameMeasurement::Invalid(e),
        };

        let Some(yaw) = yaw_ratio(landmarks) else {
            return FrameMeasurement::Invalid(GeometryError::MissingLandmark(NOSE_TIP));
        };
        if !is_frontal_yaw(yaw) {
            return FrameMeasurement::NotFrontal { yaw_ratio: yaw };
        }

        FrameMeasurement::Measured {
            shape: classify(&features),
            features,
        }
    }
}

/// What the presentation layer shows for a frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameStatus {
    NoFace,
    /// Landmarks could not be measured; the frame was skipped.
    InvalidGeometry,
    /// Head turned away; shape history was discarded. Prompt to re-align.
    NotFrontal,
    /// Collecting labels; `progress` is the window fill level in `[0, 1]`.
    Analyzing { progress: f64 },
    Stable { shape: FaceShape },
}

impl FrameStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FrameStatus::NoFace => "no_face",
            FrameStatus::InvalidGeometry => "invalid_geometry",
            FrameStatus::NotFrontal => "not_frontal",
            FrameStatus::Analyzing { .. } => "analyzing",
            FrameStatus::Stable { .. } => "stable",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameAnalysis {
    pub index: usize,
    pub status: FrameStatus,
    /// This frame's own classification, before stabilization.
    pub raw_shape: Option<FaceShape>,
    pub features: Option<FaceFeatures>,
    /// Best first. Empty unless the status is `Stable`.
    pub recommendations: Vec<EyewearStyle>,
}

impl FrameAnalysis {
    pub fn top_recommendation(&self) -> Option<&EyewearStyle> {
        self.recommendations.first()
    }

    /// `(face ratio, chin angle, jaw ratio, forehead ratio)`, when measured.
    pub fn stats(&self) -> Option<(f64, f64, f64, f64)> {
        self.features.as_ref().map(FaceFeatures::stats)
    }

    pub fn stable_shape(&self) -> Option<FaceShape> {
        match self.status {
            FrameStatus::Stable { shape } => Some(shape),
            _ => None,
        }
    }
}
