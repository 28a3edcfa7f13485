//! Scale-free face measurements derived from a landmark set.
//!
//! Every linear dimension is expressed as a percentage of cheek width, the
//! most stable horizontal reference on the face.

use serde::Serialize;
use thiserror::Error;

use crate::landmarks::domain::landmark_set::{
    LandmarkSet, Point, CHEEK_LEFT, CHEEK_RIGHT, CHIN_BOTTOM, FOREHEAD_LEFT, FOREHEAD_RIGHT,
    HEAD_TOP, JAW_LEFT, JAW_RIGHT,
};
use crate::measurement::domain::geometry::{angle_between, distance};

/// Landmarks that cannot be measured. The frame is skipped, not fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("landmark {0} is missing or not finite")]
    MissingLandmark(usize),
    #[error("cheek width is zero")]
    ZeroCheekWidth,
    #[error("jaw point coincides with the chin; chin angle is undefined")]
    DegenerateChin,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FaceFeatures {
    /// Face length (head top to chin) as % of cheek width.
    pub face_ratio: f64,
    /// Jaw width as % of cheek width.
    pub jaw_ratio: f64,
    /// Forehead width as % of cheek width.
    pub forehead_ratio: f64,
    /// Interior angle at the chin between the jaw points, in degrees.
    pub chin_angle: f64,
}

fn anchor(landmarks: &LandmarkSet, index: usize) -> Result<Point, GeometryError> {
    landmarks
        .get(index)
        .ok_or(GeometryError::MissingLandmark(index))
}

impl FaceFeatures {
    pub fn extract(landmarks: &LandmarkSet) -> Result<Self, GeometryError> {
        let cheek_l = anchor(landmarks, CHEEK_LEFT)?;
        let cheek_r = anchor(landmarks, CHEEK_RIGHT)?;
        let jaw_l = anchor(landmarks, JAW_LEFT)?;
        let jaw_r = anchor(landmarks, JAW_RIGHT)?;
        let fore_l = anchor(landmarks, FOREHEAD_LEFT)?;
        let fore_r = anchor(landmarks, FOREHEAD_RIGHT)?;
        let head_top = anchor(landmarks, HEAD_TOP)?;
        let chin = anchor(landmarks, CHIN_BOTTOM)?;

        let cheek_width = distance(cheek_l, cheek_r);
        if cheek_width == 0.0 {
            return Err(GeometryError::ZeroCheekWidth);
        }

        if distance(jaw_l, chin) == 0.0 || distance(jaw_r, chin) == 0.0 {
            return Err(GeometryError::DegenerateChin);
        }

        let percent_of_cheeks = |length: f64| length / cheek_width * 100.0;

        Ok(Self {
            face_ratio: percent_of_cheeks(distance(head_top, chin)),
            jaw_ratio: percent_of_cheeks(distance(jaw_l, jaw_r)),
            forehead_ratio: percent_of_cheeks(distance(fore_l, fore_r)),
            chin_angle: angle_between(jaw_l, chin, jaw_r),
        })
    }

    /// Stats in display order: `(face, chin angle, jaw, forehead)`.
    pub fn stats(&self) -> (f64, f64, f64, f64) {
        (
            self.face_ratio,
            self.chin_angle,
            self.jaw_ratio,
            self.forehead_ratio,
        )
    }
}
