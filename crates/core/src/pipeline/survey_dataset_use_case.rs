//! Calibration survey over a labelled landmark dataset.
//!
//! Expects `<root>/<Shape>/*.json`, one face per file, with folder names
//! matching [`FaceShape`] names. Reports the mean measurements per shape,
//! which is what the classifier thresholds were tuned against.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classification::domain::face_shape::FaceShape;
use crate::classification::domain::shape_classifier::classify;
use crate::landmarks::infrastructure::json_landmark_reader::read_landmark_file;
use crate::measurement::domain::face_features::FaceFeatures;
use crate::shared::constants::{LANDMARK_EXTENSIONS, SURVEY_SAMPLE_LIMIT};

/// Called after each valid sample: `(shape, samples so far)`.
pub type SurveyProgressFn = Box<dyn Fn(FaceShape, usize) + Send>;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapeSurvey {
    pub shape: FaceShape,
    pub samples: usize,
    pub mean: FaceFeatures,
    /// Fraction of samples the classifier labels as `shape`.
    pub agreement: f64,
}

pub struct SurveyDatasetUseCase {
    sample_limit: usize,
    on_progress: Option<SurveyProgressFn>,
}

impl SurveyDatasetUseCase {
    pub fn new(sample_limit: usize, on_progress: Option<SurveyProgressFn>) -> Self {
        Self {
            sample_limit: sample_limit.max(1),
            on_progress,
        }
    }

    /// Surveys every shape folder under `root`, in canonical shape order.
    ///
    /// Missing folders and unreadable files are logged and skipped; shapes
    /// with no valid samples are omitted.
    pub fn execute(&self, root: &Path) -> Result<Vec<ShapeSurvey>, Box<dyn std::error::Error>> {
        if !root.is_dir() {
            return Err(format!("Dataset directory not found: {}", root.display()).into());
        }

        let mut results = Vec::new();
        for shape in FaceShape::ALL {
            let dir = root.join(shape.name());
            if !dir.is_dir() {
                log::warn!("No folder for {shape} at {}", dir.display());
                continue;
            }
            log::info!("Surveying {shape}");
            if let Some(survey) = self.survey_shape(shape, &dir)? {
                results.push(survey);
            }
        }
        Ok(results)
    }

    fn survey_shape(
        &self,
        shape: FaceShape,
        dir: &Path,
    ) -> Result<Option<ShapeSurvey>, Box<dyn std::error::Error>> {
        let mut samples: Vec<FaceFeatures> = Vec::new();

        for path in landmark_files(dir)? {
            if samples.len() >= self.sample_limit {
                break;
            }
            let landmarks = match read_landmark_file(&path) {
                Ok(lm) => lm,
                Err(e) => {
                    log::warn!("Skipping {}: {e}", path.display());
                    continue;
                }
            };
            match FaceFeatures::extract(&landmarks) {
                Ok(features) => {
                    samples.push(features);
                    if let Some(ref callback) = self.on_progress {
                        callback(shape, samples.len());
                    }
                }
                Err(e) => log::debug!("Skipping {}: {e}", path.display()),
            }
        }

        let Some(mean) = mean_features(&samples) else {
            return Ok(None);
        };
        let agreeing = samples.iter().filter(|f| classify(f) == shape).count();

        Ok(Some(ShapeSurvey {
            shape,
            samples: samples.len(),
            mean,
            agreement: agreeing as f64 / samples.len() as f64,
        }))
    }
}

impl Default for SurveyDatasetUseCase {
    fn default() -> Self {
        Self::new(SURVEY_SAMPLE_LIMIT, None)
    }
}

/// Landmark files directly inside `dir`, sorted by name.
fn landmark_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && has_landmark_extension(path))
        .collect();
    files.sort();
    Ok(files)
}

fn has_landmark_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| LANDMARK_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Component-wise mean, or `None` for no samples.
pub fn mean_features(samples: &[FaceFeatures]) -> Option<FaceFeatures> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as f64;
    let mean_of = |field: fn(&FaceFeatures) -> f64| samples.iter().map(field).sum::<f64>() / n;
    Some(FaceFeatures {
        face_ratio: mean_of(|f| f.face_ratio),
        jaw_ratio: mean_of(|f| f.jaw_ratio),
        forehead_ratio: mean_of(|f| f.forehead_ratio),
        chin_angle: mean_of(|f| f.chin_angle),
    })
}
