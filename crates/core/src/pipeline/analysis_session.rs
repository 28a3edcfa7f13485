use crate::classification::domain::face_shape::FaceShape;
use crate::classification::domain::shape_stabilizer::{Decision, ShapeStabilizer};
use crate::landmarks::domain::landmark_set::LandmarkSet;
use crate::pipeline::frame_analysis::{FrameAnalysis, FrameMeasurement, FrameStatus};
use crate::recommendation::domain::recommendation_scorer::RecommendationScorer;

/// Per-face tracking session: owns the stabilization window.
///
/// Frames must be applied in capture order by a single owner.
pub struct AnalysisSession {
    stabilizer: ShapeStabilizer,
    scorer: RecommendationScorer,
    stable_shape: Option<FaceShape>,
}

impl AnalysisSession {
    pub fn new(scorer: RecommendationScorer) -> Self {
        Self::with_stabilizer(scorer, ShapeStabilizer::default())
    }

    pub fn with_stabilizer(scorer: RecommendationScorer, stabilizer: ShapeStabilizer) -> Self {
        Self {
            stabilizer,
            scorer,
            stable_shape: None,
        }
    }

    /// Measures and applies one frame.
    pub fn process(&mut self, index: usize, landmarks: Option<&LandmarkSet>) -> FrameAnalysis {
        self.apply(index, FrameMeasurement::measure(landmarks))
    }

    /// Applies an already-computed measurement to the session state.
    pub fn apply(&mut self, index: usize, measurement: FrameMeasurement) -> FrameAnalysis {
        let mut analysis = FrameAnalysis {
            index,
            status: FrameStatus::NoFace,
            raw_shape: None,
            features: None,
            recommendations: Vec::new(),
        };

        match measurement {
            FrameMeasurement::NoFace => {}
            FrameMeasurement::Invalid(e) => {
                log::warn!("Frame {index}: skipped, {e}");
                analysis.status = FrameStatus::InvalidGeometry;
            }
            FrameMeasurement::NotFrontal { yaw_ratio } => {
                if !self.stabilizer.is_empty() {
                    log::info!(
                        "Frame {index}: head turned (yaw ratio {yaw_ratio:.2}), discarding shape history"
                    );
                }
                self.reset();
                analysis.status = FrameStatus::NotFrontal;
            }
            FrameMeasurement::Measured { features, shape } => {
                self.stabilizer.observe(shape);
                analysis.raw_shape = Some(shape);
                analysis.features = Some(features);

                match self.stabilizer.current_decision() {
                    Decision::NotReady => {
                        analysis.status = FrameStatus::Analyzing {
                            progress: self.stabilizer.progress(),
                        };
                    }
                    Decision::Stable(stable) => {
                        if self.stable_shape != Some(stable) {
                            log::info!("Frame {index}: face shape settled on {stable}");
                            self.stable_shape = Some(stable);
                        }
                        analysis.status = FrameStatus::Stable { shape: stable };
                        analysis.recommendations =
                            self.scorer.recommend(stable, features.chin_angle);
                    }
                }
            }
        }

        log::debug!(
            "Frame {index}: {} (raw {:?})",
            analysis.status.label(),
            analysis.raw_shape
        );
        analysis
    }

    pub fn decision(&self) -> Decision {
        self.stabilizer.current_decision()
    }

    pub fn progress(&self) -> f64 {
        self.stabilizer.progress()
    }

    pub fn reset(&mut self) {
        self.stabilizer.reset();
        self.stable_shape = None;
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new(RecommendationScorer::default())
    }
}
