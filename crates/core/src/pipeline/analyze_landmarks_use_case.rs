use crate::classification::domain::shape_stabilizer::Decision;
use crate::landmarks::domain::landmark_source::LandmarkSource;
use crate::pipeline::analysis_executor::AnalysisExecutor;
use crate::pipeline::analysis_logger::AnalysisLogger;
use crate::pipeline::analysis_session::AnalysisSession;
use crate::pipeline::frame_analysis::FrameAnalysis;

/// Per-frame observer. Return `false` to stop the run.
pub type FrameCallback = Box<dyn FnMut(&FrameAnalysis) -> bool + Send>;

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    pub frames: usize,
    /// Window state at the end of the stream.
    pub final_decision: Decision,
    /// The most recent frame that carried a stable shape and recommendations.
    pub last_stable: Option<FrameAnalysis>,
}

/// Runs a landmark stream through a tracking session and reports the result.
pub struct AnalyzeLandmarksUseCase {
    executor: Box<dyn AnalysisExecutor>,
    session: AnalysisSession,
    logger: Box<dyn AnalysisLogger>,
    on_frame: Option<FrameCallback>,
}

impl AnalyzeLandmarksUseCase {
    pub fn new(
        executor: Box<dyn AnalysisExecutor>,
        session: AnalysisSession,
        logger: Box<dyn AnalysisLogger>,
        on_frame: Option<FrameCallback>,
    ) -> Self {
        Self {
            executor,
            session,
            logger,
            on_frame,
        }
    }

    pub fn execute(
        &mut self,
        source: Box<dyn LandmarkSource>,
    ) -> Result<AnalysisReport, Box<dyn std::error::Error>> {
        let total = source.len_hint();
        let mut frames = 0;
        let mut last_stable: Option<FrameAnalysis> = None;

        let logger = &mut self.logger;
        let on_frame = &mut self.on_frame;

        self.executor.execute(source, &mut self.session, &mut |analysis| {
            frames += 1;
            logger.progress(frames, total);
            logger.frame(&analysis);

            let keep_going = on_frame.as_mut().map_or(true, |cb| cb(&analysis));
            if analysis.stable_shape().is_some() {
                last_stable = Some(analysis);
            }
            keep_going
        })?;

        let final_decision = self.session.decision();
        match final_decision {
            Decision::Stable(shape) => self.logger.info(&format!("Final face shape: {shape}")),
            Decision::NotReady => self
                .logger
                .info("Not enough frontal frames for a stable face shape"),
        }
        self.logger.summary();

        Ok(AnalysisReport {
            frames,
            final_decision,
            last_stable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::domain::face_shape::FaceShape;
    use crate::landmarks::infrastructure::json_landmark_reader::JsonLandmarkReader;
    use crate::pipeline::analysis_logger::NullAnalysisLogger;
    use crate::pipeline::infrastructure::sequential_analysis_executor::SequentialAnalysisExecutor;
    use crate::test_fixtures::{synthetic_face, with_yaw_ratio};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn use_case(on_frame: Option<FrameCallback>) -> AnalyzeLandmarksUseCase {
        AnalyzeLandmarksUseCase::new(
            Box::new(SequentialAnalysisExecutor::new()),
            AnalysisSession::default(),
            Box::new(NullAnalysisLogger),
            on_frame,
        )
    }

    #[test]
    fn test_report_for_stable_stream() {
        let face = synthetic_face(110.0, 96.0, 80.0, 95.0);
        let source = JsonLandmarkReader::from_frames(vec![Some(face); 20]);

        let report = use_case(None).execute(Box::new(source)).unwrap();

        assert_eq!(report.frames, 20);
        assert_eq!(report.final_decision, Decision::Stable(FaceShape::Square));
        let last = report.last_stable.unwrap();
        assert_eq!(last.index, 19);
        assert_eq!(last.top_recommendation().unwrap().name, "Round");
    }

    #[test]
    fn test_report_keeps_last_stable_after_reset() {
        let face = synthetic_face(125.0, 96.0, 80.0, 95.0);
        let mut frames = vec![Some(face.clone()); 15];
        frames.push(Some(with_yaw_ratio(&face, 0.4)));
        frames.extend(vec![Some(face); 3]);

        let report = use_case(None)
            .execute(Box::new(JsonLandmarkReader::from_frames(frames)))
            .unwrap();

        assert_eq!(report.final_decision, Decision::NotReady);
        assert_eq!(report.last_stable.unwrap().index, 14);
    }

    #[test]
    fn test_callback_sees_every_frame() {
        let counter = Arc::new(AtomicUsize::new(0));
        let seen = counter.clone();
        let callback: FrameCallback = Box::new(move |_: &FrameAnalysis| {
            seen.fetch_add(1, Ordering::Relaxed);
            true
        });

        let source = JsonLandmarkReader::from_frames(vec![None; 7]);
        let report = use_case(Some(callback)).execute(Box::new(source)).unwrap();

        assert_eq!(report.frames, 7);
        assert_eq!(counter.load(Ordering::Relaxed), 7);
        assert!(report.last_stable.is_none());
    }

    #[test]
    fn test_callback_can_cancel() {
        let callback: FrameCallback = Box::new(|a: &FrameAnalysis| a.index < 2);
        let source = JsonLandmarkReader::from_frames(vec![None; 7]);
        assert!(use_case(Some(callback)).execute(Box::new(source)).is_err());
    }
}
