use crate::landmarks::domain::landmark_source::LandmarkSource;
use crate::pipeline::analysis_executor::{local_error, AnalysisExecutor, FrameSink};
use crate::pipeline::analysis_session::AnalysisSession;

/// Runs every stage on the calling thread, one frame at a time.
#[derive(Default)]
pub struct SequentialAnalysisExecutor;

impl SequentialAnalysisExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl AnalysisExecutor for SequentialAnalysisExecutor {
    fn execute(
        &self,
        mut source: Box<dyn LandmarkSource>,
        session: &mut AnalysisSession,
        on_frame: &mut FrameSink<'_>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let result = run(source.as_mut(), session, on_frame);
        source.close();
        result
    }
}

fn run(
    source: &mut dyn LandmarkSource,
    session: &mut AnalysisSession,
    on_frame: &mut FrameSink<'_>,
) -> Result<(), Box<dyn std::error::Error>> {
    for (index, frame) in source.frames().enumerate() {
        let landmarks = frame.map_err(local_error)?;
        let analysis = session.process(index, landmarks.as_ref());
        if !on_frame(analysis) {
            return Err("Cancelled".into());
        }
    }
    Ok(())
}
