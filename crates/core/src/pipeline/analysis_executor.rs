use crate::landmarks::domain::landmark_source::{LandmarkSource, SourceError};
use crate::pipeline::analysis_session::AnalysisSession;
use crate::pipeline::frame_analysis::FrameAnalysis;

/// Receives each frame's analysis in order. Return `false` to cancel.
pub type FrameSink<'a> = dyn FnMut(FrameAnalysis) -> bool + 'a;

/// Abstracts how the read → measure → stabilize → score loop is executed.
///
/// Implementations may measure frames anywhere, but must apply them to the
/// session in capture order from a single thread.
pub trait AnalysisExecutor: Send {
    fn execute(
        &self,
        source: Box<dyn LandmarkSource>,
        session: &mut AnalysisSession,
        on_frame: &mut FrameSink<'_>,
    ) -> Result<(), Box<dyn std::error::Error>>;
}

/// Drops the `Send + Sync` bounds for reporting on the calling thread.
pub(crate) fn local_error(e: SourceError) -> Box<dyn std::error::Error> {
    e
}
