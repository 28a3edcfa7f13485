use crate::landmarks::domain::landmark_set::LandmarkSet;

/// Error type crossing thread boundaries in the analysis pipeline.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// One detector result: `None` when no face was found in the frame.
pub type LandmarkFrame = Option<LandmarkSet>;

/// Supplies per-frame landmarks from an external face landmark detector.
///
/// The detector is owned by whoever drives the pipeline and passed in
/// explicitly; implementations may be stateful, hence `&mut self`.
pub trait LandmarkSource: Send {
    /// Returns an iterator over frames in capture order.
    fn frames(&mut self) -> Box<dyn Iterator<Item = Result<LandmarkFrame, SourceError>> + '_>;

    /// Total frame count, when known up front.
    fn len_hint(&self) -> Option<usize> {
        None
    }

    /// Releases any resources held by the source.
    fn close(&mut self) {}
}
