use std::collections::HashMap;
use std::time::Instant;

use crate::classification::domain::face_shape::FaceShape;
use crate::pipeline::frame_analysis::FrameAnalysis;

/// Cross-cutting logger for analysis run events.
///
/// Decouples the use case from output mechanisms so callers can observe
/// a run without changing the orchestration code.
pub trait AnalysisLogger: Send {
    /// Report frame-level progress. `total` is `None` for live sources.
    fn progress(&mut self, current: usize, total: Option<usize>);

    /// Record the outcome of one frame.
    fn frame(&mut self, analysis: &FrameAnalysis);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullAnalysisLogger;

impl AnalysisLogger for NullAnalysisLogger {
    fn progress(&mut self, _current: usize, _total: Option<usize>) {}
    fn frame(&mut self, _analysis: &FrameAnalysis) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that tallies frame outcomes and reports a summary.
///
/// Progress output is throttled to every `throttle_frames` frames.
pub struct StdoutAnalysisLogger {
    throttle_frames: usize,
    status_counts: HashMap<&'static str, usize>,
    shape_changes: Vec<(usize, FaceShape)>,
    start_time: Instant,
    total_frames: usize,
}

impl StdoutAnalysisLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
            status_counts: HashMap::new(),
            shape_changes: Vec::new(),
            start_time: Instant::now(),
            total_frames: 0,
        }
    }

    /// Returns the formatted summary string, or `None` if no frames recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.status_counts.is_empty() {
            return None;
        }

        let elapsed_s = self.start_time.elapsed().as_secs_f64();
        let frames: usize = self.status_counts.values().sum();
        let mut lines = Vec::new();

        lines.push(format!(
            "Analysis summary ({frames} frames, {elapsed_s:.2}s total):"
        ));

        let mut statuses: Vec<_> = self.status_counts.iter().collect();
        statuses.sort();
        for (status, count) in statuses {
            let pct = *count as f64 / frames as f64 * 100.0;
            lines.push(format!("  {status:16}: {count:6}  ({pct:4.1}%)"));
        }

        if self.total_frames > frames {
            lines.push(format!(
                "  Not analyzed: {} frames",
                self.total_frames - frames
            ));
        }

        for (index, shape) in &self.shape_changes {
            lines.push(format!("  Settled on {shape} at frame {index}"));
        }

        if elapsed_s > 0.0 {
            let fps = frames as f64 / elapsed_s;
            lines.push(format!("  Throughput: {fps:.1} fps"));
        }

        Some(lines.join("\n"))
    }
}

impl Default for StdoutAnalysisLogger {
    fn default() -> Self {
        Self::new(30)
    }
}

impl AnalysisLogger for StdoutAnalysisLogger {
    fn progress(&mut self, current: usize, total: Option<usize>) {
        self.total_frames = total.unwrap_or(current);
        if current % self.throttle_frames != 0 && Some(current) != total {
            return;
        }
        match total {
            Some(total) if total > 0 => {
                let pct = current as f64 / total as f64 * 100.0;
                log::info!("Analyzing: {current}/{total} frames ({pct:.1}%)");
            }
            _ => log::info!("Analyzing: {current} frames"),
        }
    }

    fn frame(&mut self, analysis: &FrameAnalysis) {
        *self.status_counts.entry(analysis.status.label()).or_default() += 1;

        if let Some(shape) = analysis.stable_shape() {
            let changed = self.shape_changes.last().map(|(_, s)| *s) != Some(shape);
            if changed {
                self.shape_changes.push((analysis.index, shape));
            }
        }
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::frame_analysis::FrameStatus;

    fn analysis(index: usize, status: FrameStatus) -> FrameAnalysis {
        FrameAnalysis {
            index,
            status,
            raw_shape: None,
            features: None,
            recommendations: Vec::new(),
        }
    }

    fn stable(index: usize, shape: FaceShape) -> FrameAnalysis {
        analysis(index, FrameStatus::Stable { shape })
    }

    // --- NullAnalysisLogger tests ---

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullAnalysisLogger;
        logger.progress(1, Some(10));
        logger.frame(&analysis(0, FrameStatus::NoFace));
        logger.info("hello");
        logger.summary();
    }

    // --- StdoutAnalysisLogger tests ---

    #[test]
    fn test_counts_statuses() {
        let mut logger = StdoutAnalysisLogger::new(10);
        logger.frame(&analysis(0, FrameStatus::NoFace));
        logger.frame(&analysis(1, FrameStatus::NotFrontal));
        logger.frame(&analysis(2, FrameStatus::NotFrontal));
        logger.frame(&analysis(3, FrameStatus::Analyzing { progress: 0.1 }));

        assert_eq!(logger.status_counts.get("no_face").copied(), Some(1));
        assert_eq!(logger.status_counts.get("not_frontal").copied(), Some(2));
        assert_eq!(logger.status_counts.get("analyzing").copied(), Some(1));
        assert_eq!(logger.status_counts.get("stable").copied(), None);
    }

    #[test]
    fn test_tracks_shape_changes_only() {
        let mut logger = StdoutAnalysisLogger::new(10);
        logger.frame(&stable(14, FaceShape::Oval));
        logger.frame(&stable(15, FaceShape::Oval));
        logger.frame(&stable(16, FaceShape::Heart));
        logger.frame(&analysis(17, FrameStatus::NotFrontal));
        logger.frame(&stable(40, FaceShape::Heart));

        assert_eq!(
            logger.shape_changes,
            vec![(14, FaceShape::Oval), (16, FaceShape::Heart)]
        );
    }

    #[test]
    fn test_summary_includes_counts_and_shapes() {
        let mut logger = StdoutAnalysisLogger::new(10);
        logger.frame(&analysis(0, FrameStatus::InvalidGeometry));
        logger.frame(&stable(1, FaceShape::Diamond));

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Analysis summary (2 frames"));
        assert!(summary.contains("invalid_geometry"));
        assert!(summary.contains("Settled on Diamond at frame 1"));
    }

    #[test]
    fn test_summary_reports_unanalyzed_frames() {
        let mut logger = StdoutAnalysisLogger::new(10);
        logger.progress(1, Some(5));
        logger.frame(&analysis(0, FrameStatus::NoFace));

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Not analyzed: 4 frames"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = StdoutAnalysisLogger::new(10);
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_progress_tracks_total() {
        let mut logger = StdoutAnalysisLogger::new(10);
        for i in 1..=20 {
            logger.progress(i, Some(20));
        }
        assert_eq!(logger.total_frames, 20);

        logger.progress(7, None);
        assert_eq!(logger.total_frames, 7);
    }

    #[test]
    fn test_default_throttle() {
        assert_eq!(StdoutAnalysisLogger::default().throttle_frames, 30);
    }
}
