//! Landmark stream file in, stable shape and eyewear ranking out.

use std::io::Write;

use rstest::rstest;

use faceshape_core::classification::domain::face_shape::FaceShape;
use faceshape_core::classification::domain::shape_stabilizer::Decision;
use faceshape_core::landmarks::domain::landmark_set::{
    LandmarkSet, CHEEK_LEFT, CHEEK_RIGHT, CHIN_BOTTOM, FOREHEAD_LEFT, FOREHEAD_RIGHT, HEAD_TOP,
    JAW_LEFT, JAW_RIGHT, NOSE_TIP,
};
use faceshape_core::landmarks::infrastructure::json_landmark_reader::JsonLandmarkReader;
use faceshape_core::pipeline::analysis_executor::AnalysisExecutor;
use faceshape_core::pipeline::analysis_logger::NullAnalysisLogger;
use faceshape_core::pipeline::analysis_session::AnalysisSession;
use faceshape_core::pipeline::analyze_landmarks_use_case::{AnalysisReport, AnalyzeLandmarksUseCase};
use faceshape_core::pipeline::frame_analysis::FrameStatus;
use faceshape_core::pipeline::infrastructure::sequential_analysis_executor::SequentialAnalysisExecutor;
use faceshape_core::pipeline::infrastructure::threaded_analysis_executor::ThreadedAnalysisExecutor;
use faceshape_core::recommendation::domain::recommendation_scorer::RecommendationScorer;

/// Frontal face with cheek width 100, so ratios are pixel lengths.
fn face(face_ratio: f64, jaw_ratio: f64, forehead_ratio: f64, chin_angle: f64) -> LandmarkSet {
    let half_jaw = jaw_ratio / 2.0;
    let jaw_y = face_ratio - half_jaw / (chin_angle / 2.0).to_radians().tan();
    let half_forehead = forehead_ratio / 2.0;
    let ear_y = face_ratio * 0.5;

    LandmarkSet::from_anchors(&[
        (HEAD_TOP, (50.0, 0.0)),
        (CHIN_BOTTOM, (50.0, face_ratio)),
        (CHEEK_LEFT, (0.0, ear_y)),
        (CHEEK_RIGHT, (100.0, ear_y)),
        (JAW_LEFT, (50.0 - half_jaw, jaw_y)),
        (JAW_RIGHT, (50.0 + half_jaw, jaw_y)),
        (FOREHEAD_LEFT, (50.0 - half_forehead, face_ratio * 0.2)),
        (FOREHEAD_RIGHT, (50.0 + half_forehead, face_ratio * 0.2)),
        (NOSE_TIP, (50.0, face_ratio * 0.55)),
    ])
}

fn turned(landmarks: &LandmarkSet) -> LandmarkSet {
    let mut points = landmarks.points().to_vec();
    points[NOSE_TIP] = (90.0, points[CHEEK_LEFT].1);
    LandmarkSet::new(points)
}

fn stream_json(frames: &[Option<LandmarkSet>]) -> String {
    let raw: Vec<Option<Vec<[f64; 2]>>> = frames
        .iter()
        .map(|f| f.as_ref().map(|lm| lm.points().iter().map(|&(x, y)| [x, y]).collect()))
        .collect();
    serde_json::to_string(&raw).unwrap()
}

fn analyze_file(frames: &[Option<LandmarkSet>], threaded: bool) -> AnalysisReport {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(stream_json(frames).as_bytes()).unwrap();

    let source = JsonLandmarkReader::open(file.path()).unwrap();
    let executor: Box<dyn AnalysisExecutor> = if threaded {
        Box::new(ThreadedAnalysisExecutor::new())
    } else {
        Box::new(SequentialAnalysisExecutor::new())
    };
    let mut use_case = AnalyzeLandmarksUseCase::new(
        executor,
        AnalysisSession::new(RecommendationScorer::default()),
        Box::new(NullAnalysisLogger),
        None,
    );
    use_case.execute(Box::new(source)).unwrap()
}

fn names(report: &AnalysisReport) -> Vec<String> {
    report
        .last_stable
        .as_ref()
        .map(|a| a.recommendations.iter().map(|s| s.name.clone()).collect())
        .unwrap_or_default()
}

#[rstest]
#[case::long_face(135.0, 90.0, 75.0, 95.0, FaceShape::Oblong, ["Aviator", "Wayfarer", "Square"])]
#[case::wide_jaw(125.0, 96.0, 75.0, 95.0, FaceShape::Oval, ["Rectangle", "Aviator", "Wayfarer"])]
#[case::sharp_chin_wide_forehead(125.0, 80.0, 75.0, 80.0, FaceShape::Heart, ["Clubmaster", "Wayfarer", "Aviator"])]
#[case::sharp_chin_narrow_forehead(125.0, 80.0, 60.0, 80.0, FaceShape::Diamond, ["Cat Eye", "Clubmaster", "Oval"])]
fn test_steady_face_settles(
    #[case] face_ratio: f64,
    #[case] jaw_ratio: f64,
    #[case] forehead_ratio: f64,
    #[case] chin_angle: f64,
    #[case] expected: FaceShape,
    #[case] top3: [&str; 3],
    #[values(false, true)] threaded: bool,
) {
    let frames: Vec<_> = (0..20)
        .map(|_| Some(face(face_ratio, jaw_ratio, forehead_ratio, chin_angle)))
        .collect();

    let report = analyze_file(&frames, threaded);

    assert_eq!(report.frames, 20);
    assert_eq!(report.final_decision, Decision::Stable(expected));
    let last = report.last_stable.as_ref().unwrap();
    assert_eq!(last.index, 19);
    assert_eq!(last.status, FrameStatus::Stable { shape: expected });
    assert_eq!(names(&report), top3);
}

#[test]
fn test_turned_head_restarts_the_window() {
    let steady = face(135.0, 90.0, 75.0, 95.0);
    let mut frames: Vec<_> = (0..14).map(|_| Some(steady.clone())).collect();
    frames.push(Some(turned(&steady)));
    frames.extend((0..14).map(|_| Some(steady.clone())));

    let report = analyze_file(&frames, false);

    assert_eq!(report.frames, 29);
    assert_eq!(report.final_decision, Decision::NotReady);
    assert!(report.last_stable.is_none());
}

#[test]
fn test_missing_faces_do_not_count_towards_the_window() {
    let steady = face(110.0, 90.0, 75.0, 95.0);
    let mut frames: Vec<Option<LandmarkSet>> = Vec::new();
    for _ in 0..15 {
        frames.push(Some(steady.clone()));
        frames.push(None);
    }

    let report = analyze_file(&frames, true);

    assert_eq!(report.final_decision, Decision::Stable(FaceShape::Square));
    assert_eq!(report.last_stable.as_ref().map(|a| a.index), Some(28));
}
