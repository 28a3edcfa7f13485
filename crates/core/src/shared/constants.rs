/// Raw shape labels kept for the majority vote (~0.5 s at 30 fps).
pub const STABILIZER_WINDOW: usize = 15;

/// Number of eyewear styles returned per recommendation.
pub const RECOMMENDATION_COUNT: usize = 3;

/// Max valid samples measured per shape folder during a dataset survey.
pub const SURVEY_SAMPLE_LIMIT: usize = 60;

pub const LANDMARK_EXTENSIONS: &[&str] = &["json"];
