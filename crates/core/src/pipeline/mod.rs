pub mod analysis_executor;
pub mod analysis_logger;
pub mod analysis_session;
pub mod analyze_landmarks_use_case;
pub mod frame_analysis;
pub mod infrastructure;
pub mod survey_dataset_use_case;
