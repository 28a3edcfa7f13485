pub mod sequential_analysis_executor;
pub mod threaded_analysis_executor;
