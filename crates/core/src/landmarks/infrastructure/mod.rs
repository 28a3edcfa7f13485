pub mod json_landmark_reader;
