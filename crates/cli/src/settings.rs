use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use faceshape_core::shared::constants::SURVEY_SAMPLE_LIMIT;

/// Persistent CLI defaults, overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Eyewear catalog JSON; the built-in catalog when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default = "default_sample_limit")]
    pub survey_sample_limit: usize,
    #[serde(default = "default_progress_every")]
    pub progress_every: usize,
    #[serde(default)]
    pub threaded: bool,
}

fn default_sample_limit() -> usize {
    SURVEY_SAMPLE_LIMIT
}

fn default_progress_every() -> usize {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: None,
            survey_sample_limit: default_sample_limit(),
            progress_every: default_progress_every(),
            threaded: false,
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("FaceShape").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|json| Self::parse(&json))
            .unwrap_or_default()
    }

    /// Parses settings JSON, falling back to defaults when malformed.
    pub fn parse(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed settings: {e}");
            Self::default()
        })
    }
}
