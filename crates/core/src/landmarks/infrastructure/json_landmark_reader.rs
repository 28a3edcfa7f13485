//! Landmark streams recorded as JSON.
//!
//! A stream file is an array of frames, each either `null` (no face found)
//! or an array of `[x, y]` points indexed by mesh number. A single-face file
//! is one such point array.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::landmarks::domain::landmark_set::LandmarkSet;
use crate::landmarks::domain::landmark_source::{LandmarkFrame, LandmarkSource, SourceError};

#[derive(Error, Debug)]
pub enum LandmarkReadError {
    #[error("failed to read landmarks from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed landmark JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

type RawPoints = Vec<[f64; 2]>;

fn to_landmark_set(raw: RawPoints) -> LandmarkSet {
    LandmarkSet::new(raw.into_iter().map(|[x, y]| (x, y)).collect())
}

fn read_text(path: &Path) -> Result<String, LandmarkReadError> {
    fs::read_to_string(path).map_err(|source| LandmarkReadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a single face's landmarks from `path`.
pub fn read_landmark_file(path: &Path) -> Result<LandmarkSet, LandmarkReadError> {
    let text = read_text(path)?;
    let raw: RawPoints = serde_json::from_str(&text).map_err(|source| LandmarkReadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(to_landmark_set(raw))
}

/// Replays a recorded landmark stream as a [`LandmarkSource`].
pub struct JsonLandmarkReader {
    frames: Vec<LandmarkFrame>,
}

impl JsonLandmarkReader {
    pub fn open(path: &Path) -> Result<Self, LandmarkReadError> {
        let text = read_text(path)?;
        Self::parse(&text).map_err(|source| LandmarkReadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<Option<RawPoints>> = serde_json::from_str(json)?;
        let frames = raw.into_iter().map(|f| f.map(to_landmark_set)).collect();
        Ok(Self { frames })
    }

    pub fn from_frames(frames: Vec<LandmarkFrame>) -> Self {
        Self { frames }
    }
}

impl LandmarkSource for JsonLandmarkReader {
    fn frames(&mut self) -> Box<dyn Iterator<Item = Result<LandmarkFrame, SourceError>> + '_> {
        Box::new(self.frames.drain(..).map(Ok::<LandmarkFrame, SourceError>))
    }

    fn len_hint(&self) -> Option<usize> {
        Some(self.frames.len())
    }

    fn close(&mut self) {
        self.frames.clear();
    }
}
