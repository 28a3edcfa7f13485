use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in style identifiers. Ids are stable keys, not positions.
pub mod style_id {
    pub const RECTANGLE: u32 = 0;
    pub const SQUARE: u32 = 1;
    pub const OVAL: u32 = 2;
    pub const ROUND: u32 = 3;
    pub const AVIATOR: u32 = 4;
    pub const CAT_EYE: u32 = 5;
    pub const CLUBMASTER: u32 = 7;
    pub const WAYFARER: u32 = 9;
    pub const RIMLESS: u32 = 12;
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("eyewear catalog is empty")]
    Empty,
    #[error("duplicate eyewear style id {0}")]
    DuplicateId(u32),
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EyewearStyle {
    pub id: u32,
    pub name: String,
    /// Key of the style's artwork, resolved by the presentation layer.
    pub asset: String,
}

impl EyewearStyle {
    pub fn new(id: u32, name: &str, asset: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            asset: asset.to_string(),
        }
    }
}

/// Fixed set of recommendable styles, in insertion order.
///
/// Insertion order is significant: it breaks ties between equal scores.
#[derive(Clone, Debug, PartialEq)]
pub struct EyewearCatalog {
    styles: Vec<EyewearStyle>,
}

impl EyewearCatalog {
    pub fn new(styles: Vec<EyewearStyle>) -> Result<Self, CatalogError> {
        if styles.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for style in &styles {
            if !seen.insert(style.id) {
                return Err(CatalogError::DuplicateId(style.id));
            }
        }
        Ok(Self { styles })
    }

    pub fn styles(&self) -> &[EyewearStyle] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&EyewearStyle> {
        self.styles.iter().find(|s| s.id == id)
    }
}

impl Default for EyewearCatalog {
    fn default() -> Self {
        use style_id::*;
        Self {
            styles: vec![
                EyewearStyle::new(RECTANGLE, "Rectangle", "rectangle"),
                EyewearStyle::new(SQUARE, "Square", "square"),
                EyewearStyle::new(OVAL, "Oval", "oval"),
                EyewearStyle::new(ROUND, "Round", "round"),
                EyewearStyle::new(AVIATOR, "Aviator", "aviator"),
                EyewearStyle::new(CAT_EYE, "Cat Eye", "cateye"),
                EyewearStyle::new(CLUBMASTER, "Clubmaster", "clubmaster"),
                EyewearStyle::new(WAYFARER, "Wayfarer", "wayfarer"),
                EyewearStyle::new(RIMLESS, "Rimless", "rimless"),
            ],
        }
    }
}
