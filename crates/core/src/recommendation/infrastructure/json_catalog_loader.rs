//! Loads an eyewear catalog from JSON:
//! `[{"id": 0, "name": "Rectangle", "asset": "rectangle"}, ...]`.

use std::fs;
use std::path::Path;

use crate::recommendation::domain::eyewear_catalog::{CatalogError, EyewearCatalog, EyewearStyle};

pub fn load(path: &Path) -> Result<EyewearCatalog, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let styles: Vec<EyewearStyle> =
        serde_json::from_str(&json).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let catalog = EyewearCatalog::new(styles)?;
    log::info!("Loaded {} eyewear styles from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Resolves the catalog: the file at `path` when given, else the built-in one.
pub fn load_or_default(path: Option<&Path>) -> Result<EyewearCatalog, CatalogError> {
    match path {
        Some(p) => load(p),
        None => Ok(EyewearCatalog::default()),
    }
}
