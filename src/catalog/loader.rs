//! RON catalog loader
//!
//! Loads item definitions from an external RON file, with fallback to the
//! compiled-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{defaults, Catalog, CatalogError};
use crate::gear::ItemDef;

/// Default location of the external item file, relative to the working dir
pub const ITEMS_FILE: &str = "assets/data/items.ron";

/// Failures while exporting the built-in catalog to disk
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Load the catalog from `assets/data/items.ron` if present, otherwise use
/// the built-in item set. A file that fails to read, parse, or validate is
/// logged and skipped rather than aborting startup.
pub fn load_or_builtin() -> Result<Catalog, CatalogError> {
    if let Some(catalog) = load_from_file(Path::new(ITEMS_FILE)) {
        return Ok(catalog);
    }
    Catalog::builtin()
}

/// Try to load and validate a catalog from a RON file. Returns None (with a
/// warning logged) on any failure so callers can fall back.
pub fn load_from_file(path: &Path) -> Option<Catalog> {
    if !path.exists() {
        return None;
    }
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("failed to read {}: {}; using built-in catalog", path.display(), e);
            return None;
        }
    };
    let defs: Vec<ItemDef> = match ron::from_str(&content) {
        Ok(defs) => defs,
        Err(e) => {
            log::warn!("failed to parse {}: {}; using built-in catalog", path.display(), e);
            return None;
        }
    };
    match Catalog::new(defs) {
        Ok(catalog) => {
            log::info!("loaded {} items from {}", catalog.len(), path.display());
            Some(catalog)
        }
        Err(e) => {
            log::warn!("{} failed validation: {}; using built-in catalog", path.display(), e);
            None
        }
    }
}

/// Write the built-in item set to `<dir>/items.ron` for easy editing.
/// Returns the path written.
pub fn export_builtin(dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let items = defaults::builtin_items();
    let content = ron::ser::to_string_pretty(&items, ron::ser::PrettyConfig::default())?;
    let path = dir.join("items.ron");
    fs::write(&path, content)?;
    Ok(path)
}
