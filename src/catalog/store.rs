//! JSON snapshot of the last successfully loaded catalog

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::error::StoreError;
use crate::catalog::list::VersionCatalog;

pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `catalog` to the snapshot file, creating parent directories
    pub fn save(&self, catalog: &VersionCatalog) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(catalog)?;
        std::fs::write(&self.path, json)?;
        info!("Saved {} versions to {:?}", catalog.len(), self.path);
        Ok(())
    }

    /// Read the snapshot file. Returns None if no snapshot was saved yet.
    pub fn load(&self) -> Result<Option<VersionCatalog>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No snapshot at {:?}", self.path);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }
}
