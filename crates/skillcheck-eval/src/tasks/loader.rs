//! Catalog loading from YAML/JSON files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::Catalog;

/// Loader for activation catalogs stored on disk
pub struct CaseLoader {
    path: PathBuf,
}

impl CaseLoader {
    /// Create a loader for the given catalog file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load and validate the catalog
    pub fn load(&self) -> Result<Catalog> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog file: {:?}", self.path))?;

        let catalog = match self.path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Catalog::from_yaml(&content)
                .with_context(|| format!("Failed to parse YAML catalog: {:?}", self.path))?,
            Some("json") => Catalog::from_json(&content)
                .with_context(|| format!("Failed to parse JSON catalog: {:?}", self.path))?,
            _ => bail!(
                "Unsupported catalog format: {:?} (expected .yaml, .yml or .json)",
                self.path
            ),
        };

        tracing::debug!("Loaded {} case(s) from {:?}", catalog.len(), self.path);
        Ok(catalog)
    }
}
