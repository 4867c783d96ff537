use std::path::{Path, PathBuf};

use super::constants;
use super::error::{CatalogError, CatalogResult};

/// Where the raw catalog document comes from. Reading may block, so callers
/// run it off the async executor.
pub trait CatalogSource: Send + Sync {
    fn read(&self) -> CatalogResult<String>;

    fn describe(&self) -> String;
}

/// The asset compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct BundledCatalog {
    contents: &'static str,
}

impl BundledCatalog {

    #[must_use]
    pub const fn new() -> Self {
        Self { contents: constants::BUNDLED_CATALOG }
    }

    #[must_use]
    pub const fn from_static(contents: &'static str) -> Self {
        Self { contents }
    }

}

impl Default for BundledCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for BundledCatalog {
    fn read(&self) -> CatalogResult<String> {
        Ok(self.contents.to_string())
    }

    fn describe(&self) -> String {
        format!("bundled:{}", constants::BUNDLED_CATALOG_PATH)
    }
}

#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

}

impl CatalogSource for FileCatalog {
    fn read(&self) -> CatalogResult<String> {
        std::fs::read_to_string(&self.path).map_err(|source| CatalogError::AssetRead {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
