use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog asset {}: {source}", .path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("catalog asset is not a valid catalog document: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
