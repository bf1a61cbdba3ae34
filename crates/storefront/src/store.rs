//! Catalog store backed by a single JSON document on disk.
//!
//! The document is re-read and re-parsed on every load; there is no cache.
//! With a single process and no concurrent writer, responses are exactly as
//! fresh as the file on disk.

use std::path::PathBuf;

use full_stock_core::Catalog;
use thiserror::Error;

/// Errors loading the catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing file is missing or unreadable.
    #[error("failed to read catalog document: {0}")]
    Storage(#[from] std::io::Error),

    /// The file content is not a well-formed catalog document.
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only access to the catalog document.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a store for the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load and parse the catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Storage`] when the file cannot be read and
    /// [`CatalogError::Parse`] when its content is not a valid catalog.
    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::Path;

    fn shipped_catalog_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/data.json")
    }

    #[tokio::test]
    async fn test_load_shipped_catalog() {
        let store = CatalogStore::new(shipped_catalog_path());
        let catalog = store.load().await.unwrap();
        assert!(!catalog.categories.is_empty());
        assert!(!catalog.products.is_empty());
        // Every product must price in non-negative cents.
        assert!(catalog.products.iter().all(|product| product.price >= 0));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_storage_error() {
        let store = CatalogStore::new("data/no-such-file.json");
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Storage(_)));
    }

    #[tokio::test]
    async fn test_load_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join("full-stock-malformed-catalog.json");
        std::fs::write(&path, "{ this is not json").unwrap();
        let store = CatalogStore::new(&path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
