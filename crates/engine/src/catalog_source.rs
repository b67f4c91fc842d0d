//! Where season catalog rows come from.
//!
//! [`CatalogSource`] is the seam between the [`SeasonCatalog`](crate::catalog::SeasonCatalog)
//! service and the raw data. Two sources ship with the engine: the catalog
//! compiled into the binary and a JSON file on disk.

use std::path::PathBuf;

use async_trait::async_trait;
use vestia_core::season::SeasonRow;

use crate::catalog::CatalogError;

/// Season data bundled with the engine.
pub const EMBEDDED_CATALOG_JSON: &str = include_str!("../data/seasons.json");

/// A provider of raw season rows.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short label for log lines, e.g. the file path.
    fn describe(&self) -> String;

    /// Fetch every row. Called at most once per successful catalog load.
    async fn fetch(&self) -> Result<Vec<SeasonRow>, CatalogError>;
}

/// Rows compiled into the binary from `data/seasons.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

#[async_trait]
impl CatalogSource for EmbeddedCatalog {
    fn describe(&self) -> String {
        "embedded".to_string()
    }

    async fn fetch(&self) -> Result<Vec<SeasonRow>, CatalogError> {
        Ok(serde_json::from_str(EMBEDDED_CATALOG_JSON)?)
    }
}

/// Rows read from a JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<SeasonRow>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.describe(),
                source,
            })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn embedded_rows_parse() {
        let rows = EmbeddedCatalog.fetch().await.unwrap();
        assert_eq!(rows.len(), 12);
    }

    #[tokio::test]
    async fn file_source_reads_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EMBEDDED_CATALOG_JSON.as_bytes()).unwrap();

        let rows = FileCatalog::new(file.path()).fetch().await.unwrap();
        assert_eq!(rows.len(), 12);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = FileCatalog::new("/definitely/not/here/seasons.json");
        assert_matches!(source.fetch().await, Err(CatalogError::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"id\": ").unwrap();

        let source = FileCatalog::new(file.path());
        assert_matches!(source.fetch().await, Err(CatalogError::Parse(_)));
    }
}
