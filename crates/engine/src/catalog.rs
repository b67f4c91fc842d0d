//! Process-wide season catalog service.
//!
//! [`SeasonCatalog`] loads season rows from a [`CatalogSource`] at most once
//! and caches the validated palettes for the life of the service. Concurrent
//! callers of [`SeasonCatalog::load`] before the first load completes all
//! await the same fetch. A failed load is not cached; the next call retries.
//!
//! The synchronous accessors read whatever is cached and return empty
//! results until [`SeasonCatalog::is_ready`] is `true`. Share the service as
//! `Arc<SeasonCatalog>`.

use std::sync::Arc;

use tokio::sync::OnceCell;
use vestia_core::error::CoreError;
use vestia_core::season::{build_palettes, Depth, MainSeason, SeasonPalette, Temperature};
use vestia_core::season_query::{self, PartialCharacteristics};

use crate::catalog_source::{CatalogSource, EmbeddedCatalog, FileCatalog};
use crate::config::EngineConfig;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read season catalog from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse season catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid season catalog: {0}")]
    Invalid(#[from] CoreError),
}

pub struct SeasonCatalog {
    source: Arc<dyn CatalogSource>,
    palettes: OnceCell<Vec<SeasonPalette>>,
}

impl SeasonCatalog {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            palettes: OnceCell::new(),
        }
    }

    /// Catalog backed by the rows compiled into the engine.
    pub fn embedded() -> Self {
        Self::new(EmbeddedCatalog)
    }

    /// Catalog backed by `SEASON_CATALOG_PATH` if set, else the embedded rows.
    pub fn from_config(config: &EngineConfig) -> Self {
        match &config.catalog_path {
            Some(path) => Self::new(FileCatalog::new(path.clone())),
            None => Self::embedded(),
        }
    }

    /// Load the catalog if needed. Alias for [`load`](Self::load) that
    /// discards the palettes.
    pub async fn init(&self) -> Result<(), CatalogError> {
        self.load().await.map(|_| ())
    }

    /// Load, validate, and cache the catalog, or return the cached palettes.
    pub async fn load(&self) -> Result<&[SeasonPalette], CatalogError> {
        self.palettes
            .get_or_try_init(|| self.fetch_and_build())
            .await
            .map(Vec::as_slice)
    }

    pub fn is_ready(&self) -> bool {
        self.palettes.initialized()
    }

    /// Cached palettes; empty before the first successful load.
    pub fn palettes(&self) -> &[SeasonPalette] {
        self.palettes.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn by_id(&self, id: &str) -> Option<&SeasonPalette> {
        season_query::by_id(self.palettes(), id)
    }

    pub fn by_main_season(&self, main: MainSeason) -> Vec<&SeasonPalette> {
        season_query::by_main_season(self.palettes(), main)
    }

    pub fn by_temperature(&self, temperature: Temperature) -> Vec<&SeasonPalette> {
        season_query::by_temperature(self.palettes(), temperature)
    }

    pub fn by_depth(&self, depth: Depth) -> Vec<&SeasonPalette> {
        season_query::by_depth(self.palettes(), depth)
    }

    pub fn find_closest(&self, partial: &PartialCharacteristics) -> Vec<&SeasonPalette> {
        season_query::find_closest(self.palettes(), partial)
    }

    async fn fetch_and_build(&self) -> Result<Vec<SeasonPalette>, CatalogError> {
        let source = self.source.describe();
        tracing::debug!(source = %source, "Loading season catalog");

        let rows = self.source.fetch().await.inspect_err(|e| {
            tracing::error!(source = %source, error = %e, "Season catalog fetch failed");
        })?;
        let row_count = rows.len();

        let build = build_palettes(rows).inspect_err(|e| {
            tracing::error!(source = %source, error = %e, "Season catalog rejected");
        })?;

        for missing in &build.unresolved {
            tracing::warn!(
                season_id = %missing.season_id,
                color_name = %missing.name,
                "Unknown color name in season catalog, using neutral gray"
            );
        }

        tracing::info!(source = %source, seasons = row_count, "Season catalog loaded");
        Ok(build.palettes)
    }
}

impl std::fmt::Debug for SeasonCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeasonCatalog")
            .field("source", &self.source.describe())
            .field("ready", &self.is_ready())
            .field("seasons", &self.palettes().len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
