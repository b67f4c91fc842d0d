//! `vestia-worker` -- loads the season catalog and, optionally, reclassifies
//! a wardrobe snapshot offline.
//!
//! # Environment variables
//!
//! | Variable                 | Required | Default  | Description                              |
//! |--------------------------|----------|----------|------------------------------------------|
//! | `SEASON_CATALOG_PATH`    | no       | embedded | JSON file with season rows               |
//! | `RECOMPUTE_BATCH_SIZE`   | no       | `50`     | Garments per label write                 |
//! | `WARDROBE_SNAPSHOT_PATH` | no       | --       | JSON array of garments to reclassify     |
//! | `SEASON_ID`              | no       | --       | Catalog season to classify the snapshot against |

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vestia_core::garment::GarmentRecord;
use vestia_core::season::{MainSeason, SeasonPalette};
use vestia_core::wardrobe_stats::WardrobeStats;
use vestia_engine::{recompute_wardrobe, EngineConfig, InMemoryStore, SeasonCatalog, WardrobeStore};

const MAIN_SEASONS: [MainSeason; 4] = [
    MainSeason::Spring,
    MainSeason::Summer,
    MainSeason::Autumn,
    MainSeason::Winter,
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vestia_worker=debug,vestia_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env();
    tracing::info!(
        catalog_path = ?config.catalog_path,
        batch_size = config.recompute_batch_size,
        "Starting vestia-worker",
    );

    let catalog = SeasonCatalog::from_config(&config);
    let palettes = catalog.load().await.context("season catalog failed to load")?;
    tracing::info!(seasons = palettes.len(), "Season catalog ready");
    for main in MAIN_SEASONS {
        tracing::debug!(main_season = ?main, count = catalog.by_main_season(main).len());
    }

    let snapshot = std::env::var("WARDROBE_SNAPSHOT_PATH").ok();
    let season_id = std::env::var("SEASON_ID").ok();
    let (Some(snapshot), Some(season_id)) = (snapshot, season_id) else {
        tracing::info!("No wardrobe snapshot configured, nothing to reclassify");
        return Ok(());
    };

    let season = catalog
        .by_id(season_id.trim())
        .with_context(|| format!("season '{season_id}' is not in the catalog"))?;
    reclassify_snapshot(Path::new(&snapshot), season, config.recompute_batch_size).await
}

/// Load garments from `path`, recompute their labels against `season`, and
/// log the resulting stats per user.
async fn reclassify_snapshot(
    path: &Path,
    season: &SeasonPalette,
    batch_size: usize,
) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let garments: Vec<GarmentRecord> =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))?;

    let users: BTreeSet<_> = garments.iter().map(|g| g.user_id).collect();
    let store = InMemoryStore::new();
    for garment in garments {
        store.insert_garment(garment).await;
    }

    for user_id in users {
        let summary = recompute_wardrobe(&store, user_id, Some(season), batch_size).await?;
        for failure in &summary.failed {
            tracing::warn!(user_id, garment_id = failure.garment_id, reason = %failure.reason, "Label not written");
        }

        let stats = WardrobeStats::from_garments(&store.list_garments(user_id).await?);
        tracing::info!(
            user_id,
            season_id = %season.id,
            ideal = stats.ideal,
            neutral = stats.neutral,
            avoid = stats.avoid,
            unknown = stats.unknown,
            ideal_ratio = stats.ideal_ratio(),
            "Wardrobe reclassified",
        );
    }
    Ok(())
}
