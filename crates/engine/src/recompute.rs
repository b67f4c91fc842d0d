//! Wardrobe-wide label reconciliation.
//!
//! Every garment is reclassified against the given season and its label
//! overwritten, in sequential batches. Labels are recomputed from scratch,
//! never patched, so an interrupted pass can simply be run again.

use serde::Serialize;
use vestia_core::garment::{classify_garment, LabelUpdate};
use vestia_core::season::SeasonPalette;
use vestia_core::types::DbId;

use crate::store::{StoreError, WardrobeStore};

/// A garment whose label could not be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecomputeFailure {
    pub garment_id: DbId,
    pub reason: String,
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecomputeSummary {
    pub total: usize,
    pub updated: usize,
    pub failed: Vec<RecomputeFailure>,
}

impl RecomputeSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Reclassify and rewrite every garment owned by `user_id`.
///
/// Only the initial listing can fail the whole pass. A rejected batch or
/// item is recorded in the summary and the pass moves on to the next batch.
pub async fn recompute_wardrobe(
    store: &dyn WardrobeStore,
    user_id: DbId,
    season: Option<&SeasonPalette>,
    batch_size: usize,
) -> Result<RecomputeSummary, StoreError> {
    let garments = store.list_garments(user_id).await?;
    let updates: Vec<LabelUpdate> = garments
        .iter()
        .map(|g| LabelUpdate {
            garment_id: g.id,
            label: classify_garment(g, season),
        })
        .collect();

    let mut summary = RecomputeSummary {
        total: updates.len(),
        ..Default::default()
    };

    for chunk in updates.chunks(batch_size.max(1)) {
        match store.write_labels(chunk).await {
            Ok(report) => {
                summary.updated += chunk.len().saturating_sub(report.failed.len());
                for (garment_id, reason) in report.failed {
                    tracing::warn!(user_id, garment_id, reason = %reason, "Label write failed");
                    summary.failed.push(RecomputeFailure { garment_id, reason });
                }
            }
            Err(e) => {
                tracing::warn!(
                    user_id,
                    batch_len = chunk.len(),
                    error = %e,
                    "Label batch write failed"
                );
                summary
                    .failed
                    .extend(chunk.iter().map(|u| RecomputeFailure {
                        garment_id: u.garment_id,
                        reason: e.to_string(),
                    }));
            }
        }
    }

    tracing::info!(
        user_id,
        season_id = season.map(|s| s.id.as_str()).unwrap_or("none"),
        total = summary.total,
        updated = summary.updated,
        failed = summary.failed.len(),
        "Wardrobe labels recomputed"
    );

    Ok(summary)
}
