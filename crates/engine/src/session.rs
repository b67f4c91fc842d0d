//! Per-user season resolution, preview, and promotion.
//!
//! A [`SeasonSession`] belongs to one active user session. It keeps the
//! preview override in memory next to the persisted profile season and
//! decides which one each evaluation uses. Only
//! [`promote_to_persisted`](SeasonSession::promote_to_persisted) writes the
//! preview to the store.

use std::sync::Arc;

use vestia_core::compatibility::CompatibilityLabel;
use vestia_core::garment::{classify_garment, GarmentRecord, LabelUpdate, PersistedSeason};
use vestia_core::season::SeasonPalette;
use vestia_core::season_preview::{PreviewState, SeasonPreview};
use vestia_core::types::DbId;
use vestia_core::wardrobe_stats::WardrobeStats;

use crate::catalog::{CatalogError, SeasonCatalog};
use crate::config::DEFAULT_RECOMPUTE_BATCH_SIZE;
use crate::recompute::{recompute_wardrobe, RecomputeSummary};
use crate::store::{ProfileStore, StoreError, WardrobeStore};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Why a promotion did not happen. The persisted season is untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromotionFailure {
    #[error("No season preview is active")]
    NoActivePreview,

    #[error("No user is identified for this session")]
    NoUser,

    #[error("Failed to save season: {0}")]
    Store(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionOutcome {
    /// Season saved and wardrobe labels recomputed.
    Promoted {
        season_id: String,
        summary: RecomputeSummary,
    },
    /// Season saved, but the wardrobe could not be listed for recomputation.
    /// [`SeasonSession::recompute_labels`] can be retried.
    RecomputeFailed { season_id: String, reason: String },
    Failed(PromotionFailure),
}

impl PromotionOutcome {
    /// `true` if the season was written to the profile.
    pub fn is_persisted(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

pub struct SeasonSession {
    user_id: Option<DbId>,
    preview: SeasonPreview,
    catalog: Arc<SeasonCatalog>,
    profiles: Arc<dyn ProfileStore>,
    wardrobe: Arc<dyn WardrobeStore>,
    batch_size: usize,
}

impl SeasonSession {
    pub fn new(
        user_id: Option<DbId>,
        catalog: Arc<SeasonCatalog>,
        profiles: Arc<dyn ProfileStore>,
        wardrobe: Arc<dyn WardrobeStore>,
    ) -> Self {
        Self {
            user_id,
            preview: SeasonPreview::new(),
            catalog,
            profiles,
            wardrobe,
            batch_size: DEFAULT_RECOMPUTE_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn user_id(&self) -> Option<DbId> {
        self.user_id
    }

    // -----------------------------------------------------------------------
    // Preview
    // -----------------------------------------------------------------------

    pub fn preview_state(&self) -> PreviewState {
        self.preview.state()
    }

    pub fn preview(&self) -> Option<&SeasonPalette> {
        self.preview.active()
    }

    /// Start or replace the preview.
    pub fn set_preview(&mut self, season: SeasonPalette) {
        tracing::debug!(user_id = ?self.user_id, season_id = %season.id, "Season preview set");
        self.preview.set(season);
    }

    /// Preview a catalog season by id. Returns `false` if the id is unknown
    /// or the catalog is not loaded yet.
    pub fn set_preview_by_id(&mut self, season_id: &str) -> bool {
        match self.catalog.by_id(season_id).cloned() {
            Some(season) => {
                self.set_preview(season);
                true
            }
            None => false,
        }
    }

    pub fn clear_preview(&mut self) {
        self.preview.clear();
    }

    /// The preview if one is active, otherwise `persisted`.
    pub fn effective_season<'a>(
        &'a self,
        persisted: Option<&'a SeasonPalette>,
    ) -> Option<&'a SeasonPalette> {
        self.preview.effective(persisted)
    }

    // -----------------------------------------------------------------------
    // Persisted season
    // -----------------------------------------------------------------------

    /// Resolve the profile's stored season id through the catalog.
    ///
    /// `None` when there is no user, no profile, no stored season, or the
    /// stored id is not in the catalog.
    pub async fn persisted_palette(&self) -> Result<Option<SeasonPalette>, SessionError> {
        let Some(user_id) = self.user_id else {
            return Ok(None);
        };
        let Some(season_id) = self
            .profiles
            .get_profile(user_id)
            .await
            .inspect_err(|e| tracing::error!(user_id, error = %e, "Failed to read profile"))?
            .and_then(|p| p.season)
            .map(|s| s.season_id)
        else {
            return Ok(None);
        };

        self.catalog.load().await?;
        let palette = self.catalog.by_id(&season_id).cloned();
        if palette.is_none() {
            tracing::warn!(user_id, season_id = %season_id, "Persisted season not in catalog");
        }
        Ok(palette)
    }

    /// Save the active preview to the profile and recompute every label.
    ///
    /// Never returns an error: failures come back as
    /// [`PromotionOutcome::Failed`] with the preview left in place.
    pub async fn promote_to_persisted(&mut self) -> PromotionOutcome {
        let Some(candidate) = self.preview.active().cloned() else {
            return PromotionOutcome::Failed(PromotionFailure::NoActivePreview);
        };
        let Some(user_id) = self.user_id else {
            return PromotionOutcome::Failed(PromotionFailure::NoUser);
        };

        let persisted = PersistedSeason::from_palette(&candidate);
        if let Err(e) = self.profiles.update_season(user_id, &persisted).await {
            tracing::error!(user_id, season_id = %candidate.id, error = %e, "Failed to persist season");
            return PromotionOutcome::Failed(PromotionFailure::Store(e.to_string()));
        }
        self.preview.clear();
        tracing::info!(user_id, season_id = %candidate.id, "Season preview promoted");

        match recompute_wardrobe(self.wardrobe.as_ref(), user_id, Some(&candidate), self.batch_size)
            .await
        {
            Ok(summary) => PromotionOutcome::Promoted {
                season_id: candidate.id,
                summary,
            },
            Err(e) => {
                tracing::error!(user_id, season_id = %candidate.id, error = %e, "Label recompute failed");
                PromotionOutcome::RecomputeFailed {
                    season_id: candidate.id,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Re-run label reconciliation against the persisted season.
    pub async fn recompute_labels(&self) -> Result<RecomputeSummary, SessionError> {
        let Some(user_id) = self.user_id else {
            return Ok(RecomputeSummary::default());
        };
        let persisted = self.persisted_palette().await?;
        Ok(recompute_wardrobe(self.wardrobe.as_ref(), user_id, persisted.as_ref(), self.batch_size).await?)
    }

    // -----------------------------------------------------------------------
    // Classification and stats
    // -----------------------------------------------------------------------

    /// Classify a newly uploaded garment against the persisted season and
    /// store the label.
    ///
    /// Without a user this is a no-op that returns `Unknown`.
    pub async fn classify_upload(
        &self,
        garment: &GarmentRecord,
    ) -> Result<CompatibilityLabel, SessionError> {
        if self.user_id.is_none() {
            return Ok(CompatibilityLabel::Unknown);
        }
        let persisted = self.persisted_palette().await?;
        let label = classify_garment(garment, persisted.as_ref());

        let report = self
            .wardrobe
            .write_labels(&[LabelUpdate {
                garment_id: garment.id,
                label,
            }])
            .await
            .inspect_err(|e| {
                tracing::error!(garment_id = garment.id, error = %e, "Failed to store upload label");
            })?;
        if let Some((_, reason)) = report.failed.into_iter().next() {
            tracing::error!(garment_id = garment.id, reason = %reason, "Upload label rejected");
            return Err(StoreError::Rejected(reason).into());
        }
        Ok(label)
    }

    /// Counts over the labels as stored.
    pub async fn wardrobe_stats(&self) -> Result<WardrobeStats, SessionError> {
        let Some(user_id) = self.user_id else {
            return Ok(WardrobeStats::default());
        };
        let garments = self.list_garments(user_id).await?;
        Ok(WardrobeStats::from_garments(&garments))
    }

    /// Counts as the user would see them under the effective season.
    ///
    /// Classifies in memory; nothing is written.
    pub async fn preview_stats(&self) -> Result<WardrobeStats, SessionError> {
        let Some(user_id) = self.user_id else {
            return Ok(WardrobeStats::default());
        };
        let persisted = if self.preview.is_active() {
            None
        } else {
            self.persisted_palette().await?
        };
        let season = self.effective_season(persisted.as_ref());
        let garments = self.list_garments(user_id).await?;
        Ok(WardrobeStats::aggregate(
            garments.iter().map(|g| Some(classify_garment(g, season))),
        ))
    }

    async fn list_garments(&self, user_id: DbId) -> Result<Vec<GarmentRecord>, StoreError> {
        self.wardrobe.list_garments(user_id).await.inspect_err(|e| {
            tracing::error!(user_id, error = %e, "Failed to list wardrobe");
        })
    }
}
