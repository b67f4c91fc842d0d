//! In-process implementation of the store traits.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use vestia_core::garment::{GarmentRecord, LabelUpdate, PersistedSeason, ProfileRecord};
use vestia_core::types::DbId;

use crate::store::{ProfileStore, StoreError, WardrobeStore, WriteReport};

/// Profiles and garments held in memory.
///
/// Garments are kept ordered by id so listings are deterministic.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    profiles: RwLock<HashMap<DbId, ProfileRecord>>,
    garments: RwLock<BTreeMap<DbId, GarmentRecord>>,
    label_writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_profile(&self, profile: ProfileRecord) {
        self.profiles.write().await.insert(profile.user_id, profile);
    }

    pub async fn insert_garment(&self, garment: GarmentRecord) {
        self.garments.write().await.insert(garment.id, garment);
    }

    pub async fn garment(&self, id: DbId) -> Option<GarmentRecord> {
        self.garments.read().await.get(&id).cloned()
    }

    pub async fn profile(&self, user_id: DbId) -> Option<ProfileRecord> {
        self.profiles.read().await.get(&user_id).cloned()
    }

    /// Number of `write_labels` calls served so far.
    pub fn label_writes(&self) -> usize {
        self.label_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get_profile(&self, user_id: DbId) -> Result<Option<ProfileRecord>, StoreError> {
        Ok(self.profile(user_id).await)
    }

    async fn update_season(&self, user_id: DbId, season: &PersistedSeason) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.entry(user_id).or_insert_with(|| ProfileRecord {
            user_id,
            season: None,
            updated_at: None,
        });
        profile.season = Some(season.clone());
        profile.updated_at = Some(Utc::now());
        Ok(())
    }
}

#[async_trait]
impl WardrobeStore for InMemoryStore {
    async fn list_garments(&self, user_id: DbId) -> Result<Vec<GarmentRecord>, StoreError> {
        Ok(self
            .garments
            .read()
            .await
            .values()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn write_labels(&self, updates: &[LabelUpdate]) -> Result<WriteReport, StoreError> {
        self.label_writes.fetch_add(1, Ordering::SeqCst);

        let mut garments = self.garments.write().await;
        let now = Utc::now();
        let mut report = WriteReport::default();
        for update in updates {
            match garments.get_mut(&update.garment_id) {
                Some(garment) => {
                    garment.chromatic_compatibility = Some(update.label);
                    garment.updated_at = Some(now);
                }
                None => report.failed.push((
                    update.garment_id,
                    StoreError::NotFound {
                        entity: "garment",
                        id: update.garment_id,
                    }
                    .to_string(),
                )),
            }
        }
        Ok(report)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use vestia_core::compatibility::CompatibilityLabel;

    use super::*;

    fn garment(id: DbId, user_id: DbId) -> GarmentRecord {
        GarmentRecord {
            id,
            user_id,
            name: format!("garment {id}"),
            dominant_colors: vec![],
            color_analysis: None,
            chromatic_compatibility: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn list_filters_by_user() {
        let store = InMemoryStore::new();
        store.insert_garment(garment(2, 1)).await;
        store.insert_garment(garment(1, 1)).await;
        store.insert_garment(garment(3, 9)).await;

        let ids: Vec<DbId> = store
            .list_garments(1)
            .await
            .unwrap()
            .iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn write_labels_reports_missing_garments() {
        let store = InMemoryStore::new();
        store.insert_garment(garment(1, 1)).await;

        let report = store
            .write_labels(&[
                LabelUpdate {
                    garment_id: 1,
                    label: CompatibilityLabel::Ideal,
                },
                LabelUpdate {
                    garment_id: 99,
                    label: CompatibilityLabel::Avoid,
                },
            ])
            .await
            .unwrap();

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, 99);
        let stored = store.garment(1).await.unwrap();
        assert_eq!(stored.chromatic_compatibility, Some(CompatibilityLabel::Ideal));
        assert!(stored.updated_at.is_some());
        assert_eq!(store.label_writes(), 1);
    }

    #[tokio::test]
    async fn update_season_creates_profile() {
        let store = InMemoryStore::new();
        let season = PersistedSeason {
            season_id: "winter-cool".into(),
            season_name: "Inverno Frio".into(),
            subtype: "frio".into(),
            recommended_colors: vec!["Marinho".into()],
            avoid_colors: vec![],
        };
        store.update_season(5, &season).await.unwrap();

        let profile = store.get_profile(5).await.unwrap().unwrap();
        assert_eq!(profile.season, Some(season));
    }
}
