#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use vestia_core::color::Color;
use vestia_core::compatibility::DominantColor;
use vestia_core::garment::{GarmentRecord, LabelUpdate, PersistedSeason, ProfileRecord};
use vestia_core::season::{
    Chroma, Depth, MainSeason, SeasonCharacteristics, SeasonColors, SeasonPalette, SeasonRow,
    Temperature,
};
use vestia_core::types::DbId;
use vestia_engine::catalog_source::EMBEDDED_CATALOG_JSON;
use vestia_engine::{
    CatalogError, CatalogSource, InMemoryStore, ProfileStore, StoreError, WardrobeStore,
    WriteReport,
};

pub const USER_ID: DbId = 7;

// ---------------------------------------------------------------------------
// Palettes
// ---------------------------------------------------------------------------

/// Winter-cool with no avoid colors.
pub fn winter_cool() -> SeasonPalette {
    SeasonPalette {
        id: "winter-cool".into(),
        name: "Inverno Frio".into(),
        subtype: "frio".into(),
        main_season: MainSeason::Winter,
        characteristics: SeasonCharacteristics {
            temperature: Temperature::Cool,
            depth: Depth::Deep,
            chroma: Chroma::Clear,
        },
        colors: SeasonColors {
            primary: vec![
                Color::new("#000080", "Marinho"),
                Color::new("#000000", "Preto"),
                Color::new("#DE3163", "Vermelho cereja"),
            ],
            avoid: vec![],
        },
    }
}

pub fn spring_warm() -> SeasonPalette {
    SeasonPalette {
        id: "spring-warm".into(),
        name: "Primavera Quente".into(),
        subtype: "quente".into(),
        main_season: MainSeason::Spring,
        characteristics: SeasonCharacteristics {
            temperature: Temperature::Warm,
            depth: Depth::Medium,
            chroma: Chroma::Bright,
        },
        colors: SeasonColors {
            primary: vec![
                Color::new("#FFDAB9", "Pêssego"),
                Color::new("#FF7F50", "Coral"),
            ],
            avoid: vec![Color::new("#000080", "Marinho"), Color::new("#000000", "Preto")],
        },
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

pub fn garment(id: DbId, hex: &str, name: &str) -> GarmentRecord {
    GarmentRecord {
        id,
        user_id: USER_ID,
        name: format!("{name} {id}"),
        dominant_colors: vec![DominantColor::new(hex, name, 1.0)],
        color_analysis: None,
        chromatic_compatibility: None,
        updated_at: None,
    }
}

pub fn bare_garment(id: DbId) -> GarmentRecord {
    GarmentRecord {
        id,
        user_id: USER_ID,
        name: format!("sem cor {id}"),
        dominant_colors: vec![],
        color_analysis: None,
        chromatic_compatibility: None,
        updated_at: None,
    }
}

/// A store with a profile persisted on `season` and three garments:
/// navy (1), peach (2), and one without color data (3).
pub async fn seeded_store(season: Option<&SeasonPalette>) -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store
        .insert_profile(ProfileRecord {
            user_id: USER_ID,
            season: season.map(PersistedSeason::from_palette),
            updated_at: None,
        })
        .await;
    store.insert_garment(garment(1, "#000080", "Marinho")).await;
    store.insert_garment(garment(2, "#FFDAB9", "Pêssego")).await;
    store.insert_garment(bare_garment(3)).await;
    store
}

// ---------------------------------------------------------------------------
// Catalog sources
// ---------------------------------------------------------------------------

/// Serves the embedded rows after a delay, counting fetches.
#[derive(Default)]
pub struct CountingSource {
    pub fetches: Arc<AtomicUsize>,
}

#[async_trait]
impl CatalogSource for CountingSource {
    fn describe(&self) -> String {
        "counting".into()
    }

    async fn fetch(&self) -> Result<Vec<SeasonRow>, CatalogError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(serde_json::from_str(EMBEDDED_CATALOG_JSON)?)
    }
}

/// Fails the first `failures` fetches with malformed JSON, then succeeds.
pub struct FlakySource {
    pub failures: usize,
    pub fetches: AtomicUsize,
}

#[async_trait]
impl CatalogSource for FlakySource {
    fn describe(&self) -> String {
        "flaky".into()
    }

    async fn fetch(&self) -> Result<Vec<SeasonRow>, CatalogError> {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            Ok(serde_json::from_str("{")?)
        } else {
            Ok(serde_json::from_str(EMBEDDED_CATALOG_JSON)?)
        }
    }
}

// ---------------------------------------------------------------------------
// Failure-injecting stores
// ---------------------------------------------------------------------------

/// Profile store whose writes always fail.
pub struct ReadOnlyProfiles(pub Arc<InMemoryStore>);

#[async_trait]
impl ProfileStore for ReadOnlyProfiles {
    async fn get_profile(&self, user_id: DbId) -> Result<Option<ProfileRecord>, StoreError> {
        self.0.get_profile(user_id).await
    }

    async fn update_season(&self, _user_id: DbId, _season: &PersistedSeason) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("profile table locked".into()))
    }
}

/// Wardrobe store that rejects selected garments, and optionally whole
/// batches containing a selected garment.
pub struct FlakyWardrobe {
    pub inner: Arc<InMemoryStore>,
    pub reject_items: HashSet<DbId>,
    pub reject_batches_with: HashSet<DbId>,
    pub fail_listing: bool,
}

impl FlakyWardrobe {
    pub fn new(inner: Arc<InMemoryStore>) -> Self {
        Self {
            inner,
            reject_items: HashSet::new(),
            reject_batches_with: HashSet::new(),
            fail_listing: false,
        }
    }
}

#[async_trait]
impl WardrobeStore for FlakyWardrobe {
    async fn list_garments(&self, user_id: DbId) -> Result<Vec<GarmentRecord>, StoreError> {
        if self.fail_listing {
            return Err(StoreError::Unavailable("wardrobe offline".into()));
        }
        self.inner.list_garments(user_id).await
    }

    async fn write_labels(&self, updates: &[LabelUpdate]) -> Result<WriteReport, StoreError> {
        if updates
            .iter()
            .any(|u| self.reject_batches_with.contains(&u.garment_id))
        {
            return Err(StoreError::Unavailable("batch timed out".into()));
        }
        let (rejected, accepted): (Vec<LabelUpdate>, Vec<LabelUpdate>) = updates
            .iter()
            .copied()
            .partition(|u| self.reject_items.contains(&u.garment_id));

        let mut report = self.inner.write_labels(&accepted).await?;
        report.failed.extend(
            rejected
                .into_iter()
                .map(|u| (u.garment_id, "constraint violation".to_string())),
        );
        Ok(report)
    }
}
