//! Persistence collaborator interfaces.
//!
//! The engine never talks to a database directly. Profile and wardrobe
//! records are read and written through these traits; the host application
//! supplies the implementation.

use async_trait::async_trait;
use vestia_core::garment::{GarmentRecord, LabelUpdate, PersistedSeason, ProfileRecord};
use vestia_core::types::DbId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Write rejected: {0}")]
    Rejected(String),
}

/// Per-item outcome of a batched label write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Garments whose label could not be written, with the reason.
    pub failed: Vec<(DbId, String)>,
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: DbId) -> Result<Option<ProfileRecord>, StoreError>;

    /// Overwrite the persisted season on a profile.
    async fn update_season(&self, user_id: DbId, season: &PersistedSeason) -> Result<(), StoreError>;
}

#[async_trait]
pub trait WardrobeStore: Send + Sync {
    async fn list_garments(&self, user_id: DbId) -> Result<Vec<GarmentRecord>, StoreError>;

    /// Write labels for several garments in one round trip.
    ///
    /// An `Err` means nothing in the batch is known to have been written.
    /// Partial failures are reported per item in the [`WriteReport`].
    async fn write_labels(&self, updates: &[LabelUpdate]) -> Result<WriteReport, StoreError>;
}
