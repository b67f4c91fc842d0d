//! Garment and profile records exchanged with the persistence collaborator.

use serde::{Deserialize, Serialize};

use crate::compatibility::{
    classify, classify_with_analysis, CompatibilityLabel, DominantColor, GarmentColorAnalysis,
};
use crate::season::SeasonPalette;
use crate::types::{DbId, Timestamp};

/// A wardrobe item as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentRecord {
    pub id: DbId,
    pub user_id: DbId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dominant_colors: Vec<DominantColor>,
    #[serde(default)]
    pub color_analysis: Option<GarmentColorAnalysis>,
    /// `None` until the garment has been classified at least once.
    #[serde(default)]
    pub chromatic_compatibility: Option<CompatibilityLabel>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

/// Classify a stored garment.
///
/// Uses the full analysis when one is attached, otherwise the bare
/// dominant colors.
pub fn classify_garment(garment: &GarmentRecord, season: Option<&SeasonPalette>) -> CompatibilityLabel {
    match &garment.color_analysis {
        Some(analysis) if !analysis.dominant_colors.is_empty() => {
            classify_with_analysis(analysis, season)
        }
        _ => classify(&garment.dominant_colors, season),
    }
}

/// A single label to write back onto a garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelUpdate {
    pub garment_id: DbId,
    pub label: CompatibilityLabel,
}

/// The season as persisted on a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSeason {
    pub season_id: String,
    pub season_name: String,
    pub subtype: String,
    pub recommended_colors: Vec<String>,
    pub avoid_colors: Vec<String>,
}

impl PersistedSeason {
    /// Project a palette onto the profile representation.
    pub fn from_palette(palette: &SeasonPalette) -> Self {
        Self {
            season_id: palette.id.clone(),
            season_name: palette.name.clone(),
            subtype: palette.subtype.clone(),
            recommended_colors: palette.colors.primary.iter().map(|c| c.name.clone()).collect(),
            avoid_colors: palette.colors.avoid.iter().map(|c| c.name.clone()).collect(),
        }
    }
}

/// A user profile as far as color seasons are concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: DbId,
    pub season: Option<PersistedSeason>,
    pub updated_at: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
