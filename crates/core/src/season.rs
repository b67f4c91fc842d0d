//! Color-season definitions and catalog row validation.
//!
//! A catalog is shipped as a list of [`SeasonRow`]s. [`build_palettes`]
//! resolves name-only colors through the normalizer and rejects the whole
//! catalog on the first malformed row, since a bad palette would skew every
//! classification made against it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::color::{is_known_color_name, normalize, validate_hex, Color, ColorInput};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// The four top-level seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MainSeason {
    Spring,
    Summer,
    Autumn,
    Winter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Temperature {
    Warm,
    Cool,
    NeutralWarm,
    NeutralCool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Depth {
    Light,
    Medium,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chroma {
    Bright,
    Muted,
    Clear,
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonCharacteristics {
    pub temperature: Temperature,
    pub depth: Depth,
    pub chroma: Chroma,
}

/// Recommended and avoid color sets. Never overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonColors {
    pub primary: Vec<Color>,
    pub avoid: Vec<Color>,
}

/// A validated season palette. `id` is the key stored on user profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonPalette {
    pub id: String,
    pub name: String,
    pub subtype: String,
    pub main_season: MainSeason,
    pub characteristics: SeasonCharacteristics,
    pub colors: SeasonColors,
}

// ---------------------------------------------------------------------------
// Raw catalog rows
// ---------------------------------------------------------------------------

/// Color sets as they appear in catalog data, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SeasonRowColors {
    #[validate(length(min = 1, message = "primary colors must not be empty"))]
    pub primary: Vec<ColorInput>,
    #[serde(default)]
    pub avoid: Vec<ColorInput>,
}

/// One catalog entry as shipped.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SeasonRow {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "subtype must not be empty"))]
    pub subtype: String,
    pub main_season: MainSeason,
    pub characteristics: SeasonCharacteristics,
    #[validate(nested)]
    pub colors: SeasonRowColors,
}

/// A color name in catalog data that missed the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedColorName {
    pub season_id: String,
    pub name: String,
}

/// Result of [`build_palettes`].
#[derive(Debug, Clone)]
pub struct CatalogBuild {
    pub palettes: Vec<SeasonPalette>,
    /// Name-only entries that fell back to the gray sentinel.
    pub unresolved: Vec<UnresolvedColorName>,
}

impl SeasonRow {
    /// Normalize and validate a single row.
    pub fn into_palette(self) -> Result<(SeasonPalette, Vec<UnresolvedColorName>), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(format!("Season '{}': {e}", self.id)))?;

        let mut unresolved = Vec::new();
        let primary = resolve_set(&self.id, self.colors.primary, &mut unresolved)?;
        let avoid = resolve_set(&self.id, self.colors.avoid, &mut unresolved)?;
        validate_disjoint(&self.id, &primary, &avoid)?;

        let palette = SeasonPalette {
            id: self.id,
            name: self.name,
            subtype: self.subtype,
            main_season: self.main_season,
            characteristics: self.characteristics,
            colors: SeasonColors { primary, avoid },
        };
        Ok((palette, unresolved))
    }
}

/// Convert catalog rows into palettes, failing on the first invalid row.
///
/// Checks, in order per row: required fields, hex well-formedness after
/// normalization, primary/avoid disjointness. Across rows: `id` uniqueness.
pub fn build_palettes(rows: Vec<SeasonRow>) -> Result<CatalogBuild, CoreError> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut palettes = Vec::with_capacity(rows.len());
    let mut unresolved = Vec::new();

    for row in rows {
        if !seen.insert(row.id.clone()) {
            return Err(CoreError::DuplicateSeason(row.id));
        }
        let (palette, mut missing) = row.into_palette()?;
        unresolved.append(&mut missing);
        palettes.push(palette);
    }

    Ok(CatalogBuild {
        palettes,
        unresolved,
    })
}

fn resolve_set(
    season_id: &str,
    inputs: Vec<ColorInput>,
    unresolved: &mut Vec<UnresolvedColorName>,
) -> Result<Vec<Color>, CoreError> {
    inputs
        .into_iter()
        .map(|input| {
            if let ColorInput::Named(name) = &input {
                if !is_known_color_name(name) {
                    unresolved.push(UnresolvedColorName {
                        season_id: season_id.to_string(),
                        name: name.clone(),
                    });
                }
            }
            let color = normalize(input);
            validate_hex(&color.hex)
                .map_err(|e| CoreError::Validation(format!("Season '{season_id}': {e}")))?;
            Ok(color)
        })
        .collect()
}

fn validate_disjoint(season_id: &str, primary: &[Color], avoid: &[Color]) -> Result<(), CoreError> {
    let primary_hexes: HashSet<String> = primary.iter().map(|c| c.hex.to_uppercase()).collect();
    if let Some(clash) = avoid
        .iter()
        .find(|c| primary_hexes.contains(&c.hex.to_uppercase()))
    {
        return Err(CoreError::Validation(format!(
            "Season '{season_id}': color {} ('{}') is both primary and avoid",
            clash.hex, clash.name
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
