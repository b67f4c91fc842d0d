//! Lookups over a loaded season catalog.
//!
//! All functions take the palette slice explicitly; an empty slice yields
//! empty results, which callers treat as "catalog not loaded yet".

use serde::{Deserialize, Serialize};

use crate::season::{Chroma, Depth, MainSeason, SeasonCharacteristics, SeasonPalette, Temperature};

/// Minimum number of matching traits for [`find_closest`].
///
/// One shared trait is too weak a signal; two of three is a close match.
pub const CLOSEST_MATCH_MIN_TRAITS: usize = 2;

/// A partially known set of characteristics, e.g. from a questionnaire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialCharacteristics {
    pub temperature: Option<Temperature>,
    pub depth: Option<Depth>,
    pub chroma: Option<Chroma>,
}

impl PartialCharacteristics {
    /// Number of fields that are set.
    pub fn supplied(&self) -> usize {
        [
            self.temperature.is_some(),
            self.depth.is_some(),
            self.chroma.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Number of set fields that equal the corresponding field of `full`.
    pub fn matches(&self, full: &SeasonCharacteristics) -> usize {
        [
            self.temperature.map(|t| t == full.temperature),
            self.depth.map(|d| d == full.depth),
            self.chroma.map(|c| c == full.chroma),
        ]
        .into_iter()
        .filter(|m| *m == Some(true))
        .count()
    }
}

pub fn by_id<'a>(palettes: &'a [SeasonPalette], id: &str) -> Option<&'a SeasonPalette> {
    palettes.iter().find(|p| p.id == id)
}

pub fn by_main_season(palettes: &[SeasonPalette], main: MainSeason) -> Vec<&SeasonPalette> {
    palettes.iter().filter(|p| p.main_season == main).collect()
}

pub fn by_temperature(palettes: &[SeasonPalette], temperature: Temperature) -> Vec<&SeasonPalette> {
    palettes
        .iter()
        .filter(|p| p.characteristics.temperature == temperature)
        .collect()
}

pub fn by_depth(palettes: &[SeasonPalette], depth: Depth) -> Vec<&SeasonPalette> {
    palettes
        .iter()
        .filter(|p| p.characteristics.depth == depth)
        .collect()
}

/// Every palette sharing at least [`CLOSEST_MATCH_MIN_TRAITS`] of the
/// supplied traits, in catalog order.
///
/// With fewer than two traits supplied nothing can qualify, so the result
/// is empty.
pub fn find_closest<'a>(
    palettes: &'a [SeasonPalette],
    partial: &PartialCharacteristics,
) -> Vec<&'a SeasonPalette> {
    if partial.supplied() < CLOSEST_MATCH_MIN_TRAITS {
        return Vec::new();
    }
    palettes
        .iter()
        .filter(|p| partial.matches(&p.characteristics) >= CLOSEST_MATCH_MIN_TRAITS)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
