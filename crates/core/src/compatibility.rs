//! Garment-to-season compatibility classification.
//!
//! A garment's dominant colors are scored against a season's primary and
//! avoid sets using weighted nearest-color distance. Decision order:
//!
//! 1. no season or no usable colors: [`CompatibilityLabel::Unknown`]
//! 2. avoid set closer than primary by more than [`AVOID_MARGIN`]: `Avoid`
//! 3. primary distance below [`IDEAL_DISTANCE_THRESHOLD`]: `Ideal`
//! 4. otherwise: `Neutral`
//!
//! The thresholds are tuning constants, not calibrated values.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::color::{color_distance, parse_hex, Color, Rgb};
use crate::error::CoreError;
use crate::season::{Chroma, Depth, SeasonCharacteristics, SeasonPalette, Temperature};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Weighted distance to the primary set below which a garment is `Ideal`.
pub const IDEAL_DISTANCE_THRESHOLD: f64 = 0.15;

/// How much closer the avoid set must be than the primary set to yield `Avoid`.
pub const AVOID_MARGIN: f64 = 0.05;

/// Distance assigned to an empty color set. Nothing is farther away.
const EMPTY_SET_DISTANCE: f64 = 1.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Outcome of classifying a garment against a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLabel {
    Ideal,
    Neutral,
    Avoid,
    #[default]
    Unknown,
}

impl CompatibilityLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ideal => "ideal",
            Self::Neutral => "neutral",
            Self::Avoid => "avoid",
            Self::Unknown => "unknown",
        }
    }
}

/// A color extracted from a garment image with its share of visible area.
///
/// Percentages are relative weights and need not sum to exactly 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DominantColor {
    pub hex: String,
    pub name: String,
    #[validate(range(min = 0.0, max = 1.0))]
    pub percentage: f64,
}

impl DominantColor {
    pub fn new(hex: impl Into<String>, name: impl Into<String>, percentage: f64) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
            percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallTone {
    Warm,
    Cool,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Saturation {
    Vivid,
    Muted,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brightness {
    Light,
    Medium,
    Dark,
}

/// Full output of the external garment color analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentColorAnalysis {
    pub dominant_colors: Vec<DominantColor>,
    pub overall_tone: OverallTone,
    pub saturation: Saturation,
    pub brightness: Brightness,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate dominant colors received from the analysis service.
///
/// The classifier itself tolerates bad entries by skipping them; this is
/// for intake paths that should reject them instead.
pub fn validate_dominant_colors(colors: &[DominantColor]) -> Result<(), CoreError> {
    for (i, color) in colors.iter().enumerate() {
        if parse_hex(&color.hex).is_none() {
            return Err(CoreError::Validation(format!(
                "Dominant color at index {i} has invalid hex '{}'",
                color.hex
            )));
        }
        color
            .validate()
            .map_err(|e| CoreError::Validation(format!("Dominant color at index {i}: {e}")))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Minimum normalized distance from `rgb` to any color in `set`.
///
/// Entries with malformed hex are ignored. Returns `None` when no entry is
/// usable.
fn nearest_distance(rgb: Rgb, set: &[Color]) -> Option<f64> {
    set.iter()
        .filter_map(Color::rgb)
        .map(|candidate| color_distance(rgb, candidate))
        .min_by(f64::total_cmp)
}

/// Decoded colors with weights normalized to sum to 1.
///
/// Malformed hex entries are dropped. Non-finite or negative percentages
/// count as zero; if every weight is zero the colors are weighted equally.
fn weighted_colors(colors: &[DominantColor]) -> Vec<(Rgb, f64)> {
    let decoded: Vec<(Rgb, f64)> = colors
        .iter()
        .filter_map(|c| {
            let weight = if c.percentage.is_finite() && c.percentage > 0.0 {
                c.percentage
            } else {
                0.0
            };
            parse_hex(&c.hex).map(|rgb| (rgb, weight))
        })
        .collect();

    let total: f64 = decoded.iter().map(|(_, w)| w).sum();
    if total > 0.0 {
        decoded.into_iter().map(|(rgb, w)| (rgb, w / total)).collect()
    } else {
        let equal = 1.0 / decoded.len().max(1) as f64;
        decoded.into_iter().map(|(rgb, _)| (rgb, equal)).collect()
    }
}

/// Weighted distance from a garment's colors to a color set.
///
/// Lower is closer. An empty (or fully malformed) set scores
/// `EMPTY_SET_DISTANCE`.
pub fn weighted_distance(colors: &[DominantColor], set: &[Color]) -> f64 {
    weighted_colors(colors)
        .into_iter()
        .map(|(rgb, weight)| weight * nearest_distance(rgb, set).unwrap_or(EMPTY_SET_DISTANCE))
        .sum()
}

/// Apply the decision policy to the two weighted distances.
pub fn label_from_distances(d_primary: f64, d_avoid: f64) -> CompatibilityLabel {
    if d_primary - d_avoid > AVOID_MARGIN {
        CompatibilityLabel::Avoid
    } else if d_primary < IDEAL_DISTANCE_THRESHOLD {
        CompatibilityLabel::Ideal
    } else {
        CompatibilityLabel::Neutral
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a garment's dominant colors against a season.
///
/// Missing inputs yield `Unknown`; this never fails.
pub fn classify(colors: &[DominantColor], season: Option<&SeasonPalette>) -> CompatibilityLabel {
    let Some(season) = season else {
        return CompatibilityLabel::Unknown;
    };
    if !colors.iter().any(|c| parse_hex(&c.hex).is_some()) {
        return CompatibilityLabel::Unknown;
    }

    let d_primary = weighted_distance(colors, &season.colors.primary);
    let d_avoid = weighted_distance(colors, &season.colors.avoid);
    label_from_distances(d_primary, d_avoid)
}

/// Count how many of the analysis' overall traits agree with a season (0-3).
///
/// - tone: warm matches warm/neutral-warm, cool matches cool/neutral-cool,
///   neutral matches either neutral temperature
/// - saturation: vivid matches bright/clear, muted matches muted
/// - brightness: light/medium/dark against light/medium/deep
pub fn trait_affinity(analysis: &GarmentColorAnalysis, season: &SeasonCharacteristics) -> usize {
    let tone = matches!(
        (analysis.overall_tone, season.temperature),
        (OverallTone::Warm, Temperature::Warm | Temperature::NeutralWarm)
            | (OverallTone::Cool, Temperature::Cool | Temperature::NeutralCool)
            | (
                OverallTone::Neutral,
                Temperature::NeutralWarm | Temperature::NeutralCool
            )
    );
    let saturation = matches!(
        (analysis.saturation, season.chroma),
        (Saturation::Vivid, Chroma::Bright | Chroma::Clear) | (Saturation::Muted, Chroma::Muted)
    );
    let brightness = matches!(
        (analysis.brightness, season.depth),
        (Brightness::Light, Depth::Light)
            | (Brightness::Medium, Depth::Medium)
            | (Brightness::Dark, Depth::Deep)
    );
    [tone, saturation, brightness].into_iter().filter(|m| *m).count()
}

/// Classify using the full analysis.
///
/// Starts from [`classify`] on the analysis' dominant colors. A `Neutral`
/// result is raised to `Ideal` when all three overall traits agree with the
/// season; every other label is kept as is.
pub fn classify_with_analysis(
    analysis: &GarmentColorAnalysis,
    season: Option<&SeasonPalette>,
) -> CompatibilityLabel {
    let label = classify(&analysis.dominant_colors, season);
    match (label, season) {
        (CompatibilityLabel::Neutral, Some(season))
            if trait_affinity(analysis, &season.characteristics) == 3 =>
        {
            CompatibilityLabel::Ideal
        }
        _ => label,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
