//! Wardrobe-level harmony counts.

use serde::{Deserialize, Serialize};

use crate::compatibility::CompatibilityLabel;
use crate::garment::GarmentRecord;

/// Per-label garment counts. `ideal + neutral + avoid + unknown == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardrobeStats {
    pub ideal: usize,
    pub neutral: usize,
    pub avoid: usize,
    pub unknown: usize,
    pub total: usize,
}

impl WardrobeStats {
    /// Count labels; `None` counts as unknown.
    pub fn aggregate<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<CompatibilityLabel>>,
    {
        let mut stats = Self::default();
        for label in labels {
            match label.unwrap_or_default() {
                CompatibilityLabel::Ideal => stats.ideal += 1,
                CompatibilityLabel::Neutral => stats.neutral += 1,
                CompatibilityLabel::Avoid => stats.avoid += 1,
                CompatibilityLabel::Unknown => stats.unknown += 1,
            }
            stats.total += 1;
        }
        stats
    }

    /// Aggregate the stored labels of a set of garments.
    pub fn from_garments(garments: &[GarmentRecord]) -> Self {
        Self::aggregate(garments.iter().map(|g| g.chromatic_compatibility))
    }

    /// Share of garments labeled ideal, `0.0` for an empty wardrobe.
    pub fn ideal_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.ideal as f64 / self.total as f64
        }
    }

    /// Garments that carry a definite label.
    pub fn classified(&self) -> usize {
        self.total.saturating_sub(self.unknown)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
