//! Color value type, hex helpers, and the color-name normalizer.
//!
//! [`normalize`] turns either a display name from the Portuguese vocabulary
//! or an existing `{hex, name}` pair into a canonical [`Color`]. It never
//! fails: unknown names map to [`UNKNOWN_COLOR_HEX`].

use serde::{Deserialize, Serialize};

use crate::color_names::lookup_hex;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Neutral gray used for names missing from the vocabulary.
pub const UNKNOWN_COLOR_HEX: &str = "#808080";

/// Largest possible RGB Euclidean distance (black to white).
/// `sqrt(3 * 255^2)`.
pub const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A display color: `#RRGGBB` plus a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    pub name: String,
}

impl Color {
    pub fn new(hex: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
        }
    }

    /// Decoded RGB components, or `None` if `hex` is malformed.
    pub fn rgb(&self) -> Option<Rgb> {
        parse_hex(&self.hex)
    }
}

/// Input accepted by [`normalize`]: a bare name or an existing color.
///
/// Deserializes untagged, so catalog rows may mix `"marinho"` and
/// `{"hex": "#000080", "name": "Marinho"}` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    Named(String),
    Resolved(Color),
}

impl From<&str> for ColorInput {
    fn from(name: &str) -> Self {
        ColorInput::Named(name.to_string())
    }
}

impl From<Color> for ColorInput {
    fn from(color: Color) -> Self {
        ColorInput::Resolved(color)
    }
}

/// Decoded 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Resolve a name or pass through an existing color.
///
/// - `Resolved` input is returned unchanged.
/// - `Named` input is trimmed and lowercased, then looked up in the
///   vocabulary. On a miss the result is the gray sentinel carrying the
///   original, untouched string as its name.
pub fn normalize(input: ColorInput) -> Color {
    match input {
        ColorInput::Resolved(color) => color,
        ColorInput::Named(name) => normalize_name(&name),
    }
}

/// [`normalize`] for a bare name.
pub fn normalize_name(name: &str) -> Color {
    let key = name.trim().to_lowercase();
    let hex = lookup_hex(&key).unwrap_or(UNKNOWN_COLOR_HEX);
    Color::new(hex, name)
}

/// Returns `true` if `name` resolves through the vocabulary.
pub fn is_known_color_name(name: &str) -> bool {
    lookup_hex(&name.trim().to_lowercase()).is_some()
}

// ---------------------------------------------------------------------------
// Hex helpers
// ---------------------------------------------------------------------------

/// Parse a `#RRGGBB` string (case-insensitive). The leading `#` is required.
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Returns `true` if `hex` is a well-formed `#RRGGBB` value.
pub fn is_valid_hex(hex: &str) -> bool {
    parse_hex(hex).is_some()
}

/// Canonical uppercase `#RRGGBB` form.
pub fn canonical_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Validate a hex string, naming the offending value in the error.
pub fn validate_hex(hex: &str) -> Result<(), CoreError> {
    if is_valid_hex(hex) {
        Ok(())
    } else {
        Err(CoreError::InvalidHex(hex.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// RGB Euclidean distance normalized to `0.0..=1.0`.
pub fn color_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    ((dr * dr + dg * dg + db * db).sqrt() / MAX_RGB_DISTANCE).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
