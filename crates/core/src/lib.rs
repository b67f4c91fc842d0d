//! Vestia chromatic compatibility domain logic.
//!
//! Everything in this crate is pure and synchronous.
//! The `vestia-engine` crate layers catalog loading and persistence on top.
//!
//! - [`color`] -- color values, hex helpers, and the name normalizer.
//! - [`season`] -- season palettes and catalog row validation.
//! - [`season_query`] -- lookups over a loaded catalog.
//! - [`compatibility`] -- the garment classifier.
//! - [`wardrobe_stats`] -- label counts across a wardrobe.
//! - [`season_preview`] -- the transient preview override.

pub mod color;
pub mod color_names;
pub mod compatibility;
pub mod error;
pub mod garment;
pub mod season;
pub mod season_preview;
pub mod season_query;
pub mod types;
pub mod wardrobe_stats;
