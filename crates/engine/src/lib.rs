//! Vestia chromatic compatibility engine.
//!
//! Stateful and async building blocks on top of `vestia-core`:
//!
//! - [`SeasonCatalog`] -- single-flight, load-once season catalog service.
//! - [`CatalogSource`] -- where catalog rows come from (embedded or file).
//! - [`ProfileStore`] / [`WardrobeStore`] -- persistence collaborator traits,
//!   with [`InMemoryStore`] as the in-process implementation.
//! - [`recompute_wardrobe`] -- batched, rerunnable label reconciliation.
//! - [`SeasonSession`] -- preview override, effective season, and promotion.

pub mod catalog;
pub mod catalog_source;
pub mod config;
pub mod memory_store;
pub mod recompute;
pub mod session;
pub mod store;

pub use catalog::{CatalogError, SeasonCatalog};
pub use catalog_source::{CatalogSource, EmbeddedCatalog, FileCatalog};
pub use config::EngineConfig;
pub use memory_store::InMemoryStore;
pub use recompute::{recompute_wardrobe, RecomputeFailure, RecomputeSummary};
pub use session::{PromotionFailure, PromotionOutcome, SeasonSession, SessionError};
pub use store::{ProfileStore, StoreError, WardrobeStore, WriteReport};
