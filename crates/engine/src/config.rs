use std::path::PathBuf;

/// Default number of garments written per label batch.
pub const DEFAULT_RECOMPUTE_BATCH_SIZE: usize = 50;

/// Engine configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// JSON file with season rows. `None` uses the embedded catalog.
    pub catalog_path: Option<PathBuf>,
    /// Garments per batched label write (at least 1).
    pub recompute_batch_size: usize,
}

impl EngineConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default            |
    /// |------------------------|--------------------|
    /// | `SEASON_CATALOG_PATH`  | embedded catalog   |
    /// | `RECOMPUTE_BATCH_SIZE` | `50`               |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = var("SEASON_CATALOG_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let recompute_batch_size: usize = var("RECOMPUTE_BATCH_SIZE")
            .unwrap_or_else(|| DEFAULT_RECOMPUTE_BATCH_SIZE.to_string())
            .parse()
            .expect("RECOMPUTE_BATCH_SIZE must be a valid usize");

        Self {
            catalog_path,
            recompute_batch_size: recompute_batch_size.max(1),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            recompute_batch_size: DEFAULT_RECOMPUTE_BATCH_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
