/// Errors raised while validating colors, dominant-color payloads, and
/// season catalog rows.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid color hex '{0}'. Expected #RRGGBB")]
    InvalidHex(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate season id '{0}'")]
    DuplicateSeason(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
