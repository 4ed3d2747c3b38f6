// crates/docreg-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading the document register.
///
/// Nothing past the loader can fail: resolving a flag code and filtering are
/// total, and an empty search result is a display state, not an error.
#[derive(Debug, Error)]
pub enum DocRegError {
    #[error("Register not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("Malformed register JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Register already loaded for this session")]
    AlreadyLoaded,
}

pub type Result<T> = std::result::Result<T, DocRegError>;
