// src/error.rs
use folio_core::RegistryError;
use thiserror::Error;

/// Errors raised while assembling an engine or loading its inputs.
///
/// Rendering itself never fails; see [`folio_core::Outcome`].
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Block catalog is invalid: {0}")]
    Registry(#[from] RegistryError),

    #[error("Invalid manifest '{path}': {message}")]
    Manifest { path: String, message: String },
}

impl FolioError {
    pub(crate) fn io_at(path: &std::path::Path, err: std::io::Error) -> Self {
        FolioError::Io(std::io::Error::new(
            err.kind(),
            format!("Failed to read '{}': {}", path.display(), err),
        ))
    }
}
