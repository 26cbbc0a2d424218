//! ResourceProvider trait for template asset lookup.
//!
//! Block definitions only carry opaque template references. A provider decides
//! whether a reference points at an existing asset and hands back its bytes.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for asset loading.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Resource '{0}' is not valid UTF-8")]
    InvalidEncoding(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared asset bytes.
pub type SharedResourceData = Arc<Vec<u8>>;

/// Resolves template references to assets.
///
/// Implementations must be cheap to query with [`exists`](Self::exists): the
/// engine calls it for every section before deciding whether to render.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load an asset by its reference.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Whether the reference points at an existing asset.
    fn exists(&self, path: &str) -> bool;

    /// Load an asset as UTF-8 text (template sources).
    fn load_string(&self, path: &str) -> Result<String, ResourceError> {
        let data = self.load(path)?;
        String::from_utf8(data.to_vec()).map_err(|_| ResourceError::InvalidEncoding(path.to_string()))
    }

    /// Human-readable provider name for logging.
    fn name(&self) -> &'static str;
}

/// Assets held in memory, keyed by their exact reference.
///
/// Useful for tests and for embedding a fixed block catalog in a binary.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an asset under `path`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path = path.into();
        let mut resources = self.resources.write().map_err(|_| ResourceError::LoadFailed {
            path: path.clone(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources.insert(path, Arc::new(data));
        Ok(())
    }

    /// Store a text asset (usually a template source).
    pub fn add_str(&self, path: impl Into<String>, source: &str) -> Result<(), ResourceError> {
        self.add(path, source.as_bytes().to_vec())
    }

    /// Builder-style variant of [`add_str`](Self::add_str).
    pub fn with_str(self, path: impl Into<String>, source: &str) -> Result<Self, ResourceError> {
        self.add_str(path, source)?;
        Ok(self)
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self.resources.read().map_err(|_| ResourceError::LoadFailed {
            path: path.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
