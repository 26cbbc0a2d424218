// src/config.rs
use crate::error::FolioError;
use folio_executor::ExecutorKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which executor batch renders fan out over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorChoice {
    Sync,
    Rayon,
}

impl Default for ExecutorChoice {
    fn default() -> Self {
        if cfg!(feature = "rayon-executor") {
            ExecutorChoice::Rayon
        } else {
            ExecutorChoice::Sync
        }
    }
}

impl From<ExecutorChoice> for ExecutorKind {
    fn from(choice: ExecutorChoice) -> Self {
        match choice {
            ExecutorChoice::Sync => ExecutorKind::Sync,
            ExecutorChoice::Rayon => ExecutorKind::Rayon,
        }
    }
}

/// Engine settings, usually read from a JSON file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub executor: ExecutorChoice,
    /// Fail a render when a template references a missing field.
    pub strict_templates: bool,
    pub escape_html: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            executor: ExecutorChoice::default(),
            strict_templates: false,
            escape_html: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FolioError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| FolioError::io_at(path, e))?;
        Self::from_json(&source)
    }
}
