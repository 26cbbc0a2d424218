//! Error types for registry construction and section-list editing.
//!
//! Rendering has no error type: every render failure is reported through
//! [`crate::outcome::Outcome`] instead.

use folio_types::BlockSlug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Block '{0}' is defined more than once")]
    DuplicateSlug(BlockSlug),

    #[error("Block '{name}' has an empty slug")]
    EmptySlug { name: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Section index {index} is out of bounds (page has {len} sections)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("No section ids left to allocate")]
    IdSpaceExhausted,
}
