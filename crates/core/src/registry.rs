//! The block catalog as seen by the engine.

use crate::error::RegistryError;
use folio_types::{BlockDefinition, BlockSlug};
use std::collections::HashMap;

/// Read-only lookup from slug to [`BlockDefinition`].
///
/// Filled once, then shared (behind an `Arc`) by every render pass. Lookups
/// are exact and case-sensitive; an unknown slug is `None`, never a stand-in
/// block.
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    blocks: HashMap<BlockSlug, BlockDefinition>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry, rejecting duplicate or empty slugs.
    pub fn from_definitions<I>(definitions: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = BlockDefinition>,
    {
        let mut registry = Self::new();
        for definition in definitions {
            registry.insert(definition)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, definition: BlockDefinition) -> Result<(), RegistryError> {
        if definition.slug.is_empty() {
            return Err(RegistryError::EmptySlug {
                name: definition.name,
            });
        }
        if self.blocks.contains_key(&definition.slug) {
            return Err(RegistryError::DuplicateSlug(definition.slug));
        }
        self.blocks.insert(definition.slug.clone(), definition);
        Ok(())
    }

    pub fn get(&self, slug: &str) -> Option<&BlockDefinition> {
        self.blocks.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.blocks.contains_key(slug)
    }

    /// Registered slugs in sorted order.
    pub fn slugs(&self) -> Vec<&BlockSlug> {
        let mut slugs: Vec<&BlockSlug> = self.blocks.keys().collect();
        slugs.sort();
        slugs
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockDefinition> {
        self.blocks.values()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
