//! Newtype wrappers for block slugs, template references and section ids
//!
//! These types keep the different string identifiers that flow through the
//! composition engine from being mixed up (a slug is not a template path).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The catalog key of a block (e.g. `"hero"`). Lookups are exact and case-sensitive.
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockSlug(Arc<str>);

impl BlockSlug {
    /// Creates a new BlockSlug from a string
    pub fn new(slug: impl Into<Arc<str>>) -> Self {
        Self(slug.into())
    }

    /// Returns the string representation of this slug
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for BlockSlug {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for BlockSlug {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for BlockSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for BlockSlug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque reference to a template asset, resolved by a resource provider.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateRef(Arc<str>);

impl TemplateRef {
    /// Creates a new TemplateRef from a string
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self(path.into())
    }

    /// Returns the string representation of this template reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TemplateRef {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for TemplateRef {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for TemplateRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The stable identity of a section on a page.
///
/// Survives reorders and is used both as the DOM anchor and as the scope of
/// the section's `<style>` container.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(u64);

impl SectionId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` once the id space is used up.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl From<u64> for SectionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_slug_creation() {
        let a = BlockSlug::new("hero");
        let b = BlockSlug::from("hero");
        let c = BlockSlug::from(String::from("hero"));

        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.as_str(), "hero");
    }

    #[test]
    fn test_block_slug_is_case_sensitive() {
        assert_ne!(BlockSlug::new("Hero"), BlockSlug::new("hero"));
    }

    #[test]
    fn test_hash_map_lookup_by_str() {
        use std::collections::HashMap;

        let mut blocks = HashMap::new();
        blocks.insert(BlockSlug::new("hero"), 1);

        assert_eq!(blocks.get("hero"), Some(&1));
        assert_eq!(blocks.get("HERO"), None);
    }

    #[test]
    fn test_section_id_next() {
        assert_eq!(SectionId::new(7).next(), Some(SectionId::new(8)));
        assert_eq!(SectionId::new(u64::MAX).next(), None);
        assert_eq!(SectionId::new(7).to_string(), "7");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&SectionId::new(3)).unwrap();
        assert_eq!(json, "3");

        let slug: BlockSlug = serde_json::from_str("\"contact-form\"").unwrap();
        assert_eq!(slug.as_str(), "contact-form");

        let template: TemplateRef = serde_json::from_str("\"hero/view.hbs\"").unwrap();
        assert_eq!(template.as_str(), "hero/view.hbs");
    }
}
