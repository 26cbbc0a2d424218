//! Sections placed on a page and their merged, render-time form.

use crate::block::Category;
use crate::ids::{BlockSlug, SectionId};
use crate::value::Mapping;
use serde::{Deserialize, Serialize};

/// One placed instance of a block, carrying the user's persisted overrides.
///
/// `index` is the section's current position in its page. It is derived
/// state: list controllers recompute it after every structural change and it
/// is never read from or written to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    id: SectionId,
    pub slug: BlockSlug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub settings: Mapping,
    #[serde(default)]
    pub contents: Mapping,
    #[serde(default)]
    pub styles: Mapping,
    #[serde(skip)]
    index: usize,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, slug: impl Into<BlockSlug>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: None,
            settings: Mapping::new(),
            contents: Mapping::new(),
            styles: Mapping::new(),
            index: 0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_overrides(mut self, category: Category, overrides: Mapping) -> Self {
        *self.overrides_mut(category) = overrides;
        self
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Records the section's position. Only list controllers should call this.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// The persisted overrides for one category (empty when never edited).
    pub fn overrides(&self, category: Category) -> &Mapping {
        match category {
            Category::Settings => &self.settings,
            Category::Contents => &self.contents,
            Category::Styles => &self.styles,
        }
    }

    pub fn overrides_mut(&mut self, category: Category) -> &mut Mapping {
        match category {
            Category::Settings => &mut self.settings,
            Category::Contents => &mut self.contents,
            Category::Styles => &mut self.styles,
        }
    }

    /// A copy of this section under a new identity.
    pub fn duplicate_as(&self, id: SectionId) -> Section {
        Section {
            id,
            ..self.clone()
        }
    }

    /// The DOM anchor used to scroll the rendered page to this section.
    pub fn anchor(&self) -> String {
        self.id.to_string()
    }
}

/// A section whose categories have been merged with its block's defaults.
///
/// Built fresh for every render call and never written back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedSection {
    pub id: SectionId,
    pub slug: BlockSlug,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub index: usize,
    pub settings: Mapping,
    pub contents: Mapping,
    pub styles: Mapping,
}

impl MergedSection {
    pub fn new(section: &Section, settings: Mapping, contents: Mapping, styles: Mapping) -> Self {
        Self {
            id: section.id(),
            slug: section.slug.clone(),
            title: section.title.clone(),
            index: section.index(),
            settings,
            contents,
            styles,
        }
    }

    pub fn category(&self, category: Category) -> &Mapping {
        match category {
            Category::Settings => &self.settings,
            Category::Contents => &self.contents,
            Category::Styles => &self.styles,
        }
    }

    /// The data handed to a body template: the whole merged section.
    pub fn body_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "slug": self.slug,
            "title": self.title,
            "index": self.index,
            "settings": self.settings,
            "contents": self.contents,
            "styles": self.styles,
        })
    }

    /// The data handed to a style template. Contents are left out; style
    /// templates only see layout and appearance fields.
    pub fn style_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "styles": self.styles,
            "settings": self.settings,
        })
    }
}
