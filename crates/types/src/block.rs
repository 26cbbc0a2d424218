//! Block definitions: the immutable catalog entries sections are instances of.

use crate::ids::{BlockSlug, TemplateRef};
use crate::value::Mapping;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three independent data classes a section can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Settings,
    Contents,
    Styles,
}

impl Category {
    /// All categories, in the order they are merged.
    pub const ALL: [Category; 3] = [Category::Settings, Category::Contents, Category::Styles];

    /// The key the category is stored under in manifests, pages and template payloads.
    pub fn key(self) -> &'static str {
        match self {
            Category::Settings => "settings",
            Category::Contents => "contents",
            Category::Styles => "styles",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The schema and template metadata for a block.
///
/// The default mappings describe the shape and default values a section of
/// this block should have. `style_template` is optional; most blocks have none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDefinition {
    pub slug: BlockSlug,
    pub name: String,
    #[serde(alias = "view_file")]
    pub body_template: TemplateRef,
    #[serde(default, alias = "style_file", skip_serializing_if = "Option::is_none")]
    pub style_template: Option<TemplateRef>,
    #[serde(default, rename = "settings")]
    pub default_settings: Mapping,
    #[serde(default, rename = "contents")]
    pub default_contents: Mapping,
    #[serde(default, rename = "styles")]
    pub default_styles: Mapping,
}

impl BlockDefinition {
    pub fn new(
        slug: impl Into<BlockSlug>,
        name: impl Into<String>,
        body_template: impl Into<TemplateRef>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            body_template: body_template.into(),
            style_template: None,
            default_settings: Mapping::new(),
            default_contents: Mapping::new(),
            default_styles: Mapping::new(),
        }
    }

    pub fn with_style_template(mut self, style_template: impl Into<TemplateRef>) -> Self {
        self.style_template = Some(style_template.into());
        self
    }

    pub fn with_defaults(mut self, category: Category, defaults: Mapping) -> Self {
        *self.defaults_mut(category) = defaults;
        self
    }

    /// The declared defaults for one category.
    pub fn defaults(&self, category: Category) -> &Mapping {
        match category {
            Category::Settings => &self.default_settings,
            Category::Contents => &self.default_contents,
            Category::Styles => &self.default_styles,
        }
    }

    fn defaults_mut(&mut self, category: Category) -> &mut Mapping {
        match category {
            Category::Settings => &mut self.default_settings,
            Category::Contents => &mut self.default_contents,
            Category::Styles => &mut self.default_styles,
        }
    }
}
