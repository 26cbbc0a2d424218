//! Shared data model for the folio composition engine.
//!
//! - [`BlockDefinition`]: a catalog entry (templates plus default category data)
//! - [`Section`]: a placed block with persisted overrides
//! - [`MergedSection`]: a section after its overrides were merged with the defaults
//! - [`Value`] / [`Mapping`]: the recursive shape of category data

pub mod block;
pub mod ids;
pub mod section;
pub mod value;

pub use block::{BlockDefinition, Category};
pub use ids::{BlockSlug, SectionId, TemplateRef};
pub use section::{MergedSection, Section};
pub use value::{Mapping, NotAMapping, Value, ValueKind};
