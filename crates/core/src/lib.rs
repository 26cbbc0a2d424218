//! # folio-core
//!
//! Section composition for block-based pages.
//!
//! A page is an ordered list of [`Section`]s, each an instance of a block
//! from the [`BlockRegistry`]. The [`CompositionEngine`] merges every
//! section's overrides over its block's defaults and renders a body stream
//! and a style stream. [`SectionList`] carries the editor's mutations.
//!
//! - **registry**: block catalog lookup by slug
//! - **merge**: the deep merge of defaults and overrides
//! - **engine**: per-section and batch rendering
//! - **outcome**: fragments, outcomes and page reports
//! - **editor**: add, remove, duplicate, edit and reorder
//!
//! This crate does no I/O of its own. Template assets come through a
//! [`ResourceProvider`] and rendering through a [`TemplateRenderer`].

pub use folio_traits as traits;
pub use folio_types as types;

pub mod editor;
pub mod engine;
pub mod error;
pub mod merge;
pub mod outcome;
pub mod placeholder;
pub mod registry;

pub use editor::{CommandResult, SectionCommand, SectionList};
pub use engine::{CompositionEngine, RenderedPage};
pub use error::{EditorError, RegistryError};
pub use merge::{ShapeConflict, merge, merge_section, merge_with_conflicts};
pub use outcome::{Fragment, FragmentKind, Outcome, OutcomeKind, PageReport};
pub use registry::BlockRegistry;

pub use folio_executor::{ExecutorImpl, ExecutorKind};
pub use folio_traits::{Confirm, ConfirmPrompt, ResourceProvider, TemplateRenderer};
pub use folio_types::{BlockDefinition, BlockSlug, Category, Mapping, MergedSection, Section, SectionId, Value};
