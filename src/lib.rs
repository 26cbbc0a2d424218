//! # folio
//!
//! Renders block-based pages: an ordered list of sections, each an instance
//! of a catalog block with user overrides, becomes a body stream and a
//! scoped style stream.
//!
//! ```ignore
//! use folio::{EngineBuilder, catalog};
//!
//! let engine = EngineBuilder::new()
//!     .with_catalog_dir("blocks")?
//!     .with_template_dir("blocks")
//!     .build()?;
//! let page = catalog::load_page("home.json")?;
//! let rendered = engine.render_page(page.sections());
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;

pub use builder::EngineBuilder;
pub use config::{EngineConfig, ExecutorChoice};
pub use error::FolioError;

pub use folio_core::{
    BlockRegistry, CommandResult, CompositionEngine, EditorError, Fragment, FragmentKind, Outcome, OutcomeKind,
    PageReport, RegistryError, RenderedPage, SectionCommand, SectionList, ShapeConflict,
};
pub use folio_executor::{ExecutorImpl, ExecutorKind};
pub use folio_template::HandlebarsRenderer;
pub use folio_traits::{
    AlwaysConfirm, Confirm, ConfirmPrompt, InMemoryResourceProvider, NeverConfirm, ResourceError, ResourceProvider,
    TemplateError, TemplateRenderer,
};
pub use folio_types::{BlockDefinition, BlockSlug, Category, Mapping, MergedSection, Section, SectionId, Value};

#[cfg(feature = "native")]
pub use folio_resource::FilesystemResourceProvider;
