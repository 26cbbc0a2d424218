//! Collaborator seams of the composition engine.
//!
//! The engine never touches the filesystem, a template language or a thread
//! pool directly. It talks to these traits instead:
//!
//! - [`ResourceProvider`]: template asset existence checks and loading
//! - [`TemplateRenderer`]: turns a template reference plus a data payload into markup
//! - [`Executor`]: runs per-section work, returning results in input order
//! - [`Confirm`]: asks the user before a destructive section-list edit

pub mod confirm;
pub mod executor;
pub mod resource;
pub mod template;

pub use confirm::{AlwaysConfirm, Confirm, ConfirmPrompt, NeverConfirm};
pub use executor::{Executor, SyncExecutor};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
pub use template::{TemplateError, TemplateRenderer};
