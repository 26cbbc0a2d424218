//! The templating collaborator.

use crate::resource::ResourceError;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template '{template}' failed to parse: {message}")]
    Parse { template: String, message: String },

    #[error("Template '{template}' failed to render: {message}")]
    Render { template: String, message: String },

    #[error("Failed to load template source: {0}")]
    Resource(#[from] ResourceError),
}

/// Turns a template reference and a JSON payload into markup.
///
/// Implementations are shared across concurrent render calls and must not
/// keep per-call state.
pub trait TemplateRenderer: Send + Sync + Debug {
    fn render(&self, template: &str, payload: &serde_json::Value) -> Result<String, TemplateError>;

    fn name(&self) -> &'static str;
}
