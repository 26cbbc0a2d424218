// src/builder.rs
use crate::catalog;
use crate::config::EngineConfig;
use crate::error::FolioError;
use folio_core::{BlockRegistry, CompositionEngine};
use folio_executor::ExecutorImpl;
use folio_template::HandlebarsRenderer;
use folio_traits::{Executor, ResourceProvider, TemplateRenderer};
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `CompositionEngine`.
///
/// A block catalog and a resource provider are required. Without an explicit
/// renderer, a [`HandlebarsRenderer`] reading templates from the same provider
/// is set up from the config.
#[derive(Default)]
pub struct EngineBuilder {
    config: EngineConfig,
    registry: Option<BlockRegistry>,
    resources: Option<Arc<dyn ResourceProvider>>,
    renderer: Option<Arc<dyn TemplateRenderer>>,
    executor: Option<ExecutorImpl>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, FolioError> {
        self.config = EngineConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_registry(mut self, registry: BlockRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Loads the block catalog from a JSON array file.
    pub fn with_catalog_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, FolioError> {
        self.registry = Some(catalog::load_catalog_file(path)?);
        Ok(self)
    }

    /// Loads the block catalog from a directory of manifests.
    pub fn with_catalog_dir<P: AsRef<Path>>(mut self, dir: P) -> Result<Self, FolioError> {
        self.registry = Some(catalog::load_catalog_dir(dir)?);
        Ok(self)
    }

    /// Reads template assets from a directory.
    #[cfg(feature = "native")]
    pub fn with_template_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        self.with_resource_provider(Arc::new(folio_resource::FilesystemResourceProvider::new(dir)))
    }

    pub fn with_resource_provider(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Replaces the default Handlebars renderer. Template config flags are
    /// ignored for a custom renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn TemplateRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Overrides the executor chosen by the config.
    pub fn with_executor(mut self, executor: ExecutorImpl) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn build(self) -> Result<CompositionEngine, FolioError> {
        let registry = self.registry.ok_or_else(|| {
            FolioError::Config(
                "No block catalog has been configured. Use `with_registry` or `with_catalog_file`.".to_string(),
            )
        })?;
        let resources = self.resources.ok_or_else(|| {
            FolioError::Config(
                "No resource provider has been configured. Use `with_template_dir` or `with_resource_provider`."
                    .to_string(),
            )
        })?;

        let renderer = match self.renderer {
            Some(renderer) => renderer,
            None => Arc::new(default_renderer(&self.config, &registry, resources.clone())),
        };
        let executor = self
            .executor
            .unwrap_or_else(|| ExecutorImpl::from_kind(self.config.executor.into()));

        log::info!(
            "Building engine: {} blocks, {} renderer, {} executor, {} resources",
            registry.len(),
            renderer.name(),
            executor.name(),
            resources.name()
        );
        Ok(CompositionEngine::with_executor(
            Arc::new(registry),
            resources,
            renderer,
            executor,
        ))
    }
}

/// Handlebars renderer with every existing block template compiled up front.
/// A template that fails to compile is left for render time, where it
/// degrades its own sections only.
fn default_renderer(
    config: &EngineConfig,
    registry: &BlockRegistry,
    resources: Arc<dyn ResourceProvider>,
) -> HandlebarsRenderer {
    let mut renderer = HandlebarsRenderer::new(resources.clone())
        .with_strict_mode(config.strict_templates)
        .with_html_escape(config.escape_html);

    let templates = registry
        .iter()
        .flat_map(|block| std::iter::once(&block.body_template).chain(block.style_template.as_ref()));
    for template in templates {
        if !resources.exists(template.as_str()) {
            continue;
        }
        if let Err(e) = renderer.preload(template.as_str()) {
            log::warn!("Template '{}' could not be preloaded: {}", template, e);
        }
    }
    renderer
}
