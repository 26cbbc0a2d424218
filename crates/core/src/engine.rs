//! The composition engine: sections in, markup out.
//!
//! For every section the engine resolves the block, checks the template
//! asset, merges the three categories and hands the result to the template
//! renderer. Each step that can go wrong degrades to a placeholder fragment,
//! so one broken section never takes the page down with it.
//!
//! The engine holds no per-call state. Batch renders fan out over the
//! configured executor and collect results positionally, so output order
//! always matches input order.

use crate::merge::merge_section;
use crate::outcome::{Fragment, FragmentKind, Outcome, PageReport, concat};
use crate::placeholder;
use crate::registry::BlockRegistry;
use folio_executor::ExecutorImpl;
use folio_traits::{Executor, ResourceProvider, TemplateRenderer};
use folio_types::{BlockDefinition, MergedSection, Section};
use std::sync::Arc;

#[derive(Debug)]
struct EngineInner {
    registry: Arc<BlockRegistry>,
    resources: Arc<dyn ResourceProvider>,
    renderer: Arc<dyn TemplateRenderer>,
    executor: ExecutorImpl,
}

/// Renders ordered section lists into a body stream and a style stream.
///
/// Cheap to clone; clones share the registry and collaborators.
#[derive(Debug, Clone)]
pub struct CompositionEngine {
    inner: Arc<EngineInner>,
}

/// Both streams of a page plus the outcome of every fragment.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub body: String,
    pub styles: String,
    pub body_fragments: Vec<Fragment>,
    pub style_fragments: Vec<Fragment>,
}

impl RenderedPage {
    pub fn body_report(&self) -> PageReport {
        PageReport::from_fragments(&self.body_fragments)
    }

    pub fn style_report(&self) -> PageReport {
        PageReport::from_fragments(&self.style_fragments)
    }
}

impl CompositionEngine {
    /// Creates an engine that renders batches sequentially.
    pub fn new(
        registry: Arc<BlockRegistry>,
        resources: Arc<dyn ResourceProvider>,
        renderer: Arc<dyn TemplateRenderer>,
    ) -> Self {
        Self::with_executor(
            registry,
            resources,
            renderer,
            ExecutorImpl::Sync(Default::default()),
        )
    }

    pub fn with_executor(
        registry: Arc<BlockRegistry>,
        resources: Arc<dyn ResourceProvider>,
        renderer: Arc<dyn TemplateRenderer>,
        executor: ExecutorImpl,
    ) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                registry,
                resources,
                renderer,
                executor,
            }),
        }
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.inner.registry
    }

    pub fn executor_name(&self) -> &'static str {
        self.inner.executor.name()
    }

    /// The block a section refers to, if it is registered.
    pub fn resolve(&self, section: &Section) -> Option<&BlockDefinition> {
        self.inner.registry.get(section.slug.as_str())
    }

    /// The section merged against its block's defaults, or `None` for an
    /// unknown block. The input section is never modified.
    pub fn merge(&self, section: &Section) -> Option<MergedSection> {
        let block = self.resolve(section)?;
        Some(self.merge_with(block, section))
    }

    fn merge_with(&self, block: &BlockDefinition, section: &Section) -> MergedSection {
        let (merged, conflicts) = merge_section(block, section);
        for conflict in &conflicts {
            log::debug!(
                "Section {} ({}): {} override at '{}' replaces a {} default with a {}",
                section.id(),
                block.slug,
                conflict.category,
                conflict.path,
                conflict.default_kind,
                conflict.override_kind
            );
        }
        merged
    }

    /// Renders the body of one section.
    pub fn render_body_fragment(&self, section: &Section) -> Fragment {
        let id = section.id();
        let fragment = |markup: String, outcome: Outcome| Fragment {
            section: id,
            kind: FragmentKind::Body,
            markup,
            outcome,
        };

        let Some(block) = self.resolve(section) else {
            log::warn!("Section {}: no block registered for slug '{}'", id, section.slug);
            return fragment(
                placeholder::block_missing(section.slug.as_str()),
                Outcome::BlockMissing {
                    slug: section.slug.clone(),
                },
            );
        };

        let template = &block.body_template;
        if !self.inner.resources.exists(template.as_str()) {
            log::warn!(
                "Section {}: body template '{}' of block '{}' does not exist",
                id,
                template,
                block.slug
            );
            return fragment(
                placeholder::view_missing(&block.name),
                Outcome::AssetMissing {
                    template: template.clone(),
                },
            );
        }

        let merged = self.merge_with(block, section);
        match self
            .inner
            .renderer
            .render(template.as_str(), &merged.body_payload())
        {
            Ok(markup) => {
                log::debug!("Section {}: rendered body of block '{}'", id, block.slug);
                fragment(markup, Outcome::Rendered)
            }
            Err(error) => {
                log::error!("Section {}: block '{}' failed to render: {}", id, block.slug, error);
                fragment(
                    placeholder::render_failed(&block.name),
                    Outcome::TemplateFailed { error },
                )
            }
        }
    }

    /// Renders the scoped style fragment of one section.
    ///
    /// Blocks without a style template, or whose style asset is missing,
    /// produce an empty fragment.
    pub fn render_style_fragment(&self, section: &Section) -> Fragment {
        let id = section.id();
        let fragment = |markup: String, outcome: Outcome| Fragment {
            section: id,
            kind: FragmentKind::Style,
            markup,
            outcome,
        };

        let Some(block) = self.resolve(section) else {
            log::warn!("Section {}: no block registered for slug '{}'", id, section.slug);
            return fragment(
                placeholder::block_missing(section.slug.as_str()),
                Outcome::BlockMissing {
                    slug: section.slug.clone(),
                },
            );
        };

        let Some(template) = &block.style_template else {
            return fragment(String::new(), Outcome::NoStyle);
        };

        if !self.inner.resources.exists(template.as_str()) {
            log::debug!(
                "Section {}: style template '{}' of block '{}' does not exist, omitting",
                id,
                template,
                block.slug
            );
            return fragment(
                String::new(),
                Outcome::AssetMissing {
                    template: template.clone(),
                },
            );
        }

        let merged = self.merge_with(block, section);
        match self
            .inner
            .renderer
            .render(template.as_str(), &merged.style_payload())
        {
            Ok(css) => fragment(placeholder::style_container(id, &css), Outcome::Rendered),
            Err(error) => {
                log::error!("Section {}: style of block '{}' failed to render: {}", id, block.slug, error);
                fragment(
                    placeholder::render_failed(&block.name),
                    Outcome::TemplateFailed { error },
                )
            }
        }
    }

    pub fn render_body(&self, section: &Section) -> String {
        self.render_body_fragment(section).markup
    }

    pub fn render_style(&self, section: &Section) -> String {
        self.render_style_fragment(section).markup
    }

    /// One body fragment per section, in section order.
    pub fn render_all_fragments(&self, sections: &[Section]) -> Vec<Fragment> {
        self.batch(sections, FragmentKind::Body)
    }

    /// One style fragment per section, in section order.
    pub fn render_all_style_fragments(&self, sections: &[Section]) -> Vec<Fragment> {
        self.batch(sections, FragmentKind::Style)
    }

    /// The body stream of a page.
    pub fn render_all(&self, sections: &[Section]) -> String {
        concat(&self.render_all_fragments(sections))
    }

    /// The style stream of a page.
    pub fn render_all_styles(&self, sections: &[Section]) -> String {
        concat(&self.render_all_style_fragments(sections))
    }

    /// Both streams at once.
    pub fn render_page(&self, sections: &[Section]) -> RenderedPage {
        let body_fragments = self.render_all_fragments(sections);
        let style_fragments = self.render_all_style_fragments(sections);
        RenderedPage {
            body: concat(&body_fragments),
            styles: concat(&style_fragments),
            body_fragments,
            style_fragments,
        }
    }

    fn batch(&self, sections: &[Section], kind: FragmentKind) -> Vec<Fragment> {
        log::info!(
            "Rendering {} {:?} fragments with {}",
            sections.len(),
            kind,
            self.inner.executor.name()
        );

        let engine = self.clone();
        let fragments = self
            .inner
            .executor
            .execute_all(sections.to_vec(), move |section| match kind {
                FragmentKind::Body => engine.render_body_fragment(&section),
                FragmentKind::Style => engine.render_style_fragment(&section),
            });

        let report = PageReport::from_fragments(&fragments);
        if report.has_problems() {
            log::warn!("{:?} stream: {}", kind, report);
        } else {
            log::info!("{:?} stream: {}", kind, report);
        }
        fragments
    }
}
