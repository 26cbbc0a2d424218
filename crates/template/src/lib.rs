//! Handlebars rendering of block templates.
//!
//! Template references are resolved through a [`ResourceProvider`], so the
//! same renderer works over a template directory or an in-memory catalog.
//! Templates can be preloaded (compiled once) or loaded on first use.

use folio_traits::{ResourceError, ResourceProvider, TemplateError, TemplateRenderer};
use handlebars::{Handlebars, RenderErrorReason};
use std::fmt;
use std::sync::Arc;

pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
    resources: Arc<dyn ResourceProvider>,
}

impl fmt::Debug for HandlebarsRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlebarsRenderer")
            .field("resources", &self.resources.name())
            .field("preloaded", &self.registry.get_templates().len())
            .field("strict", &self.registry.strict_mode())
            .finish()
    }
}

impl HandlebarsRenderer {
    pub fn new(resources: Arc<dyn ResourceProvider>) -> Self {
        Self {
            registry: Handlebars::new(),
            resources,
        }
    }

    /// Missing fields fail the render instead of producing empty text.
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.registry.set_strict_mode(strict);
        self
    }

    /// Interpolated values are HTML-escaped unless this is turned off.
    pub fn with_html_escape(mut self, escape: bool) -> Self {
        if escape {
            self.registry.register_escape_fn(handlebars::html_escape);
        } else {
            self.registry.register_escape_fn(handlebars::no_escape);
        }
        self
    }

    /// Compiles a template now so later renders skip loading and parsing.
    pub fn preload(&mut self, template: &str) -> Result<(), TemplateError> {
        if self.registry.has_template(template) {
            return Ok(());
        }
        let source = self.load_source(template)?;
        self.registry
            .register_template_string(template, source)
            .map_err(|e| TemplateError::Parse {
                template: template.to_string(),
                message: e.to_string(),
            })?;
        log::debug!("Preloaded template '{}'", template);
        Ok(())
    }

    pub fn is_preloaded(&self, template: &str) -> bool {
        self.registry.has_template(template)
    }

    fn load_source(&self, template: &str) -> Result<String, TemplateError> {
        self.resources.load_string(template).map_err(|e| match e {
            ResourceError::NotFound(_) => TemplateError::NotFound(template.to_string()),
            other => TemplateError::Resource(other),
        })
    }
}

fn render_error(template: &str, err: handlebars::RenderError) -> TemplateError {
    match err.reason() {
        RenderErrorReason::TemplateError(parse) => TemplateError::Parse {
            template: template.to_string(),
            message: parse.to_string(),
        },
        _ => TemplateError::Render {
            template: template.to_string(),
            message: err.to_string(),
        },
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(&self, template: &str, payload: &serde_json::Value) -> Result<String, TemplateError> {
        if self.registry.has_template(template) {
            return self
                .registry
                .render(template, payload)
                .map_err(|e| render_error(template, e));
        }

        let source = self.load_source(template)?;
        self.registry
            .render_template(&source, payload)
            .map_err(|e| render_error(template, e))
    }

    fn name(&self) -> &'static str {
        "HandlebarsRenderer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_traits::InMemoryResourceProvider;
    use serde_json::json;

    fn renderer_with(templates: &[(&str, &str)]) -> HandlebarsRenderer {
        let provider = InMemoryResourceProvider::new();
        for (path, source) in templates {
            provider.add_str(*path, source).unwrap();
        }
        HandlebarsRenderer::new(Arc::new(provider))
    }

    #[test]
    fn test_render_on_demand() {
        let renderer = renderer_with(&[("hero.hbs", "<h1>{{contents.title}}</h1>")]);
        let html = renderer
            .render("hero.hbs", &json!({ "contents": { "title": "Welcome" } }))
            .unwrap();
        assert_eq!(html, "<h1>Welcome</h1>");
    }

    #[test]
    fn test_preloaded_render_matches_on_demand() {
        let mut renderer = renderer_with(&[("hero.hbs", "<h1>{{contents.title}}</h1>")]);
        let payload = json!({ "contents": { "title": "Welcome" } });
        let on_demand = renderer.render("hero.hbs", &payload).unwrap();

        renderer.preload("hero.hbs").unwrap();
        assert!(renderer.is_preloaded("hero.hbs"));
        assert_eq!(renderer.render("hero.hbs", &payload).unwrap(), on_demand);
    }

    #[test]
    fn test_values_are_escaped_by_default() {
        let renderer = renderer_with(&[("t.hbs", "{{contents.title}}")]);
        let html = renderer
            .render("t.hbs", &json!({ "contents": { "title": "<b>" } }))
            .unwrap();
        assert_eq!(html, "&lt;b&gt;");

        let raw = renderer_with(&[("t.hbs", "{{contents.title}}")]).with_html_escape(false);
        let html = raw
            .render("t.hbs", &json!({ "contents": { "title": "<b>" } }))
            .unwrap();
        assert_eq!(html, "<b>");
    }

    // Error cases

    #[test]
    fn test_missing_template_is_not_found() {
        let renderer = renderer_with(&[]);
        let err = renderer.render("nope.hbs", &json!({})).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(ref t) if t == "nope.hbs"));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let mut renderer = renderer_with(&[("bad.hbs", "{{#if}}unclosed")]);
        assert!(matches!(
            renderer.preload("bad.hbs"),
            Err(TemplateError::Parse { .. })
        ));
        assert!(renderer.render("bad.hbs", &json!({})).is_err());
    }

    #[test]
    fn test_strict_mode_rejects_missing_fields() {
        let renderer = renderer_with(&[("t.hbs", "{{contents.subtitle}}")]).with_strict_mode(true);
        let err = renderer
            .render("t.hbs", &json!({ "contents": {} }))
            .unwrap_err();
        assert!(matches!(err, TemplateError::Render { .. }));

        let lenient = renderer_with(&[("t.hbs", "{{contents.subtitle}}")]);
        assert_eq!(lenient.render("t.hbs", &json!({ "contents": {} })).unwrap(), "");
    }
}
