//! Inline markers emitted in place of sections that could not be rendered.
//!
//! Markers are HTML comments so a broken section leaves the page layout
//! intact while staying visible in the page source.

use folio_types::SectionId;

/// Body or style marker for a section whose block is not in the catalog.
pub fn block_missing(slug: &str) -> String {
    comment(&format!("No block found for section {slug}"))
}

/// Body marker for a block whose body template asset does not exist.
pub fn view_missing(block_name: &str) -> String {
    comment(&format!("No view file found for block {block_name}"))
}

/// Marker for a block whose template failed inside the template engine.
pub fn render_failed(block_name: &str) -> String {
    comment(&format!("Failed to render block {block_name}"))
}

/// Wraps rendered CSS in a `<style>` element scoped to the section id.
pub fn style_container(id: SectionId, css: &str) -> String {
    format!("<style id=\"style-{id}\">{css}</style>")
}

fn comment(text: &str) -> String {
    format!("<!--{}-->", neutralize(text))
}

/// `--` would end the comment early; split every run of dashes.
fn neutralize(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("--") {
        out = out.replace("--", "- -");
    }
    if out.ends_with('-') {
        out.push(' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_missing_embeds_slug() {
        assert_eq!(
            block_missing("does-not-exist"),
            "<!--No block found for section does-not-exist-->"
        );
    }

    #[test]
    fn test_view_missing_embeds_block_name() {
        assert_eq!(view_missing("Hero"), "<!--No view file found for block Hero-->");
    }

    #[test]
    fn test_style_container_is_scoped_by_id() {
        assert_eq!(
            style_container(SectionId::new(7), "h1{color:red}"),
            "<style id=\"style-7\">h1{color:red}</style>"
        );
    }

    // Edge case tests

    #[test]
    fn test_dash_runs_cannot_close_comment() {
        let marker = block_missing("evil-->slug---x");
        let inner = &marker[4..marker.len() - 3];
        assert!(!inner.contains("--"));
        assert!(marker.starts_with("<!--") && marker.ends_with("-->"));
    }

    #[test]
    fn test_trailing_dash_is_padded() {
        let marker = block_missing("slug-");
        assert_eq!(marker, "<!--No block found for section slug- -->");
    }
}
