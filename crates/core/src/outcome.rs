//! Per-section render results.
//!
//! Rendering never fails as a whole. Each section yields a [`Fragment`]: the
//! markup to place on the page plus an [`Outcome`] saying how it was produced,
//! so callers can assert on what happened without parsing placeholders.

use folio_traits::TemplateError;
use folio_types::{BlockSlug, SectionId, TemplateRef};
use std::fmt;

/// Which of the two page streams a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Body,
    Style,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    /// The template rendered; the markup is its output.
    Rendered,
    /// No block with the section's slug is registered.
    BlockMissing { slug: BlockSlug },
    /// The block resolved but its template asset does not exist.
    AssetMissing { template: TemplateRef },
    /// The block declares no style template (style stream only).
    NoStyle,
    /// The template engine returned an error for this section.
    TemplateFailed { error: TemplateError },
}

/// Payload-free discriminant of [`Outcome`], for counting and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Rendered,
    BlockMissing,
    AssetMissing,
    NoStyle,
    TemplateFailed,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Rendered => OutcomeKind::Rendered,
            Outcome::BlockMissing { .. } => OutcomeKind::BlockMissing,
            Outcome::AssetMissing { .. } => OutcomeKind::AssetMissing,
            Outcome::NoStyle => OutcomeKind::NoStyle,
            Outcome::TemplateFailed { .. } => OutcomeKind::TemplateFailed,
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutcomeKind::Rendered => "rendered",
            OutcomeKind::BlockMissing => "block missing",
            OutcomeKind::AssetMissing => "asset missing",
            OutcomeKind::NoStyle => "no style",
            OutcomeKind::TemplateFailed => "template failed",
        };
        f.write_str(label)
    }
}

/// The rendered output of one section for one stream.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub section: SectionId,
    pub kind: FragmentKind,
    pub markup: String,
    pub outcome: Outcome,
}

impl Fragment {
    pub fn is_rendered(&self) -> bool {
        matches!(self.outcome, Outcome::Rendered)
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}

/// Outcome counts over a batch of fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageReport {
    pub rendered: usize,
    pub block_missing: usize,
    pub asset_missing: usize,
    pub no_style: usize,
    pub template_failed: usize,
}

impl PageReport {
    pub fn from_fragments<'a, I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = &'a Fragment>,
    {
        let mut report = Self::default();
        for fragment in fragments {
            match fragment.outcome.kind() {
                OutcomeKind::Rendered => report.rendered += 1,
                OutcomeKind::BlockMissing => report.block_missing += 1,
                OutcomeKind::AssetMissing => report.asset_missing += 1,
                OutcomeKind::NoStyle => report.no_style += 1,
                OutcomeKind::TemplateFailed => report.template_failed += 1,
            }
        }
        report
    }

    pub fn total(&self) -> usize {
        self.rendered + self.block_missing + self.asset_missing + self.no_style + self.template_failed
    }

    /// Whether any section degraded to a placeholder or was dropped.
    pub fn has_problems(&self) -> bool {
        self.block_missing + self.asset_missing + self.template_failed > 0
    }
}

impl fmt::Display for PageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rendered, {} block missing, {} asset missing, {} without style, {} failed",
            self.rendered, self.block_missing, self.asset_missing, self.no_style, self.template_failed
        )
    }
}

/// Concatenates fragment markup in order.
pub fn concat(fragments: &[Fragment]) -> String {
    let mut out = String::with_capacity(fragments.iter().map(|f| f.markup.len()).sum());
    for fragment in fragments {
        out.push_str(&fragment.markup);
    }
    out
}
