//! Decoded markup element representation.
//!
//! Upstream collaborators decode rich-text containers into this simplified
//! element stream; the outline builder consumes it without ever touching the
//! binary format. Element kinds are a closed set rather than free-form tag
//! strings, so the builder never has to guess from a tag name.

use serde::{Deserialize, Serialize};

/// Kind of a decoded markup element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Heading with rank 1-6 (lower = higher in the hierarchy).
    Heading { level: u8 },
    Paragraph,
    /// Table with pre-computed dimensions (first row defines the column count).
    Table { rows: usize, cols: usize },
    /// Any other container; contributes no node but is traversed for children.
    Container,
}

/// One element of a decoded markup stream.
///
/// Headings, paragraphs, and tables can appear at any nesting depth, so the
/// builder recurses into `children` regardless of the element's own kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupElement {
    pub kind: ElementKind,
    /// Trimmed text content of the element.
    #[serde(default)]
    pub text: String,
    /// Original markup fragment, kept verbatim for host-side rendering.
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub children: Vec<MarkupElement>,
}

impl MarkupElement {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            raw: String::new(),
            children: Vec::new(),
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(ElementKind::Heading { level }, text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Paragraph, text)
    }

    pub fn table(rows: usize, cols: usize) -> Self {
        Self::new(ElementKind::Table { rows, cols }, String::new())
    }

    pub fn container(children: Vec<MarkupElement>) -> Self {
        Self {
            kind: ElementKind::Container,
            text: String::new(),
            raw: String::new(),
            children,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<MarkupElement>) -> Self {
        self.children = children;
        self
    }
}
