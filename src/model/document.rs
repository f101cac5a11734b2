//! Parsed document record.

use super::OutlineNode;
use serde::{Deserialize, Serialize};

/// Source format of a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// Raw text split into lines; outline derived by line heuristics.
    PlainText,
    /// Decoded markup element stream (rich-text sources).
    ElementStream,
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlainText => write!(f, "plain-text"),
            Self::ElementStream => write!(f, "element-stream"),
        }
    }
}

/// A document with its derived structural outline.
///
/// The forest is immutable once built; replacing the source content rebuilds
/// it wholesale rather than patching nodes in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub name: String,
    pub format: DocumentFormat,
    /// Root-level outline nodes in document order.
    pub tree: Vec<OutlineNode>,
    /// Full decoded text, kept for host-side preview.
    pub text: String,
}

impl ParsedDocument {
    pub fn new(
        name: impl Into<String>,
        format: DocumentFormat,
        tree: Vec<OutlineNode>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            format,
            tree,
            text: text.into(),
        }
    }
}
