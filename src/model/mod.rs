//! Intermediate representation for document outlines.
//!
//! This module defines the canonical data structures used for format-agnostic
//! structure comparison. Both element-stream (rich-text) and plain-text
//! sources are normalized to an [`OutlineNode`] forest before comparison.

mod document;
mod element;
mod node;

pub use document::*;
pub use element::*;
pub use node::*;
