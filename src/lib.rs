//! **A library for extracting document outlines and checking them against templates.**
//!
//! `outline-diff` derives a hierarchical structure tree from a document, either
//! from a decoded markup element stream or from raw text lines, and compares
//! that structure against a reference template. The result is a set of
//! classified discrepancies (missing, changed, extra headings) and a 0-100
//! conformance score.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The outline data structures. Every document, regardless
//!   of source format, becomes a forest of [`OutlineNode`]s.
//! - **[`outline`]**: The [`OutlineBuilder`], which derives the forest from
//!   element streams or text lines, plus the heading heuristics and the
//!   flattener used before matching.
//! - **[`matching`]**: Character-set similarity and the greedy heading
//!   matcher.
//! - **[`diff`]**: The [`CompareEngine`], which classifies headings and
//!   computes the conformance score.
//! - **[`ingest`]**: File loading with format detection.
//! - **[`reports`]**: JSON and shell-summary report generators.
//!
//! ## Getting Started: Comparing Two Documents
//!
//! ```no_run
//! use std::path::Path;
//! use outline_diff::{load_document, CompareEngine, IdStrategy};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let template = load_document(Path::new("template.txt"), IdStrategy::Random)?;
//!     let target = load_document(Path::new("draft.txt"), IdStrategy::Random)?;
//!
//!     let result = CompareEngine::new().compare(&template, &target);
//!     println!("conformance: {}/100, {} discrepancies", result.score, result.diffs.len());
//!
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize->f64 casts in similarity and scoring are bounded
    // by document sizes in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod ingest;
pub mod matching;
pub mod model;
pub mod outline;
pub mod reports;

pub use config::{load_or_default, AppConfig, ConfigError};
pub use diff::{CompareEngine, CompareResult, CompareSummary, DiffRecord, Severity};
pub use error::{ErrorContext, OutlineDiffError, Result};
pub use ingest::{load_document, parse_element_stream, parse_plain_text};
pub use matching::{find_best_matches, similarity, HeadingMatch};
pub use model::{
    DocumentFormat, ElementKind, HeadingRef, MarkupElement, NodeKind, OutlineNode, ParsedDocument,
};
pub use outline::{flatten_headings, IdStrategy, OutlineBuilder};
pub use reports::{create_reporter, ReportFormat, ReportGenerator};
