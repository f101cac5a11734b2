//! Unified error types for outline-diff.
//!
//! This module provides the error hierarchy for the library, with rich
//! context for debugging and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for outline-diff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OutlineDiffError {
    /// Errors while reading and parsing a document
    #[error("Failed to ingest document: {context}")]
    Ingest {
        context: String,
        #[source]
        source: IngestErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific ingest error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IngestErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Element stream must be a JSON array or object: found {0}")]
    UnexpectedRoot(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Document is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to write report output: {0}")]
    WriteError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for outline-diff operations
pub type Result<T> = std::result::Result<T, OutlineDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl OutlineDiffError {
    /// Create an ingest error with context
    pub fn ingest(context: impl Into<String>, source: IngestErrorKind) -> Self {
        Self::Ingest {
            context: context.into(),
            source,
        }
    }

    /// Create an ingest error for a missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::ingest(
            "missing required field",
            IngestErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for OutlineDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for OutlineDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::ingest(
            "JSON deserialization",
            IngestErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    ///
    /// The closure is only called if the result is an error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<OutlineDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: OutlineDiffError, new_ctx: &str) -> OutlineDiffError {
    match err {
        OutlineDiffError::Ingest {
            context: existing,
            source,
        } => OutlineDiffError::Ingest {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OutlineDiffError::Report {
            context: existing,
            source,
        } => OutlineDiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OutlineDiffError::Io {
            path,
            message,
            source,
        } => OutlineDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        OutlineDiffError::Config(msg) => OutlineDiffError::Config(chain_context(new_ctx, &msg)),
        OutlineDiffError::Validation(msg) => {
            OutlineDiffError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
