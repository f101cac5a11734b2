//! Report generation for comparison results.
//!
//! Two output formats are provided:
//! - JSON: structured data for programmatic integration
//! - Summary: compact shell-friendly output

mod json;
mod summary;

pub use json::JsonReporter;
pub use summary::SummaryReporter;

use crate::diff::CompareResult;
use crate::model::ParsedDocument;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Output format for generated reports
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    clap::ValueEnum,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Compact shell-friendly output
    Summary,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a comparison result
    fn generate_compare_report(
        &self,
        result: &CompareResult,
        template: &ParsedDocument,
        target: &ParsedDocument,
    ) -> Result<String, ReportError>;

    /// Generate a report for a single document's outline (view mode)
    fn generate_outline_report(&self, document: &ParsedDocument) -> Result<String, ReportError>;

    /// Write a comparison report to a writer
    fn write_compare_report(
        &self,
        result: &CompareResult,
        template: &ParsedDocument,
        target: &ParsedDocument,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_compare_report(result, template, target)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
