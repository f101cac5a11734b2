//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::{CompareResult, CompareSummary, DiffRecord};
use crate::matching::HeadingMatch;
use crate::model::{OutlineNode, ParsedDocument};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, report: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_compare_report(
        &self,
        result: &CompareResult,
        template: &ParsedDocument,
        target: &ParsedDocument,
    ) -> Result<String, ReportError> {
        let report = JsonCompareReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo::current(),
                generated_at: Utc::now().to_rfc3339(),
                template: DocumentInfo::from_document(template, result.summary.template_headings),
                target: DocumentInfo::from_document(target, result.summary.target_headings),
            },
            score: result.score,
            summary: result.summary,
            diffs: result.diffs.iter().map(JsonDiff::from_record).collect(),
            matches: &result.matches,
        };
        self.render(&report)
    }

    fn generate_outline_report(&self, document: &ParsedDocument) -> Result<String, ReportError> {
        let report = JsonOutlineReport {
            metadata: JsonOutlineMetadata {
                tool: ToolInfo::current(),
                generated_at: Utc::now().to_rfc3339(),
                document: DocumentInfo::from_document(
                    document,
                    crate::outline::flatten_headings(&document.tree).len(),
                ),
            },
            tree: &document.tree,
        };
        self.render(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

impl ToolInfo {
    fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Serialize)]
struct DocumentInfo {
    name: String,
    format: String,
    heading_count: usize,
}

impl DocumentInfo {
    fn from_document(document: &ParsedDocument, heading_count: usize) -> Self {
        Self {
            name: document.name.clone(),
            format: document.format.to_string(),
            heading_count,
        }
    }
}

/// A diff record with its severity made explicit for consumers.
#[derive(Serialize)]
struct JsonDiff<'a> {
    severity: &'static str,
    #[serde(flatten)]
    record: &'a DiffRecord,
}

impl<'a> JsonDiff<'a> {
    fn from_record(record: &'a DiffRecord) -> Self {
        Self {
            severity: record.severity().as_str(),
            record,
        }
    }
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    template: DocumentInfo,
    target: DocumentInfo,
}

#[derive(Serialize)]
struct JsonCompareReport<'a> {
    metadata: JsonReportMetadata,
    score: u32,
    summary: CompareSummary,
    diffs: Vec<JsonDiff<'a>>,
    matches: &'a [HeadingMatch],
}

#[derive(Serialize)]
struct JsonOutlineMetadata {
    tool: ToolInfo,
    generated_at: String,
    document: DocumentInfo,
}

#[derive(Serialize)]
struct JsonOutlineReport<'a> {
    metadata: JsonOutlineMetadata,
    tree: &'a [OutlineNode],
}
