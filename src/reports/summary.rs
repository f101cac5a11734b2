//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::{CompareResult, DiffRecord};
use crate::model::{OutlineNode, ParsedDocument};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn push_node(&self, node: &OutlineNode, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        let label = if node.is_heading() {
            self.color(&format!("H{}", node.level), "cyan")
        } else {
            self.color("·", "dim")
        };
        lines.push(format!("{indent}{label} {}", node.text));
        for child in &node.children {
            self.push_node(child, depth + 1, lines);
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_compare_report(
        &self,
        result: &CompareResult,
        template: &ParsedDocument,
        target: &ParsedDocument,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Structure Comparison", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {} vs {}",
            self.color("Files:", "cyan"),
            template.name,
            target.name
        ));
        lines.push(format!(
            "{}  {} template / {} target headings, {} matched",
            self.color("Headings:", "cyan"),
            result.summary.template_headings,
            result.summary.target_headings,
            result.summary.matched
        ));

        lines.push(String::new());
        lines.push(self.color("Discrepancies:", "bold"));

        if result.diffs.is_empty() {
            lines.push(format!("  {}", self.color("No discrepancies", "dim")));
        }
        // Diffs come pre-grouped: changed, then missing, then extra
        for diff in &result.diffs {
            match diff {
                DiffRecord::Changed {
                    template,
                    actual,
                    similarity,
                } => lines.push(format!(
                    "  {} \"{template}\" found as \"{actual}\" (similarity {similarity:.2})",
                    self.color("~ changed", "yellow"),
                )),
                DiffRecord::Missing { template } => lines.push(format!(
                    "  {} \"{template}\"",
                    self.color("- missing", "red"),
                )),
                DiffRecord::Extra { content } => lines.push(format!(
                    "  {} \"{content}\"",
                    self.color("+ extra", "cyan"),
                )),
            }
        }

        // Score
        lines.push(String::new());
        let score = result.score;
        let score_color = if score >= 90 {
            "green"
        } else if score >= 70 {
            "yellow"
        } else {
            "red"
        };
        lines.push(format!(
            "{}  {}",
            self.color("Conformance:", "cyan"),
            self.color(&format!("{score}/100"), score_color)
        ));

        Ok(lines.join("\n"))
    }

    fn generate_outline_report(&self, document: &ParsedDocument) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color("Document Outline", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!("{}  {}", self.color("Name:", "cyan"), document.name));
        lines.push(format!(
            "{}  {}",
            self.color("Format:", "cyan"),
            document.format
        ));

        lines.push(String::new());
        if document.tree.is_empty() {
            lines.push(self.color("(empty outline)", "dim"));
        }
        for node in &document.tree {
            self.push_node(node, 0, &mut lines);
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
