//! Comparison result structures.

use crate::matching::HeadingMatch;
use crate::model::HeadingRef;
use serde::{Deserialize, Serialize};

/// Severity of a structural discrepancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified discrepancy between template and target outlines.
///
/// Records are recomputed on every comparison and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiffRecord {
    /// Template heading with no match in the target.
    Missing { template: String },
    /// Target heading not claimed by any match.
    Extra { content: String },
    /// Matched pair whose similarity fell below the acceptable threshold.
    /// Matches only form above 0.5, so this covers the 0.5-0.6 band.
    Changed {
        template: String,
        actual: String,
        similarity: f64,
    },
}

impl DiffRecord {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Missing { .. } => Severity::Error,
            Self::Changed { .. } => Severity::Warning,
            Self::Extra { .. } => Severity::Info,
        }
    }

    /// Short label for terminal output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing",
            Self::Extra { .. } => "extra",
            Self::Changed { .. } => "changed",
        }
    }
}

/// Per-class counts for a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareSummary {
    pub template_headings: usize,
    pub target_headings: usize,
    pub matched: usize,
    pub changed: usize,
    pub missing: usize,
    pub extra: usize,
}

/// Complete result of one template/target comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct CompareResult {
    /// Discrepancies, grouped: changed (template order), then missing
    /// (template order), then extra (target order).
    pub diffs: Vec<DiffRecord>,
    /// Conformance score, 0-100: share of template headings matched with
    /// similarity above 0.8.
    pub score: u32,
    pub template_headings: Vec<HeadingRef>,
    pub target_headings: Vec<HeadingRef>,
    pub matches: Vec<HeadingMatch>,
    pub summary: CompareSummary,
}

impl CompareResult {
    /// Whether the target structure deviates from the template at all.
    #[must_use]
    pub fn has_discrepancies(&self) -> bool {
        !self.diffs.is_empty()
    }

    /// Iterate diffs of one severity, preserving the grouped ordering.
    pub fn diffs_with_severity(&self, severity: Severity) -> impl Iterator<Item = &DiffRecord> {
        self.diffs.iter().filter(move |d| d.severity() == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_map_per_record_kind() {
        let missing = DiffRecord::Missing {
            template: "a".into(),
        };
        let extra = DiffRecord::Extra { content: "b".into() };
        let changed = DiffRecord::Changed {
            template: "a".into(),
            actual: "b".into(),
            similarity: 0.55,
        };

        assert_eq!(missing.severity(), Severity::Error);
        assert_eq!(extra.severity(), Severity::Info);
        assert_eq!(changed.severity(), Severity::Warning);
    }

    #[test]
    fn diff_record_serializes_with_type_tag() {
        let record = DiffRecord::Missing {
            template: "第一章".into(),
        };
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["type"], "missing");
        assert_eq!(json["template"], "第一章");
    }
}
