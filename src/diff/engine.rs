//! Structure comparison engine.

use super::result::{CompareResult, CompareSummary, DiffRecord};
use crate::matching::{find_best_matches, similarity};
use crate::model::ParsedDocument;
use crate::outline::flatten_headings;
use std::collections::HashSet;

/// Similarity below which a matched pair is reported as changed.
pub const CHANGED_THRESHOLD: f64 = 0.6;

/// Similarity above which a match counts toward the conformance score.
pub const CONFORMANT_THRESHOLD: f64 = 0.8;

/// Compares a template outline against a target outline.
///
/// Stateless and synchronous: every call flattens both forests fresh,
/// aligns the heading sequences, and classifies the outcome. Concurrent
/// calls with distinct inputs are safe without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareEngine;

impl CompareEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compare two parsed documents, template first.
    pub fn compare(&self, template: &ParsedDocument, target: &ParsedDocument) -> CompareResult {
        let template_headings = flatten_headings(&template.tree);
        let target_headings = flatten_headings(&target.tree);

        let matches = find_best_matches(&template_headings, &target_headings);

        let matched_template: HashSet<&str> =
            matches.iter().map(|m| m.template.id.as_str()).collect();
        let matched_target: HashSet<&str> =
            matches.iter().map(|m| m.target.id.as_str()).collect();

        let mut diffs = Vec::new();

        // Changed pairs first, in match (= template) order
        for m in &matches {
            let sim = similarity(&m.template.text, &m.target.text);
            if sim < CHANGED_THRESHOLD {
                diffs.push(DiffRecord::Changed {
                    template: m.template.text.clone(),
                    actual: m.target.text.clone(),
                    similarity: sim,
                });
            }
        }
        let changed = diffs.len();

        // Unmatched template headings, in template order
        for node in &template_headings {
            if !matched_template.contains(node.id.as_str()) {
                diffs.push(DiffRecord::Missing {
                    template: node.text.clone(),
                });
            }
        }
        let missing = diffs.len() - changed;

        // Unclaimed target headings, in target order
        for node in &target_headings {
            if !matched_target.contains(node.id.as_str()) {
                diffs.push(DiffRecord::Extra {
                    content: node.text.clone(),
                });
            }
        }
        let extra = diffs.len() - changed - missing;

        let score = conformance_score(&matches, template_headings.len());

        let summary = CompareSummary {
            template_headings: template_headings.len(),
            target_headings: target_headings.len(),
            matched: matches.len(),
            changed,
            missing,
            extra,
        };

        CompareResult {
            diffs,
            score,
            template_headings,
            target_headings,
            matches,
            summary,
        }
    }

    /// Comparison over possibly-absent documents.
    ///
    /// Returns `None` when either side is missing; callers must check
    /// before rendering. Never an error.
    pub fn compare_optional(
        &self,
        template: Option<&ParsedDocument>,
        target: Option<&ParsedDocument>,
    ) -> Option<CompareResult> {
        Some(self.compare(template?, target?))
    }
}

/// Share of template headings matched above [`CONFORMANT_THRESHOLD`],
/// as a rounded 0-100 percentage.
///
/// The denominator is always the template count (floored at 1), never the
/// target count: an empty template safely yields 0, and a target with far
/// more or fewer headings is penalized only through the matches themselves.
fn conformance_score(matches: &[crate::matching::HeadingMatch], template_count: usize) -> u32 {
    let confident = matches
        .iter()
        .filter(|m| m.similarity > CONFORMANT_THRESHOLD)
        .count();
    let denominator = template_count.max(1);
    (confident as f64 / denominator as f64 * 100.0).round() as u32
}
