//! Greedy template-to-target heading alignment.

use super::similarity::similarity;
use crate::model::HeadingRef;
use serde::{Deserialize, Serialize};

/// Minimum similarity for a template/target pairing to count as a match.
pub const MATCH_THRESHOLD: f64 = 0.5;

/// A claimed pairing between one template heading and one target heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingMatch {
    pub template: HeadingRef,
    pub target: HeadingRef,
    pub similarity: f64,
}

/// Align a template heading sequence against a target heading sequence.
///
/// Greedy and template-order-first: template headings are processed in
/// sequence order, and each claims the unclaimed target with the strictly
/// highest similarity above [`MATCH_THRESHOLD`] (ties go to the earlier
/// target, since only a strict improvement replaces the current best). The
/// result is a partial injective mapping: every template and every target
/// heading appears in at most one match.
///
/// An earlier template heading can claim a target that a later template
/// heading would have matched more strongly; there is no backtracking.
/// Downstream diff output and scoring depend on this exact claiming order,
/// so it must stay stable.
#[must_use]
pub fn find_best_matches(template: &[HeadingRef], target: &[HeadingRef]) -> Vec<HeadingMatch> {
    let mut matches = Vec::new();
    let mut claimed = vec![false; target.len()];

    for t_node in template {
        let mut best: Option<(usize, f64)> = None;

        for (idx, d_node) in target.iter().enumerate() {
            if claimed[idx] {
                continue;
            }
            let score = similarity(&t_node.text, &d_node.text);
            if score > MATCH_THRESHOLD && best.map_or(true, |(_, b)| score > b) {
                best = Some((idx, score));
            }
        }

        if let Some((idx, score)) = best {
            claimed[idx] = true;
            matches.push(HeadingMatch {
                template: t_node.clone(),
                target: target[idx].clone(),
                similarity: score,
            });
        }
    }

    matches
}
