//! Character-set similarity for heading text.

use std::collections::HashSet;

/// Cosine-style similarity over distinct-character sets.
///
/// Each string is reduced to the set of its distinct characters (duplicates
/// collapse) and scored as `|A intersect B| / sqrt(|A| * |B|)`, which is
/// cosine similarity over 0/1 character-presence vectors. The measure is
/// order- and multiplicity-insensitive: a cheap lexical overlap check, not
/// edit distance. Downstream thresholds assume exactly this behavior.
///
/// Returns 0.0 when either string has no characters (never NaN).
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();

    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / ((set_a.len() * set_b.len()) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert_eq!(similarity("第一章 概述", "第一章 概述"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn empty_inputs_score_zero_not_nan() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("", "x"), 0.0);
        assert_eq!(similarity("x", ""), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = "第一章 概述";
        let b = "第一章 简介";
        assert_eq!(similarity(a, b), similarity(b, a));
    }

    #[test]
    fn duplicates_collapse() {
        // "aab" and "ab" have identical character sets
        assert_eq!(similarity("aab", "ab"), 1.0);
    }

    #[test]
    fn order_insensitive() {
        assert_eq!(similarity("abc", "cba"), 1.0);
    }

    #[test]
    fn partial_overlap_scores_between() {
        let score = similarity("abcd", "abxy");
        assert!(score > 0.0 && score < 1.0);
        // 2 shared of 4x4 sets: 2 / sqrt(16) = 0.5
        assert!((score - 0.5).abs() < 1e-9);
    }
}
