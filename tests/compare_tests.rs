//! Integration tests for outline-diff
//!
//! These tests verify end-to-end functionality: document parsing, outline
//! construction, comparison, scoring, and report generation.

use outline_diff::{
    parse_element_stream, parse_plain_text,
    reports::{JsonReporter, ReportGenerator, SummaryReporter},
    CompareEngine, DiffRecord, IdStrategy, Severity,
};

// ============================================================================
// Comparison scenarios
// ============================================================================

mod comparison {
    use super::*;

    #[test]
    fn identical_documents_are_fully_conformant() {
        let content = "第一章 概述\n项目背景介绍。\n第二章 结论\n最终结论。\n第三章 附录\n";
        let template = parse_plain_text("template", content);
        let target = parse_plain_text("target", content);

        let result = CompareEngine::new().compare(&template, &target);

        assert_eq!(result.score, 100);
        assert!(result.diffs.is_empty());
        assert!(!result.has_discrepancies());
        assert_eq!(result.summary.matched, 3);
    }

    #[test]
    fn empty_target_reports_every_template_heading_missing() {
        let template = parse_plain_text("template", "第一章 概述\n第二章 结论\n");
        let target = parse_plain_text("target", "没有任何标题的正文。\n");

        let result = CompareEngine::new().compare(&template, &target);

        assert_eq!(result.score, 0);
        assert_eq!(result.summary.missing, 2);
        assert_eq!(result.summary.extra, 0);
        let missing: Vec<_> = result
            .diffs
            .iter()
            .filter_map(|d| match d {
                DiffRecord::Missing { template } => Some(template.as_str()),
                _ => None,
            })
            .collect();
        // Missing records keep template order
        assert_eq!(missing, vec!["第一章 概述", "第二章 结论"]);
    }

    #[test]
    fn headingless_template_reports_every_target_heading_extra() {
        let template = parse_plain_text("template", "纯正文，无结构。\n");
        let target = parse_plain_text("target", "第一章 概述\n第二章 结论\n");

        let result = CompareEngine::new().compare(&template, &target);

        assert_eq!(result.score, 0);
        assert_eq!(result.summary.extra, 2);
        assert!(result
            .diffs
            .iter()
            .all(|d| d.severity() == Severity::Info));
    }

    #[test]
    fn renamed_heading_in_changed_band_is_a_warning() {
        // Colon-rule headings; 5 shared of 9x9 distinct chars ~ 0.556,
        // above the match floor but below the acceptance threshold
        let template = parse_plain_text("template", "abcdefgh:\n");
        let target = parse_plain_text("target", "abcdwxyz:\n");

        let result = CompareEngine::new().compare(&template, &target);

        assert_eq!(result.summary.matched, 1);
        assert_eq!(result.summary.changed, 1);
        match &result.diffs[0] {
            DiffRecord::Changed {
                template,
                actual,
                similarity,
            } => {
                assert_eq!(template, "abcdefgh:");
                assert_eq!(actual, "abcdwxyz:");
                assert!(*similarity > 0.5 && *similarity < 0.6);
            }
            other => panic!("expected changed record, got {other:?}"),
        }
        assert_eq!(result.diffs[0].severity(), Severity::Warning);
        // Matched but not confidently: contributes nothing to the score
        assert_eq!(result.score, 0);
    }

    #[test]
    fn nested_headings_compare_by_flattened_sequence() {
        let template = parse_plain_text(
            "template",
            "1. 总则\n11. 适用范围\n12. 定义与缩略\n2. 技术要求\n",
        );
        let target = parse_plain_text(
            "target",
            "1. 总则\n11. 适用范围\n2. 技术要求\n",
        );

        let result = CompareEngine::new().compare(&template, &target);

        assert_eq!(result.summary.template_headings, 4);
        assert_eq!(result.summary.target_headings, 3);
        assert_eq!(result.summary.matched, 3);
        assert_eq!(result.summary.missing, 1);
        // 3 of 4 template headings confidently matched
        assert_eq!(result.score, 75);
    }

    #[test]
    fn diffs_are_grouped_changed_then_missing_then_extra() {
        let template = parse_plain_text("template", "abcdefgh:\n独有章节甲:\n");
        let target = parse_plain_text("target", "abcdwxyz:\n无关内容乙:\n");

        let result = CompareEngine::new().compare(&template, &target);
        let kinds: Vec<_> = result.diffs.iter().map(DiffRecord::kind).collect();
        assert_eq!(kinds, vec!["changed", "missing", "extra"]);
    }

    #[test]
    fn element_stream_and_plain_text_documents_compare() {
        let stream = r#"[
            {"kind": {"heading": {"level": 1}}, "text": "第一章 概述"},
            {"kind": "paragraph", "text": "背景"},
            {"kind": {"heading": {"level": 1}}, "text": "第二章 结论"}
        ]"#;
        let template =
            parse_element_stream("template", stream, IdStrategy::Sequential).expect("parse");
        let target = parse_plain_text("target", "第一章 概述\n第二章 结论\n");

        let result = CompareEngine::new().compare(&template, &target);
        assert_eq!(result.score, 100);
        assert!(result.diffs.is_empty());
    }
}

// ============================================================================
// Report generation over comparison results
// ============================================================================

mod reporting {
    use super::*;

    #[test]
    fn json_report_is_valid_and_complete() {
        let template = parse_plain_text("spec", "1. 总则\n2. 范围\n");
        let target = parse_plain_text("draft", "1. 总则\n3. 新增\n");
        let result = CompareEngine::new().compare(&template, &target);

        let report = JsonReporter::new()
            .generate_compare_report(&result, &template, &target)
            .expect("report");
        let value: serde_json::Value = serde_json::from_str(&report).expect("valid json");

        assert_eq!(value["metadata"]["tool"]["name"], "outline-diff");
        assert_eq!(value["metadata"]["template"]["heading_count"], 2);
        assert_eq!(value["score"], 50);
        assert_eq!(value["diffs"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["matches"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn summary_report_shows_grouped_discrepancies() {
        let template = parse_plain_text("spec", "1. 总则\n2. 范围\n");
        let target = parse_plain_text("draft", "1. 总则\n");
        let result = CompareEngine::new().compare(&template, &target);

        let report = SummaryReporter::new()
            .no_color()
            .generate_compare_report(&result, &template, &target)
            .expect("report");

        assert!(report.contains("spec vs draft"));
        assert!(report.contains("- missing \"2. 范围\""));
        assert!(report.contains("50/100"));
    }
}
