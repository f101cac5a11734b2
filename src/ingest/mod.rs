//! Document ingestion.
//!
//! Turns files on disk into [`ParsedDocument`]s. Two source formats are
//! supported:
//! - decoded markup element streams, serialized as JSON (an array of
//!   elements or a single root element)
//! - raw plain text, outlined line by line with the heading heuristics
//!
//! Detection prefers the file extension and falls back to sniffing the
//! content for a JSON root token.

use crate::error::{IngestErrorKind, OutlineDiffError, Result};
use crate::model::{DocumentFormat, MarkupElement, ParsedDocument};
use crate::outline::{IdStrategy, OutlineBuilder};
use std::path::Path;
use tracing::debug;

/// Maximum document file size (64 MB). Larger inputs are refused to
/// prevent OOM on pathological files.
const MAX_DOCUMENT_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Load and outline a document from disk.
///
/// The document name is taken from the file stem. `strategy` controls node
/// id generation for element-stream sources; plain-text sources always use
/// `line-{index}` ids.
pub fn load_document(path: &Path, strategy: IdStrategy) -> Result<ParsedDocument> {
    let metadata = std::fs::metadata(path).map_err(|e| OutlineDiffError::io(path, e))?;
    if metadata.len() > MAX_DOCUMENT_FILE_SIZE {
        return Err(OutlineDiffError::validation(format!(
            "document {} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_DOCUMENT_FILE_SIZE / (1024 * 1024),
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| OutlineDiffError::io(path, e))?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string();

    let format = detect_format(path, &content);
    debug!(name = %name, format = %format, bytes = content.len(), "loaded document");

    match format {
        DocumentFormat::ElementStream => parse_element_stream(&name, &content, strategy),
        DocumentFormat::PlainText => Ok(parse_plain_text(&name, &content)),
    }
}

/// Decide how to interpret a document.
///
/// `.json` files are always element streams. Anything else is sniffed: a
/// first non-whitespace character of `[` or `{` marks an element stream,
/// everything else is plain text.
pub fn detect_format(path: &Path, content: &str) -> DocumentFormat {
    let is_json_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json_ext || matches!(content.trim_start().chars().next(), Some('[') | Some('{')) {
        DocumentFormat::ElementStream
    } else {
        DocumentFormat::PlainText
    }
}

/// Parse a JSON-serialized markup element stream into an outlined document.
pub fn parse_element_stream(
    name: &str,
    content: &str,
    strategy: IdStrategy,
) -> Result<ParsedDocument> {
    let elements = parse_elements(content)?;
    let tree = OutlineBuilder::with_strategy(strategy).build_from_elements(&elements);
    let text = collect_text(&elements);
    Ok(ParsedDocument::new(
        name,
        DocumentFormat::ElementStream,
        tree,
        text,
    ))
}

/// Outline a plain-text document line by line. Infallible.
#[must_use]
pub fn parse_plain_text(name: &str, content: &str) -> ParsedDocument {
    let tree = OutlineBuilder::new().build_from_text(content);
    ParsedDocument::new(name, DocumentFormat::PlainText, tree, content)
}

/// Decode the element stream, accepting either an array root or a single
/// element object root.
fn parse_elements(content: &str) -> Result<Vec<MarkupElement>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(_) => {
            let element: MarkupElement = serde_json::from_value(value)?;
            Ok(vec![element])
        }
        other => Err(OutlineDiffError::ingest(
            "decoding element stream",
            IngestErrorKind::UnexpectedRoot(json_type_name(&other).to_string()),
        )),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Concatenate the text of every element, depth-first, one line each.
fn collect_text(elements: &[MarkupElement]) -> String {
    fn walk(element: &MarkupElement, out: &mut Vec<String>) {
        let trimmed = element.text.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
        for child in &element.children {
            walk(child, out);
        }
    }

    let mut lines = Vec::new();
    for element in elements {
        walk(element, &mut lines);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;
    use std::io::Write;

    #[test]
    fn detects_json_by_extension_and_content() {
        let json_path = Path::new("doc.json");
        let txt_path = Path::new("doc.txt");

        assert_eq!(
            detect_format(json_path, "whatever"),
            DocumentFormat::ElementStream
        );
        assert_eq!(
            detect_format(txt_path, "  [ {\"kind\": \"paragraph\"} ]"),
            DocumentFormat::ElementStream
        );
        assert_eq!(
            detect_format(txt_path, "1. heading line"),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn element_stream_array_root_parses() {
        let content = r#"[
            {"kind": {"heading": {"level": 1}}, "text": "第一章 概述"},
            {"kind": "paragraph", "text": "正文内容"}
        ]"#;
        let doc =
            parse_element_stream("spec", content, IdStrategy::Sequential).expect("parse stream");

        assert_eq!(doc.format, DocumentFormat::ElementStream);
        assert_eq!(doc.tree.len(), 1);
        assert_eq!(doc.tree[0].text, "第一章 概述");
        assert_eq!(doc.tree[0].children[0].kind, NodeKind::Paragraph);
        assert!(doc.text.contains("正文内容"));
    }

    #[test]
    fn element_stream_single_object_root_parses() {
        let content = r#"{"kind": "paragraph", "text": "solo"}"#;
        let doc =
            parse_element_stream("solo", content, IdStrategy::Sequential).expect("parse stream");
        assert_eq!(doc.tree.len(), 1);
        assert_eq!(doc.tree[0].text, "solo");
    }

    #[test]
    fn element_stream_scalar_root_is_rejected() {
        let err = parse_element_stream("bad", "42", IdStrategy::Sequential).unwrap_err();
        assert!(err.to_string().contains("ingest") || err.to_string().contains("Ingest"));
    }

    #[test]
    fn plain_text_parses_infallibly() {
        let doc = parse_plain_text("notes", "1. A\nbody\n");
        assert_eq!(doc.format, DocumentFormat::PlainText);
        assert_eq!(doc.tree.len(), 1);
        assert_eq!(doc.tree[0].id, "line-0");
    }

    #[test]
    fn load_document_from_text_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .expect("temp file");
        write!(file, "1. 总则\n条款正文\n2. 范围\n").expect("write");

        let doc = load_document(file.path(), IdStrategy::Sequential).expect("load");
        assert_eq!(doc.format, DocumentFormat::PlainText);
        assert_eq!(doc.tree.len(), 2);
    }

    #[test]
    fn load_document_missing_file_is_io_error() {
        let err =
            load_document(Path::new("/nonexistent/doc.txt"), IdStrategy::Random).unwrap_err();
        assert!(matches!(err, OutlineDiffError::Io { .. }));
    }
}
