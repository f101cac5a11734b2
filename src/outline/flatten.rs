//! Heading sequence extraction.

use crate::model::{HeadingRef, OutlineNode};

/// Flatten a forest into its document-order heading sequence.
///
/// Pre-order walk: a heading is collected before its descendants, root nodes
/// left to right. Paragraphs and tables are walked through for their
/// children but never collected. The sequence is ephemeral; comparison
/// builds it fresh every call.
#[must_use]
pub fn flatten_headings(forest: &[OutlineNode]) -> Vec<HeadingRef> {
    let mut result = Vec::new();
    collect(forest, &mut result);
    result
}

fn collect(nodes: &[OutlineNode], result: &mut Vec<HeadingRef>) {
    for node in nodes {
        if node.is_heading() {
            result.push(HeadingRef::from_node(node));
        }
        collect(&node.children, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_document_order_across_nesting() {
        let mut h1 = OutlineNode::heading("a", 1, "H1");
        h1.children.push(OutlineNode::heading("b", 2, "H2"));
        let forest = vec![h1, OutlineNode::heading("c", 1, "H3")];

        let seq: Vec<_> = flatten_headings(&forest)
            .into_iter()
            .map(|h| h.text)
            .collect();
        assert_eq!(seq, vec!["H1", "H2", "H3"]);
    }

    #[test]
    fn excludes_paragraphs_and_tables() {
        let mut h1 = OutlineNode::heading("a", 1, "H1");
        h1.children.push(OutlineNode::paragraph("p", "body"));
        h1.children.push(OutlineNode::table("t", 1, 1));
        let forest = vec![h1];

        let seq = flatten_headings(&forest);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].text, "H1");
    }

    #[test]
    fn walks_through_non_headings_for_children() {
        // A paragraph cannot have heading children in practice, but the
        // flattener must not assume that about arbitrary forests.
        let mut para = OutlineNode::paragraph("p", "body");
        para.children.push(OutlineNode::heading("h", 3, "inner"));
        let seq = flatten_headings(&[para]);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].text, "inner");
    }

    #[test]
    fn empty_forest_yields_empty_sequence() {
        assert!(flatten_headings(&[]).is_empty());
    }
}
