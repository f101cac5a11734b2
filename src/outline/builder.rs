//! Outline construction from decoded content.
//!
//! Both builders share the same nesting discipline: an explicit stack of
//! open headings, local to one build call. A new heading pops every stack
//! entry at an equal-or-deeper level (numerically `>=` its own, since lower
//! numbers rank higher), attaches under the new top, and is pushed; leaf
//! nodes attach under the current top without ever being pushed.

use super::heading::{is_heading_line, line_level};
use super::id::{IdGenerator, IdStrategy};
use crate::model::{ElementKind, MarkupElement, OutlineNode};

/// Builds [`OutlineNode`] forests from element streams or raw text.
///
/// Stateless across calls; every build starts with a fresh stack and a
/// fresh id generator.
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    strategy: IdStrategy,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific id strategy for element-stream builds.
    #[must_use]
    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self { strategy }
    }

    /// Build an outline forest from a decoded markup element stream.
    ///
    /// Traversal is depth-first and recurses into every element's children
    /// regardless of kind, since headings, paragraphs, and tables may appear
    /// at any nesting depth in the source markup.
    #[must_use]
    pub fn build_from_elements(&self, elements: &[MarkupElement]) -> Vec<OutlineNode> {
        let mut ids = self.strategy.generator();
        let mut assembler = TreeAssembler::new();
        for element in elements {
            visit_element(element, &mut assembler, ids.as_mut());
        }
        assembler.finish()
    }

    /// Build an outline forest from raw text split into lines.
    ///
    /// Blank lines produce no node but still advance the line index, so node
    /// ids (`line-{index}`) remain stable references into the source text.
    #[must_use]
    pub fn build_from_text(&self, text: &str) -> Vec<OutlineNode> {
        let mut assembler = TreeAssembler::new();

        for (idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let id = format!("line-{idx}");
            if is_heading_line(trimmed) {
                let level = line_level(trimmed);
                assembler.push_heading(OutlineNode::heading(id, level, trimmed));
            } else {
                assembler.attach_leaf(OutlineNode::paragraph(id, trimmed));
            }
        }

        assembler.finish()
    }
}

fn visit_element(
    element: &MarkupElement,
    assembler: &mut TreeAssembler,
    ids: &mut dyn IdGenerator,
) {
    match element.kind {
        ElementKind::Heading { level } => {
            let level = level.clamp(1, 6);
            let text = element.text.trim();
            let id = ids.next_id(text);
            assembler.push_heading(OutlineNode::heading(id, level, text));
        }
        ElementKind::Paragraph => {
            let text = element.text.trim();
            // Empty paragraphs produce no node
            if !text.is_empty() {
                let id = ids.next_id(text);
                assembler.attach_leaf(OutlineNode::paragraph(id, text));
            }
        }
        ElementKind::Table { rows, cols } => {
            let node = OutlineNode::table(ids.next_id(&element.raw), rows, cols);
            assembler.attach_table(node);
        }
        ElementKind::Container => {}
    }

    for child in &element.children {
        visit_element(child, assembler, ids);
    }
}

/// Accumulates a forest with an explicit open-heading stack.
///
/// Open headings live on the stack and are attached to their parent (or the
/// root list) only when popped, which preserves document order among
/// siblings already attached.
struct TreeAssembler {
    roots: Vec<OutlineNode>,
    stack: Vec<OutlineNode>,
}

impl TreeAssembler {
    fn new() -> Self {
        Self {
            roots: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Close every open heading at `level` or deeper, then open this one.
    fn push_heading(&mut self, node: OutlineNode) {
        while self
            .stack
            .last()
            .is_some_and(|top| top.level >= node.level)
        {
            self.close_top();
        }
        self.stack.push(node);
    }

    /// Attach a paragraph under the open heading, or as a new root.
    fn attach_leaf(&mut self, node: OutlineNode) {
        match self.stack.last_mut() {
            Some(top) => top.children.push(node),
            None => self.roots.push(node),
        }
    }

    /// Attach a table under the open heading, falling back to the last root
    /// node. A table before any other node has no valid parent and is dropped.
    fn attach_table(&mut self, node: OutlineNode) {
        if let Some(top) = self.stack.last_mut() {
            top.children.push(node);
        } else if let Some(last_root) = self.roots.last_mut() {
            last_root.children.push(node);
        }
    }

    /// Pop the top heading and attach it to its parent (or the root list).
    fn close_top(&mut self) {
        if let Some(closed) = self.stack.pop() {
            match self.stack.last_mut() {
                Some(parent) => parent.children.push(closed),
                None => self.roots.push(closed),
            }
        }
    }

    fn finish(mut self) -> Vec<OutlineNode> {
        while !self.stack.is_empty() {
            self.close_top();
        }
        self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeKind, SENTINEL_LEVEL};

    fn texts(nodes: &[OutlineNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.text.as_str()).collect()
    }

    #[test]
    fn text_build_nests_paragraph_under_heading() {
        let builder = OutlineBuilder::new();
        let tree = builder.build_from_text("1. A\n  sub paragraph\n2. B\n");

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].text, "1. A");
        assert_eq!(tree[0].level, 1);
        assert_eq!(texts(&tree[0].children), vec!["sub paragraph"]);
        assert_eq!(tree[0].children[0].level, SENTINEL_LEVEL);
        assert_eq!(tree[1].text, "2. B");
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn text_build_ids_derive_from_line_index() {
        let builder = OutlineBuilder::new();
        let tree = builder.build_from_text("1. A\n\nbody\n");

        // Blank line at index 1 is skipped but still counts
        assert_eq!(tree[0].id, "line-0");
        assert_eq!(tree[0].children[0].id, "line-2");
    }

    #[test]
    fn text_build_deeper_heading_nests_shallower_pops() {
        let builder = OutlineBuilder::new();
        let tree = builder.build_from_text("1. top\n11. nested\n2. next top\n");

        assert_eq!(tree.len(), 2);
        assert_eq!(texts(&tree[0].children), vec!["11. nested"]);
        assert_eq!(tree[0].children[0].level, 2);
        assert_eq!(tree[1].text, "2. next top");
    }

    #[test]
    fn blank_only_text_yields_empty_forest() {
        let builder = OutlineBuilder::new();
        assert!(builder.build_from_text("\n   \n\t\n").is_empty());
        assert!(builder.build_from_text("").is_empty());
    }

    #[test]
    fn headingless_text_yields_paragraph_roots() {
        let builder = OutlineBuilder::new();
        let tree = builder.build_from_text("just prose\nmore prose\n");

        assert_eq!(tree.len(), 2);
        assert!(tree.iter().all(|n| n.kind == NodeKind::Paragraph));
    }

    #[test]
    fn element_build_stack_discipline() {
        let builder = OutlineBuilder::with_strategy(IdStrategy::Sequential);
        let elements = vec![
            MarkupElement::heading(1, "Chapter"),
            MarkupElement::paragraph("intro"),
            MarkupElement::heading(2, "Section"),
            MarkupElement::paragraph("body"),
            MarkupElement::heading(1, "Next Chapter"),
        ];
        let tree = builder.build_from_elements(&elements);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].text, "Chapter");
        assert_eq!(texts(&tree[0].children), vec!["intro", "Section"]);
        assert_eq!(texts(&tree[0].children[1].children), vec!["body"]);
        assert_eq!(tree[1].text, "Next Chapter");
    }

    #[test]
    fn element_build_recurses_into_containers() {
        let builder = OutlineBuilder::with_strategy(IdStrategy::Sequential);
        let elements = vec![MarkupElement::container(vec![
            MarkupElement::heading(1, "Buried"),
            MarkupElement::container(vec![MarkupElement::paragraph("deep text")]),
        ])];
        let tree = builder.build_from_elements(&elements);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].text, "Buried");
        assert_eq!(texts(&tree[0].children), vec!["deep text"]);
    }

    #[test]
    fn element_build_skips_empty_paragraphs() {
        let builder = OutlineBuilder::with_strategy(IdStrategy::Sequential);
        let elements = vec![
            MarkupElement::heading(1, "H"),
            MarkupElement::paragraph("   "),
            MarkupElement::paragraph(""),
        ];
        let tree = builder.build_from_elements(&elements);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn table_attaches_under_open_heading() {
        let builder = OutlineBuilder::with_strategy(IdStrategy::Sequential);
        let elements = vec![MarkupElement::heading(1, "Data"), MarkupElement::table(3, 2)];
        let tree = builder.build_from_elements(&elements);

        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].kind, NodeKind::Table);
        assert_eq!(tree[0].children[0].text, "[table] 3 rows x 2 cols");
    }

    #[test]
    fn table_falls_back_to_last_root_node() {
        let builder = OutlineBuilder::with_strategy(IdStrategy::Sequential);
        let elements = vec![MarkupElement::paragraph("lead"), MarkupElement::table(1, 1)];
        let tree = builder.build_from_elements(&elements);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].kind, NodeKind::Table);
    }

    #[test]
    fn leading_table_with_no_parent_is_dropped() {
        let builder = OutlineBuilder::with_strategy(IdStrategy::Sequential);
        let elements = vec![MarkupElement::table(2, 2), MarkupElement::paragraph("after")];
        let tree = builder.build_from_elements(&elements);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].text, "after");
    }

    #[test]
    fn sequential_strategy_makes_element_builds_reproducible() {
        let builder = OutlineBuilder::with_strategy(IdStrategy::Sequential);
        let elements = vec![
            MarkupElement::heading(1, "A"),
            MarkupElement::paragraph("p"),
        ];
        let first = builder.build_from_elements(&elements);
        let second = builder.build_from_elements(&elements);
        assert_eq!(first, second);
    }
}
