//! Outline tree node types.

use serde::{Deserialize, Serialize};

/// Level value marking a node as non-hierarchical (paragraphs, tables).
///
/// Heading levels occupy 1..=6; the sentinel sits outside that range so the
/// nesting stack never pops for a non-heading node.
pub const SENTINEL_LEVEL: u8 = 99;

/// Kind of a node in the structural tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Heading,
    Paragraph,
    Table,
}

/// A node in a document's structural outline.
///
/// Nodes form a forest: a document may have several top-level headings, or
/// leading paragraphs before any heading. `children` holds, in document
/// order, every node that appeared after this one and before the next
/// heading of equal-or-lower level rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineNode {
    /// Unique within one build; stability across rebuilds depends on the
    /// id-generation strategy used by the builder.
    pub id: String,
    pub kind: NodeKind,
    /// 1-6 for headings, [`SENTINEL_LEVEL`] otherwise.
    pub level: u8,
    /// Trimmed textual content. For tables, a synthesized summary.
    pub text: String,
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn heading(id: impl Into<String>, level: u8, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Heading,
            level,
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn paragraph(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Paragraph,
            level: SENTINEL_LEVEL,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Table node with a summary synthesized from its dimensions.
    pub fn table(id: impl Into<String>, rows: usize, cols: usize) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Table,
            level: SENTINEL_LEVEL,
            text: format!("[table] {rows} rows x {cols} cols"),
            children: Vec::new(),
        }
    }

    /// Whether this node participates in the hierarchy skeleton.
    #[must_use]
    pub fn is_heading(&self) -> bool {
        self.kind == NodeKind::Heading && self.level != SENTINEL_LEVEL
    }
}

/// Find a node by id anywhere in a forest (depth-first).
///
/// Line-based builds derive ids from line indices, so callers can use this
/// for stable scroll-to-node style lookups.
#[must_use]
pub fn find_node<'a>(forest: &'a [OutlineNode], id: &str) -> Option<&'a OutlineNode> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Lightweight heading projection used for matching and results.
///
/// Carries only what the matcher and reports need, so comparison never
/// clones subtrees out of the forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingRef {
    pub id: String,
    pub text: String,
    pub level: u8,
}

impl HeadingRef {
    pub fn from_node(node: &OutlineNode) -> Self {
        Self {
            id: node.id.clone(),
            text: node.text.clone(),
            level: node.level,
        }
    }
}
