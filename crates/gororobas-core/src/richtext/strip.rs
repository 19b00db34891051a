//! Removal of empty text runs before projection

use super::document::Document;
use super::node::Node;

/// Copy of `doc` without text nodes whose text is empty.
///
/// Containers left without children are kept; only text leaves are removed.
pub fn strip_empty_text(doc: &Document) -> Document {
    Document::new(strip_nodes(&doc.content))
}

fn strip_nodes(nodes: &[Node]) -> Vec<Node> {
    nodes.iter().filter_map(strip_node).collect()
}

fn strip_node(node: &Node) -> Option<Node> {
    match node {
        Node::Text { text, .. } if text.is_empty() => None,
        other => Some(other.map_content(strip_nodes)),
    }
}
