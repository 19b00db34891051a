//! Whether a stored value has anything worth displaying

use serde_json::Value;

use super::document::Document;
use super::node::Node;
use super::plain_text::to_plain_text;

impl Document {
    /// Whether the document has anything worth displaying.
    ///
    /// A lone paragraph with no text is what an untouched editor produces and
    /// does not count; a lone heading, list or atom does, and so does any
    /// document with two or more top-level blocks.
    pub fn is_renderable(&self) -> bool {
        match self.content.as_slice() {
            [] => false,
            [Node::Paragraph { .. }] => !to_plain_text(self).is_empty(),
            _ => true,
        }
    }
}

/// The validated document when `value` is a renderable document.
pub fn renderable(value: &Value) -> Option<Document> {
    match Document::from_value(value) {
        Ok(doc) if doc.is_renderable() => Some(doc),
        Ok(doc) => {
            tracing::debug!(
                blocks = doc.len(),
                first = doc.content.first().map(Node::type_name),
                "document has no renderable content"
            );
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "value is not a document");
            None
        }
    }
}

/// Whether `value` is a document with renderable content. Schema mismatches
/// are a `false`, never an error.
pub fn is_renderable(value: &Value) -> bool {
    renderable(value).is_some()
}
