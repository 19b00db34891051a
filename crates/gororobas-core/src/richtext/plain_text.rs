//! Plain-text projection of rich-text documents.
//!
//! Text runs are emitted verbatim with marks dropped. Every text block
//! (paragraph or heading) after the first is preceded by the block separator,
//! hard breaks become `\n`, and atoms (image, video, mention) emit nothing.
//! Lists add no bullets, numbers or indentation.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::Document;
use super::mark::has_repeated_marks;
use super::node::Node;
use super::strip::strip_empty_text;
use crate::error::{GororobasError, Result};

/// Options for [`to_plain_text_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlainTextOptions {
    /// Inserted between consecutive text blocks
    pub block_separator: String,
}

impl Default for PlainTextOptions {
    fn default() -> Self {
        Self {
            block_separator: "\n".to_string(),
        }
    }
}

/// Result of projecting an untyped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// The value was a document; this is its plain text
    Text(String),
    /// The value was not a document; this is the value as compact JSON, keys
    /// in input order
    Fallback(String),
}

impl Projection {
    pub fn as_str(&self) -> &str {
        match self {
            Projection::Text(text) | Projection::Fallback(text) => text,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Projection::Text(text) | Projection::Fallback(text) => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Projection::Fallback(_))
    }

    /// Text of a real projection, or an invalid-document error for a fallback
    pub fn strict(self) -> Result<String> {
        match self {
            Projection::Text(text) => Ok(text),
            Projection::Fallback(_) => Err(GororobasError::InvalidDocument {
                reason: "value does not match the document schema".to_string(),
            }),
        }
    }
}

/// Project a document to plain text with the default `\n` block separator.
pub fn to_plain_text(doc: &Document) -> String {
    to_plain_text_with(doc, &PlainTextOptions::default())
}

/// Project a document to plain text.
pub fn to_plain_text_with(doc: &Document, options: &PlainTextOptions) -> String {
    let start = Instant::now();
    let stripped = strip_empty_text(doc);

    let mut collector = TextCollector {
        out: String::new(),
        separator: &options.block_separator,
        first_block: true,
    };
    for node in &stripped.content {
        collector.visit(node);
    }

    tracing::trace!(
        elapsed = ?start.elapsed(),
        blocks = doc.len(),
        chars = collector.out.len(),
        "to_plain_text"
    );
    collector.out
}

/// Project any JSON value, falling back to the JSON text of the value when it
/// is not a document. Never fails.
pub fn project_value(value: &Value) -> Projection {
    project_value_with(value, &PlainTextOptions::default())
}

pub fn project_value_with(value: &Value, options: &PlainTextOptions) -> Projection {
    match Document::from_value(value) {
        Ok(doc) => Projection::Text(to_plain_text_with(&doc, options)),
        Err(e) => {
            tracing::debug!(error = %e, "plain-text projection fell back to JSON");
            Projection::Fallback(value.to_string())
        }
    }
}

struct TextCollector<'a> {
    out: String,
    separator: &'a str,
    first_block: bool,
}

impl TextCollector<'_> {
    fn visit(&mut self, node: &Node) {
        match node {
            Node::Text { text, marks } => {
                if has_repeated_marks(marks) {
                    tracing::debug!(text = %text, "text run repeats a mark type");
                }
                self.out.push_str(text);
            }
            Node::HardBreak => self.out.push('\n'),
            Node::Image { .. } | Node::Video { .. } | Node::Mention { .. } => {}
            Node::Paragraph { content } | Node::Heading { content, .. } => {
                if self.first_block {
                    self.first_block = false;
                } else {
                    self.out.push_str(self.separator);
                }
                self.visit_all(content);
            }
            Node::BulletList { content }
            | Node::OrderedList { content, .. }
            | Node::ListItem { content } => self.visit_all(content),
        }
    }

    fn visit_all(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.visit(node);
        }
    }
}
