//! The document root and its pre-order walk

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::node::Node;
use crate::error::{GororobasError, Result};

/// Root of a rich-text value, serialized as `{"type": "doc", "content": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Root", into = "Root")]
pub struct Document {
    /// Top-level blocks, in order
    pub content: Vec<Node>,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum Root {
    Doc {
        #[serde(default)]
        content: Vec<Node>,
    },
}

impl From<Root> for Document {
    fn from(root: Root) -> Self {
        match root {
            Root::Doc { content } => Document { content },
        }
    }
}

impl From<Document> for Root {
    fn from(doc: Document) -> Self {
        Root::Doc {
            content: doc.content,
        }
    }
}

impl Document {
    pub fn new(content: Vec<Node>) -> Self {
        Self { content }
    }

    /// Validate an untyped JSON value against the document schema
    pub fn from_value(value: &Value) -> Result<Self> {
        Document::deserialize(value).map_err(GororobasError::invalid_document)
    }

    /// Parse and validate a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Number of top-level blocks
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Depth-first, left-to-right iterator over every node below the root
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.content.iter().rev().collect(),
        }
    }
}

/// Pre-order traversal returned by [`Document::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.content().iter().rev());
        Some(node)
    }
}
