//! Block and character limits for previews

use serde::{Deserialize, Serialize};

use super::document::Document;
use super::plain_text::{to_plain_text_with, PlainTextOptions};

/// Appended to previews that were cut short
pub const ELLIPSIS: char = '…';

/// Bounds for [`preview`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    /// Top-level blocks kept before projecting
    pub max_nodes: usize,
    /// Characters kept from the projected text
    pub max_chars: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_nodes: 3,
            max_chars: 280,
        }
    }
}

/// Copy of `doc` keeping at most `max_nodes` top-level blocks. Nested content
/// of kept blocks is untouched.
pub fn truncate_content(doc: &Document, max_nodes: usize) -> Document {
    Document::new(doc.content.iter().take(max_nodes).cloned().collect())
}

/// Cap `text` at `max_chars` characters, marking a cut with [`ELLIPSIS`].
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut kept = text[..cut].trim_end().to_string();
            kept.push(ELLIPSIS);
            kept
        }
    }
}

/// Bounded plain-text preview: the first `max_nodes` blocks, projected, capped
/// at `max_chars` characters.
pub fn preview(doc: &Document, options: &PreviewOptions, text_options: &PlainTextOptions) -> String {
    let truncated = truncate_content(doc, options.max_nodes);
    let text = to_plain_text_with(&truncated, text_options);
    truncate_chars(&text, options.max_chars)
}
