//! Node kinds of a rich-text document.
//!
//! The node set is closed: consumers `match` exhaustively, so a new kind is a
//! compile error in the projector, the renderability check and the strip
//! pass until each handles it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attrs::{AtomAttrs, ImageData, MentionData, VideoData};
use super::mark::Mark;

/// Heading level, 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;
}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(HeadingLevel(level))
        } else {
            Err(InvalidHeadingLevel(level))
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> u8 {
        level.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHeadingLevel(pub u8);

impl fmt::Display for InvalidHeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "heading level {} out of range {}..={}",
            self.0,
            HeadingLevel::MIN,
            HeadingLevel::MAX
        )
    }
}

impl std::error::Error for InvalidHeadingLevel {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: HeadingLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedListAttrs {
    #[serde(default = "default_start")]
    pub start: u32,
}

fn default_start() -> u32 {
    1
}

/// One node below the `doc` root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Paragraph {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    Heading {
        attrs: HeadingAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    BulletList {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    OrderedList {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        attrs: Option<OrderedListAttrs>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    ListItem {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<Node>,
    },
    Text {
        #[serde(default)]
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
    HardBreak,
    Image {
        attrs: AtomAttrs<ImageData>,
    },
    Video {
        attrs: AtomAttrs<VideoData>,
    },
    Mention {
        attrs: AtomAttrs<MentionData>,
    },
}

impl Node {
    /// Unmarked text run
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// Paragraph holding the given inline nodes
    pub fn paragraph(content: Vec<Node>) -> Self {
        Node::Paragraph { content }
    }

    pub fn heading(level: HeadingLevel, content: Vec<Node>) -> Self {
        Node::Heading {
            attrs: HeadingAttrs { level },
            content,
        }
    }

    /// List item wrapping a single paragraph of text
    pub fn list_item(text: impl Into<String>) -> Self {
        Node::ListItem {
            content: vec![Node::paragraph(vec![Node::text(text)])],
        }
    }

    pub fn image(data: impl Into<ImageData>) -> Self {
        Node::Image {
            attrs: AtomAttrs::new(data.into()),
        }
    }

    pub fn video(data: impl Into<VideoData>) -> Self {
        Node::Video {
            attrs: AtomAttrs::new(data.into()),
        }
    }

    pub fn mention(data: impl Into<MentionData>) -> Self {
        Node::Mention {
            attrs: AtomAttrs::new(data.into()),
        }
    }

    /// Wire name of the node type
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::BulletList { .. } => "bulletList",
            Node::OrderedList { .. } => "orderedList",
            Node::ListItem { .. } => "listItem",
            Node::Text { .. } => "text",
            Node::HardBreak => "hardBreak",
            Node::Image { .. } => "image",
            Node::Video { .. } => "video",
            Node::Mention { .. } => "mention",
        }
    }

    /// Child nodes; empty for leaves and atoms
    pub fn content(&self) -> &[Node] {
        match self {
            Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::BulletList { content }
            | Node::OrderedList { content, .. }
            | Node::ListItem { content } => content,
            Node::Text { .. }
            | Node::HardBreak
            | Node::Image { .. }
            | Node::Video { .. }
            | Node::Mention { .. } => &[],
        }
    }

    /// Copy of this node with its children replaced by `f(children)`.
    /// Leaves and atoms are cloned unchanged.
    pub fn map_content<F>(&self, f: F) -> Node
    where
        F: FnOnce(&[Node]) -> Vec<Node>,
    {
        match self {
            Node::Paragraph { content } => Node::Paragraph {
                content: f(content),
            },
            Node::Heading { attrs, content } => Node::Heading {
                attrs: *attrs,
                content: f(content),
            },
            Node::BulletList { content } => Node::BulletList {
                content: f(content),
            },
            Node::OrderedList { attrs, content } => Node::OrderedList {
                attrs: *attrs,
                content: f(content),
            },
            Node::ListItem { content } => Node::ListItem {
                content: f(content),
            },
            leaf @ (Node::Text { .. }
            | Node::HardBreak
            | Node::Image { .. }
            | Node::Video { .. }
            | Node::Mention { .. }) => leaf.clone(),
        }
    }
}
