//! Rich-text documents: notes, descriptions and bios.
//!
//! A [`Document`] is a `doc` root holding a tree of [`Node`]s, exchanged as
//! plain JSON. Every operation here is a pure function over an immutable tree:
//!
//! - [`to_plain_text`] / [`project_value`]: plain-text projection
//! - [`from_plain_text`]: one paragraph per line of scraped text
//! - [`is_renderable`]: whether a stored value has anything to display
//! - [`truncate_content`] / [`preview`]: bounded previews
//! - [`mentions`]: people and vegetables a document cites

pub mod attrs;
mod document;
mod lift;
pub mod mark;
mod mentions;
pub mod node;
mod plain_text;
mod renderable;
mod strip;
mod truncate;

pub use document::{Document, Walk};
pub use lift::from_plain_text;
pub use mark::Mark;
pub use mentions::{distinct_mentions, mentioned_ids, mentions};
pub use node::{HeadingLevel, Node};
pub use plain_text::{
    project_value, project_value_with, to_plain_text, to_plain_text_with, PlainTextOptions,
    Projection,
};
pub use renderable::{is_renderable, renderable};
pub use strip::strip_empty_text;
pub use truncate::{preview, truncate_chars, truncate_content, PreviewOptions, ELLIPSIS};
