//! Extraction of the people and vegetables a document mentions

use std::collections::HashSet;

use super::attrs::{MentionKind, MentionV1, Versioned};
use super::document::Document;
use super::node::Node;

/// Every mention in walk order, upgraded to the latest payload version.
pub fn mentions(doc: &Document) -> Vec<MentionV1> {
    doc.walk()
        .filter_map(|node| match node {
            Node::Mention { attrs } => Some(attrs.data.clone().upgrade()),
            _ => None,
        })
        .collect()
}

/// First mention of each distinct `(kind, id)` entity, in walk order.
pub fn distinct_mentions(doc: &Document) -> Vec<MentionV1> {
    let mut seen = HashSet::new();
    mentions(doc)
        .into_iter()
        .filter(|mention| seen.insert((mention.kind, mention.id.clone())))
        .collect()
}

/// Distinct `(kind, id)` pairs of mentioned entities, in first-seen order.
pub fn mentioned_ids(doc: &Document) -> Vec<(MentionKind, String)> {
    distinct_mentions(doc)
        .into_iter()
        .map(|mention| (mention.kind, mention.id))
        .collect()
}
