//! Lifting plain text into a document, one paragraph per line

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use super::document::Document;
use super::node::Node;

/// Runs of two or more newlines
static NEWLINE_RUNS: OnceLock<Option<Regex>> = OnceLock::new();

fn newline_runs() -> Option<&'static Regex> {
    NEWLINE_RUNS
        .get_or_init(|| match Regex::new(r"\n{2,}") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile newline regex");
                None
            }
        })
        .as_ref()
}

/// Build a document with one paragraph per line of `text`.
///
/// Runs of blank lines collapse to a single line break first. Each line,
/// including an empty one, becomes a paragraph holding one text node with
/// the line verbatim.
pub fn from_plain_text(text: &str) -> Document {
    let collapsed = match newline_runs() {
        Some(re) => re.replace_all(text, "\n"),
        None => collapse_newlines(text).into(),
    };

    let content = collapsed
        .split('\n')
        .map(|line| Node::paragraph(vec![Node::text(line)]))
        .collect();

    Document::new(content)
}

fn collapse_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_newline = false;
    for c in text.chars() {
        if !(c == '\n' && prev_newline) {
            out.push(c);
        }
        prev_newline = c == '\n';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::plain_text::to_plain_text;

    fn lines(doc: &Document) -> Vec<&str> {
        doc.content
            .iter()
            .map(|block| match block.content() {
                [Node::Text { text, .. }] => text.as_str(),
                other => panic!("unexpected paragraph content: {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_one_paragraph_per_line() {
        let doc = from_plain_text("Plantei feijão hoje\nRegarei amanhã");
        assert_eq!(lines(&doc), vec!["Plantei feijão hoje", "Regarei amanhã"]);
        assert!(doc
            .content
            .iter()
            .all(|node| matches!(node, Node::Paragraph { .. })));
    }

    #[test]
    fn test_blank_line_runs_collapse() {
        let doc = from_plain_text("a\n\n\n\nb\n\nc");
        assert_eq!(lines(&doc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_manual_collapse_matches_regex() {
        for text in ["", "a", "a\nb", "a\n\n\nb\n\nc", "\n\n", "x\n\n"] {
            let re = newline_runs().unwrap();
            assert_eq!(collapse_newlines(text), re.replace_all(text, "\n"));
        }
    }

    #[test]
    fn test_empty_string_yields_single_empty_paragraph() {
        let doc = from_plain_text("");
        assert_eq!(doc, Document::new(vec![Node::paragraph(vec![Node::text("")])]));
    }

    #[test]
    fn test_leading_and_trailing_newlines_keep_empty_paragraphs() {
        let doc = from_plain_text("\n\nmeio\n");
        assert_eq!(lines(&doc), vec!["", "meio", ""]);
        assert_eq!(to_plain_text(&doc), "\nmeio\n");
    }

    #[test]
    fn test_lines_are_verbatim() {
        let doc = from_plain_text("  recuo  \n\tcom tab");
        assert_eq!(lines(&doc), vec!["  recuo  ", "\tcom tab"]);
    }
}
