//! Formatting marks carried by text nodes

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAttrs {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorAttrs {
    /// CSS colour; the editor writes `null` after the colour is cleared
    #[serde(default)]
    pub color: Option<String>,
}

/// Formatting annotation on a text node.
///
/// A text node is expected to carry each mark type at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strike,
    Link {
        attrs: LinkAttrs,
    },
    #[serde(rename = "textStyle", alias = "textColor")]
    TextColor {
        attrs: ColorAttrs,
    },
}

impl Mark {
    pub fn link(href: impl Into<String>) -> Self {
        Mark::Link {
            attrs: LinkAttrs {
                href: href.into(),
                target: None,
            },
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Mark::TextColor {
            attrs: ColorAttrs {
                color: Some(color.into()),
            },
        }
    }

    /// Wire name of the mark type
    pub fn type_name(&self) -> &'static str {
        match self {
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Underline => "underline",
            Mark::Strike => "strike",
            Mark::Link { .. } => "link",
            Mark::TextColor { .. } => "textStyle",
        }
    }
}

/// True when some mark type appears more than once.
pub fn has_repeated_marks(marks: &[Mark]) -> bool {
    marks.iter().enumerate().any(|(i, mark)| {
        marks[..i]
            .iter()
            .any(|earlier| earlier.type_name() == mark.type_name())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mark_wire_names() {
        let marks: Vec<Mark> = serde_json::from_value(json!([
            { "type": "bold" },
            { "type": "link", "attrs": { "href": "https://gororobas.com", "target": "_blank", "rel": "noopener" } },
            { "type": "textStyle", "attrs": { "color": "#3b7a57" } },
        ]))
        .unwrap();

        assert_eq!(marks[0], Mark::Bold);
        assert!(matches!(&marks[1], Mark::Link { attrs } if attrs.href == "https://gororobas.com"));
        assert_eq!(marks[2], Mark::color("#3b7a57"));
    }

    #[test]
    fn test_text_color_alias() {
        let mark: Mark =
            serde_json::from_value(json!({ "type": "textColor", "attrs": { "color": "red" } }))
                .unwrap();
        assert_eq!(mark, Mark::color("red"));
        assert_eq!(serde_json::to_value(&mark).unwrap()["type"], "textStyle");
    }

    #[test]
    fn test_cleared_color() {
        let mark: Mark =
            serde_json::from_value(json!({ "type": "textStyle", "attrs": { "color": null } }))
                .unwrap();
        assert_eq!(
            mark,
            Mark::TextColor {
                attrs: ColorAttrs { color: None }
            }
        );
    }

    #[test]
    fn test_unknown_mark_rejected() {
        assert!(serde_json::from_value::<Mark>(json!({ "type": "highlight" })).is_err());
    }

    #[test]
    fn test_has_repeated_marks() {
        assert!(!has_repeated_marks(&[Mark::Bold, Mark::Italic, Mark::link("/a")]));
        assert!(has_repeated_marks(&[Mark::link("/a"), Mark::Bold, Mark::link("/b")]));
        assert!(!has_repeated_marks(&[]));
    }
}
