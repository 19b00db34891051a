//! Integration tests for the rich-text document model

use gororobas_core::richtext::{
    from_plain_text, is_renderable, mentioned_ids, preview, project_value, strip_empty_text,
    to_plain_text, truncate_content, Document, Node, PlainTextOptions, PreviewOptions,
    Projection,
};
use serde_json::json;

/// A note as stored by the editor: heading, marked text, a list, an image,
/// a mention and an embedded video.
fn stored_note() -> serde_json::Value {
    json!({
        "type": "doc",
        "content": [
            {
                "type": "heading",
                "attrs": { "level": 2 },
                "content": [{ "type": "text", "text": "Agrofloresta no quintal" }],
            },
            {
                "type": "paragraph",
                "content": [
                    { "type": "text", "text": "Comecei com " },
                    { "type": "text", "text": "bananeiras", "marks": [{ "type": "bold" }] },
                    { "type": "text", "text": " e " },
                    {
                        "type": "mention",
                        "attrs": { "data": {
                            "version": 1,
                            "kind": "vegetable",
                            "id": "veg-mandioca",
                            "label": "Mandioca",
                        } },
                    },
                    { "type": "text", "text": "." },
                    { "type": "hardBreak" },
                    {
                        "type": "text",
                        "text": "Veja o guia",
                        "marks": [{ "type": "link", "attrs": { "href": "https://gororobas.com/guia" } }],
                    },
                ],
            },
            {
                "type": "image",
                "attrs": { "data": {
                    "version": 1,
                    "asset_id": "image-quintal",
                    "label": "O quintal em março",
                } },
            },
            {
                "type": "orderedList",
                "attrs": { "start": 1 },
                "content": [
                    { "type": "listItem", "content": [
                        { "type": "paragraph", "content": [{ "type": "text", "text": "capinar" }] },
                    ] },
                    { "type": "listItem", "content": [
                        { "type": "paragraph", "content": [{ "type": "text", "text": "cobrir o solo" }] },
                    ] },
                ],
            },
            {
                "type": "video",
                "attrs": { "data": { "version": 1, "provider": "youtube", "video_id": "x1y2z3" } },
            },
        ],
    })
}

#[test]
fn test_stored_note_projects_to_plain_text() {
    let projection = project_value(&stored_note());
    assert_eq!(
        projection,
        Projection::Text(
            "Agrofloresta no quintal\nComecei com bananeiras e .\nVeja o guia\ncapinar\ncobrir o solo"
                .to_string()
        )
    );
}

#[test]
fn test_stored_note_survives_json_round_trip() {
    let doc = Document::from_value(&stored_note()).unwrap();
    let reparsed = Document::from_value(&serde_json::to_value(&doc).unwrap()).unwrap();
    assert_eq!(reparsed, doc);
    assert!(doc.is_renderable());
}

#[test]
fn test_stored_note_mentions() {
    let doc = Document::from_value(&stored_note()).unwrap();
    let ids = mentioned_ids(&doc);
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].1, "veg-mandioca");
}

#[test]
fn test_strip_idempotent_on_stored_note() {
    let mut doc = Document::from_value(&stored_note()).unwrap();
    doc.content.push(Node::paragraph(vec![Node::text(""), Node::text("")]));

    let once = strip_empty_text(&doc);
    assert_eq!(strip_empty_text(&once), once);
}

#[test]
fn test_projector_never_fails_on_arbitrary_json() {
    let values = [
        json!(true),
        json!(-1.5),
        json!({}),
        json!({ "type": "doc", "content": [null] }),
        json!({ "type": "doc", "content": [{ "type": "text", "text": 3 }] }),
        json!({ "type": "doc", "content": [{ "type": "mention", "attrs": {} }] }),
        json!("doc"),
    ];

    for value in values {
        let projection = project_value(&value);
        assert_eq!(projection.into_string(), value.to_string());
    }
}

#[test]
fn test_lifter_round_trip_without_blank_lines() {
    let samples = [
        "",
        "uma linha",
        "linha um\nlinha dois",
        "\ncomeça vazio",
        "termina vazio\n",
        "  espaços  \n\tTabs\tno meio ",
        "Ervas: hortelã, manjericão, alecrim",
    ];

    for sample in samples {
        assert_eq!(to_plain_text(&from_plain_text(sample)), sample);
    }
}

#[test]
fn test_lifter_collapses_blank_lines() {
    let lifted = from_plain_text("Plantei feijão hoje\n\nRegarei amanhã");

    assert_eq!(
        lifted,
        Document::new(vec![
            Node::paragraph(vec![Node::text("Plantei feijão hoje")]),
            Node::paragraph(vec![Node::text("Regarei amanhã")]),
        ])
    );
    assert_eq!(to_plain_text(&lifted), "Plantei feijão hoje\nRegarei amanhã");
}

#[test]
fn test_renderability_rules() {
    assert!(!is_renderable(&json!({
        "type": "doc",
        "content": [{ "type": "paragraph", "content": [] }],
    })));
    assert!(is_renderable(&json!({
        "type": "doc",
        "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "hello" }] }],
    })));
    assert!(is_renderable(&json!({
        "type": "doc",
        "content": [
            { "type": "paragraph", "content": [] },
            { "type": "paragraph", "content": [] },
        ],
    })));
}

#[test]
fn test_lifted_empty_string_is_not_renderable() {
    let value = serde_json::to_value(from_plain_text("")).unwrap();
    assert!(!is_renderable(&value));
}

#[test]
fn test_truncation_bounds_length() {
    let doc = Document::from_value(&stored_note()).unwrap();
    for n in [0, 1, 2, 5, 10] {
        assert_eq!(truncate_content(&doc, n).content.len(), doc.len().min(n));
    }
}

#[test]
fn test_preview_of_stored_note() {
    let doc = Document::from_value(&stored_note()).unwrap();
    let options = PreviewOptions {
        max_nodes: 1,
        max_chars: 12,
    };

    assert_eq!(
        preview(&doc, &options, &PlainTextOptions::default()),
        "Agrofloresta…"
    );
}
