//! Tests for block rendering and the editorial-artifact filters

mod common;

use common::*;
use pressfeed::render::{DisplayNode, InlineSpan, render_blocks};
use serde_json::json;

#[test]
fn test_paragraphs_render_in_order() {
    let blocks = vec![paragraph("b1", "first"), paragraph("b2", "second")];
    let nodes = render_blocks(&blocks, "Title");
    assert_eq!(
        nodes,
        vec![
            DisplayNode::Paragraph { spans: vec![InlineSpan::plain("first")] },
            DisplayNode::Paragraph { spans: vec![InlineSpan::plain("second")] },
        ]
    );
}

#[test]
fn test_first_heading_matching_title_is_dropped() {
    let blocks = vec![
        heading("b1", 1, "Coal Prices Rise"),
        paragraph("b2", "body"),
        heading("b3", 2, "Coal Prices Rise"),
    ];
    let nodes = render_blocks(&blocks, "coal prices rise");

    // Only the FIRST heading is subject to the title check
    assert_eq!(nodes.len(), 2);
    assert!(matches!(nodes[0], DisplayNode::Paragraph { .. }));
    assert!(matches!(nodes[1], DisplayNode::Heading { level: 2, .. }));
}

#[test]
fn test_first_heading_partial_title_match_is_dropped_both_directions() {
    // Heading contained by title
    let blocks = vec![heading("b1", 1, "Coal Prices")];
    assert!(render_blocks(&blocks, "Coal Prices Rise Again").is_empty());

    // Heading containing title
    let blocks = vec![heading("b1", 1, "Breaking: Coal Prices Rise")];
    assert!(render_blocks(&blocks, "Coal Prices Rise").is_empty());
}

#[test]
fn test_first_heading_unrelated_to_title_is_kept() {
    let blocks = vec![heading("b1", 1, "Background")];
    let nodes = render_blocks(&blocks, "Coal Prices Rise");
    assert_eq!(nodes.len(), 1);
}

#[test]
fn test_channel_marker_blocks_are_dropped() {
    let blocks = vec![
        paragraph("b1", "Telegram Version below"),
        paragraph("b2", "telegramversion"),
        paragraph("b3", "real content"),
    ];
    let nodes = render_blocks(&blocks, "Title");
    assert_eq!(nodes.len(), 1);
    assert_eq!(
        nodes[0],
        DisplayNode::Paragraph { spans: vec![InlineSpan::plain("real content")] }
    );
}

#[test]
fn test_templated_channel_code_is_dropped() {
    let blocks = vec![
        code_block("b1", "<b>Bench Energy</b> #coal", "plain text"),
        code_block("b2", "let x = 1;", "rust"),
    ];
    let nodes = render_blocks(&blocks, "Title");
    assert_eq!(nodes.len(), 1);
    assert_eq!(
        nodes[0],
        DisplayNode::Code { text: "let x = 1;".to_string(), language: Some("rust".to_string()) }
    );
}

#[test]
fn test_expert_view_template_code_is_dropped() {
    let blocks = vec![
        code_block("b1", "Bench Energy Expert View\n• coal up\n• freight flat", "plain text"),
        // The phrase alone, or bullets alone, is not templated markup
        code_block("b2", "Bench Energy Expert View summary follows", "plain text"),
        code_block("b3", "• coal up\n• freight flat", "plain text"),
    ];
    let nodes = render_blocks(&blocks, "Title");
    let texts: Vec<&str> = nodes
        .iter()
        .filter_map(|n| match n {
            DisplayNode::Code { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        texts,
        vec!["Bench Energy Expert View summary follows", "• coal up\n• freight flat"]
    );
}

#[test]
fn test_dropped_channel_heading_does_not_consume_first_heading_slot() {
    let blocks = vec![
        heading("b1", 2, "Telegram Version"),
        heading("b2", 1, "My Title"),
    ];
    // The channel-marker heading is removed before first-heading
    // bookkeeping, so the title-duplicate heading is still dropped.
    assert!(render_blocks(&blocks, "My Title").is_empty());
}

#[test]
fn test_source_prefix_paragraph_is_dropped() {
    let blocks = vec![
        paragraph("b1", "Source: Example Wire"),
        paragraph("b2", "  source: lowercase too"),
        paragraph("b3", "sources are plural, keep me"),
    ];
    let nodes = render_blocks(&blocks, "Title");
    // "sources..." starts with "source" but carries no colon right after
    assert_eq!(nodes.len(), 1);
}

#[test]
fn test_code_language_plain_text_is_omitted() {
    let blocks = vec![code_block("b1", "just text", "plain text")];
    let nodes = render_blocks(&blocks, "Title");
    assert_eq!(
        nodes[0],
        DisplayNode::Code { text: "just text".to_string(), language: None }
    );
}

#[test]
fn test_annotations_and_links_are_carried() {
    let blocks = vec![json!({
        "object": "block",
        "id": "b1",
        "type": "paragraph",
        "paragraph": { "rich_text": [
            { "plain_text": "bold", "annotations": { "bold": true } },
            { "plain_text": " plain ", "annotations": {} },
            { "plain_text": "link", "annotations": { "italic": true }, "href": "https://example.com" }
        ]}
    })];

    let nodes = render_blocks(&blocks, "Title");
    let DisplayNode::Paragraph { spans } = &nodes[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(spans.len(), 3);
    assert!(spans[0].bold);
    assert_eq!(spans[1], InlineSpan::plain(" plain "));
    assert!(spans[2].italic);
    assert_eq!(spans[2].href.as_deref(), Some("https://example.com"));
}

#[test]
fn test_image_resolves_external_and_hosted_urls() {
    let blocks = vec![
        json!({
            "type": "image",
            "image": { "type": "external", "external": { "url": "https://cdn.example.com/a.png" },
                       "caption": [{ "plain_text": "chart" }] }
        }),
        json!({
            "type": "image",
            "image": { "type": "file", "file": { "url": "https://hosted.example.com/b.png" } }
        }),
        // No resolvable URL renders nothing
        json!({ "type": "image", "image": { "type": "external", "external": { "url": "" } } }),
    ];

    let nodes = render_blocks(&blocks, "Title");
    assert_eq!(
        nodes,
        vec![
            DisplayNode::Image {
                url: "https://cdn.example.com/a.png".to_string(),
                caption: "chart".to_string(),
            },
            DisplayNode::Image {
                url: "https://hosted.example.com/b.png".to_string(),
                caption: String::new(),
            },
        ]
    );
}

#[test]
fn test_list_items_todo_quote_divider() {
    let blocks = vec![
        json!({ "type": "bulleted_list_item",
                "bulleted_list_item": { "rich_text": [{ "plain_text": "bullet" }] } }),
        json!({ "type": "numbered_list_item",
                "numbered_list_item": { "rich_text": [{ "plain_text": "numbered" }] } }),
        json!({ "type": "to_do",
                "to_do": { "rich_text": [{ "plain_text": "task" }], "checked": true } }),
        json!({ "type": "quote",
                "quote": { "rich_text": [{ "plain_text": "quoted" }] } }),
        json!({ "type": "divider", "divider": {} }),
    ];

    let nodes = render_blocks(&blocks, "Title");
    assert_eq!(
        nodes,
        vec![
            DisplayNode::BulletedItem { spans: vec![InlineSpan::plain("bullet")] },
            DisplayNode::NumberedItem { spans: vec![InlineSpan::plain("numbered")] },
            DisplayNode::Todo { checked: true, spans: vec![InlineSpan::plain("task")] },
            DisplayNode::Quote { spans: vec![InlineSpan::plain("quoted")] },
            DisplayNode::Divider,
        ]
    );
}

#[test]
fn test_unknown_block_types_are_skipped() {
    let blocks = vec![
        json!({ "type": "synced_block", "synced_block": {} }),
        json!({ "no_type_at_all": true }),
        paragraph("b1", "kept"),
    ];
    let nodes = render_blocks(&blocks, "Title");
    assert_eq!(nodes.len(), 1);
}
