//! Flat block list to display-node rendering
//!
//! Converts the cursor-ordered block list of one page into structured
//! display nodes, after dropping editorial artifacts (alternate-channel
//! excerpts, duplicated headings, duplicated source lines). A pure
//! function of the block list plus the article title; performs no I/O and
//! never errors — unrecognized shapes render nothing for that block.

mod filter;
mod text;

pub use text::InlineSpan;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use filter::{contains_channel_marker, keep_block};
use text::spans_of;

/// One renderable node, in document order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayNode {
    Paragraph {
        spans: Vec<InlineSpan>,
    },
    Heading {
        level: u8,
        spans: Vec<InlineSpan>,
    },
    BulletedItem {
        spans: Vec<InlineSpan>,
    },
    NumberedItem {
        spans: Vec<InlineSpan>,
    },
    /// Display-only checkbox state; never editable in this context
    Todo {
        checked: bool,
        spans: Vec<InlineSpan>,
    },
    Quote {
        spans: Vec<InlineSpan>,
    },
    Code {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Image {
        url: String,
        #[serde(default)]
        caption: String,
    },
    Divider,
}

/// Render an ordered block list into display nodes.
///
/// `article_title` drives the duplicate-heading filter: the first heading
/// is dropped when its text equals, contains, or is contained by the
/// title (case-insensitive, trimmed). Blocks of unknown type are silently
/// skipped — a forward-compatible default, not an error.
#[must_use]
pub fn render_blocks(blocks: &[Value], article_title: &str) -> Vec<DisplayNode> {
    let mut nodes = Vec::with_capacity(blocks.len());
    let mut seen_heading = false;

    for block in blocks {
        let Some(block_type) = block.get("type").and_then(Value::as_str) else {
            continue;
        };
        let payload = block.get(block_type).unwrap_or(&Value::Null);

        // A heading removed as channel markup does not consume the
        // first-heading slot; the next heading is still checked against
        // the title.
        if contains_channel_marker(payload) {
            continue;
        }

        let is_first_heading = block_type.starts_with("heading_") && !seen_heading;
        if block_type.starts_with("heading_") {
            seen_heading = true;
        }

        if !keep_block(block_type, payload, article_title, is_first_heading) {
            continue;
        }

        if let Some(node) = render_one(block_type, payload) {
            nodes.push(node);
        }
    }

    nodes
}

fn render_one(block_type: &str, payload: &Value) -> Option<DisplayNode> {
    match block_type {
        "paragraph" => Some(DisplayNode::Paragraph {
            spans: spans_of(payload),
        }),
        "heading_1" => Some(DisplayNode::Heading {
            level: 1,
            spans: spans_of(payload),
        }),
        "heading_2" => Some(DisplayNode::Heading {
            level: 2,
            spans: spans_of(payload),
        }),
        "heading_3" => Some(DisplayNode::Heading {
            level: 3,
            spans: spans_of(payload),
        }),
        "bulleted_list_item" => Some(DisplayNode::BulletedItem {
            spans: spans_of(payload),
        }),
        "numbered_list_item" => Some(DisplayNode::NumberedItem {
            spans: spans_of(payload),
        }),
        "to_do" => Some(DisplayNode::Todo {
            checked: payload
                .get("checked")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            spans: spans_of(payload),
        }),
        "quote" => Some(DisplayNode::Quote {
            spans: spans_of(payload),
        }),
        "code" => Some(DisplayNode::Code {
            text: text::concatenated(payload),
            language: payload
                .get("language")
                .and_then(Value::as_str)
                .filter(|l| !l.is_empty() && *l != "plain text")
                .map(str::to_string),
        }),
        "image" => {
            // External link or hosted file; skip entirely when neither
            // resolves to a non-empty URL.
            let url = match payload.get("type").and_then(Value::as_str) {
                Some("external") => payload.pointer("/external/url"),
                Some("file") => payload.pointer("/file/url"),
                _ => payload
                    .pointer("/external/url")
                    .or_else(|| payload.pointer("/file/url")),
            }
            .and_then(Value::as_str)
            .filter(|u| !u.is_empty())?;

            let caption = payload
                .get("caption")
                .map(crate::properties::plain_text)
                .unwrap_or_default();

            Some(DisplayNode::Image {
                url: url.to_string(),
                caption,
            })
        }
        "divider" => Some(DisplayNode::Divider),
        _ => None,
    }
}
