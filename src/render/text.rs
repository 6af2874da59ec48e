//! Inline rich-text span extraction

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One independently styled run of text.
///
/// Annotations are independent, composable flags: a span can be bold AND
/// italic AND code at once. A hyperlink wraps the styled span, not the
/// reverse, so `href` sits alongside the flags rather than replacing them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InlineSpan {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub code: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strikethrough: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl InlineSpan {
    /// Plain unstyled text, mostly for tests
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Extract the styled spans of a block payload's `rich_text` array.
/// Spans with no recoverable text are dropped; malformed annotation
/// objects degrade to all-off flags.
pub(crate) fn spans_of(payload: &Value) -> Vec<InlineSpan> {
    let Some(items) = payload.get("rich_text").and_then(Value::as_array) else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let text = item
                .get("plain_text")
                .and_then(Value::as_str)
                .or_else(|| item.pointer("/text/content").and_then(Value::as_str))?;
            if text.is_empty() {
                return None;
            }

            let flag = |name: &str| {
                item.pointer(&format!("/annotations/{name}"))
                    .and_then(Value::as_bool)
                    .unwrap_or(false)
            };

            let href = item
                .get("href")
                .and_then(Value::as_str)
                .or_else(|| item.pointer("/text/link/url").and_then(Value::as_str))
                .filter(|h| !h.is_empty())
                .map(str::to_string);

            Some(InlineSpan {
                text: text.to_string(),
                bold: flag("bold"),
                italic: flag("italic"),
                code: flag("code"),
                underline: flag("underline"),
                strikethrough: flag("strikethrough"),
                href,
            })
        })
        .collect()
}

/// Concatenated plain text of a payload's `rich_text` array
pub(crate) fn concatenated(payload: &Value) -> String {
    payload
        .get("rich_text")
        .map(crate::properties::plain_text)
        .unwrap_or_default()
}
