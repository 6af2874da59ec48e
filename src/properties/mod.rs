//! Typed accessors over loosely-typed Notion property bags
//!
//! Different content sources name semantically identical fields
//! differently (`Title` vs `title` vs `Name`) and give them different
//! declared types (`title` vs `rich_text` arrays for the same logical
//! field). Nothing upstream guarantees a key exists or has a given shape,
//! so every read here checks BOTH the key and the declared type tag before
//! touching the type-specific payload. A key with the right name but the
//! wrong type is treated as absent, not as an error.
//!
//! Absence is always a normal, silently-handled case: no function in this
//! module returns an error or panics.

use serde_json::{Map, Value};

/// Declared Notion property types this crate reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Title,
    RichText,
    Date,
    Url,
    Select,
    MultiSelect,
    Files,
    Checkbox,
}

impl PropertyKind {
    /// The upstream type tag. The payload field carries the same name as
    /// the tag (`{"type": "date", "date": {...}}`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            PropertyKind::Title => "title",
            PropertyKind::RichText => "rich_text",
            PropertyKind::Date => "date",
            PropertyKind::Url => "url",
            PropertyKind::Select => "select",
            PropertyKind::MultiSelect => "multi_select",
            PropertyKind::Files => "files",
            PropertyKind::Checkbox => "checkbox",
        }
    }
}

/// An ordered candidate for a logical field: a key name plus the type the
/// property must declare for the read to count.
pub type Candidate<'a> = (&'a str, PropertyKind);

/// Look up `key` in the bag and return its type-specific payload, but only
/// if the property declares exactly `kind`.
#[must_use]
pub fn typed_payload<'a>(
    bag: &'a Map<String, Value>,
    key: &str,
    kind: PropertyKind,
) -> Option<&'a Value> {
    let property = bag.get(key)?;
    let tag = property.get("type")?.as_str()?;
    if tag != kind.tag() {
        return None;
    }
    property.get(kind.tag())
}

/// Concatenate the plain text of a rich-text array.
///
/// Spans missing `plain_text` fall back to `text.content`; spans with
/// neither contribute nothing.
#[must_use]
pub fn plain_text(spans: &Value) -> String {
    let Some(items) = spans.as_array() else {
        return String::new();
    };
    let mut out = String::new();
    for item in items {
        if let Some(text) = item.get("plain_text").and_then(Value::as_str) {
            out.push_str(text);
        } else if let Some(text) = item
            .pointer("/text/content")
            .and_then(Value::as_str)
        {
            out.push_str(text);
        }
    }
    out
}

/// Return the first non-empty text value among the candidates.
///
/// Text extraction depends on the candidate's kind: title and rich-text
/// payloads are concatenated plain text, url payloads are the string
/// itself, select payloads are the option name. Whitespace-only values
/// count as empty and the chain moves on.
#[must_use]
pub fn pick_text(bag: &Map<String, Value>, candidates: &[Candidate]) -> Option<String> {
    for &(key, kind) in candidates {
        let Some(payload) = typed_payload(bag, key, kind) else {
            continue;
        };
        let text = match kind {
            PropertyKind::Title | PropertyKind::RichText => plain_text(payload),
            PropertyKind::Url => payload.as_str().unwrap_or_default().to_string(),
            PropertyKind::Select => payload
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            _ => String::new(),
        };
        if !text.trim().is_empty() {
            return Some(text);
        }
    }
    None
}

/// Return the first non-empty date start among the candidate keys.
#[must_use]
pub fn pick_date(bag: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        let Some(payload) = typed_payload(bag, key, PropertyKind::Date) else {
            continue;
        };
        if let Some(start) = payload.get("start").and_then(Value::as_str)
            && !start.is_empty()
        {
            return Some(start.to_string());
        }
    }
    None
}

/// Return the option names of the first multi-select candidate that has
/// any. Missing or wrong-typed keys yield an empty list, never an error.
#[must_use]
pub fn pick_multi_select(bag: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    for key in keys {
        let Some(payload) = typed_payload(bag, key, PropertyKind::MultiSelect) else {
            continue;
        };
        let Some(options) = payload.as_array() else {
            continue;
        };
        let names: Vec<String> = options
            .iter()
            .filter_map(|o| o.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect();
        if !names.is_empty() {
            return names;
        }
    }
    Vec::new()
}

/// Return the URL of the first file in the first files-typed candidate,
/// preferring an external link over a hosted-file reference.
#[must_use]
pub fn pick_file_url(bag: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        let Some(payload) = typed_payload(bag, key, PropertyKind::Files) else {
            continue;
        };
        let Some(first) = payload.as_array().and_then(|files| files.first()) else {
            continue;
        };
        let url = first
            .pointer("/external/url")
            .or_else(|| first.pointer("/file/url"))
            .and_then(Value::as_str);
        if let Some(url) = url
            && !url.is_empty()
        {
            return Some(url.to_string());
        }
    }
    None
}

/// The properties bag of a raw page, or an empty bag when the page has
/// none. Callers never need to distinguish the two.
#[must_use]
pub fn page_properties(page: &Value) -> Map<String, Value> {
    page.get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}
