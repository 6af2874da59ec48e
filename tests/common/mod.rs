//! Test utilities and fixture builders for the pressfeed test suite

use serde_json::{Value, json};

/// A title-typed property payload
#[allow(dead_code)]
pub fn title_property(text: &str) -> Value {
    json!({ "type": "title", "title": [{ "plain_text": text }] })
}

/// A rich_text-typed property payload
#[allow(dead_code)]
pub fn rich_text_property(text: &str) -> Value {
    json!({ "type": "rich_text", "rich_text": [{ "plain_text": text }] })
}

/// A date-typed property payload
#[allow(dead_code)]
pub fn date_property(start: &str) -> Value {
    json!({ "type": "date", "date": { "start": start } })
}

/// A select-typed property payload
#[allow(dead_code)]
pub fn select_property(name: &str) -> Value {
    json!({ "type": "select", "select": { "name": name } })
}

/// A multi_select-typed property payload
#[allow(dead_code)]
pub fn multi_select_property(names: &[&str]) -> Value {
    let options: Vec<Value> = names.iter().map(|n| json!({ "name": n })).collect();
    json!({ "type": "multi_select", "multi_select": options })
}

/// A url-typed property payload
#[allow(dead_code)]
pub fn url_property(url: &str) -> Value {
    json!({ "type": "url", "url": url })
}

/// A full page record with the given properties object
#[allow(dead_code)]
pub fn page(id: &str, created_time: &str, properties: Value) -> Value {
    json!({
        "object": "page",
        "id": id,
        "created_time": created_time,
        "last_edited_time": created_time,
        "properties": properties
    })
}

/// A paragraph block with one unstyled span
#[allow(dead_code)]
pub fn paragraph(id: &str, text: &str) -> Value {
    json!({
        "object": "block",
        "id": id,
        "type": "paragraph",
        "paragraph": { "rich_text": [{ "plain_text": text, "annotations": {} }] }
    })
}

/// A heading block of the given level
#[allow(dead_code)]
pub fn heading(id: &str, level: u8, text: &str) -> Value {
    let key = format!("heading_{level}");
    let mut block = json!({ "object": "block", "id": id, "type": key.as_str() });
    block[key.as_str()] = json!({ "rich_text": [{ "plain_text": text, "annotations": {} }] });
    block
}

/// A code block with one span and a language tag
#[allow(dead_code)]
pub fn code_block(id: &str, text: &str, language: &str) -> Value {
    json!({
        "object": "block",
        "id": id,
        "type": "code",
        "code": {
            "rich_text": [{ "plain_text": text, "annotations": {} }],
            "language": language
        }
    })
}

/// One page of a cursor-paginated listing
#[allow(dead_code)]
pub fn paginated(results: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "object": "list",
        "results": results,
        "next_cursor": next_cursor,
        "has_more": next_cursor.is_some()
    })
}
