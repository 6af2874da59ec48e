//! Wire types for paginated list responses

use serde::Deserialize;
use serde_json::Value;

/// One page of a cursor-paginated listing (database query or block
/// children). Results stay opaque; only the pagination envelope is typed.
#[derive(Debug, Deserialize)]
pub struct PaginatedList {
    #[serde(default)]
    pub results: Vec<Value>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}
