//! Notion REST API client
//!
//! Thin, pagination-aware client over the content API. Pages and blocks
//! stay as raw `serde_json::Value` all the way to the normalizer — the
//! upstream property shapes are not contractually guaranteed, so decoding
//! them into rigid structs here would just move the breakage forward.

mod client;
mod types;

pub use client::NotionClient;
pub use types::PaginatedList;
