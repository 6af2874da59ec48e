//! Core configuration types for content fetching

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration struct for the content service
///
/// The API token is required and enforced at compile time by the builder.
/// Source identifiers are optional here: which ones must be present
/// depends on which pipelines the caller actually uses, and the service
/// surfaces a distinct not-configured error when a needed one is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Notion integration token sent as the bearer credential
    pub(crate) api_token: String,

    /// Parent page whose child pages are the blog posts
    pub(crate) blog_page_id: Option<String>,

    /// Database queried for news articles
    pub(crate) news_database_id: Option<String>,

    /// Base URL of the content API. Overridable so tests can point the
    /// client at a local mock server.
    pub(crate) base_url: String,

    /// Wire-format version header sent with every request
    pub(crate) notion_version: String,

    pub(crate) blog_cache_ttl: Duration,
    pub(crate) news_cache_ttl: Duration,
    pub(crate) cache_capacity: usize,

    /// Cap for the excerpt derived from the first paragraph block.
    /// Explicit excerpt properties are never truncated.
    pub(crate) excerpt_max_chars: usize,
}
