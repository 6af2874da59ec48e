//! Canonical normalized content records
//!
//! One `Article` model covers both content pipelines (blog posts sourced
//! from child pages, news articles sourced from a database query). The
//! per-pipeline differences live in the normalizer's candidate tables, not
//! in separate record types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which content pipeline a page came from.
///
/// Blog posts are child pages of a parent page and keep the uncapped slug
/// derivation; news articles come from a database query and cap their slug
/// length. The normalizer also selects different property candidate tables
/// per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    BlogPost,
    NewsArticle,
}

/// The canonical output record for one page.
///
/// Invariant: `title`, `slug`, and `published_at` are never empty — every
/// extraction path behind them has a terminal fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Page identifier, carried through unchanged from the raw page
    pub id: String,
    /// Never empty; falls back to a literal placeholder
    pub title: String,
    /// URL-safe, never empty; falls back to the id with separators stripped
    pub slug: String,
    /// Possibly empty
    #[serde(default)]
    pub excerpt: String,
    /// ISO-8601, always populated (explicit date property, else page
    /// creation time, else normalization time)
    pub published_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Raw content blocks, present only when the full item was requested.
    /// Attached verbatim; block-tree rendering is a presentation concern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Value>>,
    /// Body fragment recovered by the static-HTML path. Always `None` on
    /// the live-fetch path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
}
