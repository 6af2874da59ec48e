//! Shared configuration constants for pressfeed
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Base URL of the Notion REST API
pub const NOTION_API_URL: &str = "https://api.notion.com/v1";

/// Notion API version sent with every request
///
/// Notion versions its wire format by date. Property payload shapes are
/// stable within a version, so bumping this requires re-checking the
/// property extractor against the new response shapes.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Default TTL for cached blog posts: 5 minutes
///
/// Blog content changes rarely; five minutes keeps the editor feedback
/// loop tolerable while absorbing repeated list-page hits.
pub const DEFAULT_BLOG_CACHE_TTL_SECS: u64 = 5 * 60;

/// Default TTL for cached news articles: 15 minutes
///
/// News entries are published in batches and then left alone, so a longer
/// window than the blog is safe.
pub const DEFAULT_NEWS_CACHE_TTL_SECS: u64 = 15 * 60;

/// Default maximum number of cache entries per cache
///
/// When an insert would reach this ceiling, the single oldest entry is
/// evicted first. One entry per article slug plus the list entry keeps
/// realistic sites well under this number.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Maximum length of the excerpt derived from the first paragraph block
///
/// Applies only to the derived fallback; an explicit Excerpt/Description
/// property is carried through untruncated.
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Maximum slug length for news articles
///
/// News titles are wire-service headlines and can run very long; the cap
/// bounds URL length. Applied after hyphen collapsing, with trailing
/// hyphens re-trimmed.
pub const NEWS_SLUG_MAX_CHARS: usize = 80;

/// Placeholder title for pages whose every title source is empty
pub const UNTITLED: &str = "Untitled";
