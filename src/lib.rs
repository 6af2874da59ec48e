//! pressfeed: content-normalization and caching core for a Notion-backed
//! publishing site.
//!
//! The pipeline: an inbound content request checks the TTL cache; on a
//! miss the raw pages/blocks are fetched from the content API, the
//! normalizer builds the canonical `Article` (property extraction + slug
//! derivation, plus the block renderer when full content is displayed),
//! and the result is cached with a fresh timestamp.
//!
//! A separate, independent path recovers the same `Article` shape from
//! pre-rendered static HTML files via pattern extraction; it shares no
//! state with the live pipeline.

pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod notion;
pub mod properties;
pub mod render;
pub mod service;
pub mod slug;
pub mod static_html;
pub mod utils;

pub use cache::{CacheEntry, TtlCache};
pub use config::ContentConfig;
pub use error::{ContentError, ContentResult};
pub use model::{Article, ContentKind};
pub use normalize::{normalize, normalize_with_excerpt_cap, published_timestamp};
pub use notion::NotionClient;
pub use render::{DisplayNode, InlineSpan, render_blocks};
pub use service::ContentService;
pub use slug::{derive_slug, derive_slug_capped};
pub use static_html::extract_static_article;
