//! Type-safe builder for `ContentConfig` using the typestate pattern
//!
//! The API token is the one field with no sensible default, so the
//! builder makes `build()` available only after it has been set.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::time::Duration;

use crate::utils::{
    DEFAULT_BLOG_CACHE_TTL_SECS, DEFAULT_CACHE_CAPACITY, DEFAULT_NEWS_CACHE_TTL_SECS,
    EXCERPT_MAX_CHARS, NOTION_API_URL, NOTION_VERSION,
};

use super::types::ContentConfig;

// Type states for the builder
pub struct WithApiToken;

pub struct ContentConfigBuilder<State = ()> {
    pub(crate) api_token: Option<String>,
    pub(crate) blog_page_id: Option<String>,
    pub(crate) news_database_id: Option<String>,
    pub(crate) base_url: String,
    pub(crate) notion_version: String,
    pub(crate) blog_cache_ttl: Duration,
    pub(crate) news_cache_ttl: Duration,
    pub(crate) cache_capacity: usize,
    pub(crate) excerpt_max_chars: usize,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ContentConfigBuilder<()> {
    fn default() -> Self {
        Self {
            api_token: None,
            blog_page_id: None,
            news_database_id: None,
            base_url: NOTION_API_URL.to_string(),
            notion_version: NOTION_VERSION.to_string(),
            blog_cache_ttl: Duration::from_secs(DEFAULT_BLOG_CACHE_TTL_SECS),
            news_cache_ttl: Duration::from_secs(DEFAULT_NEWS_CACHE_TTL_SECS),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            excerpt_max_chars: EXCERPT_MAX_CHARS,
            _phantom: PhantomData,
        }
    }
}

impl ContentConfig {
    /// Create a builder for configuring a `ContentConfig` with a fluent
    /// interface
    #[must_use]
    pub fn builder() -> ContentConfigBuilder<()> {
        ContentConfigBuilder::default()
    }
}

impl ContentConfigBuilder<()> {
    pub fn api_token(self, token: impl Into<String>) -> ContentConfigBuilder<WithApiToken> {
        ContentConfigBuilder {
            api_token: Some(token.into()),
            blog_page_id: self.blog_page_id,
            news_database_id: self.news_database_id,
            base_url: self.base_url,
            notion_version: self.notion_version,
            blog_cache_ttl: self.blog_cache_ttl,
            news_cache_ttl: self.news_cache_ttl,
            cache_capacity: self.cache_capacity,
            excerpt_max_chars: self.excerpt_max_chars,
            _phantom: PhantomData,
        }
    }
}

// Build method only available once the API token is set
impl ContentConfigBuilder<WithApiToken> {
    pub fn build(self) -> Result<ContentConfig> {
        let api_token = self.api_token.ok_or_else(|| anyhow!("api_token is required"))?;
        if api_token.trim().is_empty() {
            return Err(anyhow!("api_token must not be empty"));
        }

        // Trailing slashes would double up when joining request paths
        let base_url = self.base_url.trim_end_matches('/').to_string();

        Ok(ContentConfig {
            api_token,
            blog_page_id: self.blog_page_id,
            news_database_id: self.news_database_id,
            base_url,
            notion_version: self.notion_version,
            blog_cache_ttl: self.blog_cache_ttl,
            news_cache_ttl: self.news_cache_ttl,
            cache_capacity: self.cache_capacity,
            excerpt_max_chars: self.excerpt_max_chars,
        })
    }
}

// Optional fields settable at any state
impl<State> ContentConfigBuilder<State> {
    /// Set the parent page whose child pages form the blog
    #[must_use]
    pub fn blog_page_id(mut self, id: impl Into<String>) -> Self {
        self.blog_page_id = Some(id.into());
        self
    }

    /// Set the database queried for news articles
    #[must_use]
    pub fn news_database_id(mut self, id: impl Into<String>) -> Self {
        self.news_database_id = Some(id.into());
        self
    }

    /// Override the content API base URL (tests point this at a mock
    /// server)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the wire-format version header
    #[must_use]
    pub fn notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    #[must_use]
    pub fn blog_cache_ttl(mut self, ttl: Duration) -> Self {
        self.blog_cache_ttl = ttl;
        self
    }

    #[must_use]
    pub fn news_cache_ttl(mut self, ttl: Duration) -> Self {
        self.news_cache_ttl = ttl;
        self
    }

    /// Set the per-cache entry ceiling
    #[must_use]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the derived-excerpt length cap
    #[must_use]
    pub fn excerpt_max_chars(mut self, max_chars: usize) -> Self {
        self.excerpt_max_chars = max_chars;
        self
    }
}
