//! Read accessors for `ContentConfig`

use std::time::Duration;

use super::types::ContentConfig;

impl ContentConfig {
    #[must_use]
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    #[must_use]
    pub fn blog_page_id(&self) -> Option<&str> {
        self.blog_page_id.as_deref()
    }

    #[must_use]
    pub fn news_database_id(&self) -> Option<&str> {
        self.news_database_id.as_deref()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn notion_version(&self) -> &str {
        &self.notion_version
    }

    #[must_use]
    pub fn blog_cache_ttl(&self) -> Duration {
        self.blog_cache_ttl
    }

    #[must_use]
    pub fn news_cache_ttl(&self) -> Duration {
        self.news_cache_ttl
    }

    #[must_use]
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    #[must_use]
    pub fn excerpt_max_chars(&self) -> usize {
        self.excerpt_max_chars
    }
}
