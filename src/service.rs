//! Content service: cache → fetch → normalize orchestration
//!
//! The outbound surface consumed by the presentation layer. Each
//! operation checks the cache first, fetches and normalizes on a miss,
//! and stores the result with a fresh timestamp.
//!
//! The cache is best-effort deduplication, not an at-most-one-fetch
//! guarantee: two concurrent requests for the same key can both miss,
//! both fetch, and both write (last write wins, entries are replaced
//! wholesale). The mutex protects the map itself, not the fetch window —
//! there is deliberately no per-key single-flight.

use std::cmp::Reverse;

use parking_lot::Mutex;
use serde_json::Value;

use crate::cache::TtlCache;
use crate::config::ContentConfig;
use crate::error::{ContentError, ContentResult};
use crate::model::{Article, ContentKind};
use crate::normalize::{normalize_with_excerpt_cap, published_timestamp};
use crate::notion::NotionClient;

/// Cache key for the blog collection
pub const POSTS_LIST_KEY: &str = "posts-list";
/// Cache key for the news collection
pub const ARTICLES_LIST_KEY: &str = "articles-list";

/// Cache key for a single blog post
#[must_use]
pub fn post_key(slug: &str) -> String {
    format!("post-{slug}")
}

/// Cache key for a single news article
#[must_use]
pub fn article_key(slug: &str) -> String {
    format!("article-{slug}")
}

#[derive(Debug, Clone)]
enum CachedValue {
    Single(Article),
    List(Vec<Article>),
}

/// Process-wide content service
pub struct ContentService {
    config: ContentConfig,
    client: NotionClient,
    posts_cache: Mutex<TtlCache<CachedValue>>,
    news_cache: Mutex<TtlCache<CachedValue>>,
}

impl ContentService {
    /// Build the service and its HTTP client from configuration.
    ///
    /// # Errors
    /// Fails only if the HTTP client cannot be constructed.
    pub fn new(config: ContentConfig) -> ContentResult<Self> {
        let client = NotionClient::new(&config)?;
        let posts_cache = Mutex::new(TtlCache::new(
            config.blog_cache_ttl(),
            config.cache_capacity(),
        ));
        let news_cache = Mutex::new(TtlCache::new(
            config.news_cache_ttl(),
            config.cache_capacity(),
        ));
        Ok(Self {
            config,
            client,
            posts_cache,
            news_cache,
        })
    }

    /// All blog posts, metadata only, newest first.
    ///
    /// Block trees are deliberately not fetched for list views. Upstream
    /// failures degrade to an empty list (logged by the client); only a
    /// missing source id is an error.
    pub async fn get_posts(&self) -> ContentResult<Vec<Article>> {
        if let Some(posts) = self.cached_list(&self.posts_cache, POSTS_LIST_KEY) {
            return Ok(posts);
        }

        let parent = self
            .config
            .blog_page_id()
            .ok_or(ContentError::NotConfigured("blog page id"))?
            .to_string();

        let pages = self.client.list_child_pages(&parent).await;
        let posts = self.normalize_list(&pages, ContentKind::BlogPost);

        self.posts_cache
            .lock()
            .insert(POSTS_LIST_KEY, CachedValue::List(posts.clone()));
        Ok(posts)
    }

    /// One blog post by slug, with its full block list attached
    pub async fn get_post(&self, slug: &str) -> ContentResult<Article> {
        let key = post_key(slug);
        if let Some(post) = self.cached_single(&self.posts_cache, &key) {
            return Ok(post);
        }

        let parent = self
            .config
            .blog_page_id()
            .ok_or(ContentError::NotConfigured("blog page id"))?
            .to_string();

        let pages = self.client.list_child_pages(&parent).await;
        let page = self
            .find_by_slug(&pages, slug, ContentKind::BlogPost)
            .ok_or_else(|| ContentError::NotFound(slug.to_string()))?;

        let article = self.fetch_full(page, ContentKind::BlogPost).await;
        self.posts_cache
            .lock()
            .insert(key, CachedValue::Single(article.clone()));
        Ok(article)
    }

    /// All news articles, metadata only, newest first
    pub async fn get_news_list(&self) -> ContentResult<Vec<Article>> {
        if let Some(articles) = self.cached_list(&self.news_cache, ARTICLES_LIST_KEY) {
            return Ok(articles);
        }

        let database = self
            .config
            .news_database_id()
            .ok_or(ContentError::NotConfigured("news database id"))?
            .to_string();

        let pages = self.client.query_database_pages(&database).await;
        let articles = self.normalize_list(&pages, ContentKind::NewsArticle);

        self.news_cache
            .lock()
            .insert(ARTICLES_LIST_KEY, CachedValue::List(articles.clone()));
        Ok(articles)
    }

    /// One news article by slug, with its full block list attached
    pub async fn get_news_article(&self, slug: &str) -> ContentResult<Article> {
        let key = article_key(slug);
        if let Some(article) = self.cached_single(&self.news_cache, &key) {
            return Ok(article);
        }

        let database = self
            .config
            .news_database_id()
            .ok_or(ContentError::NotConfigured("news database id"))?
            .to_string();

        let pages = self.client.query_database_pages(&database).await;
        let page = self
            .find_by_slug(&pages, slug, ContentKind::NewsArticle)
            .ok_or_else(|| ContentError::NotFound(slug.to_string()))?;

        let article = self.fetch_full(page, ContentKind::NewsArticle).await;
        self.news_cache
            .lock()
            .insert(key, CachedValue::Single(article.clone()));
        Ok(article)
    }

    fn cached_list(&self, cache: &Mutex<TtlCache<CachedValue>>, key: &str) -> Option<Vec<Article>> {
        let cache = cache.lock();
        match cache.get(key) {
            Some(CachedValue::List(list)) => {
                log::debug!("cache hit for '{key}'");
                Some(list.clone())
            }
            _ => None,
        }
    }

    fn cached_single(&self, cache: &Mutex<TtlCache<CachedValue>>, key: &str) -> Option<Article> {
        let cache = cache.lock();
        match cache.get(key) {
            Some(CachedValue::Single(article)) => {
                log::debug!("cache hit for '{key}'");
                Some(article.clone())
            }
            _ => None,
        }
    }

    fn normalize_list(&self, pages: &[Value], kind: ContentKind) -> Vec<Article> {
        let cap = self.config.excerpt_max_chars();
        let mut articles: Vec<Article> = pages
            .iter()
            .map(|page| normalize_with_excerpt_cap(page, None, kind, cap))
            .collect();
        articles.sort_by_key(|a| Reverse(published_timestamp(a)));
        articles
    }

    /// Find the raw page whose normalized slug matches. Slugs are derived
    /// deterministically, so re-deriving here always agrees with what the
    /// list view handed out.
    fn find_by_slug<'a>(
        &self,
        pages: &'a [Value],
        slug: &str,
        kind: ContentKind,
    ) -> Option<&'a Value> {
        let cap = self.config.excerpt_max_chars();
        pages
            .iter()
            .find(|page| normalize_with_excerpt_cap(page, None, kind, cap).slug == slug)
    }

    async fn fetch_full(&self, page: &Value, kind: ContentKind) -> Article {
        let page_id = page
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let blocks = self.client.list_all_blocks(&page_id).await;
        normalize_with_excerpt_cap(page, Some(blocks), kind, self.config.excerpt_max_chars())
    }
}
