//! Raw page to `Article` normalization
//!
//! A pure mapping from one raw content-source page (plus, optionally, its
//! block list) to the canonical record. Every field tries its sources in
//! a fixed priority order and degrades to a documented fallback; nothing
//! in here returns an error, because the upstream schema is not
//! contractually guaranteed and a partial or malformed entry must not
//! break list rendering.
//!
//! The per-pipeline differences are data (candidate tables below), not
//! code: both kinds run through the same extractor.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::model::{Article, ContentKind};
use crate::properties::{
    Candidate, PropertyKind, page_properties, pick_date, pick_file_url, pick_multi_select,
    pick_text, plain_text,
};
use crate::slug::{derive_slug, derive_slug_capped};
use crate::utils::{EXCERPT_MAX_CHARS, NEWS_SLUG_MAX_CHARS, UNTITLED, truncate_chars};

/// Title property candidates, blog pipeline. Blog pages come from child
/// pages, where the title property keeps its database casing quirks.
const BLOG_TITLE: &[Candidate] = &[
    ("title", PropertyKind::Title),
    ("Title", PropertyKind::Title),
    ("Name", PropertyKind::Title),
];

/// Title property candidates, news pipeline. Database rows usually call
/// the title column `Name`; some older rows carry `Title` as rich text.
const NEWS_TITLE: &[Candidate] = &[
    ("Name", PropertyKind::Title),
    ("Title", PropertyKind::RichText),
    ("title", PropertyKind::Title),
    ("name", PropertyKind::Title),
];

/// Explicit slug property candidates (both pipelines)
const SLUG: &[Candidate] = &[
    ("Slug", PropertyKind::RichText),
    ("URL", PropertyKind::RichText),
];

const BLOG_EXCERPT: &[Candidate] = &[
    ("Excerpt", PropertyKind::RichText),
    ("Description", PropertyKind::RichText),
];

const NEWS_EXCERPT: &[Candidate] = &[
    ("Description", PropertyKind::RichText),
    ("description", PropertyKind::RichText),
    ("Summary", PropertyKind::RichText),
    ("summary", PropertyKind::RichText),
    ("Description", PropertyKind::Title),
];

const PUBLISHED_DATE_KEYS: &[&str] = &["Published Date", "PublishedDate", "Date", "date"];

const AUTHOR: &[Candidate] = &[
    ("Author", PropertyKind::RichText),
    ("Author", PropertyKind::Select),
];

const TAG_KEYS: &[&str] = &["Tags", "Tag"];

const SOURCE_URL: &[Candidate] = &[
    ("Source URL", PropertyKind::Url),
    ("SourceURL", PropertyKind::Url),
    ("URL", PropertyKind::Url),
    ("url", PropertyKind::Url),
    ("Source URL", PropertyKind::RichText),
];

const SOURCE_NAME: &[Candidate] = &[
    ("Source Name", PropertyKind::RichText),
    ("SourceName", PropertyKind::RichText),
    ("Source", PropertyKind::RichText),
    ("source", PropertyKind::RichText),
    ("Source Name", PropertyKind::Title),
];

const CATEGORY: &[Candidate] = &[
    ("Category", PropertyKind::Select),
    ("category", PropertyKind::Select),
    ("Category", PropertyKind::RichText),
];

const COVER_IMAGE_KEYS: &[&str] = &["Cover Image", "Cover"];

/// Build the canonical record from a raw page, with the default derived-
/// excerpt cap.
#[must_use]
pub fn normalize(page: &Value, blocks: Option<Vec<Value>>, kind: ContentKind) -> Article {
    normalize_with_excerpt_cap(page, blocks, kind, EXCERPT_MAX_CHARS)
}

/// Build the canonical record from a raw page.
///
/// When `blocks` is supplied it is attached verbatim as `content`; the
/// first paragraph also becomes the excerpt fallback. `excerpt_cap`
/// bounds only that derived fallback, never an explicit excerpt property.
#[must_use]
pub fn normalize_with_excerpt_cap(
    page: &Value,
    blocks: Option<Vec<Value>>,
    kind: ContentKind,
    excerpt_cap: usize,
) -> Article {
    let properties = page_properties(page);
    let id = page
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let title = extract_title(page, kind);

    let slug = pick_text(&properties, SLUG)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| match kind {
            ContentKind::BlogPost => derive_slug(&title, &id),
            ContentKind::NewsArticle => derive_slug_capped(&title, &id, NEWS_SLUG_MAX_CHARS),
        });

    let excerpt_candidates = match kind {
        ContentKind::BlogPost => BLOG_EXCERPT,
        ContentKind::NewsArticle => NEWS_EXCERPT,
    };
    let excerpt = pick_text(&properties, excerpt_candidates)
        .or_else(|| first_paragraph_excerpt(blocks.as_deref(), excerpt_cap))
        .unwrap_or_default();

    let published_at = pick_date(&properties, PUBLISHED_DATE_KEYS)
        .or_else(|| {
            page.get("created_time")
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| Utc::now().to_rfc3339());

    let (author, tags) = match kind {
        ContentKind::BlogPost => (
            pick_text(&properties, AUTHOR),
            pick_multi_select(&properties, TAG_KEYS),
        ),
        ContentKind::NewsArticle => (None, Vec::new()),
    };

    let (source_url, source_name, category) = match kind {
        ContentKind::BlogPost => (None, None, None),
        ContentKind::NewsArticle => (
            pick_text(&properties, SOURCE_URL),
            pick_text(&properties, SOURCE_NAME),
            pick_text(&properties, CATEGORY),
        ),
    };

    let cover_image = page
        .pointer("/cover/external/url")
        .or_else(|| page.pointer("/cover/file/url"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .or_else(|| pick_file_url(&properties, COVER_IMAGE_KEYS));

    Article {
        id,
        title,
        slug,
        excerpt,
        published_at,
        author,
        tags,
        category,
        source_url,
        source_name,
        cover_image,
        content: blocks,
        body_html: None,
    }
}

/// Resolve the title through its full fallback chain: child-page inline
/// title, then the per-kind property candidates, then a bare `title`
/// field on the page object itself, then the literal placeholder.
fn extract_title(page: &Value, kind: ContentKind) -> String {
    if let Some(title) = child_page_title(page) {
        return title;
    }

    let properties = page_properties(page);
    let candidates = match kind {
        ContentKind::BlogPost => BLOG_TITLE,
        ContentKind::NewsArticle => NEWS_TITLE,
    };
    if let Some(title) = pick_text(&properties, candidates) {
        return title;
    }

    if let Some(title) = loose_title(page.get("title")) {
        return title;
    }

    UNTITLED.to_string()
}

/// Inline title of a `child_page` block stub. Full page records do not
/// carry this; stubs that failed the upgrade to a full record do.
fn child_page_title(page: &Value) -> Option<String> {
    let raw = page.pointer("/child_page/title")?;
    let title = match raw {
        Value::String(s) => s.clone(),
        Value::Array(_) => plain_text(raw),
        _ => String::new(),
    };
    if title.trim().is_empty() { None } else { Some(title) }
}

/// A `title` field sitting directly on the page object — either a plain
/// string or an array of rich-text spans (or bare strings).
fn loose_title(raw: Option<&Value>) -> Option<String> {
    let title = match raw? {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.as_str(),
                other => other.get("plain_text").and_then(Value::as_str).unwrap_or(""),
            })
            .collect::<Vec<_>>()
            .join(""),
        _ => String::new(),
    };
    if title.trim().is_empty() { None } else { Some(title) }
}

/// Concatenated plain text of the first paragraph block, capped to
/// `excerpt_cap` characters.
fn first_paragraph_excerpt(blocks: Option<&[Value]>, excerpt_cap: usize) -> Option<String> {
    let blocks = blocks?;
    let first_paragraph = blocks
        .iter()
        .find(|b| b.get("type").and_then(Value::as_str) == Some("paragraph"))?;
    let spans = first_paragraph.pointer("/paragraph/rich_text")?;
    let text = plain_text(spans);
    if text.is_empty() {
        None
    } else {
        Some(truncate_chars(&text, excerpt_cap).to_string())
    }
}

/// Parse `published_at` into an epoch-second key for descending sort.
///
/// The field mixes full RFC 3339 timestamps (page creation times) with
/// date-only values (explicit date properties); unparseable values sort
/// to the epoch rather than erroring.
#[must_use]
pub fn published_timestamp(article: &Article) -> i64 {
    let raw = article.published_at.as_str();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.timestamp();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return naive.and_utc().timestamp();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map_or(0, |dt| dt.and_utc().timestamp());
    }
    0
}
