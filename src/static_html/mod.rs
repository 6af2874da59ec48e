//! Metadata recovery from pre-rendered static post files
//!
//! Some posts are distributed as baked HTML files rather than fetched
//! live. This path recovers title, publish date, description, body
//! fragment, and first image from that HTML with text-pattern matching
//! against an assumed — but never validated — page shape. Any missing
//! match yields an empty or defaulted field, never an error.
//!
//! The output is the same `Article` shape as the live path so callers are
//! source-agnostic, but nothing else is shared: markup text and
//! structured property bags are fundamentally different inputs, and
//! unifying the extraction mechanisms would help neither.

mod patterns;

use chrono::Utc;

use crate::model::Article;
use crate::slug::derive_slug;
use crate::utils::{EXCERPT_MAX_CHARS, truncate_chars};

use patterns::*;

/// Extract one article from a pre-rendered HTML document.
///
/// `site_name` is the trailing `| Site Name` suffix stripped from the
/// `<title>`; `fallback_stem` (normally the file stem) seeds the title
/// and slug when the document yields nothing usable.
#[must_use]
pub fn extract_static_article(html: &str, site_name: &str, fallback_stem: &str) -> Article {
    let title = extract_title(html, site_name, fallback_stem);
    let body_html = extract_body(html);
    let description = extract_description(html, &body_html);
    let published_at = extract_published(html).unwrap_or_else(|| Utc::now().to_rfc3339());
    let cover_image = extract_first_image(html);
    let source_name = source_name_from_title(&title);

    Article {
        id: fallback_stem.to_string(),
        slug: derive_slug(&title, fallback_stem),
        title,
        excerpt: description,
        published_at,
        author: None,
        tags: Vec::new(),
        category: None,
        source_url: None,
        source_name,
        cover_image,
        content: None,
        body_html: Some(body_html),
    }
}

/// Title from `<title>`, entities decoded, trailing `| Site Name`
/// stripped. Falls back to the file stem with hyphens spaced out and
/// words capitalized.
#[must_use]
pub fn extract_title(html: &str, site_name: &str, fallback_stem: &str) -> String {
    let raw = TITLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| html_escape::decode_html_entities(m.as_str().trim()).into_owned());

    match raw {
        Some(title) if !title.trim().is_empty() => strip_site_suffix(&title, site_name),
        _ => title_from_stem(fallback_stem),
    }
}

/// Publish date from the `article:published_time` meta tag, else from a
/// `Published:` text marker in the page body.
#[must_use]
pub fn extract_published(html: &str) -> Option<String> {
    if let Some(captures) = PUBLISHED_META_RE.captures(html) {
        let date = captures.get(1)?.as_str().trim();
        if !date.is_empty() {
            return Some(date.to_string());
        }
    }

    let captures = PUBLISHED_TEXT_RE.captures(html)?;
    let date = captures.get(1)?.as_str().trim();
    if date.is_empty() {
        None
    } else {
        Some(date.to_string())
    }
}

/// Description from the meta tag, else the first paragraph of the body
/// fragment with tags stripped and length capped. Only the derived
/// paragraph form is truncated, mirroring the live path's excerpt rule.
#[must_use]
pub fn extract_description(html: &str, body_html: &str) -> String {
    if let Some(captures) = META_DESCRIPTION_RE.captures(html)
        && let Some(content) = captures.get(1)
    {
        return html_escape::decode_html_entities(content.as_str()).into_owned();
    }

    let Some(captures) = FIRST_PARAGRAPH_RE.captures(body_html) else {
        return String::new();
    };
    let Some(paragraph) = captures.get(1) else {
        return String::new();
    };
    let stripped = TAG_RE.replace_all(paragraph.as_str(), "");
    let decoded = html_escape::decode_html_entities(stripped.trim()).into_owned();
    truncate_chars(&decoded, EXCERPT_MAX_CHARS).to_string()
}

/// Body fragment: the designated content container, else the `<article>`
/// element, else the `<body>` with known chrome elements stripped.
#[must_use]
pub fn extract_body(html: &str) -> String {
    if let Some(captures) = CONTENT_DIV_RE.captures(html)
        && let Some(inner) = captures.get(1)
    {
        return inner.as_str().trim().to_string();
    }

    if let Some(captures) = ARTICLE_RE.captures(html)
        && let Some(inner) = captures.get(1)
    {
        return inner.as_str().trim().to_string();
    }

    let Some(body) = BODY_RE.captures(html).and_then(|c| c.get(1)) else {
        return String::new();
    };
    let mut cleaned = body.as_str().to_string();
    for chrome in [&*SCRIPT_RE, &*STYLE_RE, &*NAV_RE, &*HEADER_RE, &*FOOTER_RE] {
        cleaned = chrome.replace_all(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

/// First `<img>` source URL, trying double-quoted, then single-quoted,
/// then unquoted attribute forms, with entities decoded.
#[must_use]
pub fn extract_first_image(html: &str) -> Option<String> {
    for pattern in [&*IMG_DOUBLE_QUOTED_RE, &*IMG_SINGLE_QUOTED_RE, &*IMG_UNQUOTED_RE] {
        if let Some(captures) = pattern.captures(html)
            && let Some(src) = captures.get(1)
        {
            let url = html_escape::decode_html_entities(src.as_str()).into_owned();
            if !url.is_empty() {
                return Some(url);
            }
        }
    }
    None
}

/// Strip a trailing `| Site Name` from a title, case-insensitively. Only
/// a pipe-separated suffix counts; a title that merely ends with the site
/// name is left alone.
fn strip_site_suffix(title: &str, site_name: &str) -> String {
    let trimmed = title.trim();
    if site_name.is_empty() || trimmed.len() < site_name.len() {
        return trimmed.to_string();
    }

    let split = trimmed.len() - site_name.len();
    let Some(tail) = trimmed.get(split..) else {
        return trimmed.to_string();
    };
    if !tail.eq_ignore_ascii_case(site_name) {
        return trimmed.to_string();
    }

    let head = trimmed[..split].trim_end();
    match head.strip_suffix('|') {
        Some(before_pipe) => {
            let stripped = before_pipe.trim_end();
            if stripped.is_empty() {
                trimmed.to_string()
            } else {
                stripped.to_string()
            }
        }
        None => trimmed.to_string(),
    }
}

/// Recover a source attribution from a `Headline - Source` or
/// `Headline | Source` title form
fn source_name_from_title(title: &str) -> Option<String> {
    for separator in [" - ", " | "] {
        if let Some((_, tail)) = title.rsplit_once(separator) {
            let tail = tail.trim();
            if !tail.is_empty() {
                return Some(tail.to_string());
            }
        }
    }
    None
}

/// `my-post-title` → `My Post Title`
fn title_from_stem(stem: &str) -> String {
    stem.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
