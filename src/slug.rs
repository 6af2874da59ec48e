//! Canonical URL slug derivation
//!
//! Slugs are durable lookup keys: a page is found again later by the slug
//! derived from its title, so derivation must be pure and deterministic.
//! The same raw title always yields the same slug.

use crate::utils::truncate_chars;

/// Derive a URL-safe slug from a free-text title.
///
/// Lowercases the title, replaces every run of characters outside
/// `[a-z0-9]` with a single hyphen, and trims leading/trailing hyphens.
/// Titles that yield an empty slug (purely symbolic or empty titles) fall
/// back to `fallback_id` with all hyphens removed, so the result is never
/// empty for a non-empty id.
///
/// # Examples
/// ```
/// # use pressfeed::slug::derive_slug;
/// assert_eq!(derive_slug("Hello, World!", "abc-123"), "hello-world");
/// assert_eq!(derive_slug("!!!", "abc-123"), "abc123");
/// ```
#[must_use]
pub fn derive_slug(title: &str, fallback_id: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(lower);
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        fallback_id.chars().filter(|c| *c != '-').collect()
    } else {
        slug
    }
}

/// Derive a slug with a maximum character length.
///
/// Used for news articles, where wire-service headlines can be arbitrarily
/// long. The cap is applied after hyphen collapsing, not before, and
/// trailing hyphens are trimmed again after truncation so a cut-off word
/// never leaves a dangling hyphen.
#[must_use]
pub fn derive_slug_capped(title: &str, fallback_id: &str, max_chars: usize) -> String {
    let slug = derive_slug(title, fallback_id);
    let capped = truncate_chars(&slug, max_chars).trim_end_matches('-');

    if capped.is_empty() {
        fallback_id.chars().filter(|c| *c != '-').collect()
    } else {
        capped.to_string()
    }
}
