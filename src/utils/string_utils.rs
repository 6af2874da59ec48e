//! UTF-8-safe string truncation utilities

/// Truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Respects UTF-8 character boundaries and never panics, even with
/// multi-byte characters. Returns a slice of the original string, so no
/// allocation happens.
///
/// # Examples
/// ```
/// # use pressfeed::utils::truncate_chars;
/// assert_eq!(truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}
