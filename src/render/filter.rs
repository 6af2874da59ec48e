//! Editorial-artifact filters
//!
//! The source content is hand-authored for two channels at once, and the
//! alternate-channel rendering rides along inside the same page. These
//! pattern checks keep it out of the canonical view. The listed patterns
//! are the known set, not a closed contract: new authoring habits get new
//! rules here.

use serde_json::Value;

use super::text::concatenated;

/// Marker phrase labeling a parallel-channel-only excerpt of the content
const CHANNEL_MARKERS: &[&str] = &["telegram version", "telegramversion"];

/// Substrings that identify a code block as a templated alternate-channel
/// rendering rather than actual code
const TEMPLATED_CODE_MARKERS: &[&str] = &["<b>", "</b>", "<a href", "#"];

/// Phrase heading the bullet-marked expert-view template. Only counts as
/// templated markup when a bullet rides along; the phrase alone can appear
/// in legitimate prose.
const EXPERT_VIEW_MARKER: &str = "Bench Energy Expert View";

/// Rule 1: any block whose text contains the channel marker phrase.
/// Checked separately from [`keep_block`] because it runs before the
/// first-heading bookkeeping: a dropped alternate-channel heading must not
/// consume the first-heading slot.
pub(crate) fn contains_channel_marker(payload: &Value) -> bool {
    let lower = concatenated(payload).to_lowercase();
    CHANNEL_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Decide whether one block survives the remaining filters. Callers apply
/// [`contains_channel_marker`] (rule 1) first.
///
/// Rules, in order:
/// 2. a `code` block that looks like templated channel markup (HTML
///    tags, hashtags, or the bullet-marked expert-view template) is
///    dropped;
/// 3. a paragraph starting with `source:` is dropped (it duplicates the
///    citation rendered separately at the end of the article);
/// 4. the first heading is dropped when it matches the article title
///    (equal, contains, or contained-by, case-insensitive).
pub(crate) fn keep_block(
    block_type: &str,
    payload: &Value,
    article_title: &str,
    is_first_heading: bool,
) -> bool {
    let text = concatenated(payload);
    let lower = text.to_lowercase();

    if block_type == "code" && is_templated_channel_code(&text) {
        return false;
    }

    if block_type == "paragraph" && lower.trim_start().starts_with("source:") {
        return false;
    }

    if is_first_heading && heading_matches_title(&lower, article_title) {
        return false;
    }

    true
}

fn is_templated_channel_code(text: &str) -> bool {
    TEMPLATED_CODE_MARKERS.iter().any(|marker| text.contains(marker))
        || (text.contains(EXPERT_VIEW_MARKER) && text.contains('•'))
}

/// Title duplication check allowing slight variations in either direction
fn heading_matches_title(heading_lower: &str, article_title: &str) -> bool {
    let heading = heading_lower.trim();
    let title = article_title.to_lowercase();
    let title = title.trim();

    if heading.is_empty() || title.is_empty() {
        return false;
    }

    heading == title || heading.contains(title) || title.contains(heading)
}
