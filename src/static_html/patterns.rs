//! Pre-compiled extraction patterns
//!
//! Compiled once at first use; extraction runs over every post file on
//! every index rebuild, so per-call compilation would dominate.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub(crate) static ref TITLE_RE: Regex =
        Regex::new(r"(?is)<title>(.*?)</title>").expect("valid title pattern");

    pub(crate) static ref META_DESCRIPTION_RE: Regex =
        Regex::new(r#"(?i)<meta\s+name="description"\s+content="([^"]+)""#)
            .expect("valid description pattern");

    pub(crate) static ref PUBLISHED_META_RE: Regex =
        Regex::new(r#"(?i)<meta\s+property="article:published_time"\s+content="([^"]+)""#)
            .expect("valid published-time pattern");

    /// `Published: January 5, 2025 | Site` text marker; capture stops at
    /// the pipe or the next tag
    pub(crate) static ref PUBLISHED_TEXT_RE: Regex =
        Regex::new(r"(?i)Published:\s*([^<|\n]+)").expect("valid published-text pattern");

    pub(crate) static ref CONTENT_DIV_RE: Regex =
        Regex::new(r#"(?is)<div class="content">(.*?)</div>"#).expect("valid content pattern");

    pub(crate) static ref ARTICLE_RE: Regex =
        Regex::new(r"(?is)<article[^>]*>(.*?)</article>").expect("valid article pattern");

    pub(crate) static ref BODY_RE: Regex =
        Regex::new(r"(?is)<body[^>]*>(.*?)</body>").expect("valid body pattern");

    pub(crate) static ref SCRIPT_RE: Regex =
        Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid script pattern");

    pub(crate) static ref STYLE_RE: Regex =
        Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid style pattern");

    pub(crate) static ref NAV_RE: Regex =
        Regex::new(r"(?is)<nav[^>]*>.*?</nav>").expect("valid nav pattern");

    pub(crate) static ref HEADER_RE: Regex =
        Regex::new(r"(?is)<header[^>]*>.*?</header>").expect("valid header pattern");

    pub(crate) static ref FOOTER_RE: Regex =
        Regex::new(r"(?is)<footer[^>]*>.*?</footer>").expect("valid footer pattern");

    pub(crate) static ref FIRST_PARAGRAPH_RE: Regex =
        Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("valid paragraph pattern");

    pub(crate) static ref TAG_RE: Regex =
        Regex::new(r"<[^>]+>").expect("valid tag pattern");

    pub(crate) static ref IMG_DOUBLE_QUOTED_RE: Regex =
        Regex::new(r#"(?is)<img[^>]*\ssrc="([^"]+)""#).expect("valid img pattern");

    pub(crate) static ref IMG_SINGLE_QUOTED_RE: Regex =
        Regex::new(r"(?is)<img[^>]*\ssrc='([^']+)'").expect("valid img pattern");

    pub(crate) static ref IMG_UNQUOTED_RE: Regex =
        Regex::new(r#"(?is)<img[^>]*\ssrc=([^\s>"']+)"#).expect("valid img pattern");
}
