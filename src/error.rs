//! Error types for content operations
//!
//! The dominant error posture of this crate is absorption: a missing or
//! malformed property on a single page is never an error, it degrades to a
//! documented fallback. The variants here are the conditions that DO
//! surface to the caller.

use thiserror::Error;

/// Result type alias for content operations
pub type ContentResult<T> = Result<T, ContentError>;

/// Error types surfaced by the content service boundary
#[derive(Debug, Error)]
pub enum ContentError {
    /// A required credential or source identifier is missing.
    ///
    /// This is the one class that must NOT degrade gracefully: silently
    /// serving an empty site with missing config would mask a deployment
    /// mistake.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// The requested slug matches no known page. A normal, expected
    /// outcome, distinct from transient upstream failures.
    #[error("no content found for slug '{0}'")]
    NotFound(String),

    /// Upstream content API rejected a request (auth, rate limit, bad id)
    #[error("upstream content API error: {0}")]
    Upstream(String),

    /// HTTP transport failure talking to the content API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream payload could not be decoded
    #[error("invalid upstream payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl From<anyhow::Error> for ContentError {
    fn from(error: anyhow::Error) -> Self {
        ContentError::Upstream(error.to_string())
    }
}

impl ContentError {
    /// True for the "requested thing does not exist" outcome
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }

    /// True for deployment/configuration mistakes that must be surfaced
    /// rather than absorbed
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, ContentError::NotConfigured(_))
    }

    /// True for failures that may clear on retry (network, upstream
    /// outage). List endpoints absorb these into an empty result instead
    /// of propagating them.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, ContentError::Http(_) | ContentError::Upstream(_))
    }
}
