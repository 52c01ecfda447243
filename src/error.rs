//! Error types for article extraction.
//!
//! Every failure carries the pipeline operation that raised it and, when one
//! is known, the URL of the document being processed.

/// The reason an extraction or fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// The input contained no parseable markup.
    #[error("invalid HTML")]
    InvalidHtml,

    /// No scoring candidate survived selection.
    #[error("no content found")]
    NoContent,

    /// Extracted text is shorter than `Options::min_content_length`.
    #[error("content too short")]
    ContentTooShort,

    /// Fetched body exceeds `Options::max_content_length`.
    #[error("content too large")]
    ContentTooLarge,

    /// The URL is not an absolute http(s) URL.
    #[error("invalid URL")]
    InvalidUrl,

    /// The server answered with a non-200 status.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The request did not complete within `Options::http_timeout`.
    #[error("request timed out")]
    Timeout,

    /// Transport-level failure (DNS, TLS, connection reset, body decoding).
    #[error("fetch failed: {0}")]
    Fetch(String),
}

/// Error type for extraction operations.
///
/// Displays as `op [url]: kind`, or `op: kind` without a URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}{}: {}", .op, url_suffix(.url.as_deref()), .kind)]
pub struct Error {
    op: &'static str,
    url: Option<String>,
    #[source]
    kind: ErrorKind,
}

fn url_suffix(url: Option<&str>) -> String {
    url.map(|u| format!(" [{u}]")).unwrap_or_default()
}

impl Error {
    /// Creates an error for operation `op`, optionally tied to `url`.
    ///
    /// An empty URL is treated as absent.
    #[must_use]
    pub fn new(op: &'static str, url: Option<&str>, kind: ErrorKind) -> Self {
        Self {
            op,
            url: url.filter(|u| !u.is_empty()).map(str::to_string),
            kind,
        }
    }

    /// The pipeline operation that failed: `parse`, `extract`, `validate` or `fetch`.
    #[must_use]
    pub fn op(&self) -> &'static str {
        self.op
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[cfg_attr(not(feature = "fetch"), allow(dead_code))]
    pub(crate) fn with_url(mut self, url: &str) -> Self {
        if self.url.is_none() && !url.is_empty() {
            self.url = Some(url.to_string());
        }
        self
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
