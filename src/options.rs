//! Configuration options for article extraction.
//!
//! The `Options` struct controls the scoring thresholds and the fetch
//! collaborator's limits.

use std::time::Duration;

/// Default `User-Agent` sent by the fetcher.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; ArticleExtractor/1.0)";

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_extractor::Options;
///
/// let options = Options {
///     min_content_length: 250,
///     debug: true,
///     ..Options::default()
/// };
/// assert_eq!(options.min_paragraph_length, 25);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum number of characters the final plain text must contain.
    ///
    /// Shorter results fail with `ErrorKind::ContentTooShort`.
    ///
    /// Default: `100`
    pub min_content_length: usize,

    /// Minimum paragraph length (in characters) for a paragraph to be scored.
    ///
    /// Default: `25`
    pub min_paragraph_length: usize,

    /// Maximum number of bytes the fetcher will read from a response body.
    ///
    /// Default: `10 MiB`
    pub max_content_length: usize,

    /// Overall timeout for one HTTP request, including the body.
    ///
    /// Default: `30s`
    pub http_timeout: Duration,

    /// `User-Agent` header sent by the fetcher.
    ///
    /// Default: `"Mozilla/5.0 (compatible; ArticleExtractor/1.0)"`
    pub user_agent: String,

    /// Log the ranked candidate list at debug level. Never changes output.
    ///
    /// Default: `false`
    pub debug: bool,

    /// Base URL of the document.
    ///
    /// Used to resolve relative links and images and stamped into `Article::url`.
    ///
    /// Default: `None`
    pub url: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_content_length: 100,
            min_paragraph_length: 25,
            max_content_length: 10 * 1024 * 1024,
            http_timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            debug: false,
            url: None,
        }
    }
}
