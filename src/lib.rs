//! # article-extractor
//!
//! Heuristic extraction of the main article from an HTML page.
//!
//! The pipeline strips scripts, hidden and boilerplate blocks, scores
//! paragraphs by length and comma count, propagates those scores to their
//! containers, and keeps the best container together with any sibling that
//! looks like continuation content. Title, author, dates and lead image are
//! read from the untouched document alongside.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_extractor::extract;
//!
//! let para = "Rust gives you control over memory layout, and the borrow checker \
//!             makes sure that control never turns into a use-after-free bug.";
//! let html = format!(
//!     "<html><head><title>Why Rust Works For Systems Code | Blog</title></head>\
//!      <body><nav><a href='/'>Home</a></nav>\
//!      <article><p>{para}</p><p>{para}</p><p>{para}</p></article></body></html>"
//! );
//!
//! let article = extract(&html)?;
//! assert_eq!(article.title, "Why Rust Works For Systems Code");
//! assert!(article.text_content.contains("borrow checker"));
//! assert!(!article.text_content.contains("Home"));
//! # Ok::<(), article_extractor::Error>(())
//! ```
//!
//! ## Features
//!
//! - **`fetch`** (default): [`Extractor::extract_from_url`] and the
//!   [`fetch::Fetcher`] HTTP client.
//! - **`cli`**: the `extract_stdin` binary.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Unicode-aware text helpers.
pub mod text;

/// Content/boilerplate keyword classification of class and id values.
pub mod keywords;

/// Paragraph scoring, propagation, refinement and candidate ranking.
pub mod scorer;

/// Preprocessing, sibling merging and postprocessing.
pub mod cleaner;

/// Metadata extraction (meta tags, JSON-LD, microdata, DOM heuristics).
pub mod metadata;

/// Extraction-quality estimate.
pub mod confidence;

/// URL utilities for validation, resolution, and normalization.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// HTTP fetching.
#[cfg(feature = "fetch")]
pub mod fetch;

// Public API - re-exports
pub use error::{Error, ErrorKind, Result};
pub use options::{Options, DEFAULT_USER_AGENT};
pub use result::{Article, Image, Metadata};

/// Extracts the main article from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use article_extractor::{extract, ErrorKind};
///
/// let err = extract("<html><body><nav>Menu</nav></body></html>").unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::NoContent);
/// ```
pub fn extract(html: &str) -> Result<Article> {
    extract_with_options(html, &Options::default())
}

/// Extracts with `base_url` used to resolve relative links and stamped into
/// [`Article::url`].
pub fn extract_with_url(html: &str, base_url: &str) -> Result<Article> {
    let options = Options {
        url: Some(base_url.to_string()),
        ..Options::default()
    };
    extract_with_options(html, &options)
}

/// Extracts the main article with custom options.
///
/// # Example
///
/// ```rust
/// use article_extractor::{extract_with_options, ErrorKind, Options};
///
/// let html = "<html><body><article><p>One short paragraph that is long enough to score.</p></article></body></html>";
/// let options = Options {
///     min_content_length: 500,
///     ..Options::default()
/// };
/// let err = extract_with_options(html, &options).unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::ContentTooShort);
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<Article> {
    extract::extract_article(html, options)
}

/// Extracts from raw bytes, transcoding from the declared charset first.
///
/// The charset comes from `<meta charset>` or the `http-equiv` form and
/// defaults to UTF-8. Invalid sequences become U+FFFD.
pub fn extract_bytes(html: &[u8]) -> Result<Article> {
    extract_bytes_with_options(html, &Options::default())
}

/// [`extract_bytes`] with custom options.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<Article> {
    let html = encoding::transcode_to_utf8(html);
    extract_with_options(&html, options)
}

/// Reusable extractor holding its options and, with `fetch`, an HTTP client.
#[derive(Debug, Clone)]
pub struct Extractor {
    options: Options,
    #[cfg(feature = "fetch")]
    fetcher: Option<fetch::Fetcher>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Extractor {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            #[cfg(feature = "fetch")]
            fetcher: fetch::Fetcher::new(&options).ok(),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn extract(&self, html: &str) -> Result<Article> {
        extract_with_options(html, &self.options)
    }

    /// Extracts with `url` as the base URL, overriding `Options::url`.
    pub fn extract_with_url(&self, html: &str, url: &str) -> Result<Article> {
        let options = Options {
            url: Some(url.to_string()),
            ..self.options.clone()
        };
        extract_with_options(html, &options)
    }

    /// Fetches `url` and extracts the article from the response.
    ///
    /// Scheme-less input such as `example.com/post` is retried with
    /// `https://`; anything still invalid fails with
    /// [`ErrorKind::InvalidUrl`].
    #[cfg(feature = "fetch")]
    pub async fn extract_from_url(&self, url: &str) -> Result<Article> {
        let url = if url_utils::is_valid_url(url) {
            url.trim().to_string()
        } else {
            let normalized = url_utils::normalize_url(url);
            if !url_utils::is_valid_url(&normalized) {
                return Err(Error::new("validate", Some(url), ErrorKind::InvalidUrl));
            }
            normalized
        };

        let html = match &self.fetcher {
            Some(fetcher) => fetcher.fetch(&url).await?,
            None => fetch::Fetcher::new(&self.options)
                .map_err(|e| e.with_url(&url))?
                .fetch(&url)
                .await?,
        };

        self.extract_with_url(&html, &url)
    }
}
