//! Compiled regex patterns used across the extraction pipeline.
//!
//! All patterns are compiled once at first use using `LazyLock` and are
//! read-only afterwards, so concurrent extractions share them freely.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Normalization
// =============================================================================

/// Any run of whitespace.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Three or more consecutive newlines.
pub static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES regex"));

// =============================================================================
// Preprocessing
// =============================================================================

/// Inline styles that hide an element.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(display\s*:\s*none|visibility\s*:\s*hidden)").expect("HIDDEN_STYLE regex")
});

/// Ids of chatbot / AI-assistant widgets.
///
/// The keyword must stand alone or be delimited by whitespace, quotes or a
/// hyphen so that ids like `tag-chatbot-controversy` survive.
pub static WIDGET_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(^|[\s"'-])(dd-widget|deeperdive|ai-widget|chatbot-widget|ask-ai|genai-widget|ai-assistant|ai-answer|ai-summary)([\s"'-]|$)"#,
    )
    .expect("WIDGET_ID regex")
});

// =============================================================================
// Metadata
// =============================================================================

/// "By Jane Doe" style bylines.
pub static BYLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*by\s+(.+?)\s*$").expect("BYLINE regex"));

/// Trailing alphabetic timezone abbreviation, e.g. `" EST"`.
pub static TRAILING_TIMEZONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+[A-Z]{3,4}$").expect("TRAILING_TIMEZONE regex"));

// =============================================================================
// Fetching
// =============================================================================

/// `charset=` parameter of a `Content-Type` header value.
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("CONTENT_TYPE_CHARSET regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_style_matches_spacing_variants() {
        assert!(HIDDEN_STYLE.is_match("display:none"));
        assert!(HIDDEN_STYLE.is_match("color: red; DISPLAY : NONE"));
        assert!(HIDDEN_STYLE.is_match("visibility: hidden"));
        assert!(!HIDDEN_STYLE.is_match("display: block"));
    }

    #[test]
    fn widget_id_requires_delimiters() {
        assert!(WIDGET_ID.is_match("ai-assistant"));
        assert!(WIDGET_ID.is_match("page-deeperdive"));
        assert!(WIDGET_ID.is_match("ask-ai-box"));
        assert!(!WIDGET_ID.is_match("mydeeperdivebox"));
        assert!(!WIDGET_ID.is_match("tag-chatbot-controversy"));
    }

    #[test]
    fn byline_captures_name() {
        let caps = BYLINE.captures("  By Jane Doe ").unwrap();
        assert_eq!(&caps[1], "Jane Doe");
        assert!(BYLINE.captures("Bystander report").is_none());
    }

    #[test]
    fn trailing_timezone() {
        assert!(TRAILING_TIMEZONE.is_match("March 3, 2024 EST"));
        assert!(!TRAILING_TIMEZONE.is_match("March 3, 2024"));
    }

    #[test]
    fn content_type_charset() {
        let caps = CONTENT_TYPE_CHARSET.captures("text/html; charset=ISO-8859-1").unwrap();
        assert_eq!(&caps[1], "ISO-8859-1");
        let caps = CONTENT_TYPE_CHARSET.captures("text/html;charset=\"utf-8\"").unwrap();
        assert_eq!(&caps[1], "utf-8");
    }
}
