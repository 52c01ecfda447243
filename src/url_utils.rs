//! URL Utility Functions
//!
//! Validation of fetch targets and resolution of relative links and image
//! sources against the document's base URL.

use url::Url;

/// Prefixes that are never rewritten during resolution.
const PRESERVED_PREFIXES: &[&str] = &["data:", "javascript:", "mailto:", "tel:", "#"];

/// Parses `s` as an absolute http(s) URL with a host.
#[must_use]
pub fn parse_absolute_url(s: &str) -> Option<Url> {
    let s = s.trim();

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// Whether `s` is a fetchable http(s) URL.
#[must_use]
pub fn is_valid_url(s: &str) -> bool {
    parse_absolute_url(s).is_some()
}

/// Adds an `https://` scheme to scheme-less input such as `example.com/a`.
#[must_use]
pub fn normalize_url(s: &str) -> String {
    let s = s.trim();
    if s.starts_with("http://") || s.starts_with("https://") {
        return s.to_string();
    }
    let rest = s.strip_prefix("//").unwrap_or(s);
    format!("https://{rest}")
}

/// Resolves `value` against `base`.
///
/// Protocol-relative references inherit the base scheme, root-relative ones
/// the base origin, and other relative paths the base directory. Absolute
/// URLs, in-page fragments and `data:`/`javascript:`/`mailto:`/`tel:`
/// references are returned unchanged, as is anything that fails to join.
#[must_use]
pub fn resolve_url(value: &str, base: &Url) -> String {
    let value = value.trim();

    if value.is_empty() {
        return String::new();
    }

    if PRESERVED_PREFIXES.iter().any(|p| value.starts_with(p)) || is_valid_url(value) {
        return value.to_string();
    }

    match base.join(value) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => value.to_string(),
    }
}

/// Parses a base URL for resolution; `None` when it is empty or not absolute.
#[must_use]
pub fn parse_base(base: &str) -> Option<Url> {
    if base.trim().is_empty() {
        return None;
    }
    Url::parse(base.trim()).ok().filter(|url| url.has_host())
}
