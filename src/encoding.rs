//! Character encoding detection and transcoding.
//!
//! Pages arrive as bytes in whatever charset the server or the markup
//! declares. Everything downstream of this module works on UTF-8 `String`s.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Bytes examined for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>]+)"#).expect("META_CHARSET regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static META_HTTP_EQUIV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("META_HTTP_EQUIV regex")
});

/// Encoding for a charset label such as `"ISO-8859-1"` or `"utf8"`.
///
/// Labels follow the WHATWG table, so `ISO-8859-1` maps to `windows-1252`.
#[must_use]
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Charset declared in the document head, if any and if recognized.
///
/// `<meta charset>` wins over the `http-equiv` form.
#[must_use]
pub fn declared_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    [&*META_CHARSET, &*META_HTTP_EQUIV]
        .iter()
        .filter_map(|re| re.captures(&head))
        .filter_map(|caps| caps.get(1))
        .find_map(|m| encoding_for_label(m.as_str()))
}

/// Declared encoding of `html`, falling back to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    declared_encoding(html).unwrap_or(UTF_8)
}

fn decode(html: &[u8], encoding: &'static Encoding) -> String {
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

/// Transcodes HTML bytes to UTF-8 using the charset the markup declares.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use article_extractor::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    decode(html, detect_encoding(html))
}

/// Transcodes a response body, preferring the transport charset.
///
/// `charset` is the `Content-Type` header's parameter; when missing or
/// unrecognized the markup declaration is used, then UTF-8.
#[must_use]
pub fn decode_with_charset(body: &[u8], charset: Option<&str>) -> String {
    let encoding = charset
        .and_then(encoding_for_label)
        .unwrap_or_else(|| detect_encoding(body));
    decode(body, encoding)
}
