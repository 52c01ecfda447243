//! HTML Meta Tag Lookup
//!
//! Open Graph, Twitter card, Dublin Core and plain `name`/`content` tags all
//! share one lookup: match `property` or `name` case-insensitively and take
//! the first non-empty `content`.

use dom_query::{Document, Selection};

use crate::dom;

/// Content of the first `<meta>` whose `property` or `name` equals `key`.
///
/// Keys compare ASCII case-insensitively; empty `content` values are skipped.
#[must_use]
pub fn meta_content(doc: &Document, key: &str) -> Option<String> {
    for node in doc.select("meta").nodes() {
        let meta = Selection::from(*node);

        let matches = ["property", "name"]
            .iter()
            .any(|attr| dom::get_attribute(&meta, attr).trim().eq_ignore_ascii_case(key));
        if !matches {
            continue;
        }

        let content = dom::get_attribute(&meta, "content");
        let content = content.trim();
        if !content.is_empty() {
            return Some(content.to_string());
        }
    }
    None
}

/// First non-empty value among `keys`, tried in order.
#[must_use]
pub fn first_meta_content(doc: &Document, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| meta_content(doc, key))
}

/// Parses the leading decimal digits of `value`, e.g. `"1200px"` → `1200`.
///
/// Returns `0` when `value` does not start with a digit.
#[must_use]
pub fn parse_leading_int(value: &str) -> u32 {
    value
        .trim()
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0u32, |n, d| n.saturating_mul(10).saturating_add(d))
}
