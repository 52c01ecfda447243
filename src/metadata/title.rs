//! Title extraction and site-name stripping.

use dom_query::{Document, Selection};
use serde_json::Value;

use super::json_ld;
use super::meta_tags::meta_content;
use crate::text;

const TITLE_SEPARATORS: &[&str] = &[" | ", " - ", " :: ", " / ", " » ", " — ", " · "];

const ARTICLE_H1: &str = "article h1, [role='article'] h1, .article h1, .post h1";

/// Extracts the article title.
///
/// Tries `og:title`, `twitter:title`, the JSON-LD / microdata `headline`,
/// an `h1` inside an article container, the first `h1`, then `<title>`.
#[must_use]
pub fn extract_title(doc: &Document, json_ld: &[Value]) -> String {
    meta_content(doc, "og:title")
        .or_else(|| meta_content(doc, "twitter:title"))
        .or_else(|| json_ld::find_string(json_ld, "headline"))
        .or_else(|| first_text(doc, "[itemprop='headline']"))
        .or_else(|| first_text(doc, ARTICLE_H1))
        .or_else(|| first_text(doc, "h1"))
        .or_else(|| first_text(doc, "title"))
        .map(|title| clean_title(&title))
        .unwrap_or_default()
}

/// [`extract_title`], or `fallback` when the page has no title.
#[must_use]
pub fn extract_title_or(doc: &Document, json_ld: &[Value], fallback: &str) -> String {
    let title = extract_title(doc, json_ld);
    if title.is_empty() {
        fallback.to_string()
    } else {
        title
    }
}

/// Text of the first element matching `selector` that has any.
pub(super) fn first_text(doc: &Document, selector: &str) -> Option<String> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| text::normalize(&Selection::from(*node).text()))
        .find(|t| !t.is_empty())
}

/// Collapses whitespace and drops a site name split off by a separator.
///
/// For each separator, the last occurrence splits the title; a side more than
/// twice as long as the other replaces the title. Comparable sides leave the
/// title unsplit.
#[must_use]
pub fn clean_title(title: &str) -> String {
    let mut title = text::normalize(title);

    for sep in TITLE_SEPARATORS {
        let Some(idx) = title.rfind(sep) else {
            continue;
        };
        let before = &title[..idx];
        let after = &title[idx + sep.len()..];
        let (before_len, after_len) = (text::char_len(before), text::char_len(after));

        if before_len > after_len * 2 {
            title = before.trim().to_string();
        } else if after_len > before_len * 2 {
            title = after.trim().to_string();
        }
    }

    title
}
