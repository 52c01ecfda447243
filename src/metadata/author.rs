//! Author extraction from meta tags, structured data, author elements and bylines.

use dom_query::{Document, Selection};
use serde_json::Value;

use super::json_ld;
use super::meta_tags::meta_content;
use super::title::first_text;
use crate::patterns::BYLINE;
use crate::text;

const AUTHOR_PREFIXES: &[&str] = &["By ", "by ", "BY ", "Written by ", "Author: ", "Posted by "];

const BYLINE_DELIMITERS: &[&str] = &[",", "|", "·", " on ", " - "];

const AUTHOR_SPLITTERS: &[&str] = &[" and ", ", ", " & "];

const AUTHOR_SELECTORS: &[&str] = &[
    ".author-name",
    ".author",
    ".byline-name",
    ".byline__name",
    "[rel='author']",
    ".entry-author-name",
    ".post-author-name",
    ".article-author",
    ".article__author",
    ".author__name",
    "a.author",
    "span.author",
];

const BYLINE_SELECTORS: &[&str] = &[
    ".byline",
    ".by-line",
    ".post-byline",
    ".article-byline",
    ".meta-author",
];

/// Author-element text at or above this length is not a name.
const MAX_AUTHOR_LENGTH: usize = 100;

/// Extracts the author as a single string; empty when none is found.
#[must_use]
pub fn extract_author(doc: &Document, json_ld: &[Value]) -> String {
    meta_content(doc, "author")
        .or_else(|| meta_content(doc, "article:author"))
        .or_else(|| json_ld::find_person_name(json_ld, "author"))
        .or_else(|| json_ld::find_person_name(json_ld, "creator"))
        .or_else(|| microdata_author(doc))
        .or_else(|| author_by_selector(doc))
        .or_else(|| author_by_byline(doc))
        .map(|author| clean_author(&author))
        .unwrap_or_default()
}

/// Individual author names, see [`split_authors`].
#[must_use]
pub fn extract_authors(doc: &Document, json_ld: &[Value]) -> Vec<String> {
    split_authors(&extract_author(doc, json_ld))
}

/// Splits an author string into individual names.
///
/// The first of `" and "`, `", "`, `" & "` present in the string is used.
#[must_use]
pub fn split_authors(author: &str) -> Vec<String> {
    if author.trim().is_empty() {
        return Vec::new();
    }

    let Some(sep) = AUTHOR_SPLITTERS.iter().find(|sep| author.contains(*sep)) else {
        return vec![author.trim().to_string()];
    };

    author
        .split(*sep)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// `itemprop="author"`, preferring a nested `itemprop="name"`.
fn microdata_author(doc: &Document) -> Option<String> {
    doc.select("[itemprop='author']").nodes().iter().find_map(|node| {
        let sel = Selection::from(*node);
        let name = sel.select("[itemprop='name']");
        let raw = if name.exists() { name.text() } else { sel.text() };
        let author = text::normalize(&raw);
        (!author.is_empty()).then_some(author)
    })
}

fn author_by_selector(doc: &Document) -> Option<String> {
    AUTHOR_SELECTORS.iter().find_map(|selector| {
        first_text(doc, selector).filter(|t| text::char_len(t) < MAX_AUTHOR_LENGTH)
    })
}

fn author_by_byline(doc: &Document) -> Option<String> {
    BYLINE_SELECTORS
        .iter()
        .filter_map(|selector| first_text(doc, selector))
        .find_map(|byline| author_from_byline(&byline))
}

/// Pulls the name out of a byline such as `"By Jane Doe, Staff Writer"`.
#[must_use]
pub fn author_from_byline(byline: &str) -> Option<String> {
    let byline = byline.trim();

    let name = if let Some(caps) = BYLINE.captures(byline) {
        caps.get(1)?.as_str().to_string()
    } else {
        let prefix = AUTHOR_PREFIXES.iter().find(|p| byline.starts_with(*p))?;
        byline[prefix.len()..].to_string()
    };

    let name = truncate_at_delimiters(&name);
    (!name.is_empty()).then_some(name)
}

fn truncate_at_delimiters(name: &str) -> String {
    let mut name = name;
    for delim in BYLINE_DELIMITERS {
        if let Some(idx) = name.find(delim) {
            name = &name[..idx];
        }
    }
    name.trim().to_string()
}

/// Collapses whitespace and strips one leading author prefix.
#[must_use]
pub fn clean_author(author: &str) -> String {
    let author = text::normalize(author);
    AUTHOR_PREFIXES
        .iter()
        .find_map(|prefix| author.strip_prefix(*prefix))
        .unwrap_or(author.as_str())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn meta_author_first() {
        let doc = dom::parse(
            r#"<html><head><meta name="author" content="By  Meta Person"></head>
            <body><span class="author">Span Person</span></body></html>"#,
        );
        assert_eq!(extract_author(&doc, &[]), "Meta Person");
    }

    #[test]
    fn json_ld_author() {
        let doc = dom::parse(
            r#"<html><head><script type="application/ld+json">
            {"@type":"Article","author":{"@type":"Person","name":"LD Person"}}</script></head></html>"#,
        );
        let values = json_ld::json_ld_values(&doc);
        assert_eq!(extract_author(&doc, &values), "LD Person");
    }

    #[test]
    fn microdata_nested_name() {
        let doc = dom::parse(
            r#"<div itemprop="author" itemscope><span itemprop="name">Micro Person</span>
            <span>Staff</span></div>"#,
        );
        assert_eq!(extract_author(&doc, &[]), "Micro Person");
    }

    #[test]
    fn selector_author_with_length_limit() {
        let long = "x".repeat(120);
        let doc = dom::parse(&format!(
            "<div class='author-name'>{long}</div><a rel='author' href='/a'>Linked Person</a>"
        ));
        assert_eq!(extract_author(&doc, &[]), "Linked Person");
    }

    #[test]
    fn byline_pattern_and_delimiters() {
        let doc = dom::parse("<p class='byline'>By Jane Doe, Staff Writer</p>");
        assert_eq!(extract_author(&doc, &[]), "Jane Doe");
    }

    #[test]
    fn byline_prefixes() {
        assert_eq!(author_from_byline("Written by Sam Lee on March 3").as_deref(), Some("Sam Lee"));
        assert_eq!(author_from_byline("Posted by Kim | News").as_deref(), Some("Kim"));
        assert_eq!(author_from_byline("Author: Pat - Desk").as_deref(), Some("Pat"));
        assert_eq!(author_from_byline("Published yesterday"), None);
    }

    #[test]
    fn clean_strips_one_prefix() {
        assert_eq!(clean_author("  By   Alex   Kim "), "Alex Kim");
        assert_eq!(clean_author("Author: Jo"), "Jo");
        assert_eq!(clean_author("Bob"), "Bob");
    }

    #[test]
    fn split_author_list() {
        assert_eq!(split_authors("Jane Doe and John Roe"), vec!["Jane Doe", "John Roe"]);
        assert_eq!(split_authors("A, B, C"), vec!["A", "B", "C"]);
        assert_eq!(split_authors("A & B"), vec!["A", "B"]);
        assert_eq!(split_authors("Solo Writer"), vec!["Solo Writer"]);
        assert!(split_authors("").is_empty());
    }

    #[test]
    fn split_prefers_and_over_comma() {
        assert_eq!(split_authors("Smith, J. and Jones, K."), vec!["Smith, J.", "Jones, K."]);
    }

    #[test]
    fn authors_from_document() {
        let doc = dom::parse(r#"<meta name="author" content="Ann Lee & Bo Park">"#);
        assert_eq!(extract_authors(&doc, &[]), vec!["Ann Lee", "Bo Park"]);
    }

    #[test]
    fn missing_author_is_empty() {
        let doc = dom::parse("<p>No author here</p>");
        assert_eq!(extract_author(&doc, &[]), "");
    }
}
