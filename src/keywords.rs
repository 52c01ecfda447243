//! Keyword classification of `class` / `id` attribute values.
//!
//! Both keyword sets compile into a single case-insensitive alternation.
//! Matching is substring-based: `article-sidebar` hits both sets.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Weight contributed by one whitelist or blacklist hit.
pub const KEYWORD_WEIGHT: i32 = 25;

/// Terms that suggest article content.
pub const WHITELIST: &[&str] = &[
    "article",
    "body",
    "content",
    "entry",
    "main",
    "page",
    "post",
    "text",
    "blog",
    "story",
    "hentry",
    "h-entry",
    "entry-content",
    "article-body",
    "article-content",
];

/// Terms that suggest boilerplate.
pub const BLACKLIST: &[&str] = &[
    "ad",
    "advertisement",
    "banner",
    "breadcrumbs",
    "combx",
    "comment",
    "community",
    "cover-wrap",
    "disqus",
    "extra",
    "footer",
    "gdpr",
    "header",
    "legends",
    "menu",
    "related",
    "remark",
    "replies",
    "rss",
    "shoutbox",
    "sidebar",
    "skyscraper",
    "social",
    "sponsor",
    "supplemental",
    "widget",
    "agegate",
    "pagination",
    "pager",
    "popup",
    "print",
    "archive",
    "author-info",
    "author-box",
    "bio",
    "carousel",
    "gallery",
    "modal",
    "navigation",
    "newsletter",
    "promo",
    "share",
    "subscribe",
    "tags",
    "toolbar",
    "trending",
    // AI / chatbot widgets
    "dd-widget",
    "deeperdive",
    "ai-widget",
    "chatbot",
    "ask-ai",
    "genai",
    "ai-assistant",
    "ai-answer",
];

fn compile(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)({alternation})")).expect("keyword regex")
}

static WHITELIST_RE: LazyLock<Regex> = LazyLock::new(|| compile(WHITELIST));
static BLACKLIST_RE: LazyLock<Regex> = LazyLock::new(|| compile(BLACKLIST));

/// Whether `s` contains a content keyword.
#[must_use]
pub fn is_whitelisted(s: &str) -> bool {
    !s.is_empty() && WHITELIST_RE.is_match(s)
}

/// Whether `s` contains a boilerplate keyword.
#[must_use]
pub fn is_blacklisted(s: &str) -> bool {
    !s.is_empty() && BLACKLIST_RE.is_match(s)
}

/// Signed weight for a class/id pair.
///
/// Class and id are scored independently, `+25` per whitelist hit and `-25`
/// per blacklist hit, so the result lies in `[-50, 50]`.
#[must_use]
pub fn classify(class: &str, id: &str) -> i32 {
    [class, id]
        .iter()
        .map(|value| {
            let mut weight = 0;
            if is_whitelisted(value) {
                weight += KEYWORD_WEIGHT;
            }
            if is_blacklisted(value) {
                weight -= KEYWORD_WEIGHT;
            }
            weight
        })
        .sum()
}
