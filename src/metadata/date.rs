//! Publication and modification date extraction.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use dom_query::{Document, Selection};
use serde_json::Value;

use super::json_ld;
use super::meta_tags::meta_content;
use super::title::first_text;
use crate::dom;
use crate::patterns::TRAILING_TIMEZONE;

const PUBLISHED_META: &[&str] = &["article:published_time", "datePublished", "date", "DC.date"];

const DATE_SELECTORS: &[&str] = &[
    ".post-date",
    ".entry-date",
    ".article-date",
    ".published-date",
    ".publish-date",
    ".date-published",
    ".meta-date",
    ".timestamp",
    "[class*='date']",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

// Month-first wins for ambiguous numeric dates.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
];

/// Publication date from meta tags, JSON-LD, microdata, `<time>` or date-ish elements.
///
/// Candidates are tried in that order and the first one that parses wins.
#[must_use]
pub fn extract_date(doc: &Document, json_ld: &[Value]) -> Option<DateTime<Utc>> {
    let candidates = PUBLISHED_META
        .iter()
        .map(|key| meta_content(doc, key))
        .chain([
            json_ld::find_string(json_ld, "datePublished"),
            json_ld::find_string(json_ld, "dateCreated"),
            microdata_date(doc, "datePublished", true),
            time_element(doc),
        ])
        .flatten()
        .chain(DATE_SELECTORS.iter().filter_map(|s| first_text(doc, s)));

    first_parseable(candidates)
}

/// Last-modified date from meta tags, JSON-LD or microdata.
#[must_use]
pub fn extract_modified_date(doc: &Document, json_ld: &[Value]) -> Option<DateTime<Utc>> {
    let candidates = [
        meta_content(doc, "article:modified_time"),
        meta_content(doc, "dateModified"),
        json_ld::find_string(json_ld, "dateModified"),
        microdata_date(doc, "dateModified", false),
    ]
    .into_iter()
    .flatten();

    first_parseable(candidates)
}

fn first_parseable(mut candidates: impl Iterator<Item = String>) -> Option<DateTime<Utc>> {
    candidates.find_map(|value| parse_date(&value))
}

/// `content`, then `datetime`, then (optionally) text of an `itemprop` element.
fn microdata_date(doc: &Document, prop: &str, allow_text: bool) -> Option<String> {
    let sel = doc.select(&format!("[itemprop='{prop}']")).first();
    if !sel.exists() {
        return None;
    }

    ["content", "datetime"]
        .iter()
        .map(|attr| dom::get_attribute(&sel, attr).trim().to_string())
        .find(|v| !v.is_empty())
        .or_else(|| allow_text.then(|| dom::text(&sel)).filter(|t| !t.is_empty()))
}

fn time_element(doc: &Document) -> Option<String> {
    doc.select("time[datetime]")
        .nodes()
        .iter()
        .map(|node| dom::get_attribute(&Selection::from(*node), "datetime").trim().to_string())
        .find(|v| !v.is_empty())
}

/// Parses a date string in any of the common publishing formats.
///
/// Values without an offset are taken as UTC. A trailing zone
/// abbreviation such as `" EST"` is dropped before a second attempt.
#[must_use]
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    parse_known_format(value).or_else(|| {
        let stripped = TRAILING_TIMEZONE.replace(value, "");
        (stripped != value).then(|| parse_known_format(&stripped)).flatten()
    })
}

fn parse_known_format(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.and_utc());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
