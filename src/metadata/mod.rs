//! Metadata extraction module.
//!
//! Title, author, dates and lead image are read from the unmodified document:
//! meta tags first, then JSON-LD, then microdata and DOM heuristics. JSON-LD
//! blocks are parsed once and shared by every extractor.

pub mod author;
pub mod date;
pub mod image;
pub mod json_ld;
pub mod meta_tags;
pub mod title;

use dom_query::Document;
use url::Url;

use crate::result::Metadata;

pub use author::{author_from_byline, clean_author, extract_author, extract_authors, split_authors};
pub use date::{extract_date, extract_modified_date, parse_date};
pub use image::extract_lead_image;
pub use json_ld::json_ld_values;
pub use meta_tags::meta_content;
pub use title::{clean_title, extract_title, extract_title_or};

/// Extract all metadata from a document.
///
/// `base` is only used to absolutize the lead image URL.
#[must_use]
pub fn extract_metadata(doc: &Document, base: Option<&Url>) -> Metadata {
    let json_ld = json_ld::json_ld_values(doc);

    let author = extract_author(doc, &json_ld);
    let authors = split_authors(&author);

    Metadata {
        title: extract_title(doc, &json_ld),
        author,
        authors,
        published_at: extract_date(doc, &json_ld),
        modified_at: extract_modified_date(doc, &json_ld),
        lead_image: extract_lead_image(doc, base),
    }
}
