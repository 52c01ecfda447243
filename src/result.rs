//! Result types for extraction output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The image chosen to represent an article.
///
/// Width and height are `0` when the page does not declare them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alt: String,
}

impl Image {
    /// An image with unknown dimensions and no alt text.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Document-level metadata, gathered before any cleaning touches the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub author: String,
    pub authors: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub lead_image: Option<Image>,
}

/// An extracted article.
///
/// Metadata fields are empty strings or `None` when the page does not carry
/// them; only the content fields are guaranteed to be populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Cleaned article title.
    pub title: String,

    /// Cleaned article HTML.
    pub content: String,

    /// Plain text of `content`, paragraphs separated by blank lines.
    pub text_content: String,

    /// Leading text, at most ~200 characters.
    pub excerpt: String,

    pub author: String,

    /// `author` split into individual names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_image: Option<Image>,

    /// Source URL, empty when extracting from a string without a base URL.
    pub url: String,

    /// Number of whitespace-delimited tokens in `text_content`.
    pub word_count: usize,

    /// Raw content score of the winning candidate.
    pub score: f64,

    /// Heuristic extraction quality in `[0, 1]`.
    pub confidence: f64,
}
