//! Lead image selection.

use dom_query::{Document, Selection};
use url::Url;

use super::meta_tags::{meta_content, parse_leading_int};
use crate::dom;
use crate::result::Image;
use crate::url_utils;

const CONTENT_IMAGES: &str = "article img, .article img, .post img, main img";

/// In-content images narrower and shorter than this are icons or avatars.
const MIN_IMAGE_DIMENSION: u32 = 200;

/// Lead image from Open Graph, Twitter cards, or the first sizeable
/// in-content `<img>`.
///
/// The URL is resolved against `base` when one is given.
#[must_use]
pub fn extract_lead_image(doc: &Document, base: Option<&Url>) -> Option<Image> {
    let image = open_graph_image(doc)
        .or_else(|| meta_content(doc, "twitter:image").map(Image::from_url))
        .or_else(|| content_image(doc))?;

    Some(match base {
        Some(base) => Image {
            url: url_utils::resolve_url(&image.url, base),
            ..image
        },
        None => image,
    })
}

fn open_graph_image(doc: &Document) -> Option<Image> {
    let url = meta_content(doc, "og:image")?;
    let dimension = |key: &str| meta_content(doc, key).map_or(0, |v| parse_leading_int(&v));

    Some(Image {
        url,
        width: dimension("og:image:width"),
        height: dimension("og:image:height"),
        alt: String::new(),
    })
}

fn content_image(doc: &Document) -> Option<Image> {
    doc.select(CONTENT_IMAGES).nodes().iter().find_map(|node| {
        let img = Selection::from(*node);

        let url = ["src", "data-src"]
            .iter()
            .map(|attr| dom::get_attribute(&img, attr).trim().to_string())
            .find(|v| !v.is_empty())?;

        let width = parse_leading_int(&dom::get_attribute(&img, "width"));
        let height = parse_leading_int(&dom::get_attribute(&img, "height"));

        let undeclared = width == 0 && height == 0;
        let large = width >= MIN_IMAGE_DIMENSION || height >= MIN_IMAGE_DIMENSION;
        (undeclared || large).then(|| Image {
            url,
            width,
            height,
            alt: dom::get_attribute(&img, "alt").trim().to_string(),
        })
    })
}
