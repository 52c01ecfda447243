//! Cleanup of the selected content block.
//!
//! Operates only on a detached copy of the article subtree; the live document
//! is never touched here.

use url::Url;

use crate::dom::{self, NodeRef, Selection};
use crate::patterns::WHITESPACE;
use crate::text;
use crate::url_utils;

/// Class/id fragments that mark in-article noise.
const NOISE_PATTERNS: &[&str] = &[
    "share",
    "social",
    "comment",
    "related",
    "recommend",
    "newsletter",
    "subscribe",
    "promo",
    "ad-",
    "advertisement",
];

const ANCHOR_ATTRIBUTES: &[&str] = &["href", "title"];
const IMAGE_ATTRIBUTES: &[&str] = &["src", "alt", "title", "width", "height"];

/// Void elements that are content even without text.
const KEEP_WHEN_EMPTY: &[&str] = &["br", "hr", "img"];

/// Elements rendered on a line of their own in plain text.
const LINE_TAGS: &[&str] = &["li", "tr", "dt", "dd"];

/// Cleans the subtree under `root` in place.
///
/// Idempotent: running it again on its own output changes nothing.
pub fn postprocess(root: &Selection, base_url: Option<&Url>) {
    remove_unwanted(root);
    clean_attributes(root);
    remove_empty_elements(root);
    if let Some(base) = base_url {
        resolve_relative_urls(root, base);
    }
}

/// Removes residual scripts, noise-classed blocks and empty anchors.
pub fn remove_unwanted(root: &Selection) {
    root.select("script, style, noscript").remove();

    for pattern in NOISE_PATTERNS {
        root.select(&format!("[class*='{pattern}'], [id*='{pattern}']"))
            .remove();
    }

    for node in root.select("a").nodes() {
        let anchor = Selection::from(*node);
        if anchor.text().trim().is_empty() && !anchor.select("img").exists() {
            anchor.remove();
        }
    }
}

/// Strips every attribute except `href`/`title` on anchors and
/// `src`/`alt`/`title`/`width`/`height` on images.
pub fn clean_attributes(root: &Selection) {
    for node in root.select("*").nodes() {
        let el = Selection::from(*node);
        let allowed: &[&str] = match dom::tag_name(&el).as_str() {
            "a" => ANCHOR_ATTRIBUTES,
            "img" => IMAGE_ATTRIBUTES,
            _ => &[],
        };
        for name in dom::attribute_names(&el) {
            if !allowed.contains(&name.as_str()) {
                dom::remove_attribute(&el, &name);
            }
        }
    }
}

fn is_empty_element(el: &Selection) -> bool {
    !KEEP_WHEN_EMPTY.contains(&dom::tag_name(el).as_str())
        && dom::text(el).is_empty()
        && !el.select("img").exists()
}

/// Removes text-less elements until a pass removes nothing.
///
/// Elements that contain an image are kept.
pub fn remove_empty_elements(root: &Selection) {
    loop {
        let mut removed = 0;
        for node in root.select("*").nodes() {
            let el = Selection::from(*node);
            if is_empty_element(&el) {
                el.remove();
                removed += 1;
            }
        }
        if removed == 0 {
            break;
        }
    }
}

/// Rewrites relative `a[href]` and `img[src]` values against `base`.
pub fn resolve_relative_urls(root: &Selection, base: &Url) {
    for (selector, attr) in [("a[href]", "href"), ("img[src]", "src")] {
        for node in root.select(selector).nodes() {
            let el = Selection::from(*node);
            let value = dom::get_attribute(&el, attr);
            if value.is_empty() {
                continue;
            }
            let resolved = url_utils::resolve_url(&value, base);
            if resolved != value {
                dom::set_attribute(&el, attr, &resolved);
            }
        }
    }
}

/// Inner markup of the cleaned block, trimmed.
#[must_use]
pub fn clean_html(root: &Selection) -> String {
    dom::inner_html(root).trim().to_string()
}

/// Plain text of the cleaned block.
///
/// Block elements become paragraph breaks and `br`/list items line breaks;
/// whitespace inside a line is collapsed.
#[must_use]
pub fn clean_text(root: &Selection) -> String {
    let mut out = String::new();
    if let Some(node) = root.nodes().first() {
        push_text(node, &mut out);
    }
    text::normalize_preserving_newlines(&out)
}

fn push_text(node: &NodeRef, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(&WHITESPACE.replace_all(&child.text(), " "));
        } else if child.is_element() {
            let tag = dom::node_tag(&child);
            if tag == "br" {
                out.push('\n');
            } else if LINE_TAGS.contains(&tag.as_str()) {
                out.push('\n');
                push_text(&child, out);
                out.push('\n');
            } else if dom::is_block_element(&tag) || matches!(tag.as_str(), "td" | "th") {
                out.push_str("\n\n");
                push_text(&child, out);
                out.push_str("\n\n");
            } else {
                push_text(&child, out);
            }
        }
    }
}
