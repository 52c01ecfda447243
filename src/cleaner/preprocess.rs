//! Destructive cleanup of the whole document before scoring.

use crate::dom::{self, Document, NodeRef, Selection};
use crate::keywords;
use crate::patterns::{HIDDEN_STYLE, WIDGET_ID};
use crate::text;

/// Tags removed outright.
const REMOVE_TAGS: &str = "script, style, noscript, iframe, object, embed, applet, link, meta";

/// Structural tags that rarely hold article text.
const UNLIKELY_TAGS: &str = "footer, header, nav, aside, menu, menuitem";

/// Widget containers removed regardless of their text.
const WIDGET_EXACT_CLASSES: &[&str] = &[
    "dd-widget-wrapper",
    "dd-widget-input-wrapper",
    "deeperdive-widget",
    "ai-chatbot",
    "chatbot-container",
    "ai-assistant-widget",
];

/// Ad-network class fragments dropped from rewritten `data-articlebody` blocks.
const AD_NETWORK_CLASS_MARKERS: &[&str] = &["taboola", "trc_", "_ad", "mgid"];

/// Tags the blacklist and widget sweeps never remove.
const PROTECTED_TAGS: &[&str] = &["html", "body", "article", "main"];

/// Blacklisted elements shorter than this are removed.
const BLACKLIST_MIN_TEXT: usize = 200;
/// Blacklisted elements above this link density are removed.
const BLACKLIST_MAX_LINK_DENSITY: f64 = 0.5;

const ARTICLE_BODY_MIN_TEXT: usize = 200;
const ARTICLE_BODY_MIN_SEGMENT: usize = 30;
const ARTICLE_BODY_MIN_SEGMENTS: usize = 3;

/// Runs every preprocessing step in order.
pub fn preprocess(doc: &Document) {
    remove_unwanted_tags(doc);
    remove_hidden_elements(doc);
    remove_known_widgets(doc);
    strip_unlikely_candidates(doc);
    remove_blacklisted(doc);
    convert_article_body_text(doc);
    convert_to_paragraphs(doc);
    split_br_paragraphs(doc);
}

pub fn remove_unwanted_tags(doc: &Document) {
    doc.select(REMOVE_TAGS).remove();
}

/// Removes elements hidden by inline style, the `hidden` attribute or `aria-hidden`.
pub fn remove_hidden_elements(doc: &Document) {
    for node in doc.select("[style]").nodes() {
        let sel = Selection::from(*node);
        if HIDDEN_STYLE.is_match(&dom::get_attribute(&sel, "style")) {
            sel.remove();
        }
    }
    doc.select("[hidden]").remove();
    doc.select("[aria-hidden='true']").remove();
}

fn has_widget_class(class: &str) -> bool {
    class
        .split_whitespace()
        .any(|token| WIDGET_EXACT_CLASSES.contains(&token))
}

/// Removes chatbot and AI-assistant widgets.
pub fn remove_known_widgets(doc: &Document) {
    for node in doc.select("*").nodes() {
        let sel = Selection::from(*node);
        if PROTECTED_TAGS.contains(&dom::tag_name(&sel).as_str()) {
            continue;
        }

        let id = dom::id(&sel);
        if has_widget_class(&dom::class_name(&sel)) || (!id.is_empty() && WIDGET_ID.is_match(&id)) {
            sel.remove();
        }
    }
}

/// Removes `footer`, `header`, `nav`, `aside` and menus unless their class or id is whitelisted.
pub fn strip_unlikely_candidates(doc: &Document) {
    for node in doc.select(UNLIKELY_TAGS).nodes() {
        let sel = Selection::from(*node);
        if keywords::is_whitelisted(&dom::class_name(&sel)) || keywords::is_whitelisted(&dom::id(&sel)) {
            continue;
        }
        sel.remove();
    }
}

/// Removes blacklisted elements that are short or link-heavy.
///
/// A blacklist hit alone never removes a long, prose-like block, and an
/// element whose class or id is also whitelisted is always kept.
pub fn remove_blacklisted(doc: &Document) {
    for node in doc.select("*").nodes() {
        let sel = Selection::from(*node);
        if PROTECTED_TAGS.contains(&dom::tag_name(&sel).as_str()) {
            continue;
        }

        let combined = format!("{} {}", dom::class_name(&sel), dom::id(&sel));
        if keywords::is_whitelisted(&combined) || !keywords::is_blacklisted(&combined) {
            continue;
        }

        if dom::text_length(&sel) < BLACKLIST_MIN_TEXT
            || dom::link_density(&sel) > BLACKLIST_MAX_LINK_DENSITY
        {
            sel.remove();
        }
    }
}

fn direct_text_segments(node: &NodeRef) -> Vec<String> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_text)
        .map(|child| child.text().trim().to_string())
        .filter(|t| text::char_len(t) > ARTICLE_BODY_MIN_SEGMENT)
        .collect()
}

fn is_ad_network_block(sel: &Selection) -> bool {
    let class = dom::class_name(sel);
    AD_NETWORK_CLASS_MARKERS.iter().any(|m| class.contains(m))
}

/// Rewrites bare text runs inside `data-articlebody` containers as paragraphs.
///
/// Applies only to containers with substantial text and no `<p>` markup; inside
/// them, any `div` holding at least three long direct text nodes is rebuilt with
/// each such text node as its own `<p>`.
pub fn convert_article_body_text(doc: &Document) {
    for body in doc.select("[data-articlebody]").nodes() {
        let body_sel = Selection::from(*body);
        if text::char_len(body_sel.text().trim()) <= ARTICLE_BODY_MIN_TEXT
            || dom::inner_html(&body_sel).contains("<p")
        {
            continue;
        }

        for div in body_sel.select("div").nodes() {
            if direct_text_segments(div).len() < ARTICLE_BODY_MIN_SEGMENTS {
                continue;
            }

            let mut html = String::new();
            for child in div.children() {
                if child.is_text() {
                    let segment = child.text();
                    let segment = segment.trim();
                    if text::char_len(segment) > ARTICLE_BODY_MIN_SEGMENT {
                        html.push_str("<p>");
                        html.push_str(&text::escape_html(segment));
                        html.push_str("</p>\n");
                    }
                } else if child.is_element() {
                    let child_sel = Selection::from(child);
                    if !is_ad_network_block(&child_sel) {
                        html.push_str(&dom::outer_html(&child_sel));
                        html.push('\n');
                    }
                }
            }

            if !html.is_empty() {
                dom::set_inner_html(&Selection::from(*div), &html);
            }
        }
    }
}

/// Wraps the content of `div`/`span` elements with no block children in a `<p>`.
///
/// The outermost qualifying element wins: descendants rebuilt by its wrap are
/// no longer attached and are skipped.
pub fn convert_to_paragraphs(doc: &Document) {
    for node in doc.select("div, span").nodes() {
        if !dom::is_attached(node) {
            continue;
        }
        let sel = Selection::from(*node);
        if dom::has_block_child(&sel) || dom::text(&sel).is_empty() {
            continue;
        }
        let html = dom::inner_html(&sel);
        if !html.is_empty() {
            dom::set_inner_html(&sel, &format!("<p>{html}</p>"));
        }
    }
}

/// Splits `<br>`-separated runs inside each `div` into separate paragraphs.
///
/// Inline content between breaks becomes one `<p>` per non-empty run; block
/// children are kept as they are. A div whose only child is the paragraph
/// made by [`convert_to_paragraphs`] is split through that paragraph. Divs
/// are visited innermost first so rebuilding an outer div never strands a
/// nested one.
pub fn split_br_paragraphs(doc: &Document) {
    for node in doc.select("div").nodes().iter().rev() {
        let div = Selection::from(*node);
        let container = match dom::element_children(&div).as_slice() {
            [only] if dom::node_tag(only) == "p" && !has_loose_text(node) => *only,
            _ => *node,
        };

        let children = container.children();
        if !children.iter().any(|c| dom::node_tag(c) == "br") {
            continue;
        }

        let mut html = String::new();
        let mut segment = String::new();
        for child in children {
            let tag = dom::node_tag(&child);
            if tag == "br" {
                flush_segment(&mut segment, &mut html);
            } else if dom::is_block_element(&tag) {
                flush_segment(&mut segment, &mut html);
                html.push_str(&dom::outer_html(&Selection::from(child)));
            } else if child.is_element() {
                segment.push_str(&dom::outer_html(&Selection::from(child)));
            } else if child.is_text() {
                segment.push_str(&text::escape_html(&child.text()));
            }
        }
        flush_segment(&mut segment, &mut html);

        if !html.is_empty() {
            dom::set_inner_html(&div, &html);
        }
    }
}

fn has_loose_text(node: &NodeRef) -> bool {
    node.children()
        .iter()
        .any(|c| c.is_text() && !c.text().trim().is_empty())
}

fn flush_segment(segment: &mut String, html: &mut String) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        html.push_str("<p>");
        html.push_str(trimmed);
        html.push_str("</p>");
    }
    segment.clear();
}
