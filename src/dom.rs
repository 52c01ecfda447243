//! DOM Operations Adapter
//!
//! Thin query/mutation surface over `dom_query`. The document is an arena:
//! nodes are addressed by `NodeId`, and two `Selection` or `NodeRef` handles
//! pointing at the same node share that id, so per-node state is keyed on it.

pub use dom_query::{Document, NodeId, NodeRef, Selection};

use crate::text;

/// Tags treated as block-level when deciding whether a container is a paragraph.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "dl", "fieldset", "figcaption",
    "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup",
    "hr", "li", "main", "nav", "noscript", "ol", "p", "pre", "section", "table", "ul",
];

#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Identity ===

/// Arena id of the first node in the selection.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

// === Attribute Operations ===

/// Attribute value, or an empty string when absent.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> String {
    sel.attr(name).map(|s| s.to_string()).unwrap_or_default()
}

#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// `class` attribute, empty when absent.
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> String {
    get_attribute(sel, "class")
}

/// `id` attribute, empty when absent.
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    get_attribute(sel, "id")
}

#[must_use]
pub fn attribute_names(sel: &Selection) -> Vec<String> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| attr.name.local.to_string())
                .collect()
        })
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Lower-cased tag name; empty for non-element nodes.
#[must_use]
pub fn tag_name(sel: &Selection) -> String {
    sel.nodes().first().map(node_tag).unwrap_or_default()
}

/// Lower-cased tag name of a node; empty for non-element nodes.
#[must_use]
pub fn node_tag(node: &NodeRef) -> String {
    if !node.is_element() {
        return String::new();
    }
    node.node_name()
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default()
}

#[inline]
#[must_use]
pub fn is_block_element(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag)
}

/// Whether any direct element child is block-level.
#[must_use]
pub fn has_block_child(sel: &Selection) -> bool {
    sel.children()
        .nodes()
        .iter()
        .any(|child| is_block_element(&node_tag(child)))
}

// === Text Content ===

/// Whitespace-normalized text of the selection's subtree.
#[inline]
#[must_use]
pub fn text(sel: &Selection) -> String {
    text::normalize(&sel.text())
}

/// Codepoint length of [`text`].
#[inline]
#[must_use]
pub fn text_length(sel: &Selection) -> usize {
    text::char_len(&text(sel))
}

/// Share of the node's text that sits inside `a` descendants, in `[0, 1]`.
///
/// Zero when the node has no text at all.
#[must_use]
pub fn link_density(sel: &Selection) -> f64 {
    let total = text_length(sel);
    if total == 0 {
        return 0.0;
    }

    let linked: usize = sel
        .select("a")
        .nodes()
        .iter()
        .map(|a| text::char_len(&text::normalize(&a.text())))
        .sum();

    (linked as f64 / total as f64).min(1.0)
}

#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> String {
    sel.inner_html().to_string()
}

#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> String {
    sel.html().to_string()
}

// === Tree Navigation ===

/// Parent of the node, if it is an element.
#[must_use]
pub fn parent_element<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    node.parent().filter(NodeRef::is_element)
}

/// Whether the node still hangs under the document's `<html>` element.
///
/// Handles collected before a `set_inner_html` on an ancestor point at the
/// replaced subtree and report `false`.
#[must_use]
pub fn is_attached(node: &NodeRef) -> bool {
    node.ancestors(None).iter().any(|a| node_tag(a) == "html")
}

/// Direct element children, in document order.
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<NodeRef<'a>> {
    sel.nodes()
        .first()
        .map(|node| node.children().into_iter().filter(NodeRef::is_element).collect())
        .unwrap_or_default()
}

// === Querying ===

#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

// === Tree Manipulation ===

#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

#[inline]
pub fn set_inner_html(sel: &Selection, html: &str) {
    sel.set_html(html);
}

/// Deep copy of the selection's first node into a fresh document.
///
/// The copy shares no node identity with the source.
#[must_use]
pub fn clone_subtree(sel: &Selection) -> Document {
    Document::from(outer_html(sel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_get_set_remove() {
        let doc = parse(r#"<div id="main" class="content" data-x="1">Hi</div>"#);
        let div = doc.select("div");
        assert_eq!(id(&div), "main");
        assert_eq!(class_name(&div), "content");
        assert_eq!(get_attribute(&div, "missing"), "");
        assert!(has_attribute(&div, "data-x"));

        set_attribute(&div, "title", "t");
        assert_eq!(get_attribute(&div, "title"), "t");
        remove_attribute(&div, "data-x");
        assert!(!has_attribute(&div, "data-x"));

        let mut names = attribute_names(&div);
        names.sort();
        assert_eq!(names, vec!["class", "id", "title"]);
    }

    #[test]
    fn tag_name_is_lowercase() {
        let doc = parse("<DIV><SPAN>x</SPAN></DIV>");
        assert_eq!(tag_name(&doc.select("span")), "span");
        assert_eq!(tag_name(&doc.select("div")), "div");
    }

    #[test]
    fn text_is_normalized() {
        let doc = parse("<p>  Hello \n   <b>world</b>  </p>");
        let p = doc.select("p");
        assert_eq!(text(&p), "Hello world");
        assert_eq!(text_length(&p), 11);
    }

    #[test]
    fn link_density_no_links_is_zero() {
        let doc = parse("<div>Plain text without any anchors at all.</div>");
        assert_eq!(link_density(&doc.select("div")), 0.0);
    }

    #[test]
    fn link_density_all_linked_is_one() {
        let doc = parse(r#"<div><a href="/x">Every word is a link</a></div>"#);
        assert_eq!(link_density(&doc.select("div")), 1.0);
    }

    #[test]
    fn link_density_partial() {
        let doc = parse(r#"<div>abcde <a href="/x">fghij</a></div>"#);
        let density = link_density(&doc.select("div"));
        assert!((density - 5.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn link_density_empty_node_is_zero() {
        let doc = parse("<div><a href='/x'></a></div>");
        assert_eq!(link_density(&doc.select("div")), 0.0);
    }

    #[test]
    fn block_children() {
        let doc = parse("<div id='a'><span>x</span><b>y</b></div><div id='b'><p>z</p></div>");
        assert!(!has_block_child(&doc.select("#a")));
        assert!(has_block_child(&doc.select("#b")));
    }

    #[test]
    fn parent_and_children() {
        let doc = parse("<div id='outer'>text<p>one</p><p>two</p></div>");
        let outer = doc.select("#outer");
        let kids = element_children(&outer);
        assert_eq!(kids.len(), 2);
        let parent = parent_element(&kids[0]).unwrap();
        assert_eq!(Some(parent.id), node_id(&outer));
    }

    #[test]
    fn same_node_same_id() {
        let doc = parse("<article><p>x</p></article>");
        let a = doc.select("article");
        let b = doc.select("p").parent();
        assert_eq!(node_id(&a), node_id(&b));
    }

    #[test]
    fn clone_is_independent() {
        let doc = parse("<div><p class='x'>keep</p></div>");
        let copy = clone_subtree(&doc.select("div"));
        copy.select("p").remove();
        assert_eq!(doc.select("p").length(), 1);
        assert_eq!(copy.select("p").length(), 0);
    }

    #[test]
    fn set_inner_html_replaces_children() {
        let doc = parse("<div>old</div>");
        let div = doc.select("div");
        set_inner_html(&div, "<p>new</p>");
        assert_eq!(inner_html(&div), "<p>new</p>");
    }

    #[test]
    fn rebuilt_descendants_are_detached() {
        let doc = parse("<div id='a'><span id='s'>x</span></div>");
        let span = doc.select("#s").nodes()[0];
        assert!(is_attached(&span));
        set_inner_html(&doc.select("#a"), "<p>y</p>");
        assert!(!is_attached(&span));
    }
}
