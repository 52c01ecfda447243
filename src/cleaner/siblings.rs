//! Absorbing continuation content that sits next to the top candidate.

use crate::dom::{self, NodeRef, Selection};
use crate::keywords;
use crate::scorer::{self, descendant_paragraph_score};

/// Link density below which a `p` sibling is merged.
const PARAGRAPH_MAX_LINK_DENSITY: f64 = 0.2;
/// Link density up to which any other sibling is merged.
const SIBLING_MAX_LINK_DENSITY: f64 = 0.25;

/// Markup selected for the article body.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    /// A single `<div>` wrapping the selected markup.
    pub html: String,
    /// Number of siblings merged next to the candidate.
    pub merged_siblings: usize,
}

/// Whether `sibling` looks like continuation content.
#[must_use]
pub fn should_merge_sibling(sibling: &Selection, threshold: f64, min_paragraph_length: usize) -> bool {
    if dom::tag_name(sibling) == "p" {
        return dom::text_length(sibling) >= min_paragraph_length
            && dom::link_density(sibling) < PARAGRAPH_MAX_LINK_DENSITY;
    }

    if keywords::classify(&dom::class_name(sibling), &dom::id(sibling)) < 0 {
        return false;
    }

    if dom::link_density(sibling) > SIBLING_MAX_LINK_DENSITY {
        return false;
    }

    descendant_paragraph_score(sibling, min_paragraph_length) >= threshold
}

/// Collects the candidate and its qualifying siblings, in sibling order.
///
/// Without merges the block holds the candidate's inner markup; with merges it
/// holds the outer markup of the candidate and each merged sibling.
#[must_use]
pub fn merge_siblings(candidate: NodeRef<'_>, top_score: f64, min_paragraph_length: usize) -> ContentBlock {
    let candidate_sel = Selection::from(candidate);
    let threshold = scorer::sibling_threshold(top_score);

    let Some(parent) = dom::parent_element(&candidate) else {
        return wrap(&dom::inner_html(&candidate_sel), 0);
    };

    let mut parts = Vec::new();
    let mut merged_siblings = 0;
    for sibling in dom::element_children(&Selection::from(parent)) {
        let sibling_sel = Selection::from(sibling);
        if sibling.id == candidate.id {
            parts.push(dom::outer_html(&sibling_sel));
        } else if should_merge_sibling(&sibling_sel, threshold, min_paragraph_length) {
            parts.push(dom::outer_html(&sibling_sel));
            merged_siblings += 1;
        }
    }

    if merged_siblings == 0 {
        return wrap(&dom::inner_html(&candidate_sel), 0);
    }

    wrap(&parts.concat(), merged_siblings)
}

fn wrap(inner: &str, merged_siblings: usize) -> ContentBlock {
    ContentBlock {
        html: format!("<div>{inner}</div>"),
        merged_siblings,
    }
}
