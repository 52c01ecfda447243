//! Distribution of paragraph scores to ancestors, and the link-density refinement.

use crate::dom::{self, Document, NodeRef, Selection};
use crate::keywords;

use super::node_score::{NodeScore, ScoreMap};
use super::paragraph::score_paragraph;
use super::{GRANDPARENT_SCORE_PROPORTION, HNEWS_BONUS, PARENT_SCORE_PROPORTION};

const HNEWS_CLASSES: &[&str] = &["hentry", "h-entry", "entry-content"];

const HNEWS_ITEMTYPES: &[&str] = &[
    "http://schema.org/Article",
    "https://schema.org/Article",
    "http://schema.org/NewsArticle",
    "https://schema.org/NewsArticle",
];

/// Fixed bonus for a candidate's own tag.
#[must_use]
pub fn tag_score(tag: &str) -> f64 {
    match tag {
        "div" => 5.0,
        "td" | "blockquote" => 3.0,
        "form" | "address" => -3.0,
        _ => 0.0,
    }
}

/// Whether the element carries an hNews / schema.org article signal.
#[must_use]
pub fn has_hnews(sel: &Selection) -> bool {
    if HNEWS_CLASSES.iter().any(|class| sel.has_class(class)) {
        return true;
    }
    let itemtype = dom::get_attribute(sel, "itemtype");
    HNEWS_ITEMTYPES.contains(&itemtype.as_str())
}

/// Sets the fixed fields of a node entering the score map.
fn initialize(score: &mut NodeScore<'_>) {
    let sel = Selection::from(score.node);

    score.content_score += tag_score(&dom::tag_name(&sel));
    score.weight = keywords::classify(&dom::class_name(&sel), &dom::id(&sel));
    if has_hnews(&sel) {
        score.content_score += HNEWS_BONUS;
    }
    score.link_density = dom::link_density(&sel);
    score.text_length = dom::text_length(&sel);
}

fn add_score<'a>(map: &mut ScoreMap<'a>, node: NodeRef<'a>, amount: f64) {
    map.get_or_init(node, initialize).content_score += amount;
}

/// Scores every `p`/`pre` element and credits its parent in full and its
/// grandparent by half.
///
/// Only element ancestors become candidates.
#[must_use]
pub fn score_and_propagate(doc: &Document, min_paragraph_length: usize) -> ScoreMap<'_> {
    let mut map = ScoreMap::new(doc);

    for node in doc.select("p, pre").nodes() {
        let score = score_paragraph(&Selection::from(*node), min_paragraph_length);
        if score <= 0.0 {
            continue;
        }

        let Some(parent) = dom::parent_element(node) else {
            continue;
        };
        add_score(&mut map, parent, score * PARENT_SCORE_PROPORTION);

        if let Some(grandparent) = dom::parent_element(&parent) {
            add_score(&mut map, grandparent, score * GRANDPARENT_SCORE_PROPORTION);
        }
    }

    map
}

/// Scales down every candidate whose link density exceeds its ceiling.
///
/// Runs once, after propagation.
pub fn refine_scores(map: &mut ScoreMap<'_>) {
    for score in map.iter_mut() {
        if score.is_high_link_density() {
            score.content_score *= 1.0 - score.link_density;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(n: usize) -> String {
        format!("<p>{}</p>", "word ".repeat(n))
    }

    #[test]
    fn tag_scores() {
        assert_eq!(tag_score("div"), 5.0);
        assert_eq!(tag_score("td"), 3.0);
        assert_eq!(tag_score("blockquote"), 3.0);
        assert_eq!(tag_score("form"), -3.0);
        assert_eq!(tag_score("address"), -3.0);
        assert_eq!(tag_score("section"), 0.0);
    }

    #[test]
    fn parent_gets_full_grandparent_half() {
        // each paragraph: 60 chars -> 1 + 1 = 2
        let html = format!(
            "<html><body><section id='gp'><div id='p'>{}{}</div></section></body></html>",
            para(12),
            para(12)
        );
        let doc = dom::parse(&html);
        let map = score_and_propagate(&doc, 25);

        let parent = doc.select("#p").nodes()[0];
        let grandparent = doc.select("#gp").nodes()[0];
        assert_eq!(map.get(&parent.id).unwrap().content_score, 5.0 + 4.0);
        assert_eq!(map.get(&grandparent.id).unwrap().content_score, 2.0);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn short_paragraphs_do_not_propagate() {
        let doc = dom::parse("<div><p>tiny</p></div>");
        let map = score_and_propagate(&doc, 25);
        assert!(map.is_empty());
    }

    #[test]
    fn hnews_bonus_applied_once() {
        let html = format!("<div><article class='hentry'>{}{}</article></div>", para(12), para(12));
        let doc = dom::parse(&html);
        let map = score_and_propagate(&doc, 25);
        let article = doc.select("article").nodes()[0];
        let entry = map.get(&article.id).unwrap();
        assert_eq!(entry.content_score, 80.0 + 4.0);
        assert_eq!(entry.weight, 25);
    }

    #[test]
    fn hnews_itemtype() {
        let doc = dom::parse(r#"<div itemtype="https://schema.org/NewsArticle"></div>"#);
        assert!(has_hnews(&doc.select("div")));
        let doc = dom::parse(r#"<div itemtype="https://schema.org/Person"></div>"#);
        assert!(!has_hnews(&doc.select("div")));
    }

    #[test]
    fn refinement_penalizes_link_heavy_nodes() {
        let links = "<a href='/x'>link text that is long enough</a> ".repeat(5);
        let html = format!("<div id='nav'><p>{links}</p></div>");
        let doc = dom::parse(&html);
        let mut map = score_and_propagate(&doc, 25);
        let div = doc.select("#nav").nodes()[0];
        let before = map.get(&div.id).unwrap().content_score;
        refine_scores(&mut map);
        let after = map.get(&div.id).unwrap();
        assert!(after.link_density > 0.5);
        assert!((after.content_score - before * (1.0 - after.link_density)).abs() < 1e-9);
    }

    #[test]
    fn refinement_leaves_clean_nodes() {
        let html = format!("<div id='c'>{}</div>", para(20));
        let doc = dom::parse(&html);
        let mut map = score_and_propagate(&doc, 25);
        let div = doc.select("#c").nodes()[0];
        let before = map.get(&div.id).unwrap().content_score;
        refine_scores(&mut map);
        assert_eq!(map.get(&div.id).unwrap().content_score, before);
    }
}
