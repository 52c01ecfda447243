//! Heuristic extraction-quality estimate.
//!
//! Independent of the raw content score's scale: each signal contributes a
//! small bucketed amount and the sum is clamped to `[0, 1]`.

use crate::scorer::NodeScore;

/// Bonus when the winner's score is more than this multiple of the runner-up's.
const DOMINANCE_RATIO: f64 = 2.0;

fn score_bucket(score: f64) -> f64 {
    if score > 100.0 {
        0.4
    } else if score > 50.0 {
        0.3
    } else if score > 20.0 {
        0.2
    } else {
        0.1
    }
}

fn word_bucket(word_count: usize) -> f64 {
    match word_count {
        n if n > 500 => 0.3,
        n if n > 200 => 0.2,
        n if n > 100 => 0.1,
        _ => 0.0,
    }
}

fn link_density_bucket(link_density: f64) -> f64 {
    if link_density < 0.1 {
        0.2
    } else if link_density < 0.2 {
        0.1
    } else {
        0.0
    }
}

/// Confidence in `[0, 1]` for the winning candidate.
///
/// Scores compare raw content scores, not weighted ones.
#[must_use]
pub fn estimate_confidence(
    top: &NodeScore<'_>,
    runner_up: Option<&NodeScore<'_>>,
    word_count: usize,
) -> f64 {
    let score = top.content_score;

    let mut confidence =
        score_bucket(score) + word_bucket(word_count) + link_density_bucket(top.link_density);

    if let Some(second) = runner_up {
        if score > second.content_score * DOMINANCE_RATIO {
            confidence += 0.1;
        }
    }

    confidence.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn candidate<'a>(doc: &'a dom::Document, score: f64, link_density: f64) -> NodeScore<'a> {
        let node = *doc.select("div").nodes().first().unwrap();
        let mut s = NodeScore::new(node, 0);
        s.content_score = score;
        s.link_density = link_density;
        s
    }

    #[test]
    fn buckets() {
        assert_eq!(score_bucket(150.0), 0.4);
        assert_eq!(score_bucket(100.0), 0.3);
        assert_eq!(score_bucket(21.0), 0.2);
        assert_eq!(score_bucket(0.0), 0.1);
        assert_eq!(word_bucket(501), 0.3);
        assert_eq!(word_bucket(201), 0.2);
        assert_eq!(word_bucket(101), 0.1);
        assert_eq!(word_bucket(100), 0.0);
        assert_eq!(link_density_bucket(0.05), 0.2);
        assert_eq!(link_density_bucket(0.15), 0.1);
        assert_eq!(link_density_bucket(0.5), 0.0);
    }

    #[test]
    fn strong_article_is_clamped_to_one() {
        let doc = dom::parse("<div>x</div>");
        let top = candidate(&doc, 300.0, 0.0);
        let second = candidate(&doc, 10.0, 0.0);
        let c = estimate_confidence(&top, Some(&second), 900);
        assert!((c - 1.0).abs() < 1e-9);
    }

    #[test]
    fn weak_article_is_low_but_positive() {
        let doc = dom::parse("<div>x</div>");
        let top = candidate(&doc, 5.0, 0.6);
        let c = estimate_confidence(&top, None, 10);
        assert!((c - 0.1).abs() < 1e-9);
    }

    #[test]
    fn dominance_bonus_needs_double() {
        let doc = dom::parse("<div>x</div>");
        let top = candidate(&doc, 40.0, 0.3);
        let close = candidate(&doc, 25.0, 0.0);
        let far = candidate(&doc, 15.0, 0.0);
        let without = estimate_confidence(&top, Some(&close), 0);
        let with = estimate_confidence(&top, Some(&far), 0);
        assert!((without - 0.2).abs() < 1e-9);
        assert!((with - 0.3).abs() < 1e-9);
    }
}
