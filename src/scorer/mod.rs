//! Content scoring: paragraph scores, propagation to ancestors, link-density
//! refinement and top-candidate selection.

pub mod node_score;
pub mod paragraph;
pub mod propagation;

pub use node_score::{NodeScore, ScoreMap};
pub use paragraph::{descendant_paragraph_score, score_paragraph, score_text, ParagraphScore};
pub use propagation::{has_hnews, refine_scores, score_and_propagate, tag_score};

use crate::dom::Document;

pub const HNEWS_BONUS: f64 = 80.0;
pub const PARAGRAPH_BASE_SCORE: f64 = 1.0;
pub const LENGTH_CHUNK_SIZE: usize = 50;
pub const MAX_LENGTH_BONUS: usize = 3;
pub const PARENT_SCORE_PROPORTION: f64 = 1.0;
pub const GRANDPARENT_SCORE_PROPORTION: f64 = 0.5;

/// Link-density ceiling for nodes with a negative keyword weight.
pub const LOW_WEIGHT_LINK_DENSITY_MAX: f64 = 0.2;
/// Link-density ceiling for nodes with a neutral or positive keyword weight.
pub const HIGH_WEIGHT_LINK_DENSITY_MAX: f64 = 0.5;

/// Candidates must score above this to be selected.
pub const CANDIDATE_SCORE_FLOOR: f64 = -1.0;

pub const SIBLING_SCORE_THRESHOLD_BASE: f64 = 10.0;
pub const SIBLING_SCORE_THRESHOLD_FACTOR: f64 = 0.25;

/// Builds the refined score map for a preprocessed document.
#[must_use]
pub fn score_document(doc: &Document, min_paragraph_length: usize) -> ScoreMap<'_> {
    let mut map = score_and_propagate(doc, min_paragraph_length);
    refine_scores(&mut map);
    map
}

/// Minimum descendant paragraph score for a non-paragraph sibling to be merged.
#[must_use]
pub fn sibling_threshold(top_score: f64) -> f64 {
    (top_score * SIBLING_SCORE_THRESHOLD_FACTOR).max(SIBLING_SCORE_THRESHOLD_BASE)
}
