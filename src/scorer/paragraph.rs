//! Scoring of individual text-bearing elements.

use crate::dom::{self, Selection};
use crate::text;

use super::{LENGTH_CHUNK_SIZE, MAX_LENGTH_BONUS, PARAGRAPH_BASE_SCORE};

/// Breakdown of one paragraph's score.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphScore {
    pub text: String,
    pub length: usize,
    pub commas: usize,
    pub length_bonus: usize,
    pub score: f64,
}

/// Scores normalized `text` against `min_length`.
///
/// Returns a zero score when the text is shorter than `min_length`
/// codepoints; such paragraphs are excluded from propagation.
#[must_use]
pub fn score_text(text: String, min_length: usize) -> ParagraphScore {
    let length = text::char_len(&text);
    if length < min_length {
        return ParagraphScore {
            text,
            length,
            commas: 0,
            length_bonus: 0,
            score: 0.0,
        };
    }

    let commas = text::count_commas(&text);
    let length_bonus = (length / LENGTH_CHUNK_SIZE).min(MAX_LENGTH_BONUS);
    let score = PARAGRAPH_BASE_SCORE + commas as f64 + length_bonus as f64;

    ParagraphScore {
        text,
        length,
        commas,
        length_bonus,
        score,
    }
}

/// Scores the element's normalized text.
#[inline]
#[must_use]
pub fn score_paragraph(sel: &Selection, min_length: usize) -> f64 {
    score_text(dom::text(sel), min_length).score
}

/// Sum of paragraph scores over every `p`/`pre` descendant of `sel`.
#[must_use]
pub fn descendant_paragraph_score(sel: &Selection, min_length: usize) -> f64 {
    sel.select("p, pre")
        .nodes()
        .iter()
        .map(|node| score_paragraph(&Selection::from(*node), min_length))
        .sum()
}
