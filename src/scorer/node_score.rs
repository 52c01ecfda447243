//! Per-node score accumulator and the map that owns them.

use std::collections::HashMap;

use crate::dom::{Document, NodeId, NodeRef};

use super::{CANDIDATE_SCORE_FLOOR, HIGH_WEIGHT_LINK_DENSITY_MAX, LOW_WEIGHT_LINK_DENSITY_MAX};

/// Accumulated score for one candidate node.
///
/// `weight`, `link_density` and `text_length` are fixed when the node first
/// enters the map; only `content_score` changes afterwards.
#[derive(Clone, Copy)]
pub struct NodeScore<'a> {
    pub node: NodeRef<'a>,
    pub content_score: f64,
    pub weight: i32,
    pub link_density: f64,
    pub text_length: usize,
    order: usize,
}

impl<'a> NodeScore<'a> {
    #[must_use]
    pub fn new(node: NodeRef<'a>, order: usize) -> Self {
        Self {
            node,
            content_score: 0.0,
            weight: 0,
            link_density: 0.0,
            text_length: 0,
            order,
        }
    }

    /// `content_score + weight`, the value candidates are ranked by.
    #[inline]
    #[must_use]
    pub fn weighted_score(&self) -> f64 {
        self.content_score + f64::from(self.weight)
    }

    /// Link density above which the node is penalized.
    #[inline]
    #[must_use]
    pub fn link_density_ceiling(&self) -> f64 {
        if self.weight >= 0 {
            HIGH_WEIGHT_LINK_DENSITY_MAX
        } else {
            LOW_WEIGHT_LINK_DENSITY_MAX
        }
    }

    #[inline]
    #[must_use]
    pub fn is_high_link_density(&self) -> bool {
        self.link_density > self.link_density_ceiling()
    }

    /// Position of the node in document order.
    #[inline]
    #[must_use]
    pub fn document_order(&self) -> usize {
        self.order
    }
}

/// Node id to score, built fresh for every extraction.
pub struct ScoreMap<'a> {
    scores: HashMap<NodeId, NodeScore<'a>>,
    order: HashMap<NodeId, usize>,
}

impl<'a> ScoreMap<'a> {
    /// Creates an empty map over `doc`, recording document order for tie-breaks.
    #[must_use]
    pub fn new(doc: &'a Document) -> Self {
        let order = doc
            .select("*")
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id, i))
            .collect();
        Self {
            scores: HashMap::new(),
            order,
        }
    }

    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<&NodeScore<'a>> {
        self.scores.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.scores.contains_key(id)
    }

    /// Returns the entry for `node`, running `init` only when the node is new.
    pub fn get_or_init<F>(&mut self, node: NodeRef<'a>, init: F) -> &mut NodeScore<'a>
    where
        F: FnOnce(&mut NodeScore<'a>),
    {
        let order = self.order.get(&node.id).copied().unwrap_or(usize::MAX);
        self.scores.entry(node.id).or_insert_with(|| {
            let mut score = NodeScore::new(node, order);
            init(&mut score);
            score
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut NodeScore<'a>> {
        self.scores.values_mut()
    }

    /// All candidates scoring above [`CANDIDATE_SCORE_FLOOR`], best first.
    ///
    /// Ordered by weighted score descending; equal scores keep document order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&NodeScore<'a>> {
        let mut candidates: Vec<_> = self.eligible().collect();
        candidates.sort_by(|a, b| {
            b.weighted_score()
                .total_cmp(&a.weighted_score())
                .then(a.order.cmp(&b.order))
        });
        candidates
    }

    /// The best candidate, or `None` when nothing clears the floor.
    #[must_use]
    pub fn top_candidate(&self) -> Option<&NodeScore<'a>> {
        self.eligible().min_by(|a, b| {
            b.weighted_score()
                .total_cmp(&a.weighted_score())
                .then(a.order.cmp(&b.order))
        })
    }

    fn eligible(&self) -> impl Iterator<Item = &NodeScore<'a>> {
        self.scores
            .values()
            .filter(|s| s.weighted_score() > CANDIDATE_SCORE_FLOOR)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
