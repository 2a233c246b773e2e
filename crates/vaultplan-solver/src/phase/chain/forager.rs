//! Foragers pick the winning node from a finished chain search.

use std::fmt::Debug;

use tracing::debug;
use vaultplan_config::SelectionPolicy;
use vaultplan_core::{Score, Vault};

use super::node::ChainNode;

/// Score added for every dweller sitting in a room where its stat is maxed.
pub const MAXED_PENALTY: Score = Score::of(-100);

/// Applies [`MAXED_PENALTY`] once per maxed dweller in `vault`.
///
/// ```
/// use vaultplan_core::{Room, Score, Stats, Vault};
/// use vaultplan_solver::penalized_score;
///
/// let maxed = Stats::new([10, 5, 5, 5, 5, 5, 5]).unwrap();
/// let vault = Vault::from_entries([("Ada", maxed, Room::Strength)]);
/// assert_eq!(penalized_score(Score::of(3), &vault), Score::of(-97));
/// ```
pub fn penalized_score(score: Score, vault: &Vault) -> Score {
    score + MAXED_PENALTY * vault.maxed_count() as i64
}

/// Selects the best node of a search.
pub trait ChainForager: Send + Debug {
    /// Picks the winning node, or `None` if every node is disqualified.
    ///
    /// `root` is the vault the search started from; `nodes` are in search
    /// order.
    fn pick(&self, root: &Vault, nodes: Vec<ChainNode>) -> Option<ChainNode>;
}

/// Keeps the node with the strictly greatest raw score.
///
/// Any node whose vault leaves a dweller in a maxed room is disqualified,
/// the unchanged node included. The bar starts at `-1`, so a zero-score
/// node can win. On equal scores the earliest node wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstImprovementForager;

impl FirstImprovementForager {
    pub fn new() -> Self {
        Self
    }
}

impl ChainForager for FirstImprovementForager {
    fn pick(&self, _root: &Vault, nodes: Vec<ChainNode>) -> Option<ChainNode> {
        let mut best_score = Score::of(-1);
        let mut best = None;

        for node in nodes {
            if node.score() <= best_score {
                continue;
            }
            if node.vault().has_maxed() {
                continue;
            }
            debug!(
                event = "candidate_accepted",
                score = node.score().value(),
                moves = node.depth() as u64,
            );
            best_score = node.score();
            best = Some(node);
        }

        best
    }
}

/// Compares nodes by score plus [`MAXED_PENALTY`] per maxed dweller.
///
/// The unchanged root vault, penalized the same way, is the initial best.
/// A node replaces the best only with a strictly higher penalized score, or
/// an equal one reached with strictly fewer moves. Always returns a node;
/// its score is the penalized score.
#[derive(Debug, Clone, Copy, Default)]
pub struct PenalizedForager;

impl PenalizedForager {
    pub fn new() -> Self {
        Self
    }
}

impl ChainForager for PenalizedForager {
    fn pick(&self, root: &Vault, nodes: Vec<ChainNode>) -> Option<ChainNode> {
        let baseline = penalized_score(Score::ZERO, root);
        let mut best = ChainNode::root(root.clone()).with_score(baseline);

        for node in nodes {
            let score = penalized_score(node.score(), node.vault());
            if score < best.score() || (score == best.score() && node.depth() >= best.depth()) {
                continue;
            }
            debug!(
                event = "candidate_accepted",
                score = score.value(),
                moves = node.depth() as u64,
            );
            best = node.with_score(score);
        }

        Some(best)
    }
}

/// Forager chosen at runtime from a [`SelectionPolicy`].
#[derive(Debug, Clone, Copy)]
pub enum PolicyForager {
    FirstImprovement(FirstImprovementForager),
    Penalized(PenalizedForager),
}

impl From<SelectionPolicy> for PolicyForager {
    fn from(policy: SelectionPolicy) -> Self {
        match policy {
            SelectionPolicy::FirstImprovement => {
                PolicyForager::FirstImprovement(FirstImprovementForager)
            }
            SelectionPolicy::Penalized => PolicyForager::Penalized(PenalizedForager),
        }
    }
}

impl ChainForager for PolicyForager {
    fn pick(&self, root: &Vault, nodes: Vec<ChainNode>) -> Option<ChainNode> {
        match self {
            PolicyForager::FirstImprovement(f) => f.pick(root, nodes),
            PolicyForager::Penalized(f) => f.pick(root, nodes),
        }
    }
}
