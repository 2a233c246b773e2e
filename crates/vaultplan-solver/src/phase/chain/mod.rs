//! Bounded-depth exhaustive chain search.
//!
//! Every sequence of 0 up to `depth` legal moves is enumerated and kept.
//! There is no pruning and no deduplication: two orderings that reach the
//! same vault with the same score are separate nodes. The node count is
//! exponential in depth, so callers keep depth small (typically 3 or less).
//!
//! # Result Order
//!
//! Expanding a node yields `[unchanged, child_1, child_2, ...]`, with
//! children in selector order. Each entry of that list is expanded in turn
//! and the results are flattened in the same order. The first node of any
//! search is therefore always the unchanged starting vault.

mod forager;
mod node;

use tracing::{debug, trace};
use vaultplan_config::PlannerConfig;
use vaultplan_core::{Score, Vault};

use crate::heuristic::RoomChangeSelector;
use crate::stats::SearchStats;

pub use forager::{
    penalized_score, ChainForager, FirstImprovementForager, PenalizedForager, PolicyForager,
    MAXED_PENALTY,
};
pub use node::{ChainNode, MoveSequence};

/// Expands every chain of up to `depth` moves starting from `vault`.
///
/// `moves` and `score` describe how `vault` was reached; every returned
/// node extends them. `depth == 0` returns only the starting node.
///
/// # Examples
///
/// ```
/// use vaultplan_core::{Room, RoomCapacity, Score, Stats, Vault};
/// use vaultplan_solver::{chain_moves, MoveSequence, RoomChangeSelector};
///
/// let stats = Stats::uniform(5).unwrap();
/// let vault = Vault::from_entries([("Ada", stats, Room::Strength)]);
/// let selector = RoomChangeSelector::new(RoomCapacity::uniform(1));
///
/// let nodes = chain_moves(1, MoveSequence::new(), vault, Score::ZERO, &selector);
/// // Unchanged node plus one node per other room
/// assert_eq!(nodes.len(), 7);
/// assert!(nodes[0].moves().is_empty());
/// ```
pub fn chain_moves(
    depth: usize,
    moves: MoveSequence,
    vault: Vault,
    score: Score,
    selector: &RoomChangeSelector,
) -> Vec<ChainNode> {
    let mut stats = SearchStats::default();
    let mut out = Vec::new();
    expand(
        depth,
        ChainNode::new(moves, vault, score),
        selector,
        &mut out,
        &mut stats,
    );
    out
}

fn expand(
    depth: usize,
    node: ChainNode,
    selector: &RoomChangeSelector,
    out: &mut Vec<ChainNode>,
    stats: &mut SearchStats,
) {
    if depth == 0 {
        stats.record_node();
        out.push(node);
        return;
    }

    let children: Vec<ChainNode> = selector
        .iter_moves(node.vault())
        .map(|m| {
            trace!(
                event = "move",
                dweller = m.dweller().index(),
                from = %m.from(),
                to = %m.to(),
                delta = m.delta().value(),
            );
            node.child(m)
        })
        .collect();
    stats.record_expansion(children.len());

    expand(depth - 1, node, selector, out, stats);
    for child in children {
        expand(depth - 1, child, selector, out, stats);
    }
}

/// Exhaustive chain search rooted at a starting vault.
#[derive(Debug, Clone)]
pub struct ChainSearch {
    depth: usize,
    selector: RoomChangeSelector,
}

impl ChainSearch {
    /// Creates a search of the given depth.
    pub fn new(depth: usize, selector: RoomChangeSelector) -> Self {
        Self { depth, selector }
    }

    /// Returns the maximum chain length explored.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the move selector used for every expansion.
    pub fn selector(&self) -> &RoomChangeSelector {
        &self.selector
    }

    /// Enumerates all chains from `vault`, starting with no moves and zero score.
    pub fn explore(&self, vault: &Vault) -> Vec<ChainNode> {
        self.explore_with_stats(vault, &mut SearchStats::default())
    }

    /// Like [`explore`](Self::explore), recording counters into `stats`.
    pub fn explore_with_stats(&self, vault: &Vault, stats: &mut SearchStats) -> Vec<ChainNode> {
        let mut out = Vec::new();
        expand(
            self.depth,
            ChainNode::root(vault.clone()),
            &self.selector,
            &mut out,
            stats,
        );
        debug!(
            event = "chain_explored",
            depth = self.depth,
            nodes = out.len() as u64,
            expansions = stats.expansions,
        );
        out
    }
}

/// Searches chains up to `depth` and picks the best one under the
/// configured capacity and selection policy.
///
/// Returns `None` when the policy disqualifies every node.
pub fn best_chain(depth: usize, vault: &Vault, config: &PlannerConfig) -> Option<ChainNode> {
    let search = ChainSearch::new(depth, RoomChangeSelector::new(config.capacity()));
    let nodes = search.explore(vault);
    PolicyForager::from(config.selection_policy).pick(vault, nodes)
}

#[cfg(test)]
mod tests;
