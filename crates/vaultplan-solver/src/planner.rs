//! Planner entry point.
//!
//! `Planner` runs one fixed-depth chain search from a starting vault and
//! picks the winning chain under the configured policy.
//!
//! Logging levels:
//! - **INFO**: Search start/end, problem scale, selected chain
//! - **DEBUG**: Search completion per level and accepted candidates
//! - **TRACE**: Every generated move

use tracing::info;
use vaultplan_config::{PlannerConfig, SelectionPolicy};
use vaultplan_core::{Score, Vault};

use crate::heuristic::{RoomChange, RoomChangeSelector};
use crate::phase::chain::{ChainForager, ChainNode, ChainSearch, PolicyForager};
use crate::stats::SearchStats;

/// Result of one planning run.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    /// The winning chain, if the policy accepted any.
    pub best: Option<ChainNode>,
    /// Policy the winner was picked with.
    pub policy: SelectionPolicy,
    /// Maximum chain length explored.
    pub depth: usize,
    /// Search counters.
    pub stats: SearchStats,
}

impl PlanOutcome {
    /// Returns the moves of the winning chain, empty if there is none.
    pub fn moves(&self) -> &[RoomChange] {
        self.best.as_ref().map(|b| b.moves().moves()).unwrap_or(&[])
    }

    /// Returns the score of the winning chain.
    pub fn score(&self) -> Option<Score> {
        self.best.as_ref().map(ChainNode::score)
    }

    /// Returns the vault of the winning chain.
    pub fn vault(&self) -> Option<&Vault> {
        self.best.as_ref().map(ChainNode::vault)
    }
}

/// Runs chain searches under a fixed configuration.
///
/// # Examples
///
/// ```
/// use vaultplan_config::PlannerConfig;
/// use vaultplan_core::{Room, Stats, Vault};
/// use vaultplan_solver::Planner;
///
/// let stats = Stats::new([10, 5, 5, 5, 5, 5, 5]).unwrap();
/// let vault = Vault::from_entries([("Max", stats, Room::Strength)]);
///
/// let outcome = Planner::new(PlannerConfig::penalized()).plan(&vault, 1);
/// assert_eq!(outcome.moves().len(), 1);
/// assert_eq!(outcome.score().unwrap().value(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner for the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Searches all chains of up to `depth` moves from `vault` and picks the best.
    pub fn plan(&self, vault: &Vault, depth: usize) -> PlanOutcome {
        let policy = self.config.selection_policy;
        let selector = RoomChangeSelector::new(self.config.capacity());

        info!(
            event = "search_start",
            dweller_count = vault.len() as u64,
            maxed_count = vault.maxed_count() as u64,
            move_count = selector.size(vault) as u64,
            depth = depth as u64,
            policy = %policy,
        );

        let mut stats = SearchStats::default();
        stats.start();
        let nodes = ChainSearch::new(depth, selector).explore_with_stats(vault, &mut stats);
        let best = PolicyForager::from(policy).pick(vault, nodes);
        stats.finish();

        match &best {
            Some(node) => info!(
                event = "search_end",
                nodes = stats.nodes_generated,
                moves = node.depth() as u64,
                score = node.score().value(),
                duration_ms = stats.elapsed().as_millis() as u64,
                speed = stats.nodes_per_second() as u64,
            ),
            None => info!(
                event = "search_end",
                nodes = stats.nodes_generated,
                duration_ms = stats.elapsed().as_millis() as u64,
                speed = stats.nodes_per_second() as u64,
            ),
        }

        PlanOutcome {
            best,
            policy,
            depth,
            stats,
        }
    }
}
