//! vaultplan Solver Engine
//!
//! This crate provides the planning engine:
//! - Room change moves and the capacity-aware move selector
//! - Bounded-depth exhaustive chain search
//! - Foragers implementing the two selection policies
//! - The `Planner` entry point with statistics and logging

pub mod heuristic;
pub mod phase;
pub mod planner;
pub mod stats;

pub use heuristic::{available_moves, RoomChange, RoomChangeDisplay, RoomChangeSelector};
pub use phase::chain::{
    best_chain, chain_moves, penalized_score, ChainForager, ChainNode, ChainSearch,
    FirstImprovementForager, MoveSequence, PenalizedForager, PolicyForager, MAXED_PENALTY,
};
pub use planner::{PlanOutcome, Planner};
pub use stats::SearchStats;
