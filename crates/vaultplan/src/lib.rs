//! Vaultplan - room assignment planner for vault dwellers
//!
//! Loads a roster, searches every chain of room changes up to a fixed depth
//! and keeps the best one under the configured selection policy.
//!
//! # Example
//!
//! ```rust
//! use vaultplan::prelude::*;
//!
//! let stats = Stats::new([10, 5, 5, 5, 5, 5, 5]).unwrap();
//! let vault = Vault::from_entries([("Max", stats, Room::Strength)]);
//!
//! let outcome = Planner::new(PlannerConfig::penalized()).plan(&vault, 1);
//! assert_eq!(outcome.score(), Some(Score::of(5)));
//! ```

pub use vaultplan_config::{
    CapacityOverride, ConfigError, PlannerConfig, SelectionPolicy, DEFAULT_ROOM_CAPACITY,
    DEFAULT_ROSTER_PATH, FIRST_IMPROVEMENT_ROOM_CAPACITY,
};
pub use vaultplan_core::{
    load_roster, read_roster, save_roster, spaces, write_roster, Dweller, DwellerId, Result,
    Room, RoomCapacity, RoomSpaces, RosterError, Score, Stats, Vault, VaultPlanError,
};
pub use vaultplan_solver::{
    available_moves, best_chain, chain_moves, ChainNode, MoveSequence, PlanOutcome, Planner,
    RoomChange, RoomChangeSelector, SearchStats, MAXED_PENALTY,
};

#[cfg(feature = "console")]
pub mod console {
    pub use vaultplan_console::{directive_for_verbosity, init, init_with_directive};
}

mod run;
pub use run::{plan_roster, plan_roster_file, save_outcome, RunOptions};

pub mod prelude {
    pub use super::{
        best_chain, Planner, PlannerConfig, Room, RoomCapacity, Score, SelectionPolicy, Stats,
        Vault,
    };
    pub use super::{plan_roster, plan_roster_file, save_outcome, RunOptions};
}
