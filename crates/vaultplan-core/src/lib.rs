//! vaultplan Core - Core types for dweller room assignment
//!
//! This crate provides the fundamental abstractions for vaultplan:
//! - Rooms (slot types) with fixed capacities
//! - Dwellers with a score per room
//! - Vault configurations and remaining-space accounting
//! - Score type for cumulative move chains
//! - The flat text roster format

pub mod dweller;
pub mod error;
pub mod room;
pub mod roster;
pub mod score;
pub mod vault;

pub use dweller::{Dweller, DwellerId, Stats, MAX_STAT};
pub use error::{Result, VaultPlanError};
pub use room::{Room, RoomCapacity, RoomSpaces};
pub use roster::{
    load_roster, parse_line, read_roster, save_roster, write_roster, RosterEntry, RosterError,
};
pub use score::Score;
pub use vault::{spaces, Vault};
