//! Heuristic components for planning
//!
//! This module contains:
//! - Moves: single-dweller room reassignments
//! - Selectors: components that enumerate the legal moves of a vault

pub mod r#move;
pub mod selector;

pub use r#move::{RoomChange, RoomChangeDisplay};
pub use selector::{available_moves, RoomChangeSelector};
