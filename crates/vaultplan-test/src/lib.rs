//! Shared test fixtures for vaultplan crates.
//!
//! This crate provides vault builders and `proptest` strategies.
//!
//! - [`fixtures`] - hand-built vaults for scenario tests
//! - [`strategy`] - random stats, vaults and capacities
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! vaultplan-test = { workspace = true }
//! ```

pub mod fixtures;
pub mod strategy;

pub use fixtures::{full_vault, stats, vault};
pub use strategy::{arb_capacity, arb_stats, arb_vault};
