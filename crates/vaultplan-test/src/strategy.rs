//! `proptest` strategies for vault data.

use proptest::prelude::*;
use vaultplan_core::{Room, RoomCapacity, Stats, Vault};

/// Any valid stat block.
pub fn arb_stats() -> impl Strategy<Value = Stats> {
    proptest::array::uniform7(1u8..=10).prop_map(|values| {
        Stats::new(values).expect("values are generated in 1..=10")
    })
}

/// Any room.
pub fn arb_room() -> impl Strategy<Value = Room> {
    proptest::sample::select(Room::ALL.to_vec())
}

/// A roster-safe dweller name.
pub fn arb_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,6}"
}

/// A vault of `1..=max_dwellers` dwellers in arbitrary rooms.
///
/// Rooms may exceed any particular capacity.
pub fn arb_vault(max_dwellers: usize) -> impl Strategy<Value = Vault> {
    proptest::collection::vec((arb_name(), arb_stats(), arb_room()), 1..=max_dwellers)
        .prop_map(|rows| Vault::from_entries(rows))
}

/// A uniform capacity in `1..=max`.
pub fn arb_capacity(max: usize) -> impl Strategy<Value = RoomCapacity> {
    (1..=max).prop_map(RoomCapacity::uniform)
}
