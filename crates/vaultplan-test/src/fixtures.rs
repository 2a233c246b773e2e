//! Hand-built vault fixtures.

use vaultplan_core::{Room, Stats, Vault};

/// Builds stats from raw values.
///
/// # Panics
///
/// Panics if any value lies outside `1..=10`.
pub fn stats(values: [u8; Room::COUNT]) -> Stats {
    Stats::new(values).expect("stat values must lie in 1..=10")
}

/// Builds a vault from `(name, stats, room)` rows, ids in row order.
///
/// # Example
///
/// ```
/// use vaultplan_core::Room;
/// use vaultplan_test::vault;
///
/// let v = vault(&[("Ada", [5; 7], Room::Strength)]);
/// assert_eq!(v.len(), 1);
/// ```
pub fn vault(rows: &[(&str, [u8; Room::COUNT], Room)]) -> Vault {
    Vault::from_entries(
        rows.iter()
            .map(|&(name, values, room)| (name, stats(values), room)),
    )
}

/// One dweller per room, all with the same stats except the first,
/// which gets `first`. With capacity 1 no move is legal.
pub fn full_vault(first: [u8; Room::COUNT]) -> Vault {
    Vault::from_entries(Room::ALL.iter().enumerate().map(|(i, &room)| {
        let values = if i == 0 { first } else { [5; Room::COUNT] };
        (format!("D{}", i), stats(values), room)
    }))
}
