//! Move selector enumerating the legal room changes of a vault.

use vaultplan_core::{spaces, Room, RoomCapacity, Vault};

use crate::heuristic::RoomChange;

/// Enumerates every single-dweller reassignment legal under room capacity.
///
/// Remaining space is computed once on the vault being expanded, so the
/// result is a list of independent single-step alternatives, not a plan.
///
/// Enumeration order is stable: destination rooms in [`Room::ALL`] order,
/// and for each destination, dwellers in id order. Tie-breaking in the
/// foragers depends on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomChangeSelector {
    capacity: RoomCapacity,
}

impl RoomChangeSelector {
    /// Creates a selector for the given room capacities.
    pub fn new(capacity: RoomCapacity) -> Self {
        Self { capacity }
    }

    /// Returns the capacity table this selector checks against.
    pub fn capacity(&self) -> &RoomCapacity {
        &self.capacity
    }

    /// Returns an iterator over the legal moves of `vault`.
    pub fn iter_moves<'a>(&'a self, vault: &'a Vault) -> impl Iterator<Item = RoomChange> + 'a {
        let spaces = spaces(vault, &self.capacity);
        Room::ALL
            .into_iter()
            .filter(move |&room| spaces.has_space(room))
            .flat_map(move |to| {
                vault
                    .iter()
                    .filter(move |&(_, from)| from != to)
                    .map(move |(dweller, _)| RoomChange::from_vault(vault, dweller.id(), to))
            })
    }

    /// Collects the legal moves of `vault`.
    pub fn moves(&self, vault: &Vault) -> Vec<RoomChange> {
        self.iter_moves(vault).collect()
    }

    /// Returns the number of legal moves of `vault`.
    pub fn size(&self, vault: &Vault) -> usize {
        self.iter_moves(vault).count()
    }
}

/// Lists every legal single-dweller reassignment of `vault`.
///
/// # Examples
///
/// ```
/// use vaultplan_core::{Room, RoomCapacity, Stats, Vault};
/// use vaultplan_solver::available_moves;
///
/// let stats = Stats::uniform(5).unwrap();
/// let vault = Vault::from_entries([("Ada", stats, Room::Strength)]);
///
/// // One move per other room
/// assert_eq!(available_moves(&vault, &RoomCapacity::uniform(1)).len(), 6);
/// ```
pub fn available_moves(vault: &Vault, capacity: &RoomCapacity) -> Vec<RoomChange> {
    RoomChangeSelector::new(*capacity).moves(vault)
}

#[cfg(test)]
mod tests;
