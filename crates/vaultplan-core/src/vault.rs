//! Vault configurations: which room every dweller is assigned to.

use std::sync::Arc;

use crate::dweller::{Dweller, DwellerId, Stats};
use crate::room::{Room, RoomCapacity, RoomSpaces};

/// A complete assignment of every dweller to a room.
///
/// Dwellers are shared between all configurations derived from the same
/// roster; each configuration owns only its room array, indexed by
/// [`DwellerId`]. Cloning a vault copies that array and nothing else.
///
/// A vault is a passive value: it does not enforce room capacity. Legal
/// moves are decided by the move selector from [`spaces`].
///
/// # Examples
///
/// ```
/// use vaultplan_core::{Room, Stats, Vault};
///
/// let stats = Stats::uniform(5).unwrap();
/// let vault = Vault::from_entries([("Ada", stats, Room::Strength)]);
/// let id = vault.dwellers()[0].id();
///
/// let moved = vault.with_room(id, Room::Luck);
/// assert_eq!(vault.room_of(id), Room::Strength);
/// assert_eq!(moved.room_of(id), Room::Luck);
/// ```
#[derive(Debug, Clone)]
pub struct Vault {
    dwellers: Arc<[Dweller]>,
    rooms: Vec<Room>,
}

impl Vault {
    /// Builds a vault from `(name, stats, room)` entries, assigning ids in order.
    pub fn from_entries<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, Stats, Room)>,
        N: Into<String>,
    {
        let mut dwellers = Vec::new();
        let mut rooms = Vec::new();
        for (index, (name, stats, room)) in entries.into_iter().enumerate() {
            dwellers.push(Dweller::new(DwellerId::new(index), name, stats));
            rooms.push(room);
        }
        Self {
            dwellers: dwellers.into(),
            rooms,
        }
    }

    /// Returns the number of dwellers.
    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Returns all dwellers in id order.
    #[inline]
    pub fn dwellers(&self) -> &[Dweller] {
        &self.dwellers
    }

    /// Returns the dweller with the given id.
    #[inline]
    pub fn dweller(&self, id: DwellerId) -> &Dweller {
        &self.dwellers[id.index()]
    }

    /// Returns the room the dweller is currently assigned to.
    #[inline]
    pub fn room_of(&self, id: DwellerId) -> Room {
        self.rooms[id.index()]
    }

    /// Returns a copy of this vault with one dweller reassigned.
    pub fn with_room(&self, id: DwellerId, room: Room) -> Vault {
        let mut next = self.clone();
        next.rooms[id.index()] = room;
        next
    }

    /// Iterates dwellers with their current room, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&Dweller, Room)> + '_ {
        self.dwellers.iter().zip(self.rooms.iter().copied())
    }

    /// Returns the number of dwellers currently assigned to `room`.
    pub fn occupancy(&self, room: Room) -> usize {
        self.rooms.iter().filter(|&&r| r == room).count()
    }

    /// Returns whether the dweller sits in a room where its score is maxed.
    #[inline]
    pub fn is_maxed(&self, id: DwellerId) -> bool {
        self.dweller(id).stats().is_maxed(self.room_of(id))
    }

    /// Returns whether any dweller sits in a maxed room.
    pub fn has_maxed(&self) -> bool {
        self.iter().any(|(d, room)| d.stats().is_maxed(room))
    }

    /// Counts the dwellers sitting in a maxed room.
    pub fn maxed_count(&self) -> usize {
        self.iter()
            .filter(|(d, room)| d.stats().is_maxed(*room))
            .count()
    }

    /// Returns whether both vaults hold the same dwellers in the same rooms.
    pub fn same_assignment(&self, other: &Vault) -> bool {
        self.rooms == other.rooms
            && self.dwellers.len() == other.dwellers.len()
            && self
                .dwellers
                .iter()
                .zip(other.dwellers.iter())
                .all(|(a, b)| a.name() == b.name() && a.stats() == b.stats())
    }
}

/// Computes the remaining space of every room.
///
/// Remaining space is the room's fixed capacity minus the number of
/// dwellers currently assigned to it.
pub fn spaces(vault: &Vault, capacity: &RoomCapacity) -> RoomSpaces {
    let mut spaces = RoomSpaces::from_capacity(capacity);
    for (_, room) in vault.iter() {
        spaces[room] -= 1;
    }
    spaces
}
