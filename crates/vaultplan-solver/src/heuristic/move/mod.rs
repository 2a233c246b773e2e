//! RoomChange - reassigns one dweller to another room.
//!
//! This is the only move type. Its delta is the dweller's score in the
//! room it leaves minus its score in the room it enters, so moving a
//! dweller toward a room where it scores lower yields a positive delta.

use std::fmt;

use vaultplan_core::{DwellerId, Room, Score, Vault};

/// A move that reassigns a single dweller.
///
/// # Examples
///
/// ```
/// use vaultplan_core::{Room, Stats, Vault};
/// use vaultplan_solver::RoomChange;
///
/// let stats = Stats::new([8, 3, 5, 5, 5, 5, 5]).unwrap();
/// let vault = Vault::from_entries([("Ada", stats, Room::Strength)]);
/// let ada = vault.dwellers()[0].id();
///
/// let m = RoomChange::from_vault(&vault, ada, Room::Perception);
/// assert_eq!(m.delta().value(), 5);
/// assert_eq!(m.display(&vault).to_string(), "Ada: S -> P (5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomChange {
    dweller: DwellerId,
    from: Room,
    to: Room,
    delta: Score,
}

impl RoomChange {
    /// Creates a move from its parts.
    pub fn new(dweller: DwellerId, from: Room, to: Room, delta: Score) -> Self {
        Self {
            dweller,
            from,
            to,
            delta,
        }
    }

    /// Creates the move of `dweller` from its current room in `vault` to `to`,
    /// computing the delta from the dweller's stats.
    pub fn from_vault(vault: &Vault, dweller: DwellerId, to: Room) -> Self {
        let from = vault.room_of(dweller);
        let stats = vault.dweller(dweller).stats();
        Self::new(dweller, from, to, Score::of(stats.get(from) - stats.get(to)))
    }

    #[inline]
    pub fn dweller(&self) -> DwellerId {
        self.dweller
    }

    /// Returns the room the dweller leaves.
    #[inline]
    pub fn from(&self) -> Room {
        self.from
    }

    /// Returns the room the dweller enters.
    #[inline]
    pub fn to(&self) -> Room {
        self.to
    }

    /// Returns the score delta of this move.
    #[inline]
    pub fn delta(&self) -> Score {
        self.delta
    }

    /// Returns true if this move changes `vault`.
    ///
    /// A move is not doable if the dweller is no longer in the source room
    /// or if source and destination are the same room.
    pub fn is_doable(&self, vault: &Vault) -> bool {
        self.from != self.to && vault.room_of(self.dweller) == self.from
    }

    /// Returns the vault after this move, leaving `vault` untouched.
    pub fn apply(&self, vault: &Vault) -> Vault {
        vault.with_room(self.dweller, self.to)
    }

    /// Formats this move as `<name>: <from> -> <to> (<delta>)`.
    pub fn display<'a>(&'a self, vault: &'a Vault) -> RoomChangeDisplay<'a> {
        RoomChangeDisplay { change: self, vault }
    }
}

/// Display adapter resolving the dweller name through a vault.
pub struct RoomChangeDisplay<'a> {
    change: &'a RoomChange,
    vault: &'a Vault,
}

impl fmt::Display for RoomChangeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let change = self.change;
        write!(
            f,
            "{}: {} -> {} ({})",
            self.vault.dweller(change.dweller).name(),
            change.from,
            change.to,
            change.delta
        )
    }
}
