//! Dwellers and their per-room scores.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::room::Room;

/// The highest score a dweller can have in a room.
pub const MAX_STAT: u8 = 10;

/// Stable identifier of a dweller, assigned at load time in input order.
///
/// Used as the key of every configuration in place of reference identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DwellerId(usize);

impl DwellerId {
    /// Creates an id from a load-order index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        DwellerId(index)
    }

    /// Returns the load-order index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DwellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One benefit score per room, each in `1..=10`.
///
/// # Examples
///
/// ```
/// use vaultplan_core::{Room, Stats};
///
/// let stats = Stats::new([1, 2, 3, 4, 5, 6, 10]).unwrap();
/// assert_eq!(stats[Room::Perception], 2);
/// assert!(stats.is_maxed(Room::Luck));
/// assert!(Stats::new([0, 1, 1, 1, 1, 1, 1]).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats([u8; Room::COUNT]);

impl Stats {
    /// Creates a stat block, or `None` if any value lies outside `1..=10`.
    pub fn new(values: [u8; Room::COUNT]) -> Option<Self> {
        if values.iter().all(|v| (1..=MAX_STAT).contains(v)) {
            Some(Stats(values))
        } else {
            None
        }
    }

    /// Creates a stat block with the same value in every room.
    pub fn uniform(value: u8) -> Option<Self> {
        Stats::new([value; Room::COUNT])
    }

    /// Returns the score in `room` as a signed value for delta arithmetic.
    #[inline]
    pub fn get(&self, room: Room) -> i64 {
        i64::from(self.0[room.index()])
    }

    /// Returns whether the score in `room` is [`MAX_STAT`].
    #[inline]
    pub fn is_maxed(&self, room: Room) -> bool {
        self.0[room.index()] == MAX_STAT
    }

    /// Returns the raw values in [`Room::ALL`] order.
    pub fn values(&self) -> [u8; Room::COUNT] {
        self.0
    }
}

impl Index<Room> for Stats {
    type Output = u8;

    fn index(&self, room: Room) -> &u8 {
        &self.0[room.index()]
    }
}

/// A dweller to be assigned to rooms.
///
/// Equality and hashing use only the [`DwellerId`]: two dwellers with the
/// same name and stats loaded from different lines are distinct.
#[derive(Debug, Clone)]
pub struct Dweller {
    id: DwellerId,
    name: String,
    stats: Stats,
}

impl Dweller {
    /// Creates a new dweller.
    pub fn new(id: DwellerId, name: impl Into<String>, stats: Stats) -> Self {
        Self {
            id,
            name: name.into(),
            stats,
        }
    }

    #[inline]
    pub fn id(&self) -> DwellerId {
        self.id
    }

    /// Display name. Not unique.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the score this dweller has in `room`.
    #[inline]
    pub fn score_in(&self, room: Room) -> i64 {
        self.stats.get(room)
    }
}

impl PartialEq for Dweller {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Dweller {}

impl Hash for Dweller {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
