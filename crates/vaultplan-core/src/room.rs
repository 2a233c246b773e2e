//! Rooms (slot types) and their capacities.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A room type a dweller can be assigned to.
///
/// The variant order is the stable enumeration order used for move
/// enumeration, capacity tables, and the digit order of the roster format.
///
/// # Examples
///
/// ```
/// use vaultplan_core::Room;
///
/// assert_eq!(Room::from_letter('P'), Some(Room::Perception));
/// assert_eq!(Room::Luck.letter(), 'L');
/// assert_eq!(Room::ALL.len(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Room {
    #[cfg_attr(feature = "serde", serde(rename = "S", alias = "strength"))]
    Strength,
    #[cfg_attr(feature = "serde", serde(rename = "P", alias = "perception"))]
    Perception,
    #[cfg_attr(feature = "serde", serde(rename = "E", alias = "endurance"))]
    Endurance,
    #[cfg_attr(feature = "serde", serde(rename = "C", alias = "charisma"))]
    Charisma,
    #[cfg_attr(feature = "serde", serde(rename = "I", alias = "intelligence"))]
    Intelligence,
    #[cfg_attr(feature = "serde", serde(rename = "A", alias = "agility"))]
    Agility,
    #[cfg_attr(feature = "serde", serde(rename = "L", alias = "luck"))]
    Luck,
}

impl Room {
    /// Number of room types.
    pub const COUNT: usize = 7;

    /// All rooms in enumeration order.
    pub const ALL: [Room; Room::COUNT] = [
        Room::Strength,
        Room::Perception,
        Room::Endurance,
        Room::Charisma,
        Room::Intelligence,
        Room::Agility,
        Room::Luck,
    ];

    /// Returns the position of this room in [`Room::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the single-letter code used in the roster format.
    pub const fn letter(self) -> char {
        match self {
            Room::Strength => 'S',
            Room::Perception => 'P',
            Room::Endurance => 'E',
            Room::Charisma => 'C',
            Room::Intelligence => 'I',
            Room::Agility => 'A',
            Room::Luck => 'L',
        }
    }

    /// Parses a single-letter room code. Letters are case-sensitive.
    pub fn from_letter(letter: char) -> Option<Room> {
        Room::ALL.into_iter().find(|room| room.letter() == letter)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Fixed capacity of every room for one planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomCapacity([usize; Room::COUNT]);

impl RoomCapacity {
    /// Creates a capacity table with the same capacity for every room.
    pub const fn uniform(capacity: usize) -> Self {
        RoomCapacity([capacity; Room::COUNT])
    }

    /// Returns a copy with a different capacity for one room.
    pub fn with_room(mut self, room: Room, capacity: usize) -> Self {
        self.0[room.index()] = capacity;
        self
    }

    /// Returns the capacity of a room.
    #[inline]
    pub fn get(&self, room: Room) -> usize {
        self.0[room.index()]
    }
}

impl Default for RoomCapacity {
    fn default() -> Self {
        RoomCapacity::uniform(6)
    }
}

/// Remaining space per room.
///
/// Values are signed: a roster loaded from disk may already hold more
/// dwellers than a room's capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomSpaces([i64; Room::COUNT]);

impl RoomSpaces {
    /// Creates a table filled with each room's full capacity.
    pub fn from_capacity(capacity: &RoomCapacity) -> Self {
        let mut spaces = [0; Room::COUNT];
        for room in Room::ALL {
            spaces[room.index()] = capacity.get(room) as i64;
        }
        RoomSpaces(spaces)
    }

    /// Returns whether at least one more dweller fits in `room`.
    #[inline]
    pub fn has_space(&self, room: Room) -> bool {
        self[room] >= 1
    }

    /// Iterates rooms and their remaining space in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Room, i64)> + '_ {
        Room::ALL.into_iter().map(move |room| (room, self[room]))
    }
}

impl Index<Room> for RoomSpaces {
    type Output = i64;

    fn index(&self, room: Room) -> &i64 {
        &self.0[room.index()]
    }
}

impl IndexMut<Room> for RoomSpaces {
    fn index_mut(&mut self, room: Room) -> &mut i64 {
        &mut self.0[room.index()]
    }
}
