//! Flat text roster format.
//!
//! One dweller per line:
//!
//! ```text
//! <name><SEP><7 digits><room letter>
//! ```
//!
//! The record is fixed-width from the end of the line: the last character
//! is the room letter, the 7 characters before it are the stats in
//! `SPECIAL` order, and the character before those is a single separator.
//! Everything in front of the separator is the name. Digit `0` encodes
//! the maximum stat of 10.
//!
//! # Examples
//!
//! ```
//! use vaultplan_core::{read_roster, write_roster, Room};
//!
//! let vault = read_roster("Bob 1234560L\nAda 5555555S\n").unwrap();
//! let bob = &vault.dwellers()[0];
//! assert_eq!(bob.name(), "Bob");
//! assert_eq!(bob.stats()[Room::Luck], 10);
//! assert_eq!(vault.room_of(bob.id()), Room::Luck);
//!
//! // Written back sorted by name
//! assert_eq!(write_roster(&vault), "Ada 5555555S\nBob 1234560L\n");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dweller::{Stats, MAX_STAT};
use crate::room::Room;
use crate::vault::Vault;

/// Number of trailing characters that carry the separator, stats and room.
const RECORD_WIDTH: usize = Room::COUNT + 2;

/// Separator written between the name and the stat digits.
const SEPARATOR: char = ' ';

/// Malformed roster input.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The line cannot hold a separator, 7 stats and a room letter.
    #[error("line {line}: expected at least 9 characters, found {len}")]
    LineTooShort { line: usize, len: usize },

    /// A stat position holds something other than a digit.
    #[error("line {line}: invalid stat digit '{found}'")]
    InvalidStat { line: usize, found: char },

    /// The trailing letter is not one of `SPECIAL`.
    #[error("line {line}: unknown room '{found}'")]
    UnknownRoom { line: usize, found: char },

    /// The roster file could not be read or written.
    #[error("roster file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One parsed roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub stats: Stats,
    pub room: Room,
}

/// Parses a single roster line. `line_number` is only used in errors.
///
/// Leading and trailing whitespace is removed before the fixed-width parse.
pub fn parse_line(line: &str, line_number: usize) -> Result<RosterEntry, RosterError> {
    let chars: Vec<char> = line.trim().chars().collect();
    let len = chars.len();
    if len < RECORD_WIDTH {
        return Err(RosterError::LineTooShort {
            line: line_number,
            len,
        });
    }

    let room_letter = chars[len - 1];
    let room = Room::from_letter(room_letter).ok_or(RosterError::UnknownRoom {
        line: line_number,
        found: room_letter,
    })?;

    let mut values = [0u8; Room::COUNT];
    for (slot, &c) in values.iter_mut().zip(&chars[len - 1 - Room::COUNT..len - 1]) {
        *slot = decode_stat(c).ok_or(RosterError::InvalidStat {
            line: line_number,
            found: c,
        })?;
    }
    let stats = Stats::new(values).ok_or(RosterError::InvalidStat {
        line: line_number,
        found: '?',
    })?;

    let name = chars[..len - RECORD_WIDTH].iter().collect();
    Ok(RosterEntry { name, stats, room })
}

/// Parses a whole roster. Whitespace-only lines are skipped.
pub fn read_roster(contents: &str) -> Result<Vault, RosterError> {
    let entries = contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Vault::from_entries(
        entries.into_iter().map(|e| (e.name, e.stats, e.room)),
    ))
}

/// Formats a vault as roster text, sorted by name ascending.
pub fn write_roster(vault: &Vault) -> String {
    let mut rows: Vec<_> = vault.iter().collect();
    rows.sort_by(|(a, _), (b, _)| a.name().cmp(b.name()));

    let mut out = String::new();
    for (dweller, room) in rows {
        out.push_str(dweller.name());
        out.push(SEPARATOR);
        for value in dweller.stats().values() {
            out.push(encode_stat(value));
        }
        out.push(room.letter());
        out.push('\n');
    }
    out
}

/// Reads and parses a roster file.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vault, RosterError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_roster(&contents)
}

/// Overwrites a roster file with the given vault.
///
/// The write is not atomic.
pub fn save_roster(path: impl AsRef<Path>, vault: &Vault) -> Result<(), RosterError> {
    let path = path.as_ref();
    fs::write(path, write_roster(vault)).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn decode_stat(c: char) -> Option<u8> {
    match c {
        '0' => Some(MAX_STAT),
        '1'..='9' => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

fn encode_stat(value: u8) -> char {
    if value == MAX_STAT {
        '0'
    } else {
        char::from(b'0' + value)
    }
}
