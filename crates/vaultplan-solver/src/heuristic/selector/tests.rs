//! Tests for RoomChangeSelector.

use super::*;
use vaultplan_core::{DwellerId, Score, Stats};

fn two_dwellers() -> Vault {
    Vault::from_entries([
        ("Ada", Stats::new([1, 2, 3, 4, 5, 6, 7]).unwrap(), Room::Strength),
        ("Bo", Stats::uniform(5).unwrap(), Room::Perception),
    ])
}

#[test]
fn test_enumeration_order_is_room_then_dweller() {
    let vault = two_dwellers();
    let moves = available_moves(&vault, &RoomCapacity::uniform(4));

    // S: only Bo, P: only Ada, then both for each remaining room
    assert_eq!(moves.len(), 1 + 1 + 2 * 5);
    assert_eq!(moves[0].dweller(), DwellerId::new(1));
    assert_eq!(moves[0].to(), Room::Strength);
    assert_eq!(moves[1].dweller(), DwellerId::new(0));
    assert_eq!(moves[1].to(), Room::Perception);
    assert_eq!(moves[2].dweller(), DwellerId::new(0));
    assert_eq!(moves[2].to(), Room::Endurance);
    assert_eq!(moves[3].dweller(), DwellerId::new(1));
    assert_eq!(moves[3].to(), Room::Endurance);
}

#[test]
fn test_deltas() {
    let vault = two_dwellers();
    let moves = available_moves(&vault, &RoomCapacity::uniform(4));

    let ada_to_luck = moves
        .iter()
        .find(|m| m.dweller() == DwellerId::new(0) && m.to() == Room::Luck)
        .unwrap();
    assert_eq!(ada_to_luck.from(), Room::Strength);
    assert_eq!(ada_to_luck.delta(), Score::of(1 - 7));
}

#[test]
fn test_full_rooms_are_skipped() {
    let vault = two_dwellers();
    let capacity = RoomCapacity::uniform(4).with_room(Room::Luck, 0);
    let moves = available_moves(&vault, &capacity);
    assert!(moves.iter().all(|m| m.to() != Room::Luck));

    // Capacity 1: S and P are occupied and therefore full
    let moves = available_moves(&vault, &RoomCapacity::uniform(1));
    assert_eq!(moves.len(), 2 * 5);
    assert!(moves
        .iter()
        .all(|m| m.to() != Room::Strength && m.to() != Room::Perception));
}

#[test]
fn test_over_full_rooms_are_skipped() {
    let stats = Stats::uniform(5).unwrap();
    let vault = Vault::from_entries([
        ("A", stats, Room::Luck),
        ("B", stats, Room::Luck),
        ("C", stats, Room::Strength),
    ]);
    // Luck already holds 2 with capacity 1
    let moves = available_moves(&vault, &RoomCapacity::uniform(1));
    assert!(moves.iter().all(|m| m.to() != Room::Luck));
    assert!(moves.iter().all(|m| m.to() != Room::Strength));
}

#[test]
fn test_no_moves_when_every_room_full() {
    let stats = Stats::uniform(5).unwrap();
    let vault = Vault::from_entries(Room::ALL.iter().map(|&r| (r.to_string(), stats, r)));
    let selector = RoomChangeSelector::new(RoomCapacity::uniform(1));
    assert_eq!(selector.size(&vault), 0);
}

#[test]
fn test_every_move_is_doable() {
    let vault = two_dwellers();
    let selector = RoomChangeSelector::new(RoomCapacity::uniform(2));
    for m in selector.iter_moves(&vault) {
        assert!(m.is_doable(&vault));
    }
}

#[test]
fn test_empty_vault() {
    let vault = Vault::from_entries(Vec::<(String, Stats, Room)>::new());
    assert!(available_moves(&vault, &RoomCapacity::uniform(4)).is_empty());
}
