//! Tests for chain search and foragers.

use super::*;
use vaultplan_config::SelectionPolicy;
use vaultplan_core::{DwellerId, Room, RoomCapacity};
use vaultplan_test::{full_vault, vault};

use crate::heuristic::RoomChange;

fn average_joe() -> Vault {
    vault(&[("A", [5; 7], Room::Strength)])
}

fn roomy() -> RoomChangeSelector {
    RoomChangeSelector::new(RoomCapacity::uniform(4))
}

fn search(depth: usize, v: &Vault) -> Vec<ChainNode> {
    ChainSearch::new(depth, roomy()).explore(v)
}

#[test]
fn test_depth_zero_returns_root_only() {
    let v = average_joe();
    let nodes = search(0, &v);
    assert_eq!(nodes.len(), 1);
    assert!(nodes[0].moves().is_empty());
    assert_eq!(nodes[0].score(), Score::ZERO);
}

#[test]
fn test_node_counts_grow_exponentially() {
    // One dweller always has 6 legal moves
    let v = average_joe();
    assert_eq!(search(1, &v).len(), 7);
    assert_eq!(search(2, &v).len(), 49);
    assert_eq!(search(3, &v).len(), 343);
}

#[test]
fn test_depth_first_order() {
    let v = average_joe();
    let nodes = search(2, &v);

    // Unchanged root first, then its children
    assert!(nodes[0].moves().is_empty());
    for (i, room) in [
        Room::Perception,
        Room::Endurance,
        Room::Charisma,
        Room::Intelligence,
        Room::Agility,
        Room::Luck,
    ]
    .into_iter()
    .enumerate()
    {
        assert_eq!(nodes[1 + i].depth(), 1);
        assert_eq!(nodes[1 + i].moves().moves()[0].to(), room);
    }

    // Then the subtree of the first child: itself unchanged, then its children
    assert_eq!(nodes[7].depth(), 1);
    assert_eq!(nodes[7].moves().moves()[0].to(), Room::Perception);
    assert_eq!(nodes[8].depth(), 2);
    assert_eq!(nodes[8].moves().moves()[1].from(), Room::Perception);
    assert_eq!(nodes[8].moves().moves()[1].to(), Room::Strength);
}

#[test]
fn test_no_deduplication() {
    let v = average_joe();
    let nodes = search(2, &v);

    // S -> P -> S returns to the start but stays a separate node
    let back_home = nodes
        .iter()
        .filter(|n| n.depth() == 2 && n.vault().same_assignment(&v))
        .count();
    assert_eq!(back_home, 6);
}

#[test]
fn test_scores_accumulate_deltas() {
    let v = vault(&[
        ("Ada", [1, 2, 3, 4, 5, 6, 7], Room::Luck),
        ("Bo", [9, 8, 7, 6, 5, 4, 3], Room::Strength),
    ]);
    for node in search(2, &v) {
        assert_eq!(node.score(), node.moves().total_delta());

        let replayed = node
            .moves()
            .iter()
            .fold(v.clone(), |acc, m| {
                assert!(m.is_doable(&acc));
                m.apply(&acc)
            });
        assert!(replayed.same_assignment(node.vault()));
    }
}

#[test]
fn test_chain_moves_extends_prefix() {
    let v = average_joe();
    let first = RoomChange::from_vault(&v, DwellerId::new(0), Room::Luck);
    let prefix: MoveSequence = [first].into_iter().collect();
    let start = first.apply(&v);

    let nodes = chain_moves(1, prefix, start, Score::of(7), &roomy());
    assert_eq!(nodes.len(), 7);
    assert_eq!(nodes[0].depth(), 1);
    assert_eq!(nodes[0].score(), Score::of(7));
    assert!(nodes[1..].iter().all(|n| n.depth() == 2));
    assert!(nodes[1..].iter().all(|n| n.moves().moves()[0] == first));
}

#[test]
fn test_capacity_holds_along_chains() {
    let v = vault(&[
        ("Ada", [1, 2, 3, 4, 5, 6, 7], Room::Strength),
        ("Bo", [9, 8, 7, 6, 5, 4, 3], Room::Perception),
        ("Cy", [5; 7], Room::Perception),
    ]);
    let capacity = RoomCapacity::uniform(2);
    let nodes = ChainSearch::new(3, RoomChangeSelector::new(capacity)).explore(&v);
    for node in &nodes {
        for room in Room::ALL {
            assert!(node.vault().occupancy(room) <= capacity.get(room));
        }
    }
}

#[test]
fn test_explore_with_stats_counts_nodes() {
    let v = average_joe();
    let mut stats = SearchStats::default();
    let nodes = ChainSearch::new(2, roomy()).explore_with_stats(&v, &mut stats);
    assert_eq!(stats.nodes_generated, nodes.len() as u64);
    // The root is expanded once per remaining level
    assert_eq!(stats.expansions, 8);
    assert_eq!(stats.moves_generated, 48);
}

// Policy A

#[test]
fn test_first_improvement_lateral_moves_keep_unchanged_vault() {
    let v = average_joe();
    let best = FirstImprovementForager.pick(&v, search(1, &v)).unwrap();
    assert!(best.moves().is_empty());
    assert_eq!(best.score(), Score::ZERO);
}

#[test]
fn test_first_improvement_picks_highest_score() {
    // Moving Ada to her weakest room gains 8
    let v = vault(&[("Ada", [9, 1, 5, 5, 5, 5, 5], Room::Strength)]);
    let best = FirstImprovementForager.pick(&v, search(1, &v)).unwrap();
    assert_eq!(best.depth(), 1);
    let m = best.moves().moves()[0];
    assert_eq!(m.display(&v).to_string(), "Ada: S -> P (8)");
    assert_eq!(best.score(), Score::of(8));
}

#[test]
fn test_first_improvement_tie_keeps_first() {
    // Every move away from the maxed room scores 5
    let v = vault(&[("Max", [10, 5, 5, 5, 5, 5, 5], Room::Strength)]);
    let best = FirstImprovementForager.pick(&v, search(1, &v)).unwrap();
    assert_eq!(best.score(), Score::of(5));
    assert_eq!(best.moves().moves()[0].to(), Room::Perception);
}

#[test]
fn test_first_improvement_disqualifies_maxed_unchanged_vault() {
    let v = full_vault([10, 5, 5, 5, 5, 5, 5]);
    let selector = RoomChangeSelector::new(RoomCapacity::uniform(1));
    let nodes = ChainSearch::new(1, selector).explore(&v);
    assert_eq!(nodes.len(), 1);
    assert!(FirstImprovementForager.pick(&v, nodes).is_none());
}

#[test]
fn test_first_improvement_disqualifies_high_scoring_maxed_node() {
    let v = average_joe();
    let maxed = vault(&[("A", [10, 5, 5, 5, 5, 5, 5], Room::Strength)]);
    let nodes = vec![
        ChainNode::root(v.clone()),
        ChainNode::new(MoveSequence::new(), maxed, Score::of(50)),
    ];

    let best = FirstImprovementForager.pick(&v, nodes).unwrap();
    assert_eq!(best.score(), Score::ZERO);
    assert!(!best.vault().has_maxed());
}

#[test]
fn test_first_improvement_all_negative_returns_none() {
    let nodes = vec![ChainNode::root(average_joe()).with_score(Score::of(-1))];
    assert!(FirstImprovementForager.pick(&average_joe(), nodes).is_none());
}

// Policy B

#[test]
fn test_penalized_lateral_moves_keep_unchanged_vault() {
    let v = average_joe();
    let best = PenalizedForager.pick(&v, search(1, &v)).unwrap();
    assert!(best.moves().is_empty());
    assert_eq!(best.score(), Score::ZERO);
}

#[test]
fn test_penalized_baseline_when_stuck() {
    let v = full_vault([10, 5, 5, 5, 5, 5, 5]);
    let selector = RoomChangeSelector::new(RoomCapacity::uniform(1));
    let nodes = ChainSearch::new(2, selector).explore(&v);

    let best = PenalizedForager.pick(&v, nodes).unwrap();
    assert!(best.moves().is_empty());
    assert_eq!(best.score(), MAXED_PENALTY);
    assert!(best.vault().same_assignment(&v));
}

#[test]
fn test_penalized_relieves_maxed_dweller() {
    let v = vault(&[("Max", [10, 5, 5, 5, 5, 5, 5], Room::Strength)]);
    let best = PenalizedForager.pick(&v, search(1, &v)).unwrap();
    assert_eq!(best.score(), Score::of(5));
    assert_eq!(best.moves().moves()[0].to(), Room::Perception);
    assert!(!best.vault().has_maxed());
}

#[test]
fn test_penalty_is_per_maxed_dweller() {
    let v = vault(&[
        ("A", [10, 5, 5, 5, 5, 5, 5], Room::Strength),
        ("B", [5, 10, 5, 5, 5, 5, 5], Room::Perception),
        ("C", [5; 7], Room::Luck),
    ]);
    assert_eq!(penalized_score(Score::ZERO, &v), Score::of(-200));
    assert_eq!(penalized_score(Score::of(12), &v), Score::of(-188));
}

#[test]
fn test_penalized_prefers_shorter_on_tie() {
    let v = average_joe();
    let ada = DwellerId::new(0);
    let one = ChainNode::root(v.clone()).child(RoomChange::new(
        ada,
        Room::Strength,
        Room::Perception,
        Score::of(3),
    ));
    let two = ChainNode::root(v.clone())
        .child(RoomChange::new(ada, Room::Strength, Room::Endurance, Score::of(1)))
        .child(RoomChange::new(ada, Room::Endurance, Room::Charisma, Score::of(2)));

    let best = PenalizedForager
        .pick(&v, vec![two.clone(), one.clone()])
        .unwrap();
    assert_eq!(best.depth(), 1);

    let best = PenalizedForager.pick(&v, vec![one, two]).unwrap();
    assert_eq!(best.depth(), 1);
}

#[test]
fn test_penalized_equal_length_tie_keeps_first() {
    let v = average_joe();
    let ada = DwellerId::new(0);
    let first = ChainNode::root(v.clone()).child(RoomChange::new(
        ada,
        Room::Strength,
        Room::Perception,
        Score::of(2),
    ));
    let second = ChainNode::root(v.clone()).child(RoomChange::new(
        ada,
        Room::Strength,
        Room::Luck,
        Score::of(2),
    ));

    let best = PenalizedForager.pick(&v, vec![first, second]).unwrap();
    assert_eq!(best.moves().moves()[0].to(), Room::Perception);
}

#[test]
fn test_both_policies_move_maxed_dweller_to_weakest_room() {
    let v = vault(&[
        ("Ada", [2, 10, 9, 9, 9, 9, 9], Room::Perception),
        ("Bo", [5; 7], Room::Strength),
    ]);
    let nodes = search(1, &v);

    let a = FirstImprovementForager.pick(&v, nodes.clone()).unwrap();
    let b = PenalizedForager.pick(&v, nodes).unwrap();

    // Both move Ada out of Perception to Strength (+8)
    assert_eq!(a.score(), Score::of(8));
    assert_eq!(b.score(), Score::of(8));
    assert_eq!(a.moves().moves()[0].to(), Room::Strength);
    assert_eq!(b.moves().moves()[0].to(), Room::Strength);
}

#[test]
fn test_best_chain_uses_configured_policy() {
    let v = full_vault([10, 5, 5, 5, 5, 5, 5]);
    let a = PlannerConfig::first_improvement().with_room_capacity(1);
    let b = PlannerConfig::penalized().with_room_capacity(1);

    assert!(best_chain(1, &v, &a).is_none());
    assert_eq!(best_chain(1, &v, &b).unwrap().score(), MAXED_PENALTY);
}

#[test]
fn test_policy_forager_from_policy() {
    assert!(matches!(
        PolicyForager::from(SelectionPolicy::FirstImprovement),
        PolicyForager::FirstImprovement(_)
    ));
    assert!(matches!(
        PolicyForager::from(SelectionPolicy::Penalized),
        PolicyForager::Penalized(_)
    ));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "stale move")]
fn test_child_rejects_stale_move() {
    let v = average_joe();
    // Ada sits in Strength, not Luck
    let stale = RoomChange::new(DwellerId::new(0), Room::Luck, Room::Agility, Score::ZERO);
    let _ = ChainNode::root(v).child(stale);
}
