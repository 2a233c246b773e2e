//! Chain search node representation.
//!
//! Each node is one reachable outcome: the moves applied so far, the
//! resulting vault, and the cumulative score.

use smallvec::SmallVec;
use vaultplan_core::{Score, Vault};

use crate::heuristic::RoomChange;

/// Ordered moves from the starting vault to a node.
///
/// Chains are short, so the moves live inline up to depth 4.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSequence {
    moves: SmallVec<[RoomChange; 4]>,
}

impl MoveSequence {
    /// Creates an empty move sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a move to the sequence.
    pub fn push(&mut self, m: RoomChange) {
        self.moves.push(m);
    }

    /// Returns a copy of this sequence with `m` appended.
    pub fn appended(&self, m: RoomChange) -> Self {
        let mut next = self.clone();
        next.push(m);
        next
    }

    /// Returns the number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the moves in application order.
    pub fn moves(&self) -> &[RoomChange] {
        &self.moves
    }

    /// Returns an iterator over the moves.
    pub fn iter(&self) -> impl Iterator<Item = &RoomChange> {
        self.moves.iter()
    }

    /// Returns the sum of the move deltas.
    pub fn total_delta(&self) -> Score {
        self.moves.iter().map(RoomChange::delta).sum()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a RoomChange;
    type IntoIter = std::slice::Iter<'a, RoomChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<RoomChange> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = RoomChange>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

/// A node in the chain search.
#[derive(Debug, Clone)]
pub struct ChainNode {
    moves: MoveSequence,
    vault: Vault,
    score: Score,
}

impl ChainNode {
    /// Creates a node from its parts.
    pub fn new(moves: MoveSequence, vault: Vault, score: Score) -> Self {
        Self {
            moves,
            vault,
            score,
        }
    }

    /// Creates the node for `vault` with no moves and zero score.
    pub fn root(vault: Vault) -> Self {
        Self::new(MoveSequence::new(), vault, Score::ZERO)
    }

    /// Creates the node reached by applying `m` to this node.
    pub fn child(&self, m: RoomChange) -> Self {
        debug_assert!(m.is_doable(&self.vault), "stale move {:?}", m);
        Self {
            moves: self.moves.appended(m),
            vault: m.apply(&self.vault),
            score: self.score + m.delta(),
        }
    }

    /// Returns the same node carrying a different score.
    pub fn with_score(self, score: Score) -> Self {
        Self { score, ..self }
    }

    /// Returns the moves applied to reach this node.
    #[inline]
    pub fn moves(&self) -> &MoveSequence {
        &self.moves
    }

    /// Returns the vault at this node.
    #[inline]
    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Returns the score at this node.
    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the number of moves applied.
    #[inline]
    pub fn depth(&self) -> usize {
        self.moves.len()
    }
}
