//! Canonical position keys and the transposition table
//!
//! The table is keyed by the full position identity rather than a hash digest,
//! so two different positions can never share an entry. A table lives for one
//! top-level move request and is dropped afterwards.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{Color, Score};

/// Canonical identity of a chess position
///
/// Holds everything that changes legal moves or the evaluation: placement,
/// side to move, castling rights, the legal en-passant square and both move
/// counters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionKey {
    /// One byte per square, `0` empty, `1..=6` White pawn..king, `7..=12` Black
    pub placement: [u8; 64],
    pub turn: Color,
    /// Rook squares that still carry castling rights, as a bitboard
    pub castling: u64,
    pub en_passant: Option<u8>,
    pub halfmoves: u32,
    pub fullmoves: u32,
}

impl PositionKey {
    /// Same position for repetition purposes (move counters ignored)
    pub fn repeats(&self, other: &PositionKey) -> bool {
        self.placement == other.placement
            && self.turn == other.turn
            && self.castling == other.castling
            && self.en_passant == other.en_passant
    }
}

/// How a stored score relates to the true value of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// True value is at least the stored score
    LowerBound,
    /// True value is at most the stored score
    UpperBound,
}

impl Bound {
    /// Classify a result computed inside the window `(alpha, beta)`
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Bound {
        if score >= beta {
            Bound::LowerBound
        } else if score <= alpha {
            Bound::UpperBound
        } else {
            Bound::Exact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    pub depth: u32,
    pub score: Score,
    pub bound: Bound,
}

/// Request-scoped cache from position key to best known score
#[derive(Debug)]
pub struct TranspositionTable<K> {
    entries: HashMap<K, TableEntry>,
}

impl<K: Eq + Hash> Default for TranspositionTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> TranspositionTable<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn probe(&self, key: &K) -> Option<&TableEntry> {
        self.entries.get(key)
    }

    /// Store an entry, replacing whatever was kept for the key
    pub fn store(&mut self, key: K, entry: TableEntry) {
        self.entries.insert(key, entry);
    }

    /// Score that can be returned without searching, if the entry allows it
    ///
    /// Entries computed at a shallower depth than requested are ignored. A lower
    /// bound only answers when it already fails high, an upper bound only when
    /// it already fails low.
    pub fn cutoff(&self, key: &K, depth: u32, alpha: Score, beta: Score) -> Option<Score> {
        let entry = self.probe(key)?;
        if entry.depth < depth {
            return None;
        }
        match entry.bound {
            Bound::Exact => Some(entry.score),
            Bound::LowerBound if entry.score >= beta => Some(entry.score),
            Bound::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(depth: u32, score: Score, bound: Bound) -> TableEntry {
        TableEntry {
            depth,
            score,
            bound,
        }
    }

    #[test]
    fn test_exact_entry_answers_at_lower_depth() {
        let mut table = TranspositionTable::new();
        table.store("a", entry(3, 42.0, Bound::Exact));

        assert_eq!(table.cutoff(&"a", 2, -100.0, 100.0), Some(42.0));
        assert_eq!(table.cutoff(&"a", 3, -100.0, 100.0), Some(42.0));
        assert_eq!(
            table.cutoff(&"a", 4, -100.0, 100.0),
            None,
            "shallower entries are advisory only"
        );
    }

    #[test]
    fn test_lower_bound_only_answers_on_fail_high() {
        let mut table = TranspositionTable::new();
        table.store("a", entry(2, 50.0, Bound::LowerBound));

        assert_eq!(table.cutoff(&"a", 2, 0.0, 40.0), Some(50.0));
        assert_eq!(table.cutoff(&"a", 2, 0.0, 60.0), None);
    }

    #[test]
    fn test_upper_bound_only_answers_on_fail_low() {
        let mut table = TranspositionTable::new();
        table.store("a", entry(2, -50.0, Bound::UpperBound));

        assert_eq!(table.cutoff(&"a", 1, -40.0, 10.0), Some(-50.0));
        assert_eq!(table.cutoff(&"a", 1, -60.0, 10.0), None);
    }

    #[test]
    fn test_store_replaces_and_clear_empties() {
        let mut table = TranspositionTable::new();
        table.store(1u64, entry(1, 1.0, Bound::Exact));
        table.store(1u64, entry(2, 2.0, Bound::UpperBound));

        assert_eq!(table.len(), 1);
        assert_eq!(table.probe(&1).map(|e| e.depth), Some(2));

        table.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn test_bound_classification() {
        assert_eq!(Bound::classify(10.0, 0.0, 10.0), Bound::LowerBound);
        assert_eq!(Bound::classify(0.0, 0.0, 10.0), Bound::UpperBound);
        assert_eq!(Bound::classify(5.0, 0.0, 10.0), Bound::Exact);
        assert_eq!(
            Bound::classify(5.0, Score::NEG_INFINITY, Score::INFINITY),
            Bound::Exact
        );
    }
}
