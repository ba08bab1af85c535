//! Negamax alpha-beta search
//!
//! This module implements the move search using:
//! - Negamax variant of alpha-beta pruning
//! - Quiescence search over captures, checks and promotions at the horizon
//! - A request-scoped transposition table with exact/lower/upper bounds
//! - Move ordering (victim minus attacker, plus a check bonus)
//!
//! Recursion is bounded by [`SearchConfig::max_ply`], counted from the root:
//! quiescence stops extending there and negamax refuses to go beyond it.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core negamax search with the transposition table
//! - `quiescence` - Quiescence search to avoid the horizon effect
//! - `ordering` - Move ordering heuristics
//! - `root` - Root driver picking the engine's move

mod alphabeta;
mod ordering;
mod quiescence;
mod root;

pub use ordering::{order_moves, ordering_key};
pub use root::{find_best_move, BestMove, RootResult};

use crate::constants::DEFAULT_MAX_PLY;
use crate::evaluation::Evaluator;
use crate::hash::{Bound, TableEntry, TranspositionTable};
use crate::rules::Rules;
use crate::types::{Color, Score};
use crate::error::EngineResult;

/// Search limits and switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Hard recursion ceiling in plies from the root, quiescence included
    pub max_ply: usize,
    pub use_transposition_table: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_ply: DEFAULT_MAX_PLY,
            use_transposition_table: true,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Negamax nodes entered
    pub nodes: u64,
    pub quiescence_nodes: u64,
    /// Beta cutoffs in either search
    pub cutoffs: u64,
    pub table_hits: u64,
    pub table_stores: u64,
}

/// Scores are only comparable for the perspective they were computed for,
/// so the table is keyed by position and perspective together.
type TableKey<R> = (<R as Rules>::Key, Color);

/// One search over a rules provider, owning its transposition table
///
/// The rules provider is borrowed mutably for the lifetime of the searcher and
/// is always returned to its starting position when a search call completes.
pub struct Searcher<'a, R: Rules> {
    rules: &'a mut R,
    table: TranspositionTable<TableKey<R>>,
    evaluator: Evaluator,
    config: SearchConfig,
    stats: SearchStats,
}

impl<'a, R: Rules> Searcher<'a, R> {
    pub fn new(rules: &'a mut R, config: SearchConfig) -> Self {
        Self {
            rules,
            table: TranspositionTable::new(),
            evaluator: Evaluator::default(),
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of positions currently cached
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Negamax score of the current position searched `depth` plies deep
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::PlyLimitExceeded`] when `depth` reaches
    /// the configured ply ceiling, or any error raised by the rules provider.
    pub fn search(
        &mut self,
        depth: u32,
        perspective: Color,
        alpha: Score,
        beta: Score,
    ) -> EngineResult<Score> {
        self.negamax(depth, perspective, alpha, beta, 0)
    }

    /// Quiescence score of the current position
    pub fn quiesce(&mut self, perspective: Color, alpha: Score, beta: Score) -> EngineResult<Score> {
        self.quiescence(perspective, alpha, beta, 0)
    }

    fn probe(&mut self, perspective: Color, depth: u32, alpha: Score, beta: Score) -> Option<Score> {
        if !self.config.use_transposition_table {
            return None;
        }
        let key = (self.rules.canonical_key(), perspective);
        let hit = self.table.cutoff(&key, depth, alpha, beta);
        if hit.is_some() {
            self.stats.table_hits += 1;
        }
        hit
    }

    fn store(&mut self, perspective: Color, depth: u32, score: Score, bound: Bound) {
        if !self.config.use_transposition_table {
            return;
        }
        let key = (self.rules.canonical_key(), perspective);
        self.table.store(key, TableEntry { depth, score, bound });
        self.stats.table_stores += 1;
    }
}
