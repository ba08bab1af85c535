//! # Move Advisor Engine
//!
//! Recommends a move for one side of a chess position using negamax alpha-beta
//! search with quiescence, a request-scoped transposition table and a
//! hand-tuned static evaluator.
//!
//! Chess rules (move generation, check and draw detection) come from a
//! [`Rules`] provider; [`ChessBoard`] implements it on top of `shakmaty`.
//!
//! ## Module Organization
//!
//! - `types` - Colors, pieces, squares, moves and scores
//! - `constants` - Evaluation weights, piece-square tables, search limits
//! - `error` - Engine error type
//! - `rules` - Rules provider interface
//! - `board` - `shakmaty`-backed rules provider
//! - `hash` - Position keys and the transposition table
//! - `evaluation` - Static evaluation
//! - `search` - Negamax, quiescence, move ordering and the root driver
//! - `api` - Request-level move recommendation

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod hash;
pub mod rules;
pub mod search;
pub mod types;

pub use api::{recommend_move, Difficulty, Recommendation};
pub use board::ChessBoard;
pub use error::{EngineError, EngineResult};
pub use evaluation::{evaluate, Evaluation, Evaluator, KingTable};
pub use hash::{Bound, PositionKey, TableEntry, TranspositionTable};
pub use rules::Rules;
pub use search::{
    find_best_move, order_moves, ordering_key, BestMove, RootResult, SearchConfig, SearchStats,
    Searcher,
};
pub use types::{Color, Move, Piece, PieceKind, Score, Square};
