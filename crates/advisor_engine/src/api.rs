//! Public API for the move advisor
//!
//! [`recommend_move`] is the whole request: parse the position, check the
//! preconditions, run a fresh root search and describe the outcome.

use std::fmt;

use tracing::debug;

use crate::board::ChessBoard;
use crate::constants::DEFAULT_DEPTH;
use crate::error::EngineResult;
use crate::rules::Rules;
use crate::search::{find_best_move, BestMove, RootResult, SearchConfig};
use crate::types::Color;

/// Difficulty label mapped to a fixed search depth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Intermediate,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty label; unknown labels fall back to intermediate
    pub fn from_label(label: &str) -> Difficulty {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Intermediate,
        }
    }

    /// Search depth in plies
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Intermediate => DEFAULT_DEPTH,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a move request
///
/// Only [`Recommendation::Move`] carries a move; the other variants are
/// legitimate game states rather than errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    Move(BestMove),
    /// Checkmate, stalemate or a draw has already been reached
    GameOver,
    /// Side to move is not the engine's color
    NotEngineTurn,
    NoLegalMoves,
}

impl Recommendation {
    pub fn is_move(&self) -> bool {
        matches!(self, Recommendation::Move(_))
    }

    /// Human-readable description for API responses
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Move(_) => "AI found a move.",
            Recommendation::GameOver => "Game is already over (checkmate, stalemate, or draw)",
            Recommendation::NotEngineTurn => "Not AI's turn to move.",
            Recommendation::NoLegalMoves => "No legal moves for AI (checkmate/stalemate)",
        }
    }
}

/// Recommend a move for `engine_color` in the position given by `fen`
///
/// Every call searches with its own transposition table.
///
/// # Errors
///
/// Returns [`crate::EngineError::InvalidFen`] for an unreadable position and
/// propagates search failures.
///
/// # Example
///
/// ```
/// use advisor_engine::{recommend_move, Color, Difficulty, Recommendation, SearchConfig};
///
/// let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
/// let outcome = recommend_move(fen, Color::White, Difficulty::Easy, &SearchConfig::default())?;
/// assert!(matches!(outcome, Recommendation::Move(_)));
/// # Ok::<(), advisor_engine::EngineError>(())
/// ```
pub fn recommend_move(
    fen: &str,
    engine_color: Color,
    difficulty: Difficulty,
    config: &SearchConfig,
) -> EngineResult<Recommendation> {
    let mut board = ChessBoard::from_fen(fen)?;

    if board.is_game_over() {
        return Ok(Recommendation::GameOver);
    }
    if board.side_to_move() != engine_color {
        return Ok(Recommendation::NotEngineTurn);
    }

    debug!(%fen, color = %engine_color, %difficulty, "searching for a move");

    let outcome = match find_best_move(&mut board, engine_color, difficulty.depth(), config)? {
        RootResult::Best(best) => Recommendation::Move(best),
        RootResult::NoLegalMoves => Recommendation::NoLegalMoves,
        RootResult::WrongTurn => Recommendation::NotEngineTurn,
    };
    Ok(outcome)
}
