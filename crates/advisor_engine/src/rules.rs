//! Rules provider interface
//!
//! The search core does not generate moves or detect check itself. It drives a
//! [`Rules`] implementation with an apply-then-recurse-then-undo discipline and
//! only ever looks at the current position through this trait.
//!
//! [`crate::board::ChessBoard`] is the standard implementation.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::EngineResult;
use crate::types::{Color, Move, Piece, Square};

/// Everything the engine needs from a chess rules engine
pub trait Rules {
    /// Canonical, collision-free identity of a position
    type Key: Clone + Eq + Hash + Debug;

    /// Build a position from FEN
    fn from_fen(fen: &str) -> EngineResult<Self>
    where
        Self: Sized;

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn fullmove_number(&self) -> u32;

    /// Legal moves in generation order
    fn legal_moves(&self) -> Vec<Move>;

    /// Pseudo-legal move count for `side`, as if `side` were to move
    fn pseudo_legal_move_count(&self, side: Color) -> usize;

    fn is_capture(&self, mv: &Move) -> bool;

    fn gives_check(&self, mv: &Move) -> bool;

    /// Play a legal move on top of the current position
    fn apply(&mut self, mv: &Move) -> EngineResult<()>;

    /// Take back the most recent [`Rules::apply`]
    fn undo(&mut self) -> EngineResult<()>;

    /// Side to move is in check
    fn is_check(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_insufficient_material(&self) -> bool;

    /// Fivefold repetition or the 75-move rule
    fn is_draw_by_repetition_or_move_count(&self) -> bool;

    fn is_attacked_by(&self, square: Square, attacker: Color) -> bool;

    fn canonical_key(&self) -> Self::Key;

    fn is_draw(&self) -> bool {
        self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_draw_by_repetition_or_move_count()
    }

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    /// Captures, checks and promotions
    fn is_noisy(&self, mv: &Move) -> bool {
        mv.promotion.is_some() || self.is_capture(mv) || self.gives_check(mv)
    }
}
