//! # Engine Constants - Evaluation Weights & Search Parameters
//!
//! ## Overview
//!
//! Centralizes the numbers the evaluator and search agree on. Piece base values live on
//! [`crate::types::PieceKind::centipawns`]; everything here is a bonus, penalty or limit.
//!
//! ## Mate Scores
//!
//! A forced mate is worth [`MATE_SCORE`] (one million centipawns). The largest possible
//! static evaluation stays well below that even with both kings counted as hanging, so an
//! alpha-beta comparison can never confuse a big positional swing with a mate.
//!
//! ## Piece-Square Tables
//!
//! The tables are written as `[rank][file]` with rank 0 being White's first rank, and are
//! read that way for White. Black reads the same table rank- and file-reversed
//! (`[7 - rank][7 - file]`), see [`crate::evaluation`].

use crate::types::Score;

/// Score of a checkmate for the winning side
pub const MATE_SCORE: Score = 1_000_000.0;

/// Score of every drawn terminal position
pub const DRAW_SCORE: Score = 0.0;

/// Default ply ceiling counted from the root, quiescence included
pub const DEFAULT_MAX_PLY: usize = 64;

/// Search depth used for unknown difficulty labels
pub const DEFAULT_DEPTH: u32 = 2;

/// Multiplier on pseudo-legal move counts
pub const MOBILITY_WEIGHT: Score = 2.0;

/// Fraction of a piece's value lost when it is attacked and undefended
pub const HANGING_PIECE_FACTOR: Score = 0.8;

pub const BISHOP_PAIR_BONUS: Score = 30.0;
pub const ROOK_CONNECTION_BONUS: Score = 10.0;

pub const DOUBLED_PAWN_PENALTY: Score = 20.0;
pub const ISOLATED_PAWN_PENALTY: Score = 15.0;
pub const CONNECTED_PAWN_BONUS: Score = 5.0;

pub const KING_SHIELD_NEAR_BONUS: Score = 10.0;
pub const KING_SHIELD_FAR_BONUS: Score = 5.0;
pub const KING_OPEN_FILE_PENALTY: Score = 10.0;
pub const KING_CHECK_PENALTY: Score = 50.0;

pub const CENTER_CONTROL_BONUS: Score = 10.0;

pub const DEVELOPMENT_BONUS: Score = 10.0;
/// Development only counts while the full-move number is below this
pub const DEVELOPMENT_MOVE_LIMIT: u32 = 6;

pub const ROOK_OPEN_FILE_BONUS: Score = 15.0;
pub const ROOK_SEMI_OPEN_FILE_BONUS: Score = ROOK_OPEN_FILE_BONUS / 2.0;

pub const PASSED_PAWN_BASE_BONUS: Score = 50.0;
pub const PASSED_PAWN_RANK_BONUS: Score = 10.0;

pub const KNIGHT_OUTPOST_BONUS: Score = 25.0;

/// Ordering bonus for moves that give check
pub const CHECK_ORDERING_BONUS: i32 = 100;

/// Piece-square table layout: `[rank][file]`, rank 0 = White's back rank
pub type PieceSquareTable = [[i16; 8]; 8];

pub const PAWN_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

pub const KNIGHT_TABLE: PieceSquareTable = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -30, -50],
];

pub const BISHOP_TABLE: PieceSquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

pub const ROOK_TABLE: PieceSquareTable = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

pub const QUEEN_TABLE: PieceSquareTable = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

pub const KING_TABLE: PieceSquareTable = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

pub const KING_ENDGAME_TABLE: PieceSquareTable = [
    [-50, -40, -30, -20, -20, -30, -40, -50],
    [-30, -20, -10, 0, 0, -10, -20, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 30, 40, 40, 30, -10, -30],
    [-30, -10, 20, 30, 30, 20, -10, -30],
    [-30, -30, 0, 0, 0, 0, -30, -30],
    [-50, -30, -30, -30, -30, -30, -30, -50],
];
