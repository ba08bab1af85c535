//! Static position evaluation
//!
//! Scores a position from a chosen perspective color using:
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables)
//! - Mobility and hanging pieces
//! - Pawn structure and passed pawns
//! - King safety
//! - Piece activity (bishop pair, rook files and connection, outposts, center, development)
//!
//! Every term is computed as "my side minus the other side" with a sign derived once from
//! the perspective color, so `evaluate(P, White) == -evaluate(P, Black)` for every position.
//!
//! ## Module Organization
//!
//! - `material` - Material balance and piece-square tables
//! - `pawns` - Doubled, isolated, connected and passed pawns
//! - `king` - Pawn shield, open king file, check
//! - `activity` - Mobility, hanging pieces and the piece-placement bonuses

mod activity;
mod king;
mod material;
mod pawns;

use crate::rules::Rules;
use crate::types::{Color, Piece, PieceKind, Score, Square};

pub use material::piece_square_value;

/// Which table scores king placement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KingTable {
    #[default]
    Middlegame,
    Endgame,
}

/// Per-term breakdown of a static evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evaluation {
    pub material: Score,
    pub positional: Score,
    pub mobility: Score,
    pub hanging_pieces: Score,
    pub bishop_pair: Score,
    pub rook_connection: Score,
    pub pawn_structure: Score,
    pub king_safety: Score,
    pub center_control: Score,
    pub development: Score,
    pub rook_files: Score,
    pub passed_pawns: Score,
    pub knight_outposts: Score,
}

impl Evaluation {
    /// Plain sum of all terms, no clamping
    pub fn total(&self) -> Score {
        self.material
            + self.positional
            + self.mobility
            + self.hanging_pieces
            + self.bishop_pair
            + self.rook_connection
            + self.pawn_structure
            + self.king_safety
            + self.center_control
            + self.development
            + self.rook_files
            + self.passed_pawns
            + self.knight_outposts
    }
}

/// Static evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    pub king_table: KingTable,
}

impl Evaluator {
    pub fn new(king_table: KingTable) -> Self {
        Self { king_table }
    }

    /// Score of the rules provider's current position for `perspective`
    pub fn evaluate<R: Rules>(&self, rules: &R, perspective: Color) -> Score {
        self.breakdown(rules, perspective).total()
    }

    pub fn breakdown<R: Rules>(&self, rules: &R, perspective: Color) -> Evaluation {
        let placement = Placement::capture(rules);

        Evaluation {
            material: material::material(&placement, perspective),
            positional: material::positional(&placement, perspective, self.king_table),
            mobility: activity::mobility(rules, &placement, perspective),
            hanging_pieces: activity::hanging_pieces(rules, &placement, perspective),
            bishop_pair: activity::bishop_pair(&placement, perspective),
            rook_connection: activity::rook_connection(&placement, perspective),
            pawn_structure: pawns::pawn_structure(&placement, perspective),
            king_safety: king::king_safety(rules, &placement, perspective),
            center_control: activity::center_control(&placement, perspective),
            development: activity::development(rules.fullmove_number(), &placement, perspective),
            rook_files: activity::rook_files(&placement, perspective),
            passed_pawns: pawns::passed_pawns(&placement, perspective),
            knight_outposts: activity::knight_outposts(&placement, perspective),
        }
    }
}

/// Evaluate with the default evaluator
pub fn evaluate<R: Rules>(rules: &R, perspective: Color) -> Score {
    Evaluator::default().evaluate(rules, perspective)
}

/// +1 for the perspective's own pieces, -1 for the opponent's
pub(crate) fn sense(color: Color, perspective: Color) -> Score {
    if color == perspective {
        1.0
    } else {
        -1.0
    }
}

/// Snapshot of piece placement taken once per evaluation
pub(crate) struct Placement {
    squares: [Option<Piece>; 64],
}

impl Placement {
    pub(crate) fn capture<R: Rules>(rules: &R) -> Self {
        let mut squares = [None; 64];
        for square in Square::all() {
            squares[square.index()] = rules.piece_at(square);
        }
        Self { squares }
    }

    pub(crate) fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Piece at signed coordinates, `None` off the board
    pub(crate) fn at_coords(&self, file: i8, rank: i8) -> Option<Piece> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            self.at(Square::from_coords(file as u8, rank as u8))
        } else {
            None
        }
    }

    pub(crate) fn is(&self, file: i8, rank: i8, kind: PieceKind, color: Color) -> bool {
        self.at_coords(file, rank) == Some(Piece::new(kind, color))
    }

    pub(crate) fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.at(square).map(|piece| (square, piece)))
    }

    pub(crate) fn squares_of(&self, kind: PieceKind, color: Color) -> Vec<Square> {
        self.pieces()
            .filter(|(_, piece)| *piece == Piece::new(kind, color))
            .map(|(square, _)| square)
            .collect()
    }

    pub(crate) fn count_on_file(&self, file: i8, kind: PieceKind, color: Color) -> usize {
        (0..8).filter(|&rank| self.is(file, rank, kind, color)).count()
    }
}
