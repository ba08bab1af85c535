//! Material and piece-square evaluation

use super::{sense, KingTable, Placement};
use crate::constants::*;
use crate::types::{Color, Piece, PieceKind, Score, Square};

/// Material balance from the perspective's side
pub(super) fn material(placement: &Placement, perspective: Color) -> Score {
    placement
        .pieces()
        .map(|(_, piece)| sense(piece.color, perspective) * piece.kind.value())
        .sum()
}

/// Piece-square bonus balance from the perspective's side
pub(super) fn positional(placement: &Placement, perspective: Color, king_table: KingTable) -> Score {
    placement
        .pieces()
        .map(|(square, piece)| {
            sense(piece.color, perspective) * piece_square_value(piece, square, king_table)
        })
        .sum()
}

/// Table bonus for `piece` standing on `square`
///
/// White reads `[rank][file]`; Black reads the same table rank- and file-reversed.
pub fn piece_square_value(piece: Piece, square: Square, king_table: KingTable) -> Score {
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => match king_table {
            KingTable::Middlegame => &KING_TABLE,
            KingTable::Endgame => &KING_ENDGAME_TABLE,
        },
    };
    let (rank, file) = match piece.color {
        Color::White => (square.rank(), square.file()),
        Color::Black => (7 - square.rank(), 7 - square.file()),
    };
    Score::from(table[rank as usize][file as usize])
}
