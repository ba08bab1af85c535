//! Pawn structure evaluation

use super::{sense, Placement};
use crate::constants::*;
use crate::types::{Color, PieceKind, Score, Square};

/// Doubled, isolated and connected pawns, file by file
pub(super) fn pawn_structure(placement: &Placement, perspective: Color) -> Score {
    let mut score = 0.0;

    for file in 0..8i8 {
        for color in Color::ALL {
            let sign = sense(color, perspective);
            let pawns = placement.count_on_file(file, PieceKind::Pawn, color);

            if pawns > 1 {
                score -= sign * DOUBLED_PAWN_PENALTY;
            }

            let neighbours = placement.count_on_file(file - 1, PieceKind::Pawn, color)
                + placement.count_on_file(file + 1, PieceKind::Pawn, color);
            if pawns > 0 && neighbours == 0 {
                score -= sign * ISOLATED_PAWN_PENALTY;
            }

            // each pawn counts its same-rank neighbours, so a pair scores twice
            for rank in 0..8i8 {
                if !placement.is(file, rank, PieceKind::Pawn, color) {
                    continue;
                }
                for side in [-1, 1] {
                    if placement.is(file + side, rank, PieceKind::Pawn, color) {
                        score += sign * CONNECTED_PAWN_BONUS;
                    }
                }
            }
        }
    }

    score
}

/// Bonus for pawns with no opposing pawn ahead on their own or adjacent files
pub(super) fn passed_pawns(placement: &Placement, perspective: Color) -> Score {
    placement
        .pieces()
        .filter(|(_, piece)| piece.kind == PieceKind::Pawn)
        .filter(|(square, piece)| is_passed(placement, *square, piece.color))
        .map(|(square, piece)| {
            let advanced = match piece.color {
                Color::White => i32::from(square.rank()) - 1,
                Color::Black => 6 - i32::from(square.rank()),
            };
            sense(piece.color, perspective)
                * (PASSED_PAWN_BASE_BONUS + PASSED_PAWN_RANK_BONUS * Score::from(advanced))
        })
        .sum()
}

pub(crate) fn is_passed(placement: &Placement, square: Square, color: Color) -> bool {
    let file = square.file() as i8;
    let forward = color.forward();
    let mut rank = square.rank() as i8 + forward;

    while (0..8).contains(&rank) {
        for adjacent in file - 1..=file + 1 {
            if placement.is(adjacent, rank, PieceKind::Pawn, !color) {
                return false;
            }
        }
        rank += forward;
    }
    true
}
