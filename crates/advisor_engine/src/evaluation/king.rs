//! King safety

use super::{sense, Placement};
use crate::constants::*;
use crate::rules::Rules;
use crate::types::{Color, PieceKind, Score};

/// Pawn shield, open king file and check, summed for both kings
pub(super) fn king_safety<R: Rules>(rules: &R, placement: &Placement, perspective: Color) -> Score {
    let mut score = 0.0;

    for color in Color::ALL {
        let Some(&king) = placement.squares_of(PieceKind::King, color).first() else {
            continue;
        };
        let sign = sense(color, perspective);
        let file = king.file() as i8;
        let rank = king.rank() as i8;
        let forward = color.forward();

        for shield_file in file - 1..=file + 1 {
            if placement.is(shield_file, rank + forward, PieceKind::Pawn, color) {
                score += sign * KING_SHIELD_NEAR_BONUS;
            }
            if placement.is(shield_file, rank + 2 * forward, PieceKind::Pawn, color) {
                score += sign * KING_SHIELD_FAR_BONUS;
            }
        }

        if placement.count_on_file(file, PieceKind::Pawn, color) == 0 {
            score -= sign * KING_OPEN_FILE_PENALTY;
        }
    }

    // Only the side to move can be in check
    if rules.is_check() {
        score -= sense(rules.side_to_move(), perspective) * KING_CHECK_PENALTY;
    }

    score
}
