//! Piece activity terms
//!
//! Mobility and hanging pieces ask the rules provider about moves and attacks;
//! the remaining placement bonuses only look at the board snapshot.

use super::{sense, Placement};
use crate::constants::*;
use crate::rules::Rules;
use crate::types::{Color, PieceKind, Score, Square};

const CENTER: [Square; 4] = [Square::D4, Square::E4, Square::D5, Square::E5];

/// Files of the knights' and bishops' home squares (b, c, f, g)
const MINOR_HOME_FILES: [u8; 4] = [1, 2, 5, 6];

/// `2 x moves(color)` for every piece of that color
///
/// Counted once per color and multiplied out rather than regenerated per piece.
pub(super) fn mobility<R: Rules>(rules: &R, placement: &Placement, perspective: Color) -> Score {
    Color::ALL
        .into_iter()
        .map(|color| {
            let pieces = placement.pieces().filter(|(_, p)| p.color == color).count();
            let moves = rules.pseudo_legal_move_count(color);
            sense(color, perspective) * MOBILITY_WEIGHT * (moves * pieces) as Score
        })
        .sum()
}

/// Penalty for pieces attacked by the opponent and not defended
pub(super) fn hanging_pieces<R: Rules>(
    rules: &R,
    placement: &Placement,
    perspective: Color,
) -> Score {
    placement
        .pieces()
        .filter(|(square, piece)| {
            rules.is_attacked_by(*square, !piece.color) && !rules.is_attacked_by(*square, piece.color)
        })
        .map(|(_, piece)| -sense(piece.color, perspective) * HANGING_PIECE_FACTOR * piece.kind.value())
        .sum()
}

pub(super) fn bishop_pair(placement: &Placement, perspective: Color) -> Score {
    Color::ALL
        .into_iter()
        .filter(|&color| placement.squares_of(PieceKind::Bishop, color).len() >= 2)
        .map(|color| sense(color, perspective) * BISHOP_PAIR_BONUS)
        .sum()
}

/// Bonus per pair of rooks sharing a rank or file with nothing between them
pub(super) fn rook_connection(placement: &Placement, perspective: Color) -> Score {
    let mut score = 0.0;

    for color in Color::ALL {
        let rooks = placement.squares_of(PieceKind::Rook, color);
        for (i, &first) in rooks.iter().enumerate() {
            for &second in &rooks[i + 1..] {
                if path_clear(placement, first, second) {
                    score += sense(color, perspective) * ROOK_CONNECTION_BONUS;
                }
            }
        }
    }

    score
}

/// Both squares on one rank or file and every square strictly between them empty
fn path_clear(placement: &Placement, from: Square, to: Square) -> bool {
    let (file_step, rank_step) = if from.rank() == to.rank() {
        ((to.file() as i8 - from.file() as i8).signum(), 0)
    } else if from.file() == to.file() {
        (0, (to.rank() as i8 - from.rank() as i8).signum())
    } else {
        return false;
    };

    let mut current = from;
    loop {
        current = match current.offset(file_step, rank_step) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if placement.at(current).is_some() {
            return false;
        }
    }
}

/// Occupation of d4, e4, d5 and e5
pub(super) fn center_control(placement: &Placement, perspective: Color) -> Score {
    CENTER
        .iter()
        .filter_map(|&square| placement.at(square))
        .map(|piece| sense(piece.color, perspective) * CENTER_CONTROL_BONUS)
        .sum()
}

/// Knights and bishops off their home squares, early in the game only
pub(super) fn development(fullmove: u32, placement: &Placement, perspective: Color) -> Score {
    if fullmove >= DEVELOPMENT_MOVE_LIMIT {
        return 0.0;
    }

    placement
        .pieces()
        .filter(|(_, piece)| matches!(piece.kind, PieceKind::Knight | PieceKind::Bishop))
        .filter(|(square, piece)| {
            let home_rank = match piece.color {
                Color::White => 0,
                Color::Black => 7,
            };
            square.rank() != home_rank || !MINOR_HOME_FILES.contains(&square.file())
        })
        .map(|(_, piece)| sense(piece.color, perspective) * DEVELOPMENT_BONUS)
        .sum()
}

/// Rooks on open files, or on files the opponent has no pawns on
pub(super) fn rook_files(placement: &Placement, perspective: Color) -> Score {
    let mut score = 0.0;

    for file in 0..8i8 {
        for color in Color::ALL {
            if placement.count_on_file(file, PieceKind::Rook, color) == 0 {
                continue;
            }
            let own_pawns = placement.count_on_file(file, PieceKind::Pawn, color);
            let their_pawns = placement.count_on_file(file, PieceKind::Pawn, !color);

            let bonus = match (own_pawns, their_pawns) {
                (0, 0) => ROOK_OPEN_FILE_BONUS,
                (_, 0) => ROOK_SEMI_OPEN_FILE_BONUS,
                _ => continue,
            };
            score += sense(color, perspective) * bonus;
        }
    }

    score
}

/// Central knights guarded by a pawn and out of reach of enemy pawns
pub(super) fn knight_outposts(placement: &Placement, perspective: Color) -> Score {
    let mut score = 0.0;

    for square in CENTER {
        let Some(piece) = placement.at(square) else {
            continue;
        };
        if piece.kind != PieceKind::Knight {
            continue;
        }

        let color = piece.color;
        let file = square.file() as i8;
        let rank = square.rank() as i8;
        let forward = color.forward();

        let defended = [file - 1, file + 1]
            .iter()
            .any(|&f| placement.is(f, rank - forward, PieceKind::Pawn, color));
        let attacked = [file - 1, file + 1]
            .iter()
            .any(|&f| placement.is(f, rank + forward, PieceKind::Pawn, !color));

        if defended && !attacked {
            score += sense(color, perspective) * KNIGHT_OUTPOST_BONUS;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessBoard;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn board(fen: &str) -> ChessBoard {
        ChessBoard::from_fen(fen).expect("valid FEN")
    }

    fn placement(fen: &str) -> Placement {
        Placement::capture(&board(fen))
    }

    #[test]
    fn test_mobility_is_balanced_at_start() {
        let board = board(START_FEN);
        let placement = Placement::capture(&board);
        assert_eq!(mobility(&board, &placement, Color::White), 0.0);
    }

    #[test]
    fn test_mobility_multiplies_by_piece_count() {
        let board = board("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let placement = Placement::capture(&board);
        // White: 15 moves x 2 pieces x 2; Black: 5 moves x 1 piece x 2
        assert_eq!(mobility(&board, &placement, Color::White), 60.0 - 10.0);
        assert_eq!(mobility(&board, &placement, Color::Black), 10.0 - 60.0);
    }

    #[test]
    fn test_undefended_queen_is_hanging() {
        // Rook d1 hits the queen; the rook itself is covered by the king
        let board = board("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
        let placement = Placement::capture(&board);
        assert_eq!(hanging_pieces(&board, &placement, Color::White), 720.0);
        assert_eq!(hanging_pieces(&board, &placement, Color::Black), -720.0);
    }

    #[test]
    fn test_bishop_pair() {
        let placement = placement("2b1kb2/8/8/8/8/8/8/2B1K3 w - - 0 1");
        assert_eq!(bishop_pair(&placement, Color::White), -BISHOP_PAIR_BONUS);
        assert_eq!(bishop_pair(&placement, Color::Black), BISHOP_PAIR_BONUS);
    }

    #[test]
    fn test_rook_connection_is_symmetric() {
        let blocked = placement("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(rook_connection(&blocked, Color::White), 0.0);

        let white_rank = placement("4k3/8/8/8/8/8/8/R4RK1 w - - 0 1");
        assert_eq!(rook_connection(&white_rank, Color::White), 10.0);

        let white_file = placement("4k3/8/8/8/R7/8/8/R5K1 w - - 0 1");
        assert_eq!(rook_connection(&white_file, Color::White), 10.0);

        // Black's same-rank pair counts the same way as White's
        let black_rank = placement("r4rk1/8/8/8/8/8/8/6K1 w - - 0 1");
        assert_eq!(rook_connection(&black_rank, Color::White), -10.0);
        assert_eq!(rook_connection(&black_rank, Color::Black), 10.0);
    }

    #[test]
    fn test_center_control() {
        let balanced = placement("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1");
        assert_eq!(center_control(&balanced, Color::White), 0.0);

        let white = placement("4k3/8/8/8/3PP3/8/8/4K3 w - - 0 1");
        assert_eq!(center_control(&white, Color::White), 20.0);
    }

    #[test]
    fn test_development_only_counts_early() {
        // 1. Nf3 Nc6 2. Bc4 with the move counter at 2, then at 6
        let early = placement("r1bqkbnr/pppppppp/2n5/8/2B5/5N2/PPPPPPPP/RNBQK2R b KQkq - 3 2");
        assert_eq!(development(2, &early, Color::White), 10.0);
        assert_eq!(development(2, &early, Color::Black), -10.0);
        assert_eq!(development(6, &early, Color::White), 0.0);
    }

    #[test]
    fn test_rook_on_open_and_semi_open_files() {
        // a-file open, c-file holds only a White pawn, h-file has only a White pawn
        let placement = placement("4k2r/8/8/8/8/8/2P4P/R1R1K3 w - - 0 1");
        assert_eq!(rook_files(&placement, Color::White), 22.5);
        assert_eq!(rook_files(&placement, Color::Black), -22.5);
    }

    #[test]
    fn test_knight_outpost() {
        let outpost = placement("4k3/8/8/4N3/3P4/8/8/4K3 w - - 0 1");
        assert_eq!(knight_outposts(&outpost, Color::White), KNIGHT_OUTPOST_BONUS);

        let challenged = placement("4k3/8/5p2/4N3/3P4/8/8/4K3 w - - 0 1");
        assert_eq!(knight_outposts(&challenged, Color::White), 0.0);

        let black = placement("4k3/8/8/4p3/3n4/8/8/4K3 w - - 0 1");
        assert_eq!(knight_outposts(&black, Color::White), -KNIGHT_OUTPOST_BONUS);
    }
}
