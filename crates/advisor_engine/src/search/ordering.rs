//! Move ordering for alpha-beta pruning
//!
//! Captures are keyed victim-minus-attacker (MVV-LVA without the usual
//! victim multiplier), checking moves get a flat bonus, and everything
//! else keys at zero and keeps its generation order.

use std::cmp::Reverse;

use crate::constants::CHECK_ORDERING_BONUS;
use crate::rules::Rules;
use crate::types::Move;

/// Ordering key for `mv`, higher is searched first
pub fn ordering_key<R: Rules>(rules: &R, mv: &Move) -> i32 {
    let mut key = 0;

    if rules.is_capture(mv) {
        // En passant lands on an empty square and keys as a quiet capture
        if let (Some(victim), Some(attacker)) = (rules.piece_at(mv.to), rules.piece_at(mv.from)) {
            key += victim.kind.centipawns() - attacker.kind.centipawns();
        }
    }

    if rules.gives_check(mv) {
        key += CHECK_ORDERING_BONUS;
    }

    key
}

/// Sort moves by descending ordering key; equal keys keep their order
pub fn order_moves<R: Rules>(rules: &R, moves: &mut [Move]) {
    moves.sort_by_cached_key(|mv| Reverse(ordering_key(rules, mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessBoard;

    fn board(fen: &str) -> ChessBoard {
        ChessBoard::from_fen(fen).expect("valid FEN")
    }

    fn mv(text: &str) -> Move {
        Move::from_uci(text).expect("valid UCI move")
    }

    #[test]
    fn test_pawn_takes_queen_outranks_quiet_moves() {
        let board = board("4k3/8/8/3q4/4P3/8/8/R3K3 w - - 0 1");
        let capture = mv("e4d5");
        let capture_key = ordering_key(&board, &capture);
        assert_eq!(capture_key, 800);

        for quiet in board.legal_moves().iter().filter(|m| !board.is_capture(m)) {
            assert!(
                capture_key > ordering_key(&board, quiet),
                "PxQ should be ordered before quiet move {quiet}"
            );
        }

        let mut moves = board.legal_moves();
        order_moves(&board, &mut moves);
        assert_eq!(moves[0], capture, "PxQ should be searched first");
    }

    #[test]
    fn test_check_bonus_is_added() {
        let board = board("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        assert_eq!(ordering_key(&board, &mv("a1a8")), CHECK_ORDERING_BONUS);
        assert_eq!(ordering_key(&board, &mv("a1a2")), 0);
    }

    #[test]
    fn test_bad_captures_sort_below_quiet_moves() {
        // Queen takes a defended pawn: 100 - 900
        let board = board("4k3/8/2p5/3p4/8/8/8/3QK3 w - - 0 1");
        assert_eq!(ordering_key(&board, &mv("d1d5")), -800);
    }

    #[test]
    fn test_ordering_is_stable_for_equal_keys() {
        let board = board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let generated = board.legal_moves();
        let mut ordered = generated.clone();
        order_moves(&board, &mut ordered);
        assert_eq!(ordered, generated, "all-quiet moves keep generation order");
    }
}
