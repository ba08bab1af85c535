//! Root driver
//!
//! Scores every legal move with a full-window negamax search of the reply and
//! keeps the best one for the engine's color.

use std::time::Duration;

use instant::Instant;
use tracing::{debug, info};

use super::ordering::order_moves;
use super::{SearchConfig, SearchStats, Searcher};
use crate::error::{EngineError, EngineResult};
use crate::rules::Rules;
use crate::types::{Color, Move, Score};

/// Move chosen by the root driver
#[derive(Debug, Clone, PartialEq)]
pub struct BestMove {
    pub mv: Move,
    /// Score of the move for the engine's color
    pub score: Score,
    pub depth: u32,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Outcome of a root search
#[derive(Debug, Clone, PartialEq)]
pub enum RootResult {
    Best(BestMove),
    /// Side to move has no legal moves
    NoLegalMoves,
    /// Side to move is not the engine's color
    WrongTurn,
}

/// Pick the best move for `engine_color`, searching `depth` plies
///
/// Each root move is applied and its reply searched at `depth - 1` with an
/// infinite window. Ties keep the move that was ordered first.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfig`] if `depth` is zero or does not fit
/// under the ply ceiling, and propagates any rules provider failure.
pub fn find_best_move<R: Rules>(
    rules: &mut R,
    engine_color: Color,
    depth: u32,
    config: &SearchConfig,
) -> EngineResult<RootResult> {
    if depth == 0 {
        return Err(EngineError::InvalidConfig {
            message: "search depth must be at least 1".to_string(),
        });
    }
    if depth as usize >= config.max_ply {
        return Err(EngineError::InvalidConfig {
            message: format!(
                "search depth {depth} must be below the ply limit {}",
                config.max_ply
            ),
        });
    }

    if rules.side_to_move() != engine_color {
        return Ok(RootResult::WrongTurn);
    }

    let mut moves = rules.legal_moves();
    if moves.is_empty() {
        return Ok(RootResult::NoLegalMoves);
    }
    order_moves(&*rules, &mut moves);

    let start_time = Instant::now();
    let mut searcher = Searcher::new(rules, config.clone());
    let mut best: Option<(Move, Score)> = None;

    for mv in moves {
        searcher.rules.apply(&mv)?;
        let result = searcher.negamax(
            depth - 1,
            !engine_color,
            Score::NEG_INFINITY,
            Score::INFINITY,
            1,
        );
        searcher.rules.undo()?;
        let score = -result?;

        debug!(mv = %mv, score, "root move scored");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    let (mv, score) = best.ok_or_else(|| EngineError::SearchError {
        message: "root search scored no moves".to_string(),
    })?;
    let stats = searcher.stats();
    let elapsed = start_time.elapsed();

    info!(
        mv = %mv,
        score,
        depth,
        nodes = stats.nodes,
        quiescence_nodes = stats.quiescence_nodes,
        cutoffs = stats.cutoffs,
        table_hits = stats.table_hits,
        elapsed_ms = elapsed.as_millis() as u64,
        "search complete"
    );

    Ok(RootResult::Best(BestMove {
        mv,
        score,
        depth,
        stats,
        elapsed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ChessBoard;
    use crate::constants::MATE_SCORE;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn board(fen: &str) -> ChessBoard {
        ChessBoard::from_fen(fen).expect("valid FEN")
    }

    fn best(result: RootResult) -> BestMove {
        match result {
            RootResult::Best(best) => best,
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn test_find_best_move_starting_position() {
        let mut board = board(START_FEN);
        let legal = board.legal_moves();

        let best = best(find_best_move(&mut board, Color::White, 1, &SearchConfig::default()).unwrap());

        assert!(legal.contains(&best.mv), "Best move should be legal");
        assert_eq!(best.depth, 1);
        assert!(best.stats.nodes >= 20, "every root reply is searched");
        assert_eq!(board.depth(), 0, "root search leaves the board untouched");
    }

    #[test]
    fn test_find_best_move_for_black_takes_free_queen() {
        let mut board = board("4k3/8/8/8/8/2p5/3Q4/4K3 b - - 0 1");
        let best = best(find_best_move(&mut board, Color::Black, 1, &SearchConfig::default()).unwrap());
        assert_eq!(best.mv, Move::from_uci("c3d2").unwrap());
    }

    #[test]
    fn test_mate_in_one_for_black() {
        let mut board = board("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1");
        let best = best(find_best_move(&mut board, Color::Black, 1, &SearchConfig::default()).unwrap());
        assert_eq!(best.mv, Move::from_uci("a8a1").unwrap());
        assert_eq!(best.score, MATE_SCORE);
    }

    #[test]
    fn test_wrong_turn_and_no_moves() {
        let mut start = board(START_FEN);
        let result = find_best_move(&mut start, Color::Black, 2, &SearchConfig::default()).unwrap();
        assert_eq!(result, RootResult::WrongTurn);

        let mut stalemate = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let result = find_best_move(&mut stalemate, Color::Black, 2, &SearchConfig::default()).unwrap();
        assert_eq!(result, RootResult::NoLegalMoves);
    }

    #[test]
    fn test_depth_must_fit_the_ply_ceiling() {
        let mut board = board(START_FEN);
        let config = SearchConfig {
            max_ply: 3,
            ..SearchConfig::default()
        };
        assert!(matches!(
            find_best_move(&mut board, Color::White, 3, &config),
            Err(EngineError::InvalidConfig { .. })
        ));
        assert!(matches!(
            find_best_move(&mut board, Color::White, 0, &SearchConfig::default()),
            Err(EngineError::InvalidConfig { .. })
        ));
    }
}
