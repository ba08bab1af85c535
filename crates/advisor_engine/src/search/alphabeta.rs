//! Alpha-beta search with negamax
//!
//! Terminal positions are scored before the depth-0 hand-off to quiescence,
//! so mates and draws get their exact value at every depth.

use super::ordering::order_moves;
use super::Searcher;
use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::hash::Bound;
use crate::rules::Rules;
use crate::types::{Color, Score};

impl<R: Rules> Searcher<'_, R> {
    /// Negamax with alpha-beta pruning
    ///
    /// Scores are from `perspective`'s point of view; each child is searched for
    /// the other color with the window negated and swapped.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PlyLimitExceeded`] when entered past the ply ceiling,
    /// or any apply/undo failure from the rules provider.
    pub(super) fn negamax(
        &mut self,
        depth: u32,
        perspective: Color,
        mut alpha: Score,
        beta: Score,
        ply: usize,
    ) -> EngineResult<Score> {
        if ply > self.config.max_ply {
            return Err(EngineError::PlyLimitExceeded {
                ply,
                limit: self.config.max_ply,
            });
        }
        self.stats.nodes += 1;

        if let Some(score) = self.probe(perspective, depth, alpha, beta) {
            return Ok(score);
        }

        if self.rules.is_checkmate() {
            let score = if self.rules.side_to_move() == perspective {
                -MATE_SCORE
            } else {
                MATE_SCORE
            };
            self.store(perspective, depth, score, Bound::Exact);
            return Ok(score);
        }

        if self.rules.is_draw() {
            self.store(perspective, depth, DRAW_SCORE, Bound::Exact);
            return Ok(DRAW_SCORE);
        }

        if depth == 0 {
            let score = self.quiescence(perspective, alpha, beta, ply)?;
            self.store(perspective, 0, score, Bound::classify(score, alpha, beta));
            return Ok(score);
        }

        let mut moves = self.rules.legal_moves();
        if moves.is_empty() {
            return Err(EngineError::SearchError {
                message: "no legal moves in a position that is neither mate nor draw".to_string(),
            });
        }
        order_moves(&*self.rules, &mut moves);

        let alpha_orig = alpha;
        let mut best = Score::NEG_INFINITY;

        for mv in &moves {
            self.rules.apply(mv)?;
            let result = self.negamax(depth - 1, !perspective, -beta, -alpha, ply + 1);
            self.rules.undo()?;
            let score = -result?;

            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.store(perspective, depth, best, Bound::classify(best, alpha_orig, beta));
        Ok(best)
    }
}
