//! Quiescence search to avoid the horizon effect
//!
//! Only noisy moves (captures, checks, promotions) are followed. The search
//! is fail-hard: results are clamped to the `[alpha, beta]` window.

use super::ordering::order_moves;
use super::Searcher;
use crate::error::EngineResult;
use crate::rules::Rules;
use crate::types::{Color, Move, Score};

impl<R: Rules> Searcher<'_, R> {
    pub(super) fn quiescence(
        &mut self,
        perspective: Color,
        mut alpha: Score,
        beta: Score,
        ply: usize,
    ) -> EngineResult<Score> {
        self.stats.quiescence_nodes += 1;

        let stand_pat = self.evaluator.evaluate(&*self.rules, perspective);
        if stand_pat >= beta {
            return Ok(beta);
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        if ply >= self.config.max_ply {
            return Ok(alpha);
        }

        let mut moves: Vec<Move> = self
            .rules
            .legal_moves()
            .into_iter()
            .filter(|mv| self.rules.is_noisy(mv))
            .collect();
        order_moves(&*self.rules, &mut moves);

        for mv in &moves {
            self.rules.apply(mv)?;
            let result = self.quiescence(!perspective, -beta, -alpha, ply + 1);
            self.rules.undo()?;
            let score = -result?;

            if score >= beta {
                self.stats.cutoffs += 1;
                return Ok(beta);
            }
            if score > alpha {
                alpha = score;
            }
        }

        Ok(alpha)
    }
}
