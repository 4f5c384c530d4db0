//! Alpha-beta search (minimax form)
//!
//! Recursive fixed-depth minimax with alpha-beta pruning. The maximizing and
//! minimizing branches are kept separate instead of folding them into negamax:
//! the evaluator scores from one fixed side, and the two branches mirror each
//! other line for line.
//!
//! Pruning only skips work. For any position and depth the returned score is
//! exactly the one exhaustive minimax would return.

use super::make_unmake::with_move;
use crate::constants::AB_INF;
use crate::error::ChessEngineResult;
use crate::evaluation::Evaluator;
use crate::rules::Rules;
use crate::types::{Score, SearchStats, Side};

/// Alpha-beta searcher scoring for one maximizing side
#[derive(Debug, Clone)]
pub struct AlphaBeta {
    evaluator: Evaluator,
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new(maximizing: Side) -> Self {
        Self {
            evaluator: Evaluator::new(maximizing),
            stats: SearchStats::default(),
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Counters accumulated since construction
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `depth` plies below the current position
    ///
    /// `maximizing` tells whether the side to move at this node is the
    /// evaluator's side. Moves are tried in generation order on the shared
    /// position; each one is unmade before the next is tried.
    ///
    /// # Errors
    ///
    /// Propagates rules-engine contract violations (illegal apply, unbalanced
    /// unmake). The position is balanced again by the time the error reaches
    /// the caller.
    pub fn search<R: Rules + ?Sized>(
        &mut self,
        rules: &mut R,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> ChessEngineResult<Score> {
        self.stats.nodes += 1;

        if depth == 0 || rules.is_checkmate() || rules.is_draw() {
            return Ok(self.evaluator.evaluate(rules));
        }

        let moves = rules.legal_moves();
        if moves.is_empty() {
            return Ok(self.evaluator.evaluate(rules));
        }

        if maximizing {
            let mut best = -AB_INF;
            for mv in &moves {
                let value = with_move(rules, mv, |child| {
                    self.search(child, depth - 1, alpha, beta, false)
                })?;
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = AB_INF;
            for mv in &moves {
                let value = with_move(rules, mv, |child| {
                    self.search(child, depth - 1, alpha, beta, true)
                })?;
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(best)
        }
    }
}
