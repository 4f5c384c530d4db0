//! Full position evaluation
//!
//! Evaluates positions using terminal detection, material and mobility.
//!
//! The mobility term counts every legal move of the side to move, at every
//! leaf. That is a full move generation per evaluation; it is part of the
//! playing strength and stays.

use super::material::evaluate_material;
use crate::constants::{DRAW_SCORE, MATE_SCORE, MOBILITY_WEIGHT};
use crate::rules::Rules;
use crate::types::{Score, Side};

/// Static evaluator bound to the side the search maximizes for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    maximizing: Side,
}

impl Evaluator {
    pub fn new(maximizing: Side) -> Self {
        Self { maximizing }
    }

    pub fn maximizing(&self) -> Side {
        self.maximizing
    }

    /// Evaluate full position (terminal + material + mobility)
    ///
    /// Pure and deterministic: the position is only queried, never mutated.
    pub fn evaluate<R: Rules + ?Sized>(&self, rules: &R) -> Score {
        if rules.is_checkmate() {
            // The side to move is mated, so the other side delivered it
            return if rules.side_to_move() != self.maximizing {
                MATE_SCORE
            } else {
                -MATE_SCORE
            };
        }
        if rules.is_draw() {
            return DRAW_SCORE;
        }

        evaluate_material(rules, self.maximizing) + evaluate_mobility(rules, self.maximizing)
    }
}

/// Legal-move count of the side to move, signed for `maximizing`
pub fn evaluate_mobility<R: Rules + ?Sized>(rules: &R, maximizing: Side) -> Score {
    let mobility = rules.legal_move_count() as Score * MOBILITY_WEIGHT;
    if rules.side_to_move() == maximizing {
        mobility
    } else {
        -mobility
    }
}
