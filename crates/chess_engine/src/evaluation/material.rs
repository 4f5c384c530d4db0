//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::constants::piece_value;
use crate::rules::Rules;
use crate::types::{Score, Side, Square};

/// Material balance from `maximizing`'s point of view
pub fn evaluate_material<R: Rules + ?Sized>(rules: &R, maximizing: Side) -> Score {
    Square::all()
        .filter_map(|square| rules.piece_at(square))
        .map(|piece| {
            let value = piece_value(piece.kind);
            if piece.side == maximizing {
                value
            } else {
                -value
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ShakmatyBoard;
    use crate::constants::{PAWN_VALUE, QUEEN_VALUE};

    #[test]
    fn test_starting_position_material_balance() {
        let board = ShakmatyBoard::new();
        assert_eq!(evaluate_material(&board, Side::White), 0);
        assert_eq!(evaluate_material(&board, Side::Black), 0);
    }

    #[test]
    fn test_white_up_queen() {
        // Black queen removed from d8
        let board =
            ShakmatyBoard::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
                .unwrap();
        assert_eq!(evaluate_material(&board, Side::White), QUEEN_VALUE);
        assert_eq!(evaluate_material(&board, Side::Black), -QUEEN_VALUE);
    }

    #[test]
    fn test_black_up_pawn() {
        // White pawn removed from e2
        let board =
            ShakmatyBoard::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1")
                .unwrap();
        assert_eq!(
            evaluate_material(&board, Side::Black),
            PAWN_VALUE,
            "Score should be exactly one pawn for black"
        );
    }

    #[test]
    fn test_bare_kings_material() {
        let board = ShakmatyBoard::from_fen("8/8/4k3/8/8/4K3/8/8 w - - 0 1").unwrap();
        assert_eq!(evaluate_material(&board, Side::White), 0);
    }
}
