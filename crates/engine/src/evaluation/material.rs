//! Material evaluation.
//!
//! Sums piece values over the board with sign positive for white and
//! negative for black. The king contributes nothing.

use crate::position::Position;
use crate::types::Color;

/// Evaluate material balance in centipawns, positive for white.
pub fn evaluate_material(position: &Position) -> i32 {
    let mut score = 0;
    for (_, piece) in position.pieces() {
        let value = piece.kind.value();
        score += match piece.color {
            Color::White => value,
            Color::Black => -value,
        };
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PAWN_VALUE, QUEEN_VALUE};
    use crate::fen::from_fen;
    use crate::types::Square;

    #[test]
    fn test_starting_position_material_balance() {
        let position = Position::new();
        assert_eq!(
            evaluate_material(&position),
            0,
            "starting position is balanced"
        );
    }

    #[test]
    fn test_white_up_queen() {
        let mut position = Position::new();
        let d8 = Square::from_algebraic("d8").expect("valid square");
        position.board[d8.index()] = None;

        assert_eq!(evaluate_material(&position), QUEEN_VALUE);
    }

    #[test]
    fn test_black_up_pawn() {
        let mut position = Position::new();
        let e2 = Square::from_algebraic("e2").expect("valid square");
        position.board[e2.index()] = None;

        assert_eq!(evaluate_material(&position), -PAWN_VALUE);
    }

    #[test]
    fn test_kings_carry_no_material() {
        let position = from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("valid fen");
        assert_eq!(evaluate_material(&position), 0);
    }
}
