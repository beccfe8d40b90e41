//! Pseudo-legal pawn moves.
//!
//! Pawns are the only piece whose capture pattern differs from its
//! movement pattern: pushes must land on empty squares, captures are
//! diagonal only, and the en-passant capture targets the square a pawn
//! just passed over. A pawn reaching the last rank always carries a
//! promotion kind; the generator defaults it to a queen and the apply path
//! honors an explicit override.

use crate::position::Position;
use crate::types::{Color, Move, MoveFlags, PieceKind, Square};

pub(crate) fn pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let rank_step: i8 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let start_rank = match color {
        Color::White => 1,
        Color::Black => 6,
    };

    // Single push, then the two-square advance from the starting rank.
    if let Some(one) = from.offset(0, rank_step) {
        if position.piece_at(one).is_none() {
            push_pawn_move(Move::new(from, one), color, out);

            if from.rank() == start_rank {
                if let Some(two) = from.offset(0, 2 * rank_step) {
                    if position.piece_at(two).is_none() {
                        out.push(Move::with_flags(from, two, MoveFlags::DOUBLE_PUSH));
                    }
                }
            }
        }
    }

    // Diagonal captures, including en passant.
    for file_step in [-1, 1] {
        let Some(to) = from.offset(file_step, rank_step) else {
            continue;
        };
        match position.piece_at(to) {
            Some(piece) if piece.color != color => {
                push_pawn_move(Move::with_flags(from, to, MoveFlags::CAPTURE), color, out);
            }
            None if position.en_passant == Some(to) => {
                out.push(Move::with_flags(
                    from,
                    to,
                    MoveFlags::CAPTURE.union(MoveFlags::EN_PASSANT),
                ));
            }
            _ => {}
        }
    }
}

/// Append a pawn move, tagging last-rank destinations with the default
/// promotion kind.
fn push_pawn_move(mut mv: Move, color: Color, out: &mut Vec<Move>) {
    let last_rank = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    if mv.to.rank() == last_rank {
        mv.promotion = Some(PieceKind::Queen);
    }
    out.push(mv);
}
