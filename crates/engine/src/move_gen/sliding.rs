//! Pseudo-legal sliding moves for bishops, rooks and queens.
//!
//! Each direction is walked outward square by square: empty squares extend
//! the ray, the first occupied square ends it (and yields a capture when it
//! holds an enemy piece).

use crate::constants::{BISHOP_DIRS, ROOK_DIRS};
use crate::position::Position;
use crate::types::{Color, Move, MoveFlags, Square};

pub(crate) fn bishop_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    slide(position, from, color, &BISHOP_DIRS, out);
}

pub(crate) fn rook_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    slide(position, from, color, &ROOK_DIRS, out);
}

pub(crate) fn queen_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    slide(position, from, color, &ROOK_DIRS, out);
    slide(position, from, color, &BISHOP_DIRS, out);
}

fn slide(
    position: &Position,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(file_step, rank_step) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(file_step, rank_step) {
            current = to;
            match position.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(piece) => {
                    if piece.color != color {
                        out.push(Move::with_flags(from, to, MoveFlags::CAPTURE));
                    }
                    break;
                }
            }
        }
    }
}
