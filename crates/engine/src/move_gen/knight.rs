//! Pseudo-legal knight moves.

use crate::constants::KNIGHT_DIRS;
use crate::position::Position;
use crate::types::{Color, Move, MoveFlags, Square};

pub(crate) fn knight_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    for &(file_step, rank_step) in &KNIGHT_DIRS {
        let Some(to) = from.offset(file_step, rank_step) else {
            continue;
        };
        match position.piece_at(to) {
            None => out.push(Move::new(from, to)),
            Some(piece) if piece.color != color => {
                out.push(Move::with_flags(from, to, MoveFlags::CAPTURE));
            }
            Some(_) => {}
        }
    }
}
