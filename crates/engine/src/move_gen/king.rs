//! Pseudo-legal king moves, including castling.
//!
//! Castling is generated here with its special preconditions: the right
//! must still be held, the squares between king and rook must be empty,
//! the king may not currently be in check and may not pass through an
//! attacked square. The destination square itself is vetted by the
//! simulate-and-filter pass like any other move.

use crate::constants::KING_DIRS;
use crate::move_gen::attack::{is_in_check, is_square_attacked};
use crate::position::Position;
use crate::types::{Color, Move, MoveFlags, Piece, PieceKind, Square};

pub(crate) fn king_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    for &(file_step, rank_step) in &KING_DIRS {
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

    castling_moves(position, from, color, out);
}

fn castling_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let home_rank = match color {
        Color::White => 0,
        Color::Black => 7,
    };
    // Rights can only be held with the king on its home square, but a
    // hand-built position may disagree; the guard keeps this total.
    if from != Square::from_file_rank(4, home_rank) {
        return;
    }

    let (kingside_right, queenside_right) = match color {
        Color::White => (position.castling.white_kingside, position.castling.white_queenside),
        Color::Black => (position.castling.black_kingside, position.castling.black_queenside),
    };
    if !kingside_right && !queenside_right {
        return;
    }
    if is_in_check(position, color) {
        return;
    }

    let opponent = color.opposite();
    let rook = Piece::new(PieceKind::Rook, color);

    if kingside_right {
        let f = Square::from_file_rank(5, home_rank);
        let g = Square::from_file_rank(6, home_rank);
        let h = Square::from_file_rank(7, home_rank);
        if position.piece_at(f).is_none()
            && position.piece_at(g).is_none()
            && position.piece_at(h) == Some(rook)
            && !is_square_attacked(position, f, opponent)
        {
            out.push(Move::with_flags(from, g, MoveFlags::CASTLE_KINGSIDE));
        }
    }

    if queenside_right {
        let b = Square::from_file_rank(1, home_rank);
        let c = Square::from_file_rank(2, home_rank);
        let d = Square::from_file_rank(3, home_rank);
        let a = Square::from_file_rank(0, home_rank);
        if position.piece_at(b).is_none()
            && position.piece_at(c).is_none()
            && position.piece_at(d).is_none()
            && position.piece_at(a) == Some(rook)
            && !is_square_attacked(position, d, opponent)
        {
            out.push(Move::with_flags(from, c, MoveFlags::CASTLE_QUEENSIDE));
        }
    }
}
