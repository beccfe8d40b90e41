//! Standard algebraic notation for applied moves.
//!
//! [`san`] renders a move against the position it is about to be applied
//! to: piece letter, minimal disambiguation (file, then rank, then both),
//! `x` for captures with the departure file for pawn captures, `=Q`-style
//! promotion suffixes, `O-O`/`O-O-O` for castling, and a trailing `+`/`#`
//! computed by simulating the move. The result reconstructs the move
//! unambiguously given that position.

use crate::constants::FILE_CHARS;
use crate::move_gen::{has_any_legal_move, is_in_check, legal_moves_from};
use crate::position::Position;
use crate::types::{Move, MoveFlags, PieceKind, Square};

/// Render `mv` in standard algebraic notation against `position`.
///
/// `position` must be the position the move is applied to (mover still to
/// move); the caller is expected to pass a move drawn from the legal-move
/// generator.
pub fn san(position: &Position, mv: &Move) -> String {
    let mut text = if mv.flags.contains(MoveFlags::CASTLE_KINGSIDE) {
        "O-O".to_string()
    } else if mv.flags.contains(MoveFlags::CASTLE_QUEENSIDE) {
        "O-O-O".to_string()
    } else {
        body(position, mv)
    };

    text.push_str(check_suffix(position, mv));
    text
}

fn body(position: &Position, mv: &Move) -> String {
    let Some(piece) = position.piece_at(mv.from) else {
        debug_assert!(false, "san for a move with no piece on {}", mv.from);
        return mv.to_string();
    };

    let mut text = String::new();

    match piece.kind.san_letter() {
        Some(letter) => {
            text.push(letter);
            text.push_str(&disambiguation(position, mv, piece.kind));
        }
        None => {
            // Pawn captures carry the departure file instead of a letter.
            if mv.is_capture() {
                text.push(FILE_CHARS[mv.from.file() as usize]);
            }
        }
    }

    if mv.is_capture() {
        text.push('x');
    }
    text.push_str(&mv.to.to_algebraic());

    if let Some(kind) = mv.promotion {
        if let Some(letter) = kind.san_letter() {
            text.push('=');
            text.push(letter);
        }
    }

    text
}

/// Minimal origin qualifier when another piece of the same kind could
/// legally reach the destination: file if files differ, else rank, else
/// the full square. Kings never need one.
fn disambiguation(position: &Position, mv: &Move, kind: PieceKind) -> String {
    if kind == PieceKind::King {
        return String::new();
    }

    let rivals: Vec<Square> = position
        .pieces()
        .filter(|(square, piece)| {
            *square != mv.from && piece.kind == kind && piece.color == position.side_to_move
        })
        .map(|(square, _)| square)
        .filter(|&square| {
            legal_moves_from(position, square)
                .iter()
                .any(|other| other.to == mv.to)
        })
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    if rivals.iter().all(|rival| rival.file() != mv.from.file()) {
        return FILE_CHARS[mv.from.file() as usize].to_string();
    }
    if rivals.iter().all(|rival| rival.rank() != mv.from.rank()) {
        return (mv.from.rank() + 1).to_string();
    }
    mv.from.to_algebraic()
}

fn check_suffix(position: &Position, mv: &Move) -> &'static str {
    let mut after = position.clone();
    after.apply_unchecked(mv);
    if !is_in_check(&after, after.side_to_move) {
        ""
    } else if has_any_legal_move(&after) {
        "+"
    } else {
        "#"
    }
}
