//! Attack detection and check queries.
//!
//! Determines whether a square is attacked by a given color, from the
//! current board occupancy alone and independent of whose turn it is. Used
//! for check detection, castling transit rules and the legality filter.

use crate::constants::{BISHOP_DIRS, KING_DIRS, KNIGHT_DIRS, ROOK_DIRS};
use crate::position::Position;
use crate::types::{Color, PieceKind, Square};

/// Check whether `square` is attacked by any piece of `by` color.
///
/// Considers pawn diagonal attacks, knight leaps, sliding attacks from
/// rooks/bishops/queens along unblocked lines, and adjacent king attacks.
///
/// # Arguments
///
/// * `position` - the current position
/// * `square` - target square to test
/// * `by` - color of the would-be attackers
pub fn is_square_attacked(position: &Position, square: Square, by: Color) -> bool {
    pawn_attacks(position, square, by)
        || knight_attacks(position, square, by)
        || sliding_attacks(position, square, by)
        || king_attacks(position, square, by)
}

/// Check whether `color`'s king is attacked in the current position.
pub fn is_in_check(position: &Position, color: Color) -> bool {
    if let Some(king) = position.king_square(color) {
        is_square_attacked(position, king, color.opposite())
    } else {
        false
    }
}

/// A pawn of `by` attacks `square` iff it sits one rank behind it (from
/// `by`'s point of view) on an adjacent file.
fn pawn_attacks(position: &Position, square: Square, by: Color) -> bool {
    let step = match by {
        Color::White => -1,
        Color::Black => 1,
    };
    [-1, 1].iter().any(|&file_step| {
        square
            .offset(file_step, step)
            .and_then(|sq| position.piece_at(sq))
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.color == by)
    })
}

fn knight_attacks(position: &Position, square: Square, by: Color) -> bool {
    KNIGHT_DIRS.iter().any(|&(file_step, rank_step)| {
        square
            .offset(file_step, rank_step)
            .and_then(|sq| position.piece_at(sq))
            .is_some_and(|piece| piece.kind == PieceKind::Knight && piece.color == by)
    })
}

fn king_attacks(position: &Position, square: Square, by: Color) -> bool {
    KING_DIRS.iter().any(|&(file_step, rank_step)| {
        square
            .offset(file_step, rank_step)
            .and_then(|sq| position.piece_at(sq))
            .is_some_and(|piece| piece.kind == PieceKind::King && piece.color == by)
    })
}

/// Walk each rook and bishop ray outward from `square`; the first piece
/// encountered on a ray decides whether the ray attacks.
fn sliding_attacks(position: &Position, square: Square, by: Color) -> bool {
    ray_hits(position, square, by, &ROOK_DIRS, PieceKind::Rook)
        || ray_hits(position, square, by, &BISHOP_DIRS, PieceKind::Bishop)
}

fn ray_hits(
    position: &Position,
    square: Square,
    by: Color,
    dirs: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(file_step, rank_step) in dirs {
        let mut current = square;
        while let Some(next) = current.offset(file_step, rank_step) {
            current = next;
            if let Some(piece) = position.piece_at(current) {
                if piece.color == by && (piece.kind == slider || piece.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
        }
    }
    false
}
