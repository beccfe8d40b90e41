//! Simulate-and-filter legality on top of pseudo-legal generation.
//!
//! Every pseudo-legal candidate is applied to a scratch clone of the
//! position; candidates that leave the mover's own king attacked are
//! discarded. This is the legality filter itself, not a post-hoc check:
//! pins and discovered checks need no dedicated analysis.

use crate::move_gen::attack::is_in_check;
use crate::move_gen::{king, knight, pawn, sliding};
use crate::position::Position;
use crate::types::{Move, PieceKind, Square};

/// Every legal move for the piece of the side to move on `from`.
///
/// Returns an empty vector for an empty square, an opponent-owned square,
/// or a piece with no legal destinations. Never fails: an unreachable
/// request is an empty result, not an error.
pub fn legal_moves_from(position: &Position, from: Square) -> Vec<Move> {
    let mut moves = pseudo_legal_from(position, from);
    moves.retain(|mv| !leaves_king_exposed(position, mv));
    moves
}

/// Every legal move for the side to move, enumerated square by square in
/// ascending board order (a1 through h8) with per-piece destination order
/// fixed by the generators. The move selector relies on this order being
/// deterministic.
pub fn all_legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (square, piece) in position.pieces() {
        if piece.color != position.side_to_move {
            continue;
        }
        pseudo_legal_piece(position, square, piece.kind, &mut moves);
    }
    moves.retain(|mv| !leaves_king_exposed(position, mv));
    moves
}

/// Whether the side to move has at least one legal move. Short-circuits,
/// unlike [`all_legal_moves`].
pub fn has_any_legal_move(position: &Position) -> bool {
    for (square, piece) in position.pieces() {
        if piece.color != position.side_to_move {
            continue;
        }
        let mut candidates = Vec::new();
        pseudo_legal_piece(position, square, piece.kind, &mut candidates);
        if candidates
            .iter()
            .any(|mv| !leaves_king_exposed(position, mv))
        {
            return true;
        }
    }
    false
}

fn pseudo_legal_from(position: &Position, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();
    let Some(piece) = position.piece_at(from) else {
        return moves;
    };
    if piece.color != position.side_to_move {
        return moves;
    }
    pseudo_legal_piece(position, from, piece.kind, &mut moves);
    moves
}

fn pseudo_legal_piece(position: &Position, from: Square, kind: PieceKind, out: &mut Vec<Move>) {
    let color = position.side_to_move;
    match kind {
        PieceKind::Pawn => pawn::pawn_moves(position, from, color, out),
        PieceKind::Knight => knight::knight_moves(position, from, color, out),
        PieceKind::Bishop => sliding::bishop_moves(position, from, color, out),
        PieceKind::Rook => sliding::rook_moves(position, from, color, out),
        PieceKind::Queen => sliding::queen_moves(position, from, color, out),
        PieceKind::King => king::king_moves(position, from, color, out),
    }
}

/// Simulate `mv` on a scratch clone and report whether the mover's own
/// king ends up attacked.
fn leaves_king_exposed(position: &Position, mv: &Move) -> bool {
    let mover = position.side_to_move;
    let mut scratch = position.clone();
    scratch.apply_unchecked(mv);
    is_in_check(&scratch, mover)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::from_fen;

    fn sq(label: &str) -> Square {
        Square::from_algebraic(label).expect("valid square label")
    }

    #[test]
    fn test_twenty_moves_in_starting_position() {
        let position = Position::new();
        assert_eq!(
            all_legal_moves(&position).len(),
            20,
            "16 pawn moves plus 4 knight moves"
        );
    }

    #[test]
    fn test_empty_and_opponent_squares_yield_nothing() {
        let position = Position::new();
        assert!(legal_moves_from(&position, sq("e4")).is_empty(), "empty square");
        assert!(
            legal_moves_from(&position, sq("e7")).is_empty(),
            "black piece while white is to move"
        );
    }

    #[test]
    fn test_pinned_piece_may_not_expose_king() {
        // The d2 knight is pinned to the king by the d8 rook.
        let position = from_fen("3r3k/8/8/8/8/8/3N4/3K4 w - - 0 1").expect("valid fen");
        assert!(
            legal_moves_from(&position, sq("d2")).is_empty(),
            "every knight move exposes the king to the rook"
        );
    }

    #[test]
    fn test_check_restricts_to_evasions() {
        // White king on e1 checked by the e8 rook; the bishop can block.
        let position = from_fen("4r2k/8/8/8/8/8/6B1/4K3 w - - 0 1").expect("valid fen");
        let moves = all_legal_moves(&position);
        assert!(
            moves
                .iter()
                .any(|mv| mv.from == sq("g2") && mv.to == sq("e4")),
            "Be4 blocks the check"
        );
        assert!(
            moves
                .iter()
                .all(|mv| (mv.from == sq("g2") && mv.to == sq("e4")) || mv.from == sq("e1")),
            "only the block and king moves answer the check"
        );
    }

    #[test]
    fn test_legal_moves_never_leave_own_king_attacked() {
        let position = from_fen("4r2k/8/8/8/8/8/6B1/4K3 w - - 0 1").expect("valid fen");
        for mv in all_legal_moves(&position) {
            let mut scratch = position.clone();
            scratch.apply_unchecked(&mv);
            assert!(
                !is_in_check(&scratch, position.side_to_move),
                "{mv} leaves the mover in check"
            );
        }
    }

    #[test]
    fn test_has_any_legal_move_matches_enumeration() {
        let stalemate = from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid fen");
        assert!(!has_any_legal_move(&stalemate));
        assert!(all_legal_moves(&stalemate).is_empty());

        let position = Position::new();
        assert!(has_any_legal_move(&position));
    }
}
