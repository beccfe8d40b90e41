//! Move execution and validation.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::move_gen::legal_moves_from;
use crate::notation::san;
use crate::types::{Game, Move, MoveResult, PieceKind, Square};

/// Legal moves for the piece of the side to move on `square`.
///
/// Empty for an empty square, an opponent-owned square, or a piece with no
/// legal destinations. Query only - never mutates the game.
pub fn legal_moves(game: &Game, square: Square) -> Vec<Move> {
    legal_moves_from(&game.position, square)
}

/// Validate and apply a move on the authoritative position.
///
/// The move must be a member of `legal_moves(from)`; otherwise the game is
/// left untouched and the rejection is reported as a value. On acceptance
/// the position is updated with full rule enforcement, the SAN string and
/// any captured piece are appended to the record, and the resulting status
/// is returned.
///
/// # Arguments
///
/// * `game` - the game to mutate
/// * `from` - origin square
/// * `to` - destination square
/// * `promotion` - promotion kind for a pawn reaching the last rank;
///   defaults to queen when `None`
///
/// # Errors
///
/// [`EngineError::NoMoverPiece`] when `from` is empty or holds an opponent
/// piece, [`EngineError::IllegalMove`] otherwise. A move is never
/// partially applied.
pub fn apply_move(
    game: &mut Game,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> EngineResult<MoveResult> {
    let candidates = legal_moves_from(&game.position, from);
    let Some(mut mv) = candidates.into_iter().find(|m| m.to == to) else {
        return Err(rejection(game, from, to));
    };

    if let Some(kind) = promotion {
        let promotable = matches!(
            kind,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        );
        // A promotion kind on a non-promotion move, or an impossible
        // promotion target, is not a legal request.
        if mv.promotion.is_none() || !promotable {
            return Err(EngineError::IllegalMove { from, to });
        }
        mv.promotion = Some(kind);
    }

    // SAN is rendered against the pre-move position.
    let san = san(&game.position, &mv);

    let captured = game.position.apply_unchecked(&mv);
    game.record.moves.push(san.clone());
    if let Some(piece) = captured {
        // The captured color is read from the removed piece itself, not
        // inferred from the mover.
        game.record.captures.push(piece);
    }
    game.last_move = Some(mv);

    let status = super::state::game_status(game);
    debug!(%san, ?status, "move applied");

    Ok(MoveResult {
        mv,
        san,
        captured,
        status,
    })
}

fn rejection(game: &Game, from: Square, to: Square) -> EngineError {
    match game.position.piece_at(from) {
        Some(piece) if piece.color == game.position.side_to_move => {
            EngineError::IllegalMove { from, to }
        }
        _ => EngineError::NoMoverPiece(from),
    }
}
