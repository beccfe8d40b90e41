//! Game state queries and the automated-opponent hook.

use crate::constants::FIFTY_MOVE_HALFMOVES;
use crate::move_gen::{has_any_legal_move, is_in_check as position_in_check};
use crate::position::Position;
use crate::search::select_move;
use crate::types::{Game, GameStatus, Move, PieceKind};

/// Whether the side to move is in check.
pub fn is_in_check(game: &Game) -> bool {
    position_in_check(&game.position, game.position.side_to_move)
}

/// Whether the side to move is checkmated: in check with no legal moves.
pub fn is_checkmate(game: &Game) -> bool {
    is_in_check(game) && !has_any_legal_move(&game.position)
}

/// Whether the side to move is stalemated: not in check, no legal moves.
pub fn is_stalemate(game: &Game) -> bool {
    !is_in_check(game) && !has_any_legal_move(&game.position)
}

/// Whether the game has ended.
pub fn is_game_over(game: &Game) -> bool {
    game_status(game) != GameStatus::Playing
}

/// Classify the current position: checkmate, stalemate, draw or playing.
pub fn game_status(game: &Game) -> GameStatus {
    let position = &game.position;
    if !has_any_legal_move(position) {
        if position_in_check(position, position.side_to_move) {
            return GameStatus::Checkmate;
        }
        return GameStatus::Stalemate;
    }
    if position.halfmove_clock >= FIFTY_MOVE_HALFMOVES || insufficient_material(position) {
        return GameStatus::Draw;
    }
    GameStatus::Playing
}

/// Request a move from the automated opponent for `position`.
///
/// Callers invoke this only when they have determined the side to move is
/// engine-controlled, and must discard the result if the authoritative
/// game moved on in the meantime (reset, or a human move changed the side
/// to move) - the selector holds no ownership over the live game.
pub async fn request_engine_move(position: &Position) -> Option<Move> {
    select_move(position).await
}

/// Neither side can mate: bare kings, or a lone minor piece against a
/// bare king.
fn insufficient_material(position: &Position) -> bool {
    let mut minors = 0;
    for (_, piece) in position.pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Knight | PieceKind::Bishop => minors += 1,
            _ => return false,
        }
    }
    minors <= 1
}
