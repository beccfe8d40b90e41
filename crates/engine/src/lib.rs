//! # ChessIQ Engine - Position Rules and Move Selection
//!
//! The rules-correct core of ChessIQ: a chess position engine that owns
//! board state, legality, move application and terminal-state detection,
//! plus a deliberately shallow move selector for the automated opponent.
//!
//! ## Design
//!
//! The authoritative [`Position`] is an explicitly owned value with a
//! single writer ([`api::apply_move`]); there is no shared mutable
//! singleton. Legality is simulate-and-filter: pseudo-legal moves per
//! piece pattern, then each candidate is applied on a scratch clone and
//! discarded if the mover's own king ends up attacked. The selector never
//! touches the live position - it searches clones two plies deep with
//! material-only evaluation and returns a deterministic choice.
//!
//! Display projections (piece lists, capture lists) are pure functions of
//! the position, recomputed on demand. FEN serialization round-trips
//! exactly; each applied move is recorded in standard algebraic notation.
//!
//! ## Module Organization
//!
//! - [`types`] - squares, pieces, moves, the game record
//! - [`board`] - board storage and the starting arrangement
//! - [`position`] - the authoritative position and move application
//! - [`move_gen`] - pseudo-legal generation, attack detection, legality
//! - [`evaluation`] - material scoring
//! - [`search`] - the two-ply move selector
//! - [`fen`] / [`notation`] - position serialization and SAN
//! - [`api`] - the surface the UI layer drives
//! - [`error`] - rejection taxonomy
//!
//! ## Example
//!
//! ```
//! use chessiq_engine::api::{apply_move, legal_moves, new_game};
//! use chessiq_engine::types::Square;
//!
//! let mut game = new_game();
//! let e2 = Square::from_algebraic("e2")?;
//! let e4 = Square::from_algebraic("e4")?;
//! assert_eq!(legal_moves(&game, e2).len(), 2);
//!
//! let result = apply_move(&mut game, e2, e4, None)?;
//! assert_eq!(result.san, "e4");
//! # Ok::<(), chessiq_engine::error::EngineError>(())
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod fen;
pub mod move_gen;
pub mod notation;
pub mod position;
pub mod search;
pub mod types;

pub use api::{
    apply_move, game_status, is_checkmate, is_game_over, is_in_check, is_stalemate, legal_moves,
    load_game, new_game, request_engine_move, reset_game,
};
pub use error::{EngineError, EngineResult};
pub use evaluation::evaluate_material;
pub use fen::{from_fen, to_fen};
pub use position::Position;
pub use search::select_move;
pub use types::{
    CastlingRights, Color, Game, GameRecord, GameStatus, Move, MoveFlags, MoveResult, Piece,
    PieceKind, Square,
};
