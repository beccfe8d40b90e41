//! Public API of the position engine.
//!
//! High-level functions the UI/collaborator layer drives: game lifecycle,
//! move validation and execution, state queries and the automated-opponent
//! hook. The authoritative position has exactly one writer
//! ([`apply_move`]); everything else reads or works on clones.
//!
//! ## Module Organization
//!
//! - `game` - game lifecycle (new_game, load_game, reset_game)
//! - `moves` - move execution and validation (apply_move, legal_moves)
//! - `state` - game state queries and the engine-move request

mod game;
mod moves;
mod state;

pub use game::{load_game, new_game, reset_game};
pub use moves::{apply_move, legal_moves};
pub use state::{
    game_status, is_checkmate, is_game_over, is_in_check, is_stalemate, request_engine_move,
};
