//! Error types for the position engine.
//!
//! Every rule violation is resolved locally: a rejected command leaves the
//! position untouched and reports the reason through [`EngineError`].
//! Nothing in the engine propagates a rule violation as a panic.

use thiserror::Error;

use crate::types::Square;

/// Errors reported by engine commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A textual square reference lies outside the 8x8 board.
    #[error("invalid square: '{0}' is not on the 8x8 board")]
    InvalidSquare(String),

    /// The requested move is not in the legal-move set of its origin square.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The origin square is empty or holds a piece of the side not to move.
    #[error("no piece of the side to move on {0}")]
    NoMoverPiece(Square),

    /// A FEN string failed to parse or describes an invalid position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
