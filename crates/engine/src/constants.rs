//! Engine constants: piece valuation and board geometry.
//!
//! Piece values are in centipawns (1/100th of a pawn) so the material
//! evaluator can stay in integer arithmetic. The king carries no material
//! value: terminal positions are recognized by the rules layer, never by
//! king capture.

/// Pawn value in centipawns (the reference unit).
pub const PAWN_VALUE: i32 = 100;
/// Knight value in centipawns.
pub const KNIGHT_VALUE: i32 = 320;
/// Bishop value in centipawns.
pub const BISHOP_VALUE: i32 = 330;
/// Rook value in centipawns.
pub const ROOK_VALUE: i32 = 500;
/// Queen value in centipawns.
pub const QUEEN_VALUE: i32 = 900;
/// King value. Zero: checkmate is detected by the rules, not the evaluator.
pub const KING_VALUE: i32 = 0;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = 64;

/// File letters indexed by file number (0 = a, 7 = h).
pub const FILE_CHARS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Rook movement directions as (file, rank) steps.
pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Bishop movement directions as (file, rank) steps.
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// King movement directions: one step along every rank, file and diagonal.
pub const KING_DIRS: [(i8, i8); 8] = [
    (0, 1), (1, 0), (0, -1), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

/// Knight leap offsets: every 2+1 / 1+2 combination.
pub const KNIGHT_DIRS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

/// Fifty-move rule threshold in halfmoves.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
