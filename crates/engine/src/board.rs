//! Board storage and the standard starting arrangement.
//!
//! The board is a flat array of 64 optional pieces indexed a1 = 0 through
//! h8 = 63 (rank-major). Pieces are values; the board owns its copies.

use crate::types::{Color, Piece, PieceKind, Square};

/// 64 squares, each holding at most one piece.
pub type Board = [Option<Piece>; 64];

/// Back-rank piece order, a-file through h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An empty board.
pub fn empty_board() -> Board {
    [None; 64]
}

/// The standard initial arrangement.
pub fn starting_board() -> Board {
    let mut board = empty_board();
    for file in 0..8u8 {
        let kind = BACK_RANK[file as usize];
        board[Square::from_file_rank(file, 0).index()] = Some(Piece::new(kind, Color::White));
        board[Square::from_file_rank(file, 1).index()] =
            Some(Piece::new(PieceKind::Pawn, Color::White));
        board[Square::from_file_rank(file, 6).index()] =
            Some(Piece::new(PieceKind::Pawn, Color::Black));
        board[Square::from_file_rank(file, 7).index()] = Some(Piece::new(kind, Color::Black));
    }
    board
}
