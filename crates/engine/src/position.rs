//! The authoritative chess position.
//!
//! A [`Position`] holds everything the rules need: piece placement, side to
//! move, castling rights, the en-passant target and the two move counters.
//! Move application lives here as [`Position::apply_unchecked`]; legality
//! checking lives in [`crate::move_gen`], which calls back into this module
//! to simulate candidates on scratch clones.
//!
//! Invariants: exactly one king of each color is present, and the side not
//! to move is never left in check by a move that was actually applied. The
//! second invariant is enforced up front by the legality filter, not
//! repaired after the fact.

use crate::board::{starting_board, Board};
use crate::types::{CastlingRights, Color, Move, MoveFlags, Piece, PieceKind, Square};

/// A complete chess position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Position {
        Position {
            board: starting_board(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// An empty position shell, used by the FEN parser.
    pub(crate) fn empty() -> Position {
        Position {
            board: crate::board::empty_board(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    /// All occupied squares with their pieces, in ascending square order.
    ///
    /// Display projections (piece lists, capture overlays) are derived from
    /// this on demand; the position itself is the single source of truth.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| Square::from_index(index).zip(*slot))
    }

    /// The square of `color`'s king.
    ///
    /// Returns `None` only for hand-built positions that violate the
    /// one-king invariant; legal play always finds the king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(square, _)| square)
    }

    /// Whether `color`'s king is attacked in the current position.
    pub fn in_check(&self, color: Color) -> bool {
        crate::move_gen::is_in_check(self, color)
    }

    /// Apply `mv` without legality validation, updating every piece of
    /// position bookkeeping. Returns the captured piece, if any.
    ///
    /// Callers must pass a move drawn from the legal-move generator (or a
    /// pseudo-legal candidate being simulated on a scratch clone).
    pub(crate) fn apply_unchecked(&mut self, mv: &Move) -> Option<Piece> {
        let Some(mut piece) = self.board[mv.from.index()] else {
            debug_assert!(false, "apply_unchecked on empty origin {}", mv.from);
            return None;
        };
        let mover = piece.color;
        let moved_kind = piece.kind;

        // Resolve the capture first. En passant removes the pawn behind the
        // destination square, not the piece on it.
        let captured = if mv.is_en_passant() {
            let step = if mover == Color::White { -1 } else { 1 };
            mv.to
                .offset(0, step)
                .and_then(|sq| self.board[sq.index()].take())
        } else {
            self.board[mv.to.index()]
        };

        // Promotion: a pawn reaching the last rank becomes the requested
        // kind, defaulting to a queen.
        let last_rank = if mover == Color::White { 7 } else { 0 };
        if moved_kind == PieceKind::Pawn && mv.to.rank() == last_rank {
            piece.kind = mv.promotion.unwrap_or(PieceKind::Queen);
        }

        self.board[mv.to.index()] = Some(piece);
        self.board[mv.from.index()] = None;

        // Castling relocates the rook in the same step.
        if mv.flags.contains(MoveFlags::CASTLE_KINGSIDE) {
            let rank = mv.from.rank();
            let rook_from = Square::from_file_rank(7, rank);
            let rook_to = Square::from_file_rank(5, rank);
            self.board[rook_to.index()] = self.board[rook_from.index()].take();
        } else if mv.flags.contains(MoveFlags::CASTLE_QUEENSIDE) {
            let rank = mv.from.rank();
            let rook_from = Square::from_file_rank(0, rank);
            let rook_to = Square::from_file_rank(3, rank);
            self.board[rook_to.index()] = self.board[rook_from.index()].take();
        }

        self.update_castling_rights(moved_kind, mover, mv);

        // The en-passant target exists only immediately after a two-square
        // pawn advance.
        self.en_passant = if mv.flags.contains(MoveFlags::DOUBLE_PUSH) {
            let step = if mover == Color::White { -1 } else { 1 };
            mv.to.offset(0, step)
        } else {
            None
        };

        if captured.is_some() || moved_kind == PieceKind::Pawn {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mover == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = mover.opposite();

        captured
    }

    /// Revoke castling rights affected by `mv`: any king move, any rook
    /// move off its home square, and any capture landing on a rook home
    /// square.
    fn update_castling_rights(&mut self, moved_kind: PieceKind, mover: Color, mv: &Move) {
        if moved_kind == PieceKind::King {
            match mover {
                Color::White => {
                    self.castling.white_kingside = false;
                    self.castling.white_queenside = false;
                }
                Color::Black => {
                    self.castling.black_kingside = false;
                    self.castling.black_queenside = false;
                }
            }
        }

        let a1 = Square::from_file_rank(0, 0);
        let h1 = Square::from_file_rank(7, 0);
        let a8 = Square::from_file_rank(0, 7);
        let h8 = Square::from_file_rank(7, 7);
        for square in [mv.from, mv.to] {
            if square == a1 {
                self.castling.white_queenside = false;
            } else if square == h1 {
                self.castling.white_kingside = false;
            } else if square == a8 {
                self.castling.black_queenside = false;
            } else if square == h8 {
                self.castling.black_kingside = false;
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
