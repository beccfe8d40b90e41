//! FEN serialization of positions.
//!
//! The six standard fields: piece placement, side to move, castling
//! rights, en-passant target, halfmove clock, fullmove number. The pair
//! [`to_fen`] / [`from_fen`] round-trips exactly: `from_fen(to_fen(p))`
//! reproduces `p` field for field.

use crate::error::{EngineError, EngineResult};
use crate::position::Position;
use crate::types::{CastlingRights, Color, Piece, PieceKind, Square};

/// Export `position` as a FEN string.
pub fn to_fen(position: &Position) -> String {
    let mut fen = String::with_capacity(80);

    for rank in (0..8u8).rev() {
        let mut empty_run = 0u8;
        for file in 0..8u8 {
            let square = Square::from_file_rank(file, rank);
            match position.piece_at(square) {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    fen.push(piece.kind.fen_char(piece.color));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push((b'0' + empty_run) as char);
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(position.side_to_move.fen_char());

    fen.push(' ');
    fen.push_str(&position.castling.to_fen());

    fen.push(' ');
    match position.en_passant {
        Some(square) => fen.push_str(&square.to_algebraic()),
        None => fen.push('-'),
    }

    fen.push(' ');
    fen.push_str(&position.halfmove_clock.to_string());
    fen.push(' ');
    fen.push_str(&position.fullmove_number.to_string());

    fen
}

/// Parse a FEN string into a [`Position`].
///
/// Validates all six fields and the one-king-per-side invariant; any
/// malformed input is reported as [`EngineError::InvalidFen`] without
/// panicking.
pub fn from_fen(fen: &str) -> EngineResult<Position> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(EngineError::InvalidFen(format!(
            "expected 6 fields, got {}",
            fields.len()
        )));
    }

    let mut position = Position::empty();

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(EngineError::InvalidFen(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut file: u8 = 0;
        for c in rank_str.chars() {
            if file > 7 {
                return Err(EngineError::InvalidFen(format!(
                    "too many squares in rank {}",
                    rank + 1
                )));
            }
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(EngineError::InvalidFen(format!(
                        "invalid empty count '{c}' in rank {}",
                        rank + 1
                    )));
                }
                file += digit as u8;
            } else if let Some((color, kind)) = PieceKind::from_fen_char(c) {
                let square = Square::from_file_rank(file, rank);
                position.board[square.index()] = Some(Piece::new(kind, color));
                file += 1;
            } else {
                return Err(EngineError::InvalidFen(format!(
                    "invalid character '{c}' in piece placement"
                )));
            }
        }
        if file != 8 {
            return Err(EngineError::InvalidFen(format!(
                "rank {} has {file} squares instead of 8",
                rank + 1
            )));
        }
    }

    for color in [Color::White, Color::Black] {
        let kings = position
            .pieces()
            .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .count();
        if kings != 1 {
            return Err(EngineError::InvalidFen(format!(
                "{color} has {kings} kings (expected 1)"
            )));
        }
    }

    position.side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(EngineError::InvalidFen(format!(
                "invalid side to move: '{other}'"
            )));
        }
    };

    position.castling = CastlingRights::from_fen(fields[2]).ok_or_else(|| {
        EngineError::InvalidFen(format!("invalid castling field: '{}'", fields[2]))
    })?;

    if fields[3] != "-" {
        let square = Square::from_algebraic(fields[3]).map_err(|_| {
            EngineError::InvalidFen(format!("invalid en passant square: '{}'", fields[3]))
        })?;
        // The target is the passed-over square: rank 3 for white advances,
        // rank 6 for black advances.
        if square.rank() != 2 && square.rank() != 5 {
            return Err(EngineError::InvalidFen(format!(
                "en passant square {} is not on rank 3 or 6",
                fields[3]
            )));
        }
        position.en_passant = Some(square);
    }

    position.halfmove_clock = fields[4]
        .parse::<u16>()
        .map_err(|_| EngineError::InvalidFen(format!("invalid halfmove clock: '{}'", fields[4])))?;

    position.fullmove_number = fields[5].parse::<u16>().map_err(|_| {
        EngineError::InvalidFen(format!("invalid fullmove number: '{}'", fields[5]))
    })?;
    if position.fullmove_number == 0 {
        return Err(EngineError::InvalidFen(
            "fullmove number must be >= 1".to_string(),
        ));
    }

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STARTING_FEN;
    use crate::move_gen::legal_moves_from;

    #[test]
    fn test_starting_position_fen() {
        assert_eq!(to_fen(&Position::new()), STARTING_FEN);
    }

    #[test]
    fn test_round_trip_is_exact() {
        let fens = [
            STARTING_FEN,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 12 34",
            "8/P6k/8/8/8/8/8/K7 w - - 0 1",
        ];
        for fen in fens {
            let position = from_fen(fen).expect("valid fen");
            assert_eq!(to_fen(&position), fen, "serialize(parse(f)) == f");
            let reparsed = from_fen(&to_fen(&position)).expect("valid fen");
            assert_eq!(reparsed, position, "parse(serialize(p)) == p");
        }
    }

    #[test]
    fn test_round_trip_after_play() {
        let mut position = Position::new();
        for (from, to) in [("e2", "e4"), ("c7", "c5"), ("g1", "f3")] {
            let from = Square::from_algebraic(from).expect("valid square");
            let to = Square::from_algebraic(to).expect("valid square");
            let mv = legal_moves_from(&position, from)
                .into_iter()
                .find(|m| m.to == to)
                .expect("move is legal");
            position.apply_unchecked(&mv);
        }
        let reparsed = from_fen(&to_fen(&position)).expect("valid fen");
        assert_eq!(reparsed, position);
    }

    #[test]
    fn test_rejects_malformed_fen() {
        let cases = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQQBNR w KQkq - 0 1",
        ];
        for fen in cases {
            assert!(
                matches!(from_fen(fen), Err(EngineError::InvalidFen(_))),
                "should reject: {fen}"
            );
        }
    }
}
