//! Integration tests for the ChessIQ position engine.
//!
//! Exercises the engine through its public API the way the UI layer
//! drives it: legal-move queries per square, move submission, terminal
//! detection and the automated-opponent request.

use chessiq_engine::api::{
    apply_move, is_checkmate, is_in_check, legal_moves, load_game, new_game, request_engine_move,
};
use chessiq_engine::evaluation::evaluate_material;
use chessiq_engine::fen::from_fen;
use chessiq_engine::move_gen::all_legal_moves;
use chessiq_engine::types::{CastlingRights, Color, Game, Piece, PieceKind, Square};
use chessiq_engine::Position;

// Helper to run async tests in sync context
fn block_on<F: std::future::Future>(f: F) -> F::Output {
    futures_lite::future::block_on(f)
}

// Surface engine debug spans in test output when RUST_LOG asks for them
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn sq(label: &str) -> Square {
    Square::from_algebraic(label).expect("valid square label")
}

fn play(game: &mut Game, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        apply_move(game, sq(from), sq(to), None)
            .unwrap_or_else(|e| panic!("{from}{to} should be legal: {e}"));
    }
}

/// Mirror a position: colors swapped, board reflected across the middle.
fn mirrored(position: &Position) -> Position {
    let mut board = [None; 64];
    for (square, piece) in position.pieces() {
        let flipped = Square::from_file_rank(square.file(), 7 - square.rank());
        board[flipped.index()] = Some(Piece::new(piece.kind, piece.color.opposite()));
    }
    Position {
        board,
        side_to_move: position.side_to_move.opposite(),
        castling: CastlingRights {
            white_kingside: position.castling.black_kingside,
            white_queenside: position.castling.black_queenside,
            black_kingside: position.castling.white_kingside,
            black_queenside: position.castling.white_queenside,
        },
        en_passant: None,
        halfmove_clock: position.halfmove_clock,
        fullmove_number: position.fullmove_number,
    }
}

#[test]
fn test_twenty_opening_moves_each_with_a_reply() {
    //! From the starting position the side to move has exactly 20 legal
    //! moves, and after any one of them the opponent has at least one.

    let game = new_game();
    let opening_moves = all_legal_moves(&game.position);
    assert_eq!(opening_moves.len(), 20);

    for mv in opening_moves {
        let mut scratch = game.clone();
        apply_move(&mut scratch, mv.from, mv.to, None)
            .unwrap_or_else(|e| panic!("{mv} should be legal: {e}"));
        assert!(
            !all_legal_moves(&scratch.position).is_empty(),
            "black must have a reply after {mv}"
        );
    }
}

#[test]
fn test_fools_mate_leaves_white_without_moves() {
    //! After 1.f3 e5 2.g4 Qh4# white is to move, in check, and no piece
    //! of white's has a single legal destination.

    let mut game = new_game();
    play(
        &mut game,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );

    assert!(is_in_check(&game));
    assert!(is_checkmate(&game));
    assert_eq!(game.record.moves.last().map(String::as_str), Some("Qh4#"));

    for index in 0..64 {
        let square = Square::from_index(index).expect("index in range");
        assert!(
            legal_moves(&game, square).is_empty(),
            "no legal moves from {square} in a checkmate position"
        );
    }
}

#[test]
fn test_no_legal_move_ever_leaves_the_mover_in_check() {
    //! Play a short tactical sequence and verify, at every step, that
    //! every offered legal move survives its own simulation.

    let mut game = new_game();
    let line = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "b5"),
        ("g8", "f6"),
        ("e1", "g1"),
    ];
    for (from, to) in line {
        let mover = game.position.side_to_move;
        for mv in all_legal_moves(&game.position) {
            let mut probe = load_game(game.position.clone());
            apply_move(&mut probe, mv.from, mv.to, None)
                .unwrap_or_else(|e| panic!("{mv} was offered as legal: {e}"));
            assert!(
                !chessiq_engine::move_gen::is_in_check(&probe.position, mover),
                "{mv} leaves the mover in check"
            );
        }
        apply_move(&mut game, sq(from), sq(to), None).expect("line is legal");
    }
}

#[test]
fn test_rejection_has_no_side_effects() {
    //! A rejected submission leaves position and record bit-identical.

    let mut game = new_game();
    play(&mut game, &[("e2", "e4"), ("e7", "e5")]);
    let before = game.clone();

    assert!(apply_move(&mut game, sq("e4"), sq("e6"), None).is_err());
    assert!(apply_move(&mut game, sq("d8"), sq("h4"), None).is_err());
    assert!(apply_move(&mut game, sq("h3"), sq("h4"), None).is_err());

    assert_eq!(game, before);
}

#[test]
fn test_en_passant_captures_the_passed_pawn() {
    //! After 1.e4 a6 2.e5 d5 the e5 pawn may capture on d6, removing the
    //! pawn from d5 - not from d6.

    let mut game = new_game();
    play(
        &mut game,
        &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")],
    );

    let targets: Vec<Square> = legal_moves(&game, sq("e5")).iter().map(|m| m.to).collect();
    assert!(targets.contains(&sq("d6")));

    let result = apply_move(&mut game, sq("e5"), sq("d6"), None).expect("legal");
    assert!(result.mv.is_en_passant());
    assert_eq!(game.position.piece_at(sq("d5")), None);
    assert_eq!(
        game.position.piece_at(sq("d6")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert_eq!(
        game.record.captures,
        vec![Piece::new(PieceKind::Pawn, Color::Black)]
    );
}

#[test]
fn test_promotion_defaults_to_queen() {
    let position = from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").expect("valid fen");
    let mut game = chessiq_engine::api::load_game(position);
    apply_move(&mut game, sq("a7"), sq("a8"), None).expect("legal");
    assert_eq!(
        game.position.piece_at(sq("a8")),
        Some(Piece::new(PieceKind::Queen, Color::White))
    );
}

#[test]
fn test_engine_move_is_deterministic_and_legal() {
    //! Two selections from the same position return the identical move,
    //! and that move is a member of the legal set.

    init_tracing();
    let mut game = new_game();
    play(&mut game, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);

    let first = block_on(request_engine_move(&game.position)).expect("black has moves");
    let second = block_on(request_engine_move(&game.position)).expect("black has moves");
    assert_eq!(first, second);
    assert!(all_legal_moves(&game.position).contains(&first));
}

#[test]
fn test_selection_never_touches_the_authoritative_position() {
    let mut game = new_game();
    play(&mut game, &[("d2", "d4"), ("d7", "d5")]);
    let before = game.position.clone();

    let _ = block_on(request_engine_move(&game.position));
    assert_eq!(game.position, before, "selector works on clones only");
}

#[test]
fn test_evaluation_is_zero_sum_under_mirroring() {
    //! evaluate(mirror(p)) == -evaluate(p) for asymmetric material.

    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1",
        "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1",
        "4k3/8/8/3N4/8/2B5/8/4K3 w - - 0 1",
    ];
    for fen in fens {
        let position = from_fen(fen).expect("valid fen");
        assert_eq!(
            evaluate_material(&mirrored(&position)),
            -evaluate_material(&position),
            "mirror symmetry failed for {fen}"
        );
    }
}

#[test]
fn test_game_record_serializes_for_collaborators() {
    //! The record ships to the UI as JSON; round-trip must preserve it.

    let mut game = new_game();
    play(&mut game, &[("e2", "e4"), ("d7", "d5"), ("e4", "d5")]);

    let json = serde_json::to_string(&game.record).expect("serializes");
    let back: chessiq_engine::types::GameRecord =
        serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, game.record);
    assert_eq!(back.moves, vec!["e4", "d5", "exd5"]);
}
