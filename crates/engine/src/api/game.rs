//! Game lifecycle management.

use crate::position::Position;
use crate::types::{Game, GameRecord};

/// Create a new game in the standard starting position with an empty
/// record.
pub fn new_game() -> Game {
    Game {
        position: Position::new(),
        record: GameRecord::default(),
        last_move: None,
    }
}

/// Wrap an arbitrary position (e.g. parsed from FEN) in a fresh game.
pub fn load_game(position: Position) -> Game {
    Game {
        position,
        record: GameRecord::default(),
        last_move: None,
    }
}

/// Reset the game to the starting position and empty the record.
pub fn reset_game(game: &mut Game) {
    game.position = Position::new();
    game.record.clear();
    game.last_move = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::apply_move;
    use crate::types::Square;

    fn sq(label: &str) -> Square {
        Square::from_algebraic(label).expect("valid square label")
    }

    #[test]
    fn test_reset_restores_starting_state() {
        let mut game = new_game();
        apply_move(&mut game, sq("e2"), sq("e4"), None).expect("e4 is legal");
        assert_eq!(game.record.moves.len(), 1);
        assert!(game.last_move.is_some());

        reset_game(&mut game);
        assert_eq!(game, new_game(), "reset is indistinguishable from new");
    }
}
