//! Empty root invariant: history starts from an empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: `history[0]` exists, is empty and carries no move.
pub struct EmptyRootInvariant;

impl Invariant<GameState> for EmptyRootInvariant {
    fn holds(game: &GameState) -> bool {
        match game.history().first() {
            Some(root) => root.board() == &Board::new() && root.last_move().is_none(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts from an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(EmptyRootInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_root_survives_branching() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();
        game.jump_to(0).unwrap();
        game.apply_move(Position::TopLeft).unwrap();
        assert!(EmptyRootInvariant::holds(&game));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut game = GameState::new();
        game.history[0].board = Board::new().with_mark(Position::Center, Mark::X);
        assert!(!EmptyRootInvariant::holds(&game));
    }

    #[test]
    fn test_missing_root_violates() {
        let mut game = GameState::new();
        game.history.clear();
        assert!(!EmptyRootInvariant::holds(&game));
    }
}
