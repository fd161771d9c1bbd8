//! Alternating mark invariant: moves alternate X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the move recorded at step `n` was made by X when `n` is
/// odd and by O when `n` is even.
pub struct AlternatingMarkInvariant;

impl Invariant<GameState> for AlternatingMarkInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| entry.last_move_mark() == Some(Mark::for_step(step - 1)))
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, O, ..."
    }
}
