//! Single cell delta invariant: each step fills exactly one empty cell.

use super::super::{Cell, GameState};
use super::Invariant;

/// Invariant: `history[n]` differs from `history[n - 1]` in exactly one
/// cell, which went from empty to the mark recorded in the entry, at the
/// recorded position.
///
/// Since cells only ever fill, earlier marks are never overwritten.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(mov) = *pair[1].last_move() else {
                return false;
            };

            let changed: Vec<usize> = (0..9)
                .filter(|&i| before.cells()[i] != after.cells()[i])
                .collect();

            changed == [mov.position.to_index()]
                && before.get(mov.position) == Cell::Empty
                && after.get(mov.position) == Cell::Marked(mov.mark)
        })
    }

    fn description() -> &'static str {
        "Each step fills exactly one empty cell"
    }
}
