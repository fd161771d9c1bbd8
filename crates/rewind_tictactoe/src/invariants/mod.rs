//! First-class history invariants.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`]. They are checked after each move in debug builds and
//! can be tested independently.

use super::GameState;
use tracing::{instrument, warn};

pub mod alternating_mark;
pub mod empty_root;
pub mod single_cell_delta;
pub mod step_in_bounds;

pub use alternating_mark::AlternatingMarkInvariant;
pub use empty_root::EmptyRootInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every history invariant as a composable set.
pub type HistoryInvariants = (
    EmptyRootInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarkInvariant,
    StepInBoundsInvariant,
);

/// Asserts that all history invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &GameState) {
    let result = HistoryInvariants::check_all(game);
    if let Err(violations) = &result {
        for violation in violations {
            warn!(description = %violation.description, "Invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "History invariants violated: {:?}", result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::new();
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = GameState::new();
        for idx in [4, 0, 8, 2] {
            game.apply_move_at(idx).unwrap();
        }
        game.jump_to(1).unwrap();
        game.apply_move(Position::BottomLeft).unwrap();

        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = GameState::new();
        game.apply_move(Position::Center).unwrap();

        // Mark the root board and point past the end.
        game.history[0].board = game.history[0].board.with_mark(Position::TopLeft, Mark::O);
        game.current_step = 5;

        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        assert!(violations.len() >= 2);
        assert_eq!(game.history[0].board.get(Position::TopLeft), Cell::Marked(Mark::O));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameState::new();
        type TwoInvariants = (EmptyRootInvariant, StepInBoundsInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
