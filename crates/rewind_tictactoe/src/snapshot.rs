//! Read model handed to the presentation layer.

use super::history::{HistoryDirection, MoveListItem};
use super::outcome::Outcome;
use super::position::Position;
use super::types::{Board, Mark};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status line for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct Status {
    /// Outcome after the draw rule is applied.
    outcome: Outcome,
    /// Mark that plays next from the current step.
    next_mark: Mark,
}

impl Status {
    /// Creates a status line.
    pub fn new(outcome: Outcome, next_mark: Mark) -> Self {
        Self { outcome, next_mark }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            Outcome::Win { mark, .. } => write!(f, "Winner: {}", mark),
            Outcome::Draw => write!(f, "It's a draw!"),
            Outcome::InProgress => write!(f, "Next player: {}", self.next_mark),
        }
    }
}

/// Everything needed to render one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct Snapshot {
    /// Board at the current step.
    board: Board,
    /// Evaluation of that board.
    outcome: Outcome,
    /// Status line.
    status: Status,
    /// Move list rows.
    moves: Vec<MoveListItem>,
    /// Direction flag.
    direction: HistoryDirection,
}

impl Snapshot {
    /// Assembles a snapshot.
    pub fn new(
        board: Board,
        outcome: Outcome,
        status: Status,
        moves: Vec<MoveListItem>,
        direction: HistoryDirection,
    ) -> Self {
        Self {
            board,
            outcome,
            status,
            moves,
            direction,
        }
    }

    /// Cells to highlight, empty unless the board has a winning line.
    pub fn highlights(&self) -> Vec<Position> {
        self.outcome
            .winning_line()
            .map(|line| line.to_vec())
            .unwrap_or_default()
    }
}
