//! Move history entries and the move list read model.

use super::position::Position;
use super::types::{Board, Mark};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ column: {}, row: {}",
            self.mark,
            self.position.column(),
            self.position.row()
        )
    }
}

/// One step of game history: the board after a move, and the move itself.
///
/// The first entry of every history is the empty board with no move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct HistoryEntry {
    /// Board after this step.
    pub(crate) board: Board,
    /// Move that produced this step, `None` for the initial entry.
    pub(crate) last_move: Option<Move>,
}

impl HistoryEntry {
    /// The initial entry: an empty board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Entry produced by playing `mov` on `previous`.
    #[instrument(skip(previous))]
    pub fn after(previous: &Board, mov: Move) -> Self {
        Self {
            board: previous.with_mark(mov.position, mov.mark),
            last_move: Some(mov),
        }
    }

    /// Position of the move that produced this entry.
    pub fn last_move_position(&self) -> Option<Position> {
        self.last_move.map(|m| m.position)
    }

    /// Mark placed by the move that produced this entry.
    pub fn last_move_mark(&self) -> Option<Mark> {
        self.last_move.map(|m| m.mark)
    }
}

/// Display order of the move list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HistoryDirection {
    /// Oldest step first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl HistoryDirection {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            HistoryDirection::Ascending => HistoryDirection::Descending,
            HistoryDirection::Descending => HistoryDirection::Ascending,
        }
    }
}

/// One row of the move list shown to players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct MoveListItem {
    /// History step this row jumps to.
    step: usize,
    /// Move made at this step.
    last_move: Option<Move>,
    /// Whether this is the step currently shown.
    is_current: bool,
}

impl MoveListItem {
    /// Builds the row for `entry` at `step`.
    pub fn new(step: usize, entry: &HistoryEntry, current_step: usize) -> Self {
        Self {
            step,
            last_move: entry.last_move,
            is_current: step == current_step,
        }
    }

    /// Button text for the row.
    pub fn description(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }

    /// Caption for the move, e.g. `X @ column: 1, row: 1`.
    pub fn caption(&self) -> Option<String> {
        self.last_move.map(|m| m.to_string())
    }
}
