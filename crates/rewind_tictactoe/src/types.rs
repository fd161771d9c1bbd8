//! Core domain types for tic-tac-toe.

use super::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Mark to play at the given history step.
    ///
    /// Even steps belong to X, odd steps to O.
    #[instrument]
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: placing a mark produces a new board and leaves
/// the original untouched, so snapshots stored in history never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from raw cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Marked(mark);
        Self { cells }
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Cell::Empty => write!(f, "{}", idx + 1)?,
                    Cell::Marked(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_for_step_alternates() {
        assert_eq!(Mark::for_step(0), Mark::X);
        assert_eq!(Mark::for_step(1), Mark::O);
        assert_eq!(Mark::for_step(8), Mark::X);
    }

    #[test]
    fn test_opponent_swaps_marks() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent().opponent(), Mark::O);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Mark::X);

        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
