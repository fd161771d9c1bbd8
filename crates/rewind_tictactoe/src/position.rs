//! Board positions for tic-tac-toe moves.

use super::types::Board;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row on the board, 1-indexed from the top.
    pub fn row(self) -> usize {
        self.to_index() / 3 + 1
    }

    /// Column on the board, 1-indexed from the left.
    pub fn column(self) -> usize {
        self.to_index() % 3 + 1
    }

    /// Empty positions on `board`, in index order.
    #[instrument(skip(board))]
    pub fn vacant(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip_matches_declaration_order() {
        for (idx, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), idx);
            assert_eq!(Position::from_index(idx), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_and_column_are_one_indexed() {
        assert_eq!((Position::TopLeft.column(), Position::TopLeft.row()), (1, 1));
        assert_eq!((Position::MiddleRight.column(), Position::MiddleRight.row()), (3, 2));
        assert_eq!((Position::BottomCenter.column(), Position::BottomCenter.row()), (2, 3));
    }

    #[test]
    fn test_vacant_skips_marked_cells() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);

        let vacant = Position::vacant(&board);
        assert_eq!(vacant.len(), 7);
        assert!(!vacant.contains(&Position::TopLeft));
        assert!(!vacant.contains(&Position::Center));
        assert_eq!(vacant.first(), Some(&Position::TopCenter));
    }
}
