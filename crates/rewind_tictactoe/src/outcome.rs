//! Outcome evaluation for tic-tac-toe boards.
//!
//! Evaluation is a pure function of a board snapshot. It detects wins
//! only; whether a game without a winner counts as drawn is decided by
//! the game state, which knows how long the history is.

use super::position::Position;
use super::types::{Board, Cell, Mark};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The eight winning lines, checked in this order.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Outcome {
    /// No winner yet.
    InProgress,
    /// A mark completed a line.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line, used for highlighting.
        line: [Position; 3],
    },
    /// The game ended without a winner.
    Draw,
}

impl Outcome {
    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates a board.
///
/// Returns `Win` for the first completed line in [`WINNING_LINES`]
/// order, `InProgress` otherwise. A full board without a line is still
/// `InProgress` here.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.get(a).mark()
            && board.get(b) == Cell::Marked(mark)
            && board.get(c) == Cell::Marked(mark)
        {
            debug!(%mark, ?line, "Winning line found");
            return Outcome::Win { mark, line };
        }
    }

    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_of(marks: [Option<Mark>; 9]) -> Board {
        Board::from_cells(marks.map(|m| m.map_or(Cell::Empty, Cell::Marked)))
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_top_row_win() {
        let x = Some(Mark::X);
        let o = Some(Mark::O);
        let board = board_of([x, x, x, None, o, o, None, None, None]);

        assert_eq!(
            evaluate(&board),
            Outcome::Win {
                mark: Mark::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let o = Some(Mark::O);
        let board = board_of([None, None, o, None, o, None, o, None, None]);

        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Mark::O));
        assert_eq!(
            outcome.winning_line(),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Row 0 and column 0 both complete; rows are checked first.
        let x = Some(Mark::X);
        let board = board_of([x, x, x, x, None, None, x, None, None]);

        assert_eq!(
            evaluate(&board).winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_full_board_without_line_is_not_draw() {
        let x = Some(Mark::X);
        let o = Some(Mark::O);
        // X O X / X O O / O X X
        let board = board_of([x, o, x, x, o, o, o, x, x]);

        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let x = Some(Mark::X);
        let board = board_of([None, x, None, None, x, None, None, x, None]);
        assert_eq!(evaluate(&board), evaluate(&board));
        assert!(evaluate(&board).is_decided());
    }
}
