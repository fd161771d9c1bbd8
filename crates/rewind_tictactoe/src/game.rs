//! Game state with time travel.
//!
//! [`GameState`] owns the full history of boards. Moves append a new
//! board, discarding any future steps if the player had travelled back;
//! jumps only move the pointer.

use super::config::{MoveListOrder, SessionConfig};
use super::error::MoveError;
use super::history::{HistoryDirection, HistoryEntry, Move, MoveListItem};
use super::outcome::{Outcome, evaluate};
use super::position::Position;
use super::snapshot::{Snapshot, Status};
use super::types::{Board, Mark};
use tracing::{debug, info, instrument, warn};

/// History length above which a game without a winner reads as drawn.
///
/// Counts every entry, including the initial empty board, so the draw
/// shows after the ninth move.
pub const DRAW_HISTORY_LEN: usize = 9;

/// A tic-tac-toe session with full move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    pub(crate) direction: HistoryDirection,
    pub(crate) initial_direction: HistoryDirection,
    pub(crate) move_list_order: MoveListOrder,
}

impl GameState {
    /// Creates a new game with default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(&SessionConfig::default())
    }

    /// Creates a new game from a session configuration.
    #[instrument]
    pub fn with_config(config: &SessionConfig) -> Self {
        info!("Starting new game session");
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
            direction: *config.initial_direction(),
            initial_direction: *config.initial_direction(),
            move_list_order: *config.move_list_order(),
        }
    }

    /// Full history, including steps after the current one.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the step being shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        self.history[self.current_step].board()
    }

    /// Mark that plays next from the current step.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Current move list direction flag.
    pub fn direction(&self) -> HistoryDirection {
        self.direction
    }

    /// Returns true when the current step is the last one in history.
    pub fn is_at_latest(&self) -> bool {
        self.current_step + 1 == self.history.len()
    }

    /// Places the next mark at `position`.
    ///
    /// Playing from an earlier step discards every later step before the
    /// new one is appended. The direction flag returns to the session's
    /// initial direction.
    ///
    /// # Errors
    ///
    /// - [`MoveError::CellOccupied`] if the cell is not empty.
    /// - [`MoveError::GameAlreadyDecided`] if the current board has a winner.
    #[instrument(skip(self), fields(step = self.current_step, mark = %self.next_mark()))]
    pub fn apply_move(&mut self, position: Position) -> Result<(), MoveError> {
        let current = self.board();

        if !current.is_empty(position) {
            warn!(%position, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied(position));
        }

        if evaluate(current).is_decided() {
            warn!(%position, "Rejected move on decided game");
            return Err(MoveError::GameAlreadyDecided);
        }

        let entry = HistoryEntry::after(current, Move::new(self.next_mark(), position));

        let discarded = self.history.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(discarded, "Overwriting future history");
        }
        self.history.truncate(self.current_step + 1);
        self.history.push(entry);
        self.current_step = self.history.len() - 1;
        self.direction = self.initial_direction;

        debug!(step = self.current_step, board = %self.board(), "Move applied");

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(())
    }

    /// Places the next mark at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidPosition`] for indices above 8, otherwise as
    /// [`GameState::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move_at(&mut self, index: usize) -> Result<(), MoveError> {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Rejected move outside the board");
            MoveError::InvalidPosition(index)
        })?;
        self.apply_move(position)
    }

    /// Shows the board at `step` without changing history.
    ///
    /// # Errors
    ///
    /// [`MoveError::StepOutOfRange`] unless `step < history.len()`.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Rejected jump outside history");
            return Err(MoveError::StepOutOfRange { step, len });
        }

        self.current_step = step;
        debug!(step, next = %self.next_mark(), "Jumped");
        Ok(())
    }

    /// Flips the move list direction flag.
    #[instrument(skip(self))]
    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
        debug!(direction = ?self.direction, "Direction toggled");
    }

    /// Outcome used for the status line.
    ///
    /// A win on the current board wins; otherwise a history longer than
    /// [`DRAW_HISTORY_LEN`] reads as a draw regardless of which step is
    /// shown.
    #[instrument(skip(self))]
    pub fn settled_outcome(&self) -> Outcome {
        match evaluate(self.board()) {
            Outcome::InProgress if self.history.len() > DRAW_HISTORY_LEN => Outcome::Draw,
            outcome => outcome,
        }
    }

    /// Status line for the current step.
    pub fn status(&self) -> Status {
        Status::new(self.settled_outcome(), self.next_mark())
    }

    /// Move list rows in display order.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let mut moves: Vec<MoveListItem> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListItem::new(step, entry, self.current_step))
            .collect();

        if self.move_list_order == MoveListOrder::FollowDirection
            && self.direction == HistoryDirection::Descending
        {
            moves.reverse();
        }
        moves
    }

    /// Read-only view of the current step.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            *self.board(),
            evaluate(self.board()),
            self.status(),
            self.move_list(),
            self.direction,
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
