//! Tic-tac-toe with full move history and time travel.
//!
//! The crate is the authoritative game model for a presentation layer:
//! it accepts commands (`apply_move`, `jump_to`, `toggle_direction`) and
//! hands back a [`Snapshot`] to render.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Mark, Position};
//!
//! let mut game = GameState::new();
//! game.apply_move(Position::Center)?;
//! game.apply_move(Position::TopLeft)?;
//!
//! // Travel back to the first move and branch.
//! game.jump_to(1)?;
//! assert_eq!(game.next_mark(), Mark::O);
//! game.apply_move(Position::BottomRight)?;
//! assert_eq!(game.history().len(), 3);
//!
//! println!("{}", game.snapshot().status());
//! # Ok::<(), rewind_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod game;
mod history;
mod outcome;
mod position;
mod snapshot;
mod types;

pub mod invariants;

pub use config::{MoveListOrder, SessionConfig};
pub use error::{ConfigError, MoveError};
pub use game::{DRAW_HISTORY_LEN, GameState};
pub use history::{HistoryDirection, HistoryEntry, Move, MoveListItem};
pub use outcome::{Outcome, WINNING_LINES, evaluate};
pub use position::Position;
pub use snapshot::{Snapshot, Status};
pub use types::{Board, Cell, Mark};
