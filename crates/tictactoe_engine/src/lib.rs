//! Tic-tac-toe game-state machine.
//!
//! [`GameEngine`] owns a [`GameState`] and enforces the rules: X moves
//! first, marks alternate, occupied cells and finished games reject moves,
//! and the outcome is re-evaluated synchronously after every accepted move.
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, MoveError, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.apply_move(index)?;
//! }
//! let state = engine.apply_move(2)?;
//! assert_eq!(state.outcome(), Outcome::Win(Mark::X));
//! assert_eq!(state.status_message(), "Player X wins!");
//!
//! assert!(matches!(engine.apply_move(5), Err(MoveError::GameAlreadyOver(_))));
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod outcome;
mod position;
mod shared;
mod state;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use engine::GameEngine;
pub use error::MoveError;
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, evaluate_outcome};
pub use shared::SharedEngine;
pub use state::GameState;
pub use types::{Board, Mark, Square};
