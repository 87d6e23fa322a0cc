//! Move rejection reasons.

use super::outcome::Outcome;
use super::position::Position;

/// Why a move was rejected.
///
/// A rejected move never changes the game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0..=8.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has ended; only a reset is accepted.
    #[display("Game is already over: {}", _0)]
    GameAlreadyOver(Outcome),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
