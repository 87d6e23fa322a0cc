//! Complete game state.

use super::outcome::Outcome;
use super::position::Position;
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};

/// Board, turn and outcome.
///
/// Only [`GameEngine`](crate::GameEngine) mutates a state; everything else
/// reads copies of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_mark: Mark,
    pub(crate) outcome: Outcome,
}

impl GameState {
    /// The initial state: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    ///
    /// Once the game is over this stays on the mark that made the last move.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the cell at a position.
    pub fn square(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Message for the player: whose turn it is, or how the game ended.
    pub fn status_message(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("Player {}'s turn", self.current_mark),
            outcome => outcome.to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.status_message(), "Player X's turn");
    }

    #[test]
    fn test_status_message_when_terminal() {
        let mut state = GameState::new();
        state.outcome = Outcome::Win(Mark::O);
        assert_eq!(state.status_message(), "Player O wins!");
        state.outcome = Outcome::Draw;
        assert_eq!(state.status_message(), "It's a draw!");
    }
}
