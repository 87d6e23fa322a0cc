//! Game outcome classification.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Classification of a game state.
///
/// Anything other than [`Outcome::InProgress`] is terminal: the board and
/// turn are frozen until the engine is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and empty cells remain.
    #[default]
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "Game in progress"),
            Outcome::Win(mark) => write!(f, "Player {} wins!", mark),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
