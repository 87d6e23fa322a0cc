//! Game rules for tic-tac-toe.
//!
//! Pure functions of the board. The engine calls [`evaluate_outcome`]
//! synchronously after every accepted move.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, check_winner, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board.
///
/// The first line in [`WIN_LINES`] order that is filled by one mark wins.
/// Otherwise a full board is a draw and anything else is in progress.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Win(winner);
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
