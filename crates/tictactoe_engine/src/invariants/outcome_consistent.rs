//! Outcome consistency invariant: the stored outcome matches the board.

use super::super::GameState;
use super::super::rules::evaluate_outcome;
use super::Invariant;

/// Invariant: `outcome == evaluate_outcome(board)`.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.outcome() == evaluate_outcome(state.board())
    }

    fn description() -> &'static str {
        "Outcome matches the board (win iff a line is filled by one mark, draw iff full otherwise)"
    }
}
