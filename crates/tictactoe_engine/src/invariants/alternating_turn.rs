//! Alternating turn invariant: X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: the mark to move matches the marks on the board.
///
/// While in progress it is X when both marks have been played equally often
/// and O otherwise. Once terminal it stays on the mark that moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);

        let expected = if state.is_terminal() {
            if x + o == 0 {
                return false;
            }
            if x > o { Mark::X } else { Mark::O }
        } else if x == o {
            Mark::X
        } else {
            Mark::O
        };

        state.current_mark() == expected
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
