//! Mark balance invariant: X never trails O and leads by at most one.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Mark::X);
        let o = state.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X moves first and marks alternate (X count equals O count or exceeds it by one)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Square};

    fn state_with(squares: [Square; 9]) -> GameState {
        let mut state = GameState::new();
        state.board = Board::from(squares);
        state
    }

    #[test]
    fn test_empty_board_holds() {
        assert!(MarkBalanceInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_x_one_ahead_holds() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Mark::X);
        assert!(MarkBalanceInvariant::holds(&state_with(squares)));
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Mark::O);
        assert!(!MarkBalanceInvariant::holds(&state_with(squares)));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Mark::X);
        squares[1] = Square::Occupied(Mark::X);
        assert!(!MarkBalanceInvariant::holds(&state_with(squares)));
    }
}
