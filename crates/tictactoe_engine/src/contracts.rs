//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. The action
//! here is a raw board index, exactly what the presentation layer sends.

use super::error::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::{GameState, Position, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameAlreadyOver`] on a terminal state.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_terminal() {
            Err(MoveError::GameAlreadyOver(state.outcome()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names a cell.
pub struct IndexInBounds;

impl IndexInBounds {
    /// Converts the index, failing with [`MoveError::InvalidIndex`].
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::InvalidIndex(index))
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] when the cell holds a mark.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition, checked in order: game not over, index in
/// bounds, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the target position.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &GameState) -> Result<Position, MoveError> {
        GameNotOver::check(state)?;
        let pos = IndexInBounds::check(index)?;
        CellIsEmpty::check(pos, state)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a move at a board index.
///
/// Postconditions:
/// - Exactly one previously empty cell gained a mark, no other cell changed
/// - All [`TicTacToeInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, state).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !one_cell_filled(before, after) {
            warn!("Board changed outside the target cell");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a move fills exactly one empty cell".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

fn one_cell_filled(before: &GameState, after: &GameState) -> bool {
    let mut changed = 0;
    for (old, new) in before
        .board()
        .squares()
        .iter()
        .zip(after.board().squares())
    {
        if old == new {
            continue;
        }
        if *old != Square::Empty {
            return false;
        }
        changed += 1;
    }
    changed == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Mark, Outcome};

    #[test]
    fn test_precondition_empty_square() {
        assert!(MoveContract::pre(&GameState::new(), &4).is_ok());
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        assert_eq!(
            MoveContract::pre(&GameState::new(), &9),
            Err(MoveError::InvalidIndex(9))
        );
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut engine = GameEngine::new();
        let state = engine.apply_move(4).unwrap();
        assert_eq!(
            MoveContract::pre(&state, &4),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_game_over_checked_before_index() {
        let mut state = GameState::new();
        state.outcome = Outcome::Win(Mark::X);
        assert_eq!(
            MoveContract::pre(&state, &42),
            Err(MoveError::GameAlreadyOver(Outcome::Win(Mark::X)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let mut engine = GameEngine::new();
        let after = engine.apply_move(0).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut engine = GameEngine::new();
        let before = engine.apply_move(0).unwrap();
        let mut after = before;
        after.board.set(Position::TopLeft, Square::Occupied(Mark::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_skipped_turn() {
        let before = GameState::new();
        let mut after = before;
        after.board.set(Position::Center, Square::Occupied(Mark::X));
        // Turn not flipped.
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
