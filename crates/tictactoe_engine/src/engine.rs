//! The game-state machine.

use super::contracts::LegalMove;
use super::error::MoveError;
use super::rules::{self, WinLine};
use super::{GameState, Outcome, Position, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the [`GameState`] and is the only thing that mutates it, through
/// [`apply_move`](Self::apply_move) and [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the current mark at `index` (0-8, row-major).
    ///
    /// On success the outcome is re-evaluated on the new board and the turn
    /// passes to the other mark unless the game just ended.
    ///
    /// # Errors
    ///
    /// Rejects, leaving the state untouched, when the game is over, the
    /// index is off the board or the cell is occupied (checked in that
    /// order).
    #[instrument(skip(self), fields(mark = %self.state.current_mark))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameState, MoveError> {
        let pos = LegalMove::check(index, &self.state).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.state;

        let mark = self.state.current_mark;
        self.state.board.set(pos, Square::Occupied(mark));
        self.state.outcome = rules::evaluate_outcome(&self.state.board);
        if !self.state.outcome.is_terminal() {
            self.state.current_mark = mark.opponent();
        }

        #[cfg(debug_assertions)]
        {
            use super::contracts::{Contract, MoveContract};
            if let Err(e) = MoveContract::post(&before, &self.state) {
                tracing::warn!(error = %e, "Postcondition failed, restoring previous state");
                self.state = before;
                return Err(e);
            }
        }

        match self.state.outcome {
            Outcome::InProgress => debug!(position = %pos, "Move applied"),
            Outcome::Win(winner) => info!(position = %pos, %winner, "Game won"),
            Outcome::Draw => info!(position = %pos, "Game drawn"),
        }

        Ok(self.state)
    }

    /// Places the current mark at a position.
    ///
    /// # Errors
    ///
    /// Same as [`apply_move`](Self::apply_move), minus the index check.
    pub fn play(&mut self, pos: Position) -> Result<GameState, MoveError> {
        self.apply_move(pos.to_index())
    }

    /// Discards the current game and returns the initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        self.state = GameState::new();
        info!("Game reset");
        self.state
    }

    /// Empty positions, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.state.board)
        }
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        rules::winning_line(&self.state.board)
    }
}
