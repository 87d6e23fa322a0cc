//! Engine shared between concurrent callers.

use super::engine::GameEngine;
use super::error::MoveError;
use super::state::GameState;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// A [`GameEngine`] behind a mutex.
///
/// The whole game state is one resource: every operation holds the lock
/// from validation to the returned snapshot. Clones share the same game.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Creates a shared engine holding the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        // The engine never panics mid-update, so a poisoned lock still
        // guards a consistent state.
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Engine lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Applies a move under the lock. See [`GameEngine::apply_move`].
    ///
    /// # Errors
    ///
    /// Returns the engine's rejection; the state is unchanged.
    pub fn apply_move(&self, index: usize) -> Result<GameState, MoveError> {
        self.lock().apply_move(index)
    }

    /// Resets under the lock.
    pub fn reset(&self) -> GameState {
        self.lock().reset()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> GameState {
        *self.lock().state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::{InvariantSet, TicTacToeInvariants};
    use crate::Mark;

    #[test]
    fn test_clones_share_state() {
        let engine = SharedEngine::new();
        let other = engine.clone();
        engine.apply_move(4).unwrap();
        assert_eq!(other.snapshot().current_mark(), Mark::O);
    }

    #[test]
    fn test_concurrent_moves_keep_invariants() {
        let engine = SharedEngine::new();
        let accepted: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|worker| {
                    let engine = engine.clone();
                    scope.spawn(move || {
                        (0..9)
                            .map(|step| (worker + step) % 9)
                            .filter(|index| engine.apply_move(*index).is_ok())
                            .count()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).sum()
        });

        let state = engine.snapshot();
        assert!(state.is_terminal());
        assert_eq!(accepted, state.board().filled());
        assert!(TicTacToeInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_reset_from_any_clone() {
        let engine = SharedEngine::new();
        engine.apply_move(0).unwrap();
        assert_eq!(engine.clone().reset(), GameState::new());
        assert_eq!(engine.snapshot(), GameState::new());
    }
}
