//! Terminal front end for the tic-tac-toe engine.
//!
//! The [`App`] reads [`GameState`](tictactoe_engine::GameState) and sends
//! the two game intents (play a cell, start a new game). Theme, cursor and
//! rendering stay on this side of the boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod theme;
mod ui;

pub mod terminal;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, Direction, map_key, move_cursor};
pub use logging::init_logging;
pub use theme::{Palette, Theme};
pub use ui::draw;
