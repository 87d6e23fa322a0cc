//! Application state and input handling.

use crate::input::{self, Action};
use crate::theme::Theme;
use crossterm::event::KeyEvent;
use tictactoe_engine::{GameEngine, GameState, Position, Square};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds the engine plus everything that is only about presentation: the
/// theme, the keyboard cursor and whether the user asked to leave. Game
/// state changes only through [`GameEngine::apply_move`] and
/// [`GameEngine::reset`].
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    theme: Theme,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an app with a fresh game.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        Self {
            engine: GameEngine::new(),
            theme,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The engine, for read access.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = input::map_key(key) {
            self.dispatch(action);
        }
    }

    /// Performs an action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Cursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::Select => self.activate(self.cursor),
            Action::Cell(pos) => {
                self.cursor = pos;
                self.activate(pos);
            }
            Action::NewGame => self.new_game(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Plays the current mark at `pos`. Illegal moves have no effect.
    fn activate(&mut self, pos: Position) {
        match self.engine.play(pos) {
            Ok(state) => debug!(position = %pos, status = %state.status_message(), "Cell played"),
            Err(e) => debug!(position = %pos, error = %e, "Ignoring illegal move"),
        }
    }

    /// Resets the game and recenters the cursor. The theme is kept.
    pub fn new_game(&mut self) {
        self.engine.reset();
        self.cursor = Position::Center;
    }

    /// Switches between light and dark.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = %self.theme, "Theme toggled");
    }

    /// Turn or outcome message.
    pub fn status_line(&self) -> String {
        self.state().status_message()
    }

    /// Accessible description of a cell, numbered 1-9.
    pub fn cell_label(&self, pos: Position) -> String {
        let content = match self.state().square(pos) {
            Square::Empty => "empty".to_string(),
            Square::Occupied(mark) => mark.to_string(),
        };
        format!("Cell {}, {}", pos.to_index() + 1, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tictactoe_engine::{Mark, Outcome};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn digits(app: &mut App, keys: &str) {
        for c in keys.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_new_app() {
        let app = App::new(Theme::Dark);
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.status_line(), "Player X's turn");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_digit_plays_cell_and_moves_cursor() {
        let mut app = App::new(Theme::Light);
        digits(&mut app, "3");
        assert_eq!(app.state().square(Position::TopRight), Square::Occupied(Mark::X));
        assert_eq!(app.cursor(), Position::TopRight);
        assert_eq!(app.status_line(), "Player O's turn");
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new(Theme::Light);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.state().square(Position::BottomCenter),
            Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_occupied_cell_is_a_no_op() {
        let mut app = App::new(Theme::Light);
        digits(&mut app, "5");
        let before = *app.state();
        digits(&mut app, "5");
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn test_win_message_and_freeze() {
        let mut app = App::new(Theme::Light);
        digits(&mut app, "14253");
        assert_eq!(app.state().outcome(), Outcome::Win(Mark::X));
        assert_eq!(app.status_line(), "Player X wins!");

        let before = *app.state();
        digits(&mut app, "6");
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn test_draw_message() {
        let mut app = App::new(Theme::Light);
        digits(&mut app, "123546879");
        assert_eq!(app.status_line(), "It's a draw!");
    }

    #[test]
    fn test_new_game_keeps_theme() {
        let mut app = App::new(Theme::Light);
        press(&mut app, KeyCode::Char('t'));
        digits(&mut app, "19");
        app.dispatch(Action::Cursor(Direction::Up));
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.state(), &GameState::new());
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_theme_toggle_does_not_touch_game() {
        let mut app = App::new(Theme::Light);
        digits(&mut app, "5");
        let before = *app.state();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn test_cell_labels() {
        let mut app = App::new(Theme::Light);
        digits(&mut app, "12");
        assert_eq!(app.cell_label(Position::TopLeft), "Cell 1, X");
        assert_eq!(app.cell_label(Position::TopCenter), "Cell 2, O");
        assert_eq!(app.cell_label(Position::BottomRight), "Cell 9, empty");
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Theme::Light);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
