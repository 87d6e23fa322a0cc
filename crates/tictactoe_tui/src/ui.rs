//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Mark, Position, Square};

use crate::app::App;
use crate::theme::Palette;

const CELL_WIDTH: u16 = 11;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 11;
const HELP_TEXT: &str = "arrows move · 1-9/enter play · n New Game · t theme · q quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme().palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Cell label
            Constraint::Length(1),            // Help
        ])
        .split(area);

    draw_title(frame, chunks[0], app, &palette);
    draw_board(frame, chunks[1], app, &palette);

    let status = Paragraph::new(app.status_line())
        .style(
            Style::default()
                .fg(palette.text)
                .bg(palette.surface)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let label = Paragraph::new(app.cell_label(app.cursor()))
        .style(Style::default().fg(palette.empty))
        .alignment(Alignment::Center);
    frame.render_widget(label, chunks[3]);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(palette.text))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(palette.text).add_modifier(Modifier::BOLD));
    frame.render_widget(title, cols[0]);

    let toggle = Paragraph::new(format!("[t] {}", app.theme().toggle_label()))
        .style(Style::default().fg(palette.accent))
        .alignment(Alignment::Right);
    frame.render_widget(toggle, cols[1]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.surface)),
        board_area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, palette, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1], palette);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, palette, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1], palette);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, pos: Position) {
    let (symbol, base_style) = match app.state().square(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(palette.empty),
        ),
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default()
                .fg(mark_color(mark, palette))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = app
        .engine()
        .winning_line()
        .is_some_and(|line| line.contains(pos));

    let style = if on_winning_line {
        base_style.bg(palette.highlight)
    } else if pos == app.cursor() {
        base_style.bg(palette.cursor).add_modifier(Modifier::UNDERLINED)
    } else {
        base_style.bg(palette.surface)
    };
    // A drawn board fades out; nobody's line stands out.
    let style = if app.state().outcome().is_draw() {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    };

    // Vertically center the symbol in a 3-line cell.
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(text)
        .style(Style::default().bg(style.bg.unwrap_or(palette.surface)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(mark: Mark, palette: &Palette) -> ratatui::style::Color {
    match mark {
        Mark::X => palette.x,
        Mark::O => palette.o,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(palette.empty));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(palette.empty));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
