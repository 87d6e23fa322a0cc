//! Win detection for tic-tac-toe.

use super::super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when held by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The board indices on this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether `pos` is on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The mark holding all three cells, if any.
    pub fn holder(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let first = board.get(a).mark()?;
        (board.get(b).mark() == Some(first) && board.get(c).mark() == Some(first))
            .then_some(first)
    }
}

/// Rows, then columns, then diagonals. Evaluation order is significant.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.holder(board).is_some())
}

/// Returns the mark holding the first completed line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    WIN_LINES.iter().find_map(|line| line.holder(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn board_with(mark: Mark, indices: &[usize]) -> Board {
        let mut squares = [Square::Empty; 9];
        for &index in indices {
            squares[index] = Square::Occupied(mark);
        }
        Board::from(squares)
    }

    #[test]
    fn test_line_indices_in_order() {
        let indices: Vec<[usize; 3]> = WIN_LINES.iter().map(WinLine::indices).collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in WIN_LINES {
            let board = board_with(Mark::O, &line.indices());
            assert_eq!(check_winner(&board), Some(Mark::O));
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board_with(Mark::X, &[0, 1]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Mark::X);
        squares[4] = Square::Occupied(Mark::O);
        squares[8] = Square::Occupied(Mark::X);
        assert_eq!(check_winner(&Board::from(squares)), None);
    }
}
