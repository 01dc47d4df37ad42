//! Text rendering of the board.

use crate::games::tictactoe::{Board, Move, Player, Square};

/// Default gap between the board and the keypad legend.
pub const DEFAULT_GAP: usize = 20;

/// Board formatter showing the marks next to the keypad numbers.
///
/// ```text
/// X |   | O                    1 | 2 | 3
///   | X |                      4 | 5 | 6
///   |   |                      7 | 8 | 9
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a, const N: usize> {
    board: &'a Board<N>,
    gap: usize,
}

impl<'a, const N: usize> BoardView<'a, N> {
    /// Creates a view with the default gap.
    pub fn new(board: &'a Board<N>) -> Self {
        Self {
            board,
            gap: DEFAULT_GAP,
        }
    }

    /// Sets the number of spaces between board and legend.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }
}

/// Character used for a square.
pub fn symbol(square: Square) -> char {
    match square {
        Square::Empty => ' ',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}

impl<const N: usize> std::fmt::Display for BoardView<'_, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = (N * N).to_string().len();
        for (row, squares) in self.board.rows().iter().enumerate() {
            let marks: Vec<String> = squares
                .iter()
                .map(|square| format!("{:<width$}", symbol(*square)))
                .collect();
            let numbers: Vec<String> = (0..N)
                .map(|col| format!("{:<width$}", Move::new(row, col).keypad::<N>()))
                .collect();
            writeln!(
                f,
                "{}{:gap$}{}",
                marks.join(" | "),
                "",
                numbers.join(" | "),
                gap = self.gap
            )?;
        }
        Ok(())
    }
}
