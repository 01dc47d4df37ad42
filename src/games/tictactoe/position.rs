//! Board coordinates and the keypad numbering shown to humans.

use serde::{Deserialize, Serialize};
use tracing::instrument;

const ROW_NAMES: [&str; 3] = ["upper", "middle", "lower"];
const COL_NAMES: [&str; 3] = ["left", "middle", "right"];

/// A (row, column) coordinate on the board.
///
/// Keypad numbers run from 1 in the top-left corner to `N²` in the
/// bottom-right, left-to-right then top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row of this move.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the column of this move.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Creates a move from its keypad number on an N×N board.
    pub fn from_keypad<const N: usize>(number: usize) -> Option<Self> {
        if number == 0 || number > N * N {
            return None;
        }
        let index = number - 1;
        Some(Self::new(index / N, index % N))
    }

    /// Keypad number of this move on an N×N board.
    pub fn keypad<const N: usize>(self) -> usize {
        self.row * N + self.col + 1
    }

    /// Human description of the square, e.g. "upper left" or "center".
    pub fn label<const N: usize>(self) -> String {
        if N == 3 && self.row < 3 && self.col < 3 {
            if self.row == 1 && self.col == 1 {
                return "center".to_string();
            }
            return format!("{} {}", ROW_NAMES[self.row], COL_NAMES[self.col]);
        }
        format!("row {}, column {}", self.row + 1, self.col + 1)
    }

    /// Parses a keypad number or a square label (case-insensitive).
    #[instrument]
    pub fn from_label_or_number<const N: usize>(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(number) = input.parse::<usize>() {
            return Self::from_keypad::<N>(number);
        }

        let wanted = normalize(input);
        if wanted.is_empty() {
            return None;
        }
        (0..N * N)
            .map(|index| Self::new(index / N, index % N))
            .find(|mv| normalize(&mv.label::<N>()) == wanted)
    }
}

fn normalize(label: &str) -> String {
    label
        .to_lowercase()
        .replace(['-', '_', ','], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
