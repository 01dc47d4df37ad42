//! Errors raised when a move cannot be applied.

use super::Player;
use derive_more::{Display, Error};

/// Error returned when a move cannot be applied to a board.
///
/// Humans get re-prompted; from the computer this is an internal defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// A coordinate lies outside the board.
    #[display("Position ({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        size: usize,
    },

    /// The square is already taken.
    #[display("Square ({}, {}) is already occupied by {}", row, col, occupant)]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Player holding the square.
        occupant: Player,
    },
}
