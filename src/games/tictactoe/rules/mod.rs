//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. The outcome is always recomputed
//! from the squares, never stored next to them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, line_owner, lines};

use super::{Board, GameOutcome};

/// Evaluates the board: a completed line wins, a full board draws.
pub fn outcome<const N: usize>(board: &Board<N>) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        GameOutcome::Win(winner)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
