//! Tic-tac-toe board, rules and coordinates.

mod action;
mod position;
pub mod rules;
mod types;

pub use action::InvalidMove;
pub use position::Move;
pub use types::{Board, GameOutcome, Player, Square, StandardBoard};
