//! Move sources and their implementations.

mod computer;
mod first_available;
mod human;

pub use computer::ComputerPlayer;
pub use first_available::FirstAvailablePlayer;
pub use human::HumanPlayer;

use crate::games::tictactoe::{Board, Move, Player};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Kind of player behind a move source.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at a terminal. Rejected moves are asked for again.
    Human,
    /// Moves chosen by an algorithm. A rejected move is a defect.
    Computer,
}

/// Trait for players that can make moves.
pub trait MoveSource<const N: usize> {
    /// Gets a move for `mark` from this player.
    ///
    /// `mark` is whatever the seat places; sources never keep their own copy.
    /// Sources do not check occupancy; the board does.
    fn produce_move(&mut self, board: &Board<N>, mark: Player) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns what kind of player this is.
    fn kind(&self) -> PlayerKind;
}
