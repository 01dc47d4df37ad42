//! Naive computer player for testing and easy games.

use super::{MoveSource, PlayerKind};
use crate::games::tictactoe::{Board, Move, Player};
use anyhow::Result;
use tracing::debug;

/// Computer that picks the first empty square in row-major order.
#[derive(Debug, Clone)]
pub struct FirstAvailablePlayer {
    name: String,
}

impl FirstAvailablePlayer {
    /// Creates a new first-available player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<const N: usize> MoveSource<N> for FirstAvailablePlayer {
    fn produce_move(&mut self, board: &Board<N>, mark: Player) -> Result<Move> {
        let mv = board
            .legal_moves()
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(player = %self.name, %mark, %mv, "Picked first available square");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}
