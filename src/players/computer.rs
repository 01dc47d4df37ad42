//! Computer player backed by minimax search.

use super::{MoveSource, PlayerKind};
use crate::games::tictactoe::{Board, Move, Player};
use crate::search::{Minimax, Scoring};
use anyhow::Result;
use tracing::{debug, instrument};

/// Computer player that always plays the minimax-optimal move.
///
/// The player has no mark of its own. Each search maximizes for the mark
/// its seat places.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    scoring: Scoring,
}

impl ComputerPlayer {
    /// Creates a computer player with fixed scoring.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scoring: Scoring::Fixed,
        }
    }

    /// Sets the scoring mode used by the engine.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Engine searching on behalf of `mark`.
    pub fn engine(&self, mark: Player) -> Minimax {
        Minimax::new(mark).with_scoring(self.scoring)
    }
}

impl<const N: usize> MoveSource<N> for ComputerPlayer {
    #[instrument(skip(self, board), fields(computer = %self.name))]
    fn produce_move(&mut self, board: &Board<N>, mark: Player) -> Result<Move> {
        let result = self
            .engine(mark)
            .best_move(board, mark)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(mv = %result.mv, score = result.score, nodes = result.nodes, "Computer chose move");
        Ok(result.mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}
