//! Exhaustive minimax search over the tic-tac-toe move tree.
//!
//! Scores are always from the maximizing player's point of view. Each
//! branch works on its own copy of the board, so the caller's board is
//! never modified.

use crate::games::tictactoe::{Board, GameOutcome, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a won position before any depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// How terminal positions are scored.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Scoring {
    /// +10 for a maximizer win, -10 for a minimizer win, 0 for a draw.
    #[default]
    Fixed,
    /// Magnitude `N² + 1` minus the search depth (10 on a 3×3 board), so
    /// quicker wins and slower losses score better.
    DepthAdjusted,
}

/// Move picked by the search together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move, first in row-major order among equally scored moves.
    pub mv: Move,
    /// Minimax value of the position after `mv`.
    pub score: i32,
    /// Positions visited, including the root.
    pub nodes: u64,
}

/// Minimax search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    maximizer: Player,
    scoring: Scoring,
}

impl Minimax {
    /// Creates an engine that maximizes for `maximizer`.
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            scoring: Scoring::Fixed,
        }
    }

    /// Sets the scoring mode.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// Returns the maximizing player.
    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Returns the scoring mode.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Finds the optimal move for `to_move`.
    ///
    /// Returns `None` if the board is already terminal.
    #[instrument(skip_all, fields(maximizer = %self.maximizer, to_move = %to_move))]
    pub fn best_move<const N: usize>(
        &self,
        board: &Board<N>,
        to_move: Player,
    ) -> Option<SearchResult> {
        if board.outcome().is_over() {
            debug!("Board is terminal, nothing to search");
            return None;
        }

        let mut nodes = 1;
        let (mv, score) = self.choose(board, to_move, 0, &mut nodes)?;
        debug!(%mv, score, nodes, "Search finished");
        Some(SearchResult { mv, score, nodes })
    }

    /// Minimax value of `board` with `to_move` about to play.
    pub fn score<const N: usize>(&self, board: &Board<N>, to_move: Player) -> i32 {
        let mut nodes = 0;
        self.evaluate(board, to_move, 0, &mut nodes)
    }

    fn evaluate<const N: usize>(
        &self,
        board: &Board<N>,
        to_move: Player,
        depth: u32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        match board.outcome() {
            GameOutcome::InProgress => self
                .choose(board, to_move, depth, nodes)
                .map_or(0, |(_, score)| score),
            terminal => self.terminal_score::<N>(terminal, depth),
        }
    }

    fn choose<const N: usize>(
        &self,
        board: &Board<N>,
        to_move: Player,
        depth: u32,
        nodes: &mut u64,
    ) -> Option<(Move, i32)> {
        let maximizing = to_move == self.maximizer;
        let mut best: Option<(Move, i32)> = None;

        for (mv, child) in board.successors(to_move) {
            let score = self.evaluate(&child, to_move.opponent(), depth + 1, nodes);
            let improves = match best {
                None => true,
                Some((_, current)) if maximizing => score > current,
                Some((_, current)) => score < current,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        best
    }

    fn terminal_score<const N: usize>(&self, outcome: GameOutcome, depth: u32) -> i32 {
        let magnitude = match self.scoring {
            Scoring::Fixed => WIN_SCORE,
            // A game never lasts more than N² moves, so every win stays above a draw.
            Scoring::DepthAdjusted => (N * N) as i32 + 1 - depth as i32,
        };
        match outcome.winner() {
            Some(winner) if winner == self.maximizer => magnitude,
            Some(_) => -magnitude,
            None => 0,
        }
    }
}
