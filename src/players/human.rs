//! Human player reading moves from a text stream.

use super::{MoveSource, PlayerKind};
use crate::games::tictactoe::{Board, Move, Player};
use crate::render::{BoardView, DEFAULT_GAP};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Human player that shows the board and reads keypad numbers or labels.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    gap: usize,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            gap: DEFAULT_GAP,
        }
    }

    /// Sets the gap used when drawing the board.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Consumes the player, returning its streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read move")?;
        if read == 0 {
            anyhow::bail!("Input closed before a move was entered");
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write, const N: usize> MoveSource<N> for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(human = %self.name))]
    fn produce_move(&mut self, board: &Board<N>, mark: Player) -> Result<Move> {
        writeln!(self.output, "{}", BoardView::new(board).with_gap(self.gap))?;

        loop {
            write!(self.output, "Where to ? ")?;
            self.output.flush()?;

            let line = self.read_line()?;
            match Move::from_label_or_number::<N>(&line) {
                Some(mv) => {
                    debug!(%mv, "Human entered move");
                    return Ok(mv);
                }
                None => {
                    warn!(input = %line.trim(), "Unparseable move");
                    writeln!(
                        self.output,
                        "Invalid input. Enter a number 1-{} or a square name such as \"center\".",
                        N * N
                    )?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}
