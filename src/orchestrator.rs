//! Game orchestration between two move sources.

use crate::games::tictactoe::{Board, GameOutcome, InvalidMove, Move, Player};
use crate::players::{MoveSource, PlayerKind};
use derive_more::{Display, Error};
use tracing::{debug, error, info, instrument, warn};

/// Whose turn it is, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Player 1 (X) is to move.
    AwaitingMoveFromPlayer1,
    /// Player 2 (O) is to move.
    AwaitingMoveFromPlayer2,
    /// No more moves will be accepted.
    GameOver(GameOutcome),
}

/// Messages sent from the orchestrator to whoever presents the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was applied to the board.
    MoveMade {
        /// Mark that was placed.
        player: Player,
        /// Name of the participant.
        name: String,
        /// Square that was taken.
        mv: Move,
    },
    /// A human move was refused; the same participant is asked again.
    MoveRejected {
        /// Name of the participant.
        name: String,
        /// Why the board refused it.
        error: InvalidMove,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: GameOutcome,
        /// Name of the winner, if any.
        winner: Option<String>,
    },
}

/// Errors that stop a game.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// A computer proposed a move the board refused.
    #[display("Internal error: {} proposed an illegal move: {}", name, source)]
    EngineInvariant {
        /// Name of the participant.
        name: String,
        /// Board error.
        source: InvalidMove,
    },

    /// A move source could not produce a move.
    #[display("{} could not produce a move: {}", name, message)]
    Source {
        /// Name of the participant.
        name: String,
        /// Description of the failure.
        message: String,
    },

    /// A turn was requested after the game ended.
    #[display("Game is already over")]
    GameOver,
}

/// Final state of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord<const N: usize> {
    /// Board after the last move.
    pub board: Board<N>,
    /// Every applied move in order.
    pub history: Vec<(Player, Move)>,
    /// How the game ended.
    pub outcome: GameOutcome,
}

/// A seat at the table: a mark and the source that picks its moves.
pub struct Participant<const N: usize> {
    mark: Player,
    source: Box<dyn MoveSource<N>>,
}

impl<const N: usize> Participant<N> {
    /// Creates a participant.
    pub fn new(mark: Player, source: Box<dyn MoveSource<N>>) -> Self {
        Self { mark, source }
    }

    /// Mark this participant places.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Display name of the source.
    pub fn name(&self) -> &str {
        self.source.name()
    }

    /// Kind of the source.
    pub fn kind(&self) -> PlayerKind {
        self.source.kind()
    }
}

impl<const N: usize> std::fmt::Debug for Participant<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("mark", &self.mark)
            .field("name", &self.source.name())
            .field("kind", &self.source.kind())
            .finish()
    }
}

/// Orchestrates gameplay between two players.
///
/// Player 1 places X and moves first; player 2 places O. The seat decides
/// the mark, and every request for a move carries it.
#[derive(Debug)]
pub struct Orchestrator<const N: usize> {
    board: Board<N>,
    player1: Participant<N>,
    player2: Participant<N>,
    history: Vec<(Player, Move)>,
    state: TurnState,
}

impl<const N: usize> Orchestrator<N> {
    /// Creates a new orchestrator with an empty board.
    pub fn new(player1: Box<dyn MoveSource<N>>, player2: Box<dyn MoveSource<N>>) -> Self {
        Self {
            board: Board::new(),
            player1: Participant::new(Player::X, player1),
            player2: Participant::new(Player::O, player2),
            history: Vec::new(),
            state: TurnState::AwaitingMoveFromPlayer1,
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Returns the current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[(Player, Move)] {
        &self.history
    }

    /// Returns the participant placing `mark`.
    pub fn participant(&self, mark: Player) -> &Participant<N> {
        match mark {
            Player::X => &self.player1,
            Player::O => &self.player2,
        }
    }

    /// Runs the game loop until the board is terminal.
    ///
    /// Every event is passed to `on_event` as it happens.
    #[instrument(skip_all, fields(player1 = %self.player1.name(), player2 = %self.player2.name()))]
    pub fn run(
        &mut self,
        mut on_event: impl FnMut(&GameEvent),
    ) -> Result<GameRecord<N>, GameError> {
        info!("Starting game orchestration");

        loop {
            if let TurnState::GameOver(outcome) = self.state {
                let winner = outcome
                    .winner()
                    .map(|mark| self.participant(mark).name().to_string());
                info!(%outcome, ?winner, moves = self.history.len(), "Game over");
                on_event(&GameEvent::GameOver { outcome, winner });
                return Ok(GameRecord {
                    board: self.board,
                    history: self.history.clone(),
                    outcome,
                });
            }
            self.play_turn(&mut on_event)?;
        }
    }

    /// Obtains one move from the active participant and applies it.
    ///
    /// Human moves refused by the board are reported and asked for again.
    pub fn play_turn(
        &mut self,
        on_event: &mut impl FnMut(&GameEvent),
    ) -> Result<TurnState, GameError> {
        let (participant, next) = match self.state {
            TurnState::AwaitingMoveFromPlayer1 => {
                (&mut self.player1, TurnState::AwaitingMoveFromPlayer2)
            }
            TurnState::AwaitingMoveFromPlayer2 => {
                (&mut self.player2, TurnState::AwaitingMoveFromPlayer1)
            }
            TurnState::GameOver(_) => return Err(GameError::GameOver),
        };
        let mark = participant.mark;

        let mv = loop {
            debug!(player = %participant.name(), %mark, "Waiting for move");
            let mv = participant
                .source
                .produce_move(&self.board, mark)
                .map_err(|e| GameError::Source {
                    name: participant.name().to_string(),
                    message: format!("{:#}", e),
                })?;

            match self.board.place(mv, mark) {
                Ok(()) => break mv,
                Err(error) => match participant.kind() {
                    PlayerKind::Human => {
                        warn!(player = %participant.name(), %error, "Rejected move");
                        on_event(&GameEvent::MoveRejected {
                            name: participant.name().to_string(),
                            error,
                        });
                    }
                    PlayerKind::Computer => {
                        error!(player = %participant.name(), %error, "Computer proposed an illegal move");
                        return Err(GameError::EngineInvariant {
                            name: participant.name().to_string(),
                            source: error,
                        });
                    }
                },
            }
        };

        let name = participant.name().to_string();
        self.history.push((mark, mv));
        on_event(&GameEvent::MoveMade {
            player: mark,
            name,
            mv,
        });

        self.state = match self.board.outcome() {
            GameOutcome::InProgress => next,
            outcome => TurnState::GameOver(outcome),
        };
        Ok(self.state)
    }
}
