//! Ideal Tic-Tac-Toe library - board rules and an exhaustive minimax opponent
//!
//! # Architecture
//!
//! - **Board**: squares, legal moves, win/draw detection (generic over the side length)
//! - **Search**: minimax over every remaining move sequence
//! - **Players**: human and computer move sources behind one trait
//! - **Orchestrator**: turn taking until the board is terminal
//!
//! # Example
//!
//! ```
//! use ideal_tictactoe::{ComputerPlayer, GameOutcome, Orchestrator};
//!
//! let mut game = Orchestrator::<3>::new(
//!     Box::new(ComputerPlayer::new("Deep X")),
//!     Box::new(ComputerPlayer::new("Deep O")),
//! );
//! let record = game.run(|_| {}).unwrap();
//! assert_eq!(record.outcome, GameOutcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;
mod render;
mod search;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, Opponent};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameOutcome, InvalidMove, Move, Player, Square, StandardBoard, rules,
};

// Crate-level exports - Search
pub use search::{Minimax, Scoring, SearchResult, WIN_SCORE};

// Crate-level exports - Players
pub use players::{ComputerPlayer, FirstAvailablePlayer, HumanPlayer, MoveSource, PlayerKind};

// Crate-level exports - Orchestration
pub use orchestrator::{GameError, GameEvent, GameRecord, Orchestrator, Participant, TurnState};

// Crate-level exports - Rendering
pub use render::{BoardView, DEFAULT_GAP, symbol};
