//! Core domain types for tic-tac-toe.

use super::action::InvalidMove;
use super::position::Move;
use super::rules;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Outcome of a board, derived from its squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves remain and nobody owns a line.
    InProgress,
    /// Board is full and nobody owns a line.
    Draw,
    /// Player owns a complete row, column or diagonal.
    Win(Player),
}

impl GameOutcome {
    /// Returns true once the game can accept no more moves.
    pub fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Draw => write!(f, "Draw"),
            GameOutcome::Win(player) => write!(f, "Player {} wins", player),
        }
    }
}

/// Square N×N tic-tac-toe board.
///
/// The board is `Copy`, so search code can branch by value and the live
/// board is never touched while exploring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    squares: [[Square; N]; N],
}

/// The 3×3 board the game is played on.
pub type StandardBoard = Board<3>;

impl<const N: usize> Board<N> {
    /// Side length of the board.
    pub const SIZE: usize = N;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; N]; N],
        }
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(squares: [[Square; N]; N]) -> Self {
        Self { squares }
    }

    /// Replays a move history from an empty board.
    pub fn replay(moves: &[(Player, Move)]) -> Result<Self, InvalidMove> {
        moves
            .iter()
            .try_fold(Self::new(), |board, &(player, mv)| board.apply(mv, player))
    }

    /// Gets the square at the given move, `None` when out of range.
    pub fn get(&self, mv: Move) -> Option<Square> {
        self.squares.get(mv.row)?.get(mv.col).copied()
    }

    /// Checks if a square is in range and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Square; N]; N] {
        &self.squares
    }

    /// Returns every empty square in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(N * N);
        for (row, squares) in self.squares.iter().enumerate() {
            for (col, square) in squares.iter().enumerate() {
                if *square == Square::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Boards reachable by one move of `player`, paired with that move.
    ///
    /// Yields in the same row-major order as [`Board::legal_moves`].
    pub fn successors(&self, player: Player) -> impl Iterator<Item = (Move, Self)> + '_ {
        self.legal_moves().into_iter().map(move |mv| {
            let mut next = *self;
            next.squares[mv.row][mv.col] = Square::Occupied(player);
            (mv, next)
        })
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|square| **square != Square::Empty)
            .count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns a copy of the board with `player` placed at `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the move is off the board or the square
    /// is already occupied.
    pub fn apply(&self, mv: Move, player: Player) -> Result<Self, InvalidMove> {
        let mut next = *self;
        next.place(mv, player)?;
        Ok(next)
    }

    /// Places `player` at `mv` in place.
    ///
    /// # Errors
    ///
    /// Same as [`Board::apply`]; the board is unchanged on error.
    pub fn place(&mut self, mv: Move, player: Player) -> Result<(), InvalidMove> {
        match self.get(mv) {
            None => Err(InvalidMove::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size: N,
            }),
            Some(Square::Occupied(occupant)) => Err(InvalidMove::Occupied {
                row: mv.row,
                col: mv.col,
                occupant,
            }),
            Some(Square::Empty) => {
                self.squares[mv.row][mv.col] = Square::Occupied(player);
                Ok(())
            }
        }
    }

    /// Returns the owner of the first complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Evaluates the board.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(self)
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}
