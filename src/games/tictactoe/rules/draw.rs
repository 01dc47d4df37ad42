//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full<const N: usize>(board: &Board<N>) -> bool {
    board.rows().iter().flatten().all(|s| *s != Square::Empty)
}

/// Checks if the board is full with no completed line.
pub fn is_draw<const N: usize>(board: &Board<N>) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Move, Player};
    use super::*;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::<3>::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::<3>::new();
        board.place(Move::new(1, 1), Player::X).unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [O, X, O]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_one_gap_is_not_draw() {
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, E]]);
        assert!(!is_draw(&board));
    }
}
