//! Win detection logic for tic-tac-toe.

use super::super::{Board, Move, Player, Square};

/// Every line that can win: all rows, all columns, then the main and
/// anti-diagonal.
pub fn lines<const N: usize>() -> impl Iterator<Item = [Move; N]> {
    let rows = (0..N).map(|row| std::array::from_fn::<Move, N, _>(|col| Move::new(row, col)));
    let cols = (0..N).map(|col| std::array::from_fn::<Move, N, _>(|row| Move::new(row, col)));
    let main: [Move; N] = std::array::from_fn(|i| Move::new(i, i));
    let anti: [Move; N] = std::array::from_fn(|i| Move::new(i, N - 1 - i));
    rows.chain(cols).chain([main, anti])
}

/// Returns the player occupying every square of `line`.
pub fn line_owner<const N: usize>(board: &Board<N>, line: &[Move]) -> Option<Player> {
    let owner = board.get(*line.first()?)?.player()?;
    line.iter()
        .all(|&mv| board.get(mv) == Some(Square::Occupied(owner)))
        .then_some(owner)
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`lines`] order. Legal
/// play never completes lines for both players at once.
pub fn check_winner<const N: usize>(board: &Board<N>) -> Option<Player> {
    lines::<N>().find_map(|line| line_owner(board, &line))
}
