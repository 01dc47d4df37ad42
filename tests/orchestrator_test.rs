//! Tests for turn orchestration.

use anyhow::Result;
use ideal_tictactoe::{
    Board, ComputerPlayer, FirstAvailablePlayer, GameError, GameEvent, GameOutcome, HumanPlayer,
    InvalidMove, Move, MoveSource, Orchestrator, Player, PlayerKind, Square, StandardBoard,
    TurnState,
};
use std::io::Cursor;

fn scripted_human(input: &str) -> Box<dyn MoveSource<3>> {
    Box::new(HumanPlayer::new(
        "Ada",
        Cursor::new(input.as_bytes().to_vec()),
        std::io::sink(),
    ))
}

/// Computer that always proposes the same square.
struct Stubborn(Move);

impl MoveSource<3> for Stubborn {
    fn produce_move(&mut self, _board: &Board<3>, _mark: Player) -> Result<Move> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "Stubborn"
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }
}

#[test]
fn test_human_beats_first_available() {
    // Human: center, garbage, an occupied corner, top right, bottom left.
    let human = scripted_human("5\nabc\n1\n3\n7\n");
    let naive = Box::new(FirstAvailablePlayer::new("Naive"));
    let mut game = Orchestrator::<3>::new(human, naive);

    let mut events = Vec::new();
    let record = game.run(|event| events.push(event.clone())).unwrap();

    assert_eq!(record.outcome, GameOutcome::Win(Player::X));
    assert_eq!(
        record.history,
        vec![
            (Player::X, Move::new(1, 1)),
            (Player::O, Move::new(0, 0)),
            (Player::X, Move::new(0, 2)),
            (Player::O, Move::new(0, 1)),
            (Player::X, Move::new(2, 0)),
        ]
    );
    assert_eq!(StandardBoard::replay(&record.history).unwrap(), record.board);

    let rejected: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, GameEvent::MoveRejected { .. }))
        .collect();
    assert_eq!(
        rejected,
        vec![&GameEvent::MoveRejected {
            name: "Ada".to_string(),
            error: InvalidMove::Occupied {
                row: 0,
                col: 0,
                occupant: Player::O
            },
        }]
    );
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameOver {
            outcome: GameOutcome::Win(Player::X),
            winner: Some("Ada".to_string()),
        })
    );
    assert_eq!(game.state(), TurnState::GameOver(GameOutcome::Win(Player::X)));
}

#[test]
fn test_computer_vs_computer_draws() {
    let mut game = Orchestrator::<3>::new(
        Box::new(ComputerPlayer::new("Deep X")),
        Box::new(ComputerPlayer::new("Deep O")),
    );
    let record = game.run(|_| {}).unwrap();
    assert_eq!(record.outcome, GameOutcome::Draw);
    assert_eq!(record.history.len(), 9);
    assert!(record.board.is_full());
}

#[test]
fn test_minimax_punishes_first_available() {
    let mut game = Orchestrator::<3>::new(
        Box::new(FirstAvailablePlayer::new("Naive")),
        Box::new(ComputerPlayer::new("Deep")),
    );
    let record = game.run(|_| {}).unwrap();
    assert_eq!(record.outcome, GameOutcome::Win(Player::O));
    assert_eq!(
        record.history,
        vec![
            (Player::X, Move::new(0, 0)),
            (Player::O, Move::new(1, 1)),
            (Player::X, Move::new(0, 1)),
            (Player::O, Move::new(0, 2)),
            (Player::X, Move::new(1, 0)),
            (Player::O, Move::new(2, 0)),
        ]
    );
}

#[test]
fn test_computer_plays_for_its_seat() {
    // One computer value, moved between seats, wins from either.
    let deep = ComputerPlayer::new("Deep");

    let mut second = Orchestrator::<3>::new(
        Box::new(FirstAvailablePlayer::new("Naive")),
        Box::new(deep.clone()),
    );
    let record = second.run(|_| {}).unwrap();
    assert_eq!(record.outcome, GameOutcome::Win(Player::O));
    assert_eq!(second.participant(Player::O).name(), "Deep");

    let mut first =
        Orchestrator::<3>::new(Box::new(deep), Box::new(FirstAvailablePlayer::new("Naive")));
    let record = first.run(|_| {}).unwrap();
    assert_eq!(record.outcome, GameOutcome::Win(Player::X));
    assert_eq!(record.history.len(), 7);
    for &(mark, mv) in &record.history {
        assert_eq!(record.board.get(mv), Some(Square::Occupied(mark)));
    }
}

#[test]
fn test_illegal_computer_move_is_fatal() {
    let mut game = Orchestrator::<3>::new(
        Box::new(Stubborn(Move::new(1, 1))),
        Box::new(Stubborn(Move::new(1, 1))),
    );
    let mut rejected = 0;
    let err = game
        .run(|event| {
            if matches!(event, GameEvent::MoveRejected { .. }) {
                rejected += 1;
            }
        })
        .unwrap_err();

    assert!(matches!(
        err,
        GameError::EngineInvariant {
            source: InvalidMove::Occupied { row: 1, col: 1, .. },
            ..
        }
    ));
    assert_eq!(rejected, 0);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.board().occupied_count(), 1);
}

#[test]
fn test_closed_input_stops_game() {
    let human = scripted_human("5\n");
    let mut game = Orchestrator::<3>::new(human, Box::new(FirstAvailablePlayer::new("Naive")));
    let err = game.run(|_| {}).unwrap_err();
    assert!(matches!(err, GameError::Source { ref name, .. } if name == "Ada"));
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.state(), TurnState::AwaitingMoveFromPlayer1);
}

#[test]
fn test_turns_alternate() {
    let mut game = Orchestrator::<3>::new(
        Box::new(FirstAvailablePlayer::new("One")),
        Box::new(FirstAvailablePlayer::new("Two")),
    );
    let mut on_event = |_: &GameEvent| {};
    assert_eq!(game.state(), TurnState::AwaitingMoveFromPlayer1);
    assert_eq!(game.play_turn(&mut on_event).unwrap(), TurnState::AwaitingMoveFromPlayer2);
    assert_eq!(game.play_turn(&mut on_event).unwrap(), TurnState::AwaitingMoveFromPlayer1);
    assert_eq!(game.participant(Player::O).name(), "Two");
    assert_eq!(
        game.history(),
        &[(Player::X, Move::new(0, 0)), (Player::O, Move::new(0, 1))]
    );
}

#[test]
fn test_turn_after_game_over_is_refused() {
    let mut game = Orchestrator::<3>::new(
        Box::new(FirstAvailablePlayer::new("One")),
        Box::new(FirstAvailablePlayer::new("Two")),
    );
    game.run(|_| {}).unwrap();
    let mut on_event = |_: &GameEvent| {};
    assert!(matches!(game.play_turn(&mut on_event), Err(GameError::GameOver)));
}
