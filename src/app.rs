//! Terminal front end: prompts, announcements and the final verdict.

use anyhow::{Context, Result};
use ideal_tictactoe::{
    BoardView, ComputerPlayer, FirstAvailablePlayer, GameConfig, GameEvent, HumanPlayer, Move,
    MoveSource, Opponent, Orchestrator, Player,
};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::{info, instrument};

const SIDE: usize = 3;

/// Writer shared by the front end and the human player, so prompts and
/// announcements come out in the order they were written.
struct SharedOutput<W>(Rc<RefCell<W>>);

impl<W> SharedOutput<W> {
    fn new(inner: W) -> Self {
        Self(Rc::new(RefCell::new(inner)))
    }

    fn into_inner(self) -> Result<W> {
        Rc::try_unwrap(self.0)
            .map(RefCell::into_inner)
            .map_err(|_| anyhow::anyhow!("Terminal output is still held by a player"))
    }
}

impl<W> Clone for SharedOutput<W> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<W: Write> Write for SharedOutput<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

/// Builds the computer side described by the configuration.
fn computer_player(config: &GameConfig, name: &str) -> Box<dyn MoveSource<SIDE>> {
    match config.opponent() {
        Opponent::Minimax => Box::new(ComputerPlayer::new(name).with_scoring(*config.scoring())),
        Opponent::FirstAvailable => Box::new(FirstAvailablePlayer::new(name)),
    }
}

fn article(mark: Player) -> &'static str {
    match mark {
        Player::X => "an X",
        Player::O => "an O",
    }
}

#[instrument(skip_all)]
fn prompt_name(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    writeln!(output, "Enter player name")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read player name")?;
    let name = line.trim();
    Ok(if name.is_empty() { "Player" } else { name }.to_string())
}

/// Announces computer replies; human moves are held until the reply comes.
fn announce(
    output: &mut impl Write,
    event: &GameEvent,
    human_mark: Player,
    last_human_move: &mut Option<Move>,
) -> io::Result<()> {
    match event {
        GameEvent::MoveMade { player, mv, .. } if *player == human_mark => {
            *last_human_move = Some(*mv);
            Ok(())
        }
        GameEvent::MoveMade { player, mv, .. } => {
            writeln!(output)?;
            match last_human_move.take() {
                Some(human_mv) => writeln!(
                    output,
                    "You have put {} in the {}. I will put {} in the {}.",
                    article(human_mark),
                    human_mv.label::<SIDE>(),
                    article(*player),
                    mv.label::<SIDE>()
                ),
                None => writeln!(
                    output,
                    "I will put {} in the {}.",
                    article(*player),
                    mv.label::<SIDE>()
                ),
            }
        }
        GameEvent::MoveRejected { error, .. } => writeln!(output, "Invalid move: {}", error),
        GameEvent::GameOver { .. } => Ok(()),
    }
}

/// Plays one game between the terminal user and the computer.
///
/// Returns the output stream once the game is over.
#[instrument(skip_all)]
pub fn play<R, W>(config: &GameConfig, mut input: R, output: W) -> Result<W>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    let mut out = SharedOutput::new(output);
    writeln!(out, "Welcome to Tic-Tac-Toe.")?;
    writeln!(out)?;

    let name = match config.player_name() {
        Some(name) => name.clone(),
        None => prompt_name(&mut input, &mut out)?,
    };
    writeln!(out)?;
    writeln!(out, "Human player {} vs Computer Player {}:", name, config.computer_name())?;
    writeln!(
        out,
        "Please make your move selection by entering a number 1-{} corresponding to the \
         movement key on the right.",
        SIDE * SIDE
    )?;
    writeln!(out)?;

    let human_mark = if *config.computer_first() {
        Player::O
    } else {
        Player::X
    };
    info!(human = %name, %human_mark, opponent = %config.opponent(), "Starting interactive game");

    let human: Box<dyn MoveSource<SIDE>> =
        Box::new(HumanPlayer::new(name, input, out.clone()).with_gap(*config.board_gap()));
    let computer = computer_player(config, config.computer_name());
    let mut game = match human_mark {
        Player::X => Orchestrator::<SIDE>::new(human, computer),
        Player::O => Orchestrator::<SIDE>::new(computer, human),
    };

    let mut last_human_move: Option<Move> = None;
    let mut write_error: Option<io::Error> = None;
    let mut announcer = out.clone();
    let record = game.run(|event| {
        if let Err(e) = announce(&mut announcer, event, human_mark, &mut last_human_move) {
            write_error.get_or_insert(e);
        }
    })?;
    if let Some(e) = write_error {
        return Err(e).context("Failed to write to the terminal");
    }
    drop(announcer);
    drop(game);

    writeln!(out)?;
    write!(out, "{}", BoardView::new(&record.board).with_gap(*config.board_gap()))?;
    let verdict = match record.outcome.winner() {
        Some(winner) if winner == human_mark => "You have beaten my poor AI!",
        Some(_) => "I won. Thanks for playing.",
        None => "Well played. It is a draw!",
    };
    writeln!(out, "{}", verdict)?;
    out.flush()?;
    out.into_inner()
}

/// Lets the configured engine play both sides.
#[instrument(skip_all)]
pub fn self_play(config: &GameConfig, output: &mut impl Write) -> Result<()> {
    let player_x = computer_player(config, "Computer X");
    let player_o = computer_player(config, "Computer O");
    let mut game = Orchestrator::<SIDE>::new(player_x, player_o);

    let mut write_error: Option<io::Error> = None;
    let record = game.run(|event| {
        if let GameEvent::MoveMade { player, name, mv } = event {
            let line = writeln!(output, "{} ({}) takes the {}.", name, player, mv.label::<SIDE>());
            if let Err(e) = line {
                write_error.get_or_insert(e);
            }
        }
    })?;
    if let Some(e) = write_error {
        return Err(e).context("Failed to write to the terminal");
    }

    writeln!(output)?;
    write!(output, "{}", BoardView::new(&record.board).with_gap(*config.board_gap()))?;
    writeln!(output, "{}", record.outcome)?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideal_tictactoe::DEFAULT_GAP;
    use std::io::Cursor;

    fn run_game(config: &GameConfig, input: &str) -> String {
        let output = play(config, Cursor::new(input.as_bytes().to_vec()), Vec::new()).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn config(toml: &str) -> GameConfig {
        GameConfig::from_toml_str(toml).unwrap()
    }

    fn has_line(text: &str, wanted: &str) -> bool {
        text.lines().any(|line| line == wanted)
    }

    #[test]
    fn test_human_beats_first_available() {
        let text = run_game(&config(r#"opponent = "first-available""#), "Ada\n5\n2\n8\n");

        assert!(text.starts_with("Welcome to Tic-Tac-Toe.\n\nEnter player name\n"));
        assert!(has_line(&text, "Human player Ada vs Computer Player Computer:"));
        assert!(has_line(
            &text,
            "You have put an X in the center. I will put an O in the upper left."
        ));
        assert!(has_line(
            &text,
            "You have put an X in the upper middle. I will put an O in the upper right."
        ));
        // The winning move gets no reply.
        assert_eq!(text.matches("I will put").count(), 2);
        assert!(has_line(
            &text,
            &format!("  | X |  {}7 | 8 | 9", " ".repeat(DEFAULT_GAP))
        ));
        assert!(text.ends_with("You have beaten my poor AI!\n"));
    }

    #[test]
    fn test_minimax_beats_careless_human() {
        let config = GameConfig::default().with_player_name("Ada");
        let text = run_game(&config, "1\n2\n3\n4\n5\n6\n7\n8\n9\n");

        assert!(!text.contains("Enter player name"));
        assert!(has_line(
            &text,
            "You have put an X in the upper left. I will put an O in the center."
        ));
        assert!(has_line(
            &text,
            "You have put an X in the upper middle. I will put an O in the upper right."
        ));
        assert_eq!(text.matches("Invalid move").count(), 1);
        assert!(has_line(
            &text,
            "You have put an X in the middle left. I will put an O in the lower left."
        ));
        assert!(text.ends_with("I won. Thanks for playing.\n"));
    }

    #[test]
    fn test_careful_human_draws() {
        let text = run_game(&GameConfig::default(), "Ada\n1\n2\n7\n6\n9\n");

        for line in [
            "You have put an X in the upper left. I will put an O in the center.",
            "You have put an X in the upper middle. I will put an O in the upper right.",
            "You have put an X in the lower left. I will put an O in the middle left.",
            "You have put an X in the middle right. I will put an O in the lower middle.",
        ] {
            assert!(has_line(&text, line), "missing {line:?}");
        }
        assert_eq!(text.matches("I will put").count(), 4);
        assert!(text.ends_with("Well played. It is a draw!\n"));
    }

    #[test]
    fn test_computer_first_takes_x() {
        let config = config("computer_first = true");
        let text = run_game(&config, "Ada\n5\n1\n2\n3\n4\n6\n7\n8\n9\n");

        assert!(has_line(&text, "I will put an X in the upper left."));
        for line in [
            "You have put an O in the center. I will put an X in the upper middle.",
            "You have put an O in the upper right. I will put an X in the lower left.",
            "You have put an O in the middle left. I will put an X in the middle right.",
            "You have put an O in the lower middle. I will put an X in the lower right.",
        ] {
            assert!(has_line(&text, line), "missing {line:?}");
        }
        assert_eq!(text.matches("Invalid move").count(), 4);
        assert!(text.ends_with("Well played. It is a draw!\n"));
    }

    #[test]
    fn test_blank_name_becomes_player() {
        let text = run_game(&config(r#"opponent = "first-available""#), "\n5\n2\n8\n");
        assert!(has_line(&text, "Human player Player vs Computer Player Computer:"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let result = play(&GameConfig::default(), Cursor::new(b"Ada\n".to_vec()), Vec::new());
        let err = result.err().unwrap();
        assert!(format!("{:#}", err).contains("Input closed"));
    }

    #[test]
    fn test_self_play_draws() {
        let mut output = Vec::new();
        self_play(&GameConfig::default(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(" takes the ").count(), 9);
        assert!(text.starts_with("Computer X (X) takes the upper left.\n"));
        assert!(text.ends_with("Draw\n"));
    }
}
