//! The terminal front end: prompts, move entry and the end-of-game summary.
//!
//! All rules live in `reversi_rules`; this module only reads and writes text.

use anyhow::Result;
use reversi_rules::{Game, GameConfig, Location, Phase, Player, Score, TurnOutcome};
use std::io::{BufRead, ErrorKind, Write};
use tracing::debug;

/// How an interactive session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(Score),
    Quit,
    EndOfInput,
}

/// Play one game, reading moves from `input` and writing everything else to `output`.
pub fn play_interactive<R: BufRead, W: Write>(
    config: &GameConfig,
    mut input: R,
    mut output: W,
) -> Result<SessionEnd> {
    let mut game = Game::from_config(config);
    let mut line = String::new();

    loop {
        writeln!(output, "\n{}\n", game.board())?;

        if let Phase::GameOver(score) = game.phase() {
            write_summary(&game, score, &mut output)?;
            return Ok(SessionEnd::Finished(score));
        }

        let player = game.current_player();
        writeln!(output, "It's {}'s turn", game.participant(player).nickname())?;
        write!(output, "Enter a move: ")?;
        output.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => return Ok(SessionEnd::EndOfInput),
            Ok(_) => {}
            // The offending line has been consumed; treat it like any other unparsable move.
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                writeln!(output, "Cannot parse move: input is not valid text.")?;
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        let entry = line.trim();
        if entry.eq_ignore_ascii_case("quit") {
            return Ok(SessionEnd::Quit);
        }

        let loc: Location = match entry.parse() {
            Ok(loc) => loc,
            Err(_) => {
                writeln!(output, "Cannot parse move {:?}.", entry)?;
                continue;
            }
        };

        match game.play(loc) {
            Ok(TurnOutcome::Passed { skipped, .. }) => {
                let nickname = game.participant(skipped).nickname();
                writeln!(output, "{} can't play, player changeover", nickname)?;
            }
            Ok(_) => {}
            Err(err) => {
                debug!(%err, "move rejected");
                writeln!(output, "Invalid move. Legal moves: {}", legal_list(&game, player))?;
            }
        }
    }
}

fn legal_list(game: &Game, player: Player) -> String {
    game.legal_moves(player)
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

fn write_summary<W: Write>(game: &Game, score: Score, output: &mut W) -> Result<()> {
    for participant in game.participants() {
        let points = score.for_player(participant.player());
        writeln!(output, "{} : {} points", participant, points)?;
    }

    match score.winner() {
        Some(winner) => writeln!(output, "Winner: {}.", game.participant(winner).nickname())?,
        None => writeln!(output, "Draw.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(config: &GameConfig, input: &str) -> (SessionEnd, String) {
        let mut output = Vec::new();
        let end = play_interactive(config, Cursor::new(input), &mut output).unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    #[test]
    fn announces_turns() {
        let (end, output) = run(&GameConfig::new("Bob", "Olivia"), "D3\nquit\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("It's Bob's turn"));
        assert!(output.contains("It's Olivia's turn"));
    }

    #[test]
    fn rejects_bad_input_and_reprompts() {
        let (end, output) = run(&GameConfig::default(), "zz\nA1\n");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(output.contains("Cannot parse move \"zz\"."));
        assert!(output.contains("Invalid move. Legal moves: D3, C4, F5, E6"));
        assert_eq!(output.matches("It's Player 1's turn").count(), 3);
        assert!(!output.contains("It's Player 2's turn"));
    }

    #[test]
    fn reprompts_after_invalid_utf8() {
        let mut output = Vec::new();
        let input: &[u8] = b"\xff\xfe\nD3\nquit\n";
        let end = play_interactive(&GameConfig::default(), input, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("Cannot parse move: input is not valid text."));
        assert!(output.contains("It's Player 2's turn"));
    }

    #[test]
    fn prints_final_score() {
        let moves = "D3\nC3\nB3\nD2\nE1\nD6\nD7\nE3\nF4\n";
        let (end, output) = run(&GameConfig::new("Bob", "Olivia"), moves);
        assert_eq!(end, SessionEnd::Finished(Score { black: 13, white: 0 }));
        assert!(output.contains("Bob (Black) : 13 points"));
        assert!(output.contains("Olivia (White) : 0 points"));
        assert!(output.contains("Winner: Bob."));
    }
}
