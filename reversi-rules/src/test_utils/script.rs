//! Replay a game from a transcript of moves in algebraic notation.

use crate::{Game, Location, RulesError};
use derive_more::{Display, Error};

#[derive(Debug, PartialEq, Display, Error)]
pub enum ScriptError {
    #[display("move {index} is not valid notation")]
    BadNotation { index: usize },
    #[display("move {index} was rejected: {source}")]
    Rejected { index: usize, source: RulesError },
}

/// Play whitespace-separated moves ("F5 D6 C3") from the starting position.
/// Forced passes are taken automatically, so a transcript never mentions them.
pub fn play_script(moves: &str) -> Result<Game, ScriptError> {
    let mut game = Game::default();

    for (index, notation) in moves.split_whitespace().enumerate() {
        let loc: Location = notation
            .parse()
            .or(Err(ScriptError::BadNotation { index }))?;
        game.play(loc)
            .map_err(|source| ScriptError::Rejected { index, source })?;
    }

    Ok(game)
}
