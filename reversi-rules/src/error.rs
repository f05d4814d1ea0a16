//! Errors reported by the rules engine.

use crate::{Location, Player};
use derive_more::{Display, Error};

/// Everything that can go wrong when asking the engine to do something.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    /// Coordinates outside the 8x8 grid. Indicates a bug in whatever produced them.
    #[display("({row}, {col}) is not on the board")]
    OutOfBounds { row: usize, col: usize },

    /// The cell is occupied, or placing there would capture nothing.
    /// Nothing was changed; the same player should be asked again.
    #[display("{player} cannot play at {location}")]
    IllegalMove { player: Player, location: Location },
}

impl RulesError {
    /// True for errors a player can recover from by choosing another move.
    pub fn is_recoverable(self) -> bool {
        matches!(self, RulesError::IllegalMove { .. })
    }
}
