//! The two sides of a game and the people playing them.

use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::Black, Player::White];
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// A person (or program) seated at one colour for the whole game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    player: Player,
    nickname: String,
}

impl Participant {
    pub fn new(player: Player, nickname: impl Into<String>) -> Self {
        Self {
            player,
            nickname: nickname.into(),
        }
    }

    /// The colour this participant plays.
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.nickname, self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_moves_first() {
        assert_eq!(Player::default(), Player::Black);
    }

    #[test]
    fn not_swaps_players() {
        assert_eq!(!Player::Black, Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(!!Player::White, Player::White);
    }

    #[test]
    fn participant_display() {
        let bob = Participant::new(Player::Black, "Bob");
        assert_eq!(bob.to_string(), "Bob (Black)");
        assert_eq!(bob.nickname(), "Bob");
        assert_eq!(bob.player(), Player::Black);
    }
}
