//! Settings fixed when a game starts.

use crate::{Participant, Player};

/// Everything needed to seat two players at a new game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub black_nickname: String,
    pub white_nickname: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            black_nickname: "Player 1".to_string(),
            white_nickname: "Player 2".to_string(),
        }
    }
}

impl GameConfig {
    pub fn new(black_nickname: impl Into<String>, white_nickname: impl Into<String>) -> Self {
        Self {
            black_nickname: black_nickname.into(),
            white_nickname: white_nickname.into(),
        }
    }

    #[must_use]
    pub fn with_black(mut self, nickname: impl Into<String>) -> Self {
        self.black_nickname = nickname.into();
        self
    }

    #[must_use]
    pub fn with_white(mut self, nickname: impl Into<String>) -> Self {
        self.white_nickname = nickname.into();
        self
    }

    /// The two participants, black first.
    pub fn participants(&self) -> [Participant; 2] {
        [
            Participant::new(Player::Black, self.black_nickname.as_str()),
            Participant::new(Player::White, self.white_nickname.as_str()),
        ]
    }
}
