//! `reversi-rules` is a complete rules engine for Reversi (Othello) on an 8x8 board.
//!
//! The crate is split into two levels:
//!
//!  - [`Board`] holds the grid of [`CellState`]s and knows how to walk it in a straight
//!    line. It performs no legality checking and will happily store any position.
//!  - [`Game`] owns a board, the two [`Participant`]s and the turn, and is the only way
//!    to change a board during play. It computes captures, rejects illegal moves,
//!    handles forced passes and decides when the game is over.
//!
//! Nothing here renders or reads input; front ends read [`Game::current_player`],
//! [`Game::cell_at`] and [`Game::check_game_over`] and format the result themselves.

pub mod test_utils;

mod board;
mod config;
mod error;
mod game;
mod location;
mod player;
mod utils;

pub use board::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use location::*;
pub use player::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
