//! Implements game-level Othello logic.
//!
//! [`Game`] is the only way to change a board during play. Every placement goes
//! through [`Game::apply_move`], which computes the full [`CaptureSet`] before
//! writing anything, and turns move on only through [`Game::advance_turn`].

use crate::{Board, CellState, Direction, GameConfig, Location, Participant, Player, RulesError};
use std::fmt;
use tracing::{debug, info, instrument};

/// The opposing pieces a placement would flip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureSet {
    player: Player,
    flips: Vec<Location>,
}

impl CaptureSet {
    /// The player who would make the capture.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Captured locations, grouped by direction and nearest first within each run.
    pub fn flips(&self) -> &[Location] {
        &self.flips
    }

    pub fn len(&self) -> usize {
        self.flips.len()
    }

    /// An empty capture set means the placement is illegal.
    pub fn is_empty(&self) -> bool {
        self.flips.is_empty()
    }

    pub fn contains(&self, loc: Location) -> bool {
        self.flips.contains(&loc)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.flips.iter()
    }
}

impl<'a> IntoIterator for &'a CaptureSet {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Piece counts for both players. Empty cells count for nobody.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Count the pieces on `board`.
    pub fn of(board: &Board) -> Self {
        Self {
            black: board.count(Player::Black),
            white: board.count(Player::White),
        }
    }

    pub fn for_player(self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    pub fn total(self) -> usize {
        self.black + self.white
    }

    /// The player with more pieces, or None for a draw.
    pub fn winner(self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Absolute difference between the two counts.
    pub fn margin(self) -> usize {
        self.black.abs_diff(self.white)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Black {} - {} White", self.black, self.white)
    }
}

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The current player is expected to move.
    AwaitingMove,
    /// Terminal. The score is fixed and no placement is legal.
    GameOver(Score),
}

/// What [`Game::advance_turn`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn passed normally to this player.
    Next(Player),
    /// `skipped` had no legal move, so `next` moves again.
    Passed { skipped: Player, next: Player },
    /// Nobody can move any more.
    Finished(Score),
}

/// The complete state of an Othello game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    participants: [Participant; 2],
    to_move: Player,
    phase: Phase,
}

impl Default for Game {
    /// A fresh game with default nicknames.
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl Game {
    /// Start a game from the standard position with Black to move.
    pub fn new(black_nickname: impl Into<String>, white_nickname: impl Into<String>) -> Self {
        Self::from_config(&GameConfig::new(black_nickname, white_nickname))
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::from_position(Board::new(), Player::default(), config)
    }

    /// Start a game from an arbitrary position.
    /// A position in which nobody can move starts out finished. If only the
    /// other side can move, `to_move` passes straight away.
    pub fn from_position(board: Board, to_move: Player, config: &GameConfig) -> Self {
        let mut game = Self {
            board,
            participants: config.participants(),
            to_move,
            phase: Phase::AwaitingMove,
        };
        if let Some(score) = game.check_game_over() {
            game.phase = Phase::GameOver(score);
        } else if !game.has_any_legal_move(to_move) {
            info!(skipped = %to_move, "forced pass at start");
            game.to_move = !to_move;
        }
        game
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn cell_at(&self, loc: Location) -> CellState {
        self.board.get(loc)
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    pub fn participant(&self, player: Player) -> &Participant {
        match player {
            Player::Black => &self.participants[0],
            Player::White => &self.participants[1],
        }
    }

    /// Both participants, black first.
    pub fn participants(&self) -> &[Participant; 2] {
        &self.participants
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// The winner of a finished game. None while playing or after a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver(score) => score.winner(),
            Phase::AwaitingMove => None,
        }
    }

    /// Current piece counts, whether or not the game is over.
    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// Pieces the current player would capture by placing at `loc`.
    pub fn evaluate_capture(&self, loc: Location) -> CaptureSet {
        self.evaluate_capture_for(loc, self.to_move)
    }

    /// Pieces `player` would capture by placing at `loc`.
    /// Every direction is checked independently and all captured runs are kept.
    pub fn evaluate_capture_for(&self, loc: Location, player: Player) -> CaptureSet {
        let flips = Direction::ALL
            .iter()
            .flat_map(|&direction| captured_run(&self.board, loc, direction, player))
            .collect();
        CaptureSet { player, flips }
    }

    /// Whether the current player may place at `loc`.
    pub fn is_legal(&self, loc: Location) -> bool {
        self.is_legal_for(loc, self.to_move)
    }

    /// A placement is legal only on an empty cell, and only if it captures something.
    /// Being next to an opposing piece is not enough.
    pub fn is_legal_for(&self, loc: Location, player: Player) -> bool {
        self.board.get(loc).is_empty()
            && Direction::ALL
                .iter()
                .any(|&direction| !captured_run(&self.board, loc, direction, player).is_empty())
    }

    pub fn has_any_legal_move(&self, player: Player) -> bool {
        Location::all().any(|loc| self.is_legal_for(loc, player))
    }

    /// Every legal placement for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Location> {
        Location::all()
            .filter(|&loc| self.is_legal_for(loc, player))
            .collect()
    }

    /// Place the current player's piece at `loc` and flip everything it captures.
    /// The turn does not change; call [`Game::advance_turn`] afterwards.
    ///
    /// An illegal move leaves the game untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, loc: Location) -> Result<CaptureSet, RulesError> {
        let player = self.to_move;
        let illegal = RulesError::IllegalMove {
            player,
            location: loc,
        };

        if self.is_finished() || !self.board.get(loc).is_empty() {
            debug!("rejected: game over or cell occupied");
            return Err(illegal);
        }

        let captures = self.evaluate_capture(loc);
        if captures.is_empty() {
            debug!("rejected: captures nothing");
            return Err(illegal);
        }

        self.board.set(loc, player);
        for &flip in &captures {
            self.board.set(flip, player);
        }
        debug!(flipped = captures.len(), "move applied");

        Ok(captures)
    }

    /// Hand the turn to the opponent, passing back automatically if they cannot move.
    /// Ends the game when the board is full or neither player can move.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn advance_turn(&mut self) -> TurnOutcome {
        if let Phase::GameOver(score) = self.phase {
            return TurnOutcome::Finished(score);
        }

        if let Some(score) = self.check_game_over() {
            info!(%score, "game over");
            self.phase = Phase::GameOver(score);
            return TurnOutcome::Finished(score);
        }

        let mover = self.to_move;
        let opponent = !mover;
        if self.has_any_legal_move(opponent) {
            self.to_move = opponent;
            return TurnOutcome::Next(opponent);
        }

        // Someone can still move, and it isn't the opponent.
        info!(skipped = %opponent, "forced pass");
        TurnOutcome::Passed {
            skipped: opponent,
            next: mover,
        }
    }

    /// Place at `loc` and advance the turn.
    pub fn play(&mut self, loc: Location) -> Result<TurnOutcome, RulesError> {
        self.apply_move(loc)?;
        Ok(self.advance_turn())
    }

    /// The score, if the board is full or neither player has a legal move.
    pub fn check_game_over(&self) -> Option<Score> {
        let stuck = Player::ALL
            .iter()
            .all(|&player| !self.has_any_legal_move(player));

        if self.board.is_full() || stuck {
            Some(self.score())
        } else {
            None
        }
    }
}

/// The opposing run captured by `player` placing at `from`, looking one way.
/// The run must start right next to `from` and end on one of `player`'s pieces.
fn captured_run(
    board: &Board,
    from: Location,
    direction: Direction,
    player: Player,
) -> Vec<Location> {
    let mut run = Vec::new();
    for (cell, loc) in board.scan(from, direction) {
        match cell.owner() {
            Some(owner) if owner == player => return run,
            Some(_) => run.push(loc),
            None => break,
        }
    }
    Vec::new()
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.phase {
            Phase::AwaitingMove => write!(f, "{} to move", self.participant(self.to_move)),
            Phase::GameOver(score) => write!(f, "Game over: {}", score),
        }
    }
}
