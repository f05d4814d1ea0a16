//! The 8x8 grid of cells and straight-line scans across it.
//!
//! A [`Board`] stores any position at all: it never checks that a placement is legal.
//! During play the board is owned by a [`Game`](crate::Game), which only hands out
//! shared references, so the rules are always enforced before anything is written.

use crate::{utils, Direction, Location, Player, RulesError, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;
use std::iter::FusedIterator;

/// What is on a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Occupied(Player),
}

impl CellState {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// The player whose piece sits here, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Occupied(player) => Some(player),
        }
    }

    #[inline]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == CellState::Occupied(player)
    }

    fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Occupied(Player::Black) => 'X',
            CellState::Occupied(Player::White) => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '-' => Some(CellState::Empty),
            'X' | 'x' | 'B' | 'b' | '#' => Some(CellState::Occupied(Player::Black)),
            'O' | 'o' | 'W' | 'w' => Some(CellState::Occupied(Player::White)),
            _ => None,
        }
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        CellState::Occupied(player)
    }
}

/// An 8x8 Othello board in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[CellState; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[CellState::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// The standard starting position: white on D4 and E5, black on E4 and D5.
    pub fn new() -> Self {
        const W: CellState = CellState::Occupied(Player::White);
        const B: CellState = CellState::Occupied(Player::Black);

        let mut board = Self::empty();
        board.cells[3][3] = W;
        board.cells[4][4] = W;
        board.cells[3][4] = B;
        board.cells[4][3] = B;
        board
    }

    #[inline]
    pub fn get(&self, loc: Location) -> CellState {
        self.cells[loc.row()][loc.col()]
    }

    /// Look up a cell by raw coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, RulesError> {
        Location::new(row, col).map(|loc| self.get(loc))
    }

    /// Put `player`'s piece on `loc`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, loc: Location, player: Player) {
        self.cells[loc.row()][loc.col()] = CellState::Occupied(player);
    }

    /// Walk from `from` (exclusive) toward the edge in `direction`.
    pub fn scan(&self, from: Location, direction: Direction) -> Ray<'_> {
        Ray {
            board: self,
            next: from.step(direction),
            direction,
        }
    }

    /// Every cell with its location, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, CellState)> + '_ {
        Location::all().map(move |loc| (loc, self.get(loc)))
    }

    /// Number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| cell.is_owned_by(player))
            .count()
    }

    pub fn count_empty(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_empty()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }
}

/// The cells met walking in one direction from a starting cell, nearest first.
///
/// Produced by [`Board::scan`]. Ends at the edge of the board.
#[derive(Clone, Debug)]
pub struct Ray<'a> {
    board: &'a Board,
    next: Option<Location>,
    direction: Direction,
}

impl Iterator for Ray<'_> {
    type Item = (CellState, Location);

    fn next(&mut self) -> Option<Self::Item> {
        let loc = self.next?;
        self.next = loc.step(self.direction);
        Some((self.board.get(loc), loc))
    }
}

impl FusedIterator for Ray<'_> {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.cells().map(|(_, cell)| cell.symbol()), f)
    }
}

#[derive(Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display("unexpected character {found:?} in board string")]
    InvalidCharacter { found: char },
    #[display("expected 64 cells, found {found}")]
    WrongCellCount { found: usize },
}

/// Parse a board diagram of 64 cell symbols in row-major order.
/// `X`, `B` or `#` is black, `O` or `W` is white, `.` or `-` is empty.
/// Whitespace is ignored, so the diagram may be split across lines.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                CellState::from_symbol(c).ok_or(ParseBoardError::InvalidCharacter { found: c })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if symbols.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongCellCount {
                found: symbols.len(),
            });
        }

        let mut board = Board::empty();
        for (loc, cell) in Location::all().zip(symbols) {
            board.cells[loc.row()][loc.col()] = cell;
        }
        Ok(board)
    }
}
