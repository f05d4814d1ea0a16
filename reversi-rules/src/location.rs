//! Code for working with [`Location`]s on the Othello board.

use crate::utils::COLUMN_LABELS;
use crate::{RulesError, EDGE_LENGTH};
use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

/// A cell on the Othello board, always in bounds.
///
/// Row 0 is the top of the board and column 0 the left edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Location {
    row: u8,
    col: u8,
}

/// One of the eight unit steps between neighbouring cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    pub const NORTH: Self = Self::new(-1, 0);
    pub const NORTH_EAST: Self = Self::new(-1, 1);
    pub const EAST: Self = Self::new(0, 1);
    pub const SOUTH_EAST: Self = Self::new(1, 1);
    pub const SOUTH: Self = Self::new(1, 0);
    pub const SOUTH_WEST: Self = Self::new(1, -1);
    pub const WEST: Self = Self::new(0, -1);
    pub const NORTH_WEST: Self = Self::new(-1, -1);

    /// Every direction, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::NORTH,
        Self::NORTH_EAST,
        Self::EAST,
        Self::SOUTH_EAST,
        Self::SOUTH,
        Self::SOUTH_WEST,
        Self::WEST,
        Self::NORTH_WEST,
    ];

    const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

impl Location {
    /// Build a location from row and column coordinates.
    pub fn new(row: usize, col: usize) -> Result<Self, RulesError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(RulesError::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Convert from a row-major square index (0 is the top left, 63 the bottom right).
    pub fn from_index(index: usize) -> Result<Self, RulesError> {
        Self::new(index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// Every location on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..EDGE_LENGTH as u8)
            .flat_map(|row| (0..EDGE_LENGTH as u8).map(move |col| Location { row, col }))
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row() * EDGE_LENGTH + self.col()
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// The neighbouring cell in `direction`, or None past the edge.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let row = self.row as i8 + direction.d_row;
        let col = self.col as i8 + direction.d_col;
        let range = 0..EDGE_LENGTH as i8;
        if range.contains(&row) && range.contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl TryFrom<(usize, usize)> for Location {
    type Error = RulesError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Location> for (usize, usize) {
    fn from(loc: Location) -> Self {
        loc.to_coords()
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        let col_str = COLUMN_LABELS.chars().nth(self.col()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display("invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::new(row - 1, col).or(Err(ParseLocationError))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_coords() {
        let loc = Location::new(2, 3).unwrap();
        assert_eq!(loc.to_coords(), (2, 3));
        assert_eq!(loc.to_index(), 19);
    }

    #[test]
    fn location_out_of_bounds() {
        assert_eq!(
            Location::new(0, 8),
            Err(RulesError::OutOfBounds { row: 0, col: 8 })
        );
        assert_eq!(
            Location::new(8, 0),
            Err(RulesError::OutOfBounds { row: 8, col: 0 })
        );
        assert!(Location::from_index(64).is_err());
    }

    #[test]
    fn location_index_round_trip() {
        for index in 0..64 {
            assert_eq!(Location::from_index(index).unwrap().to_index(), index);
        }
    }

    #[test]
    fn all_is_row_major() {
        let all: Vec<Location> = Location::all().collect();
        assert_eq!(all.len(), 64);
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(all[9], Location::new(1, 1).unwrap());
    }

    #[test]
    fn step_stops_at_edges() {
        let corner = Location::new(0, 0).unwrap();
        assert_eq!(corner.step(Direction::NORTH), None);
        assert_eq!(corner.step(Direction::WEST), None);
        assert_eq!(corner.step(Direction::NORTH_EAST), None);
        assert_eq!(
            corner.step(Direction::SOUTH_EAST),
            Some(Location::new(1, 1).unwrap())
        );

        let far = Location::new(7, 7).unwrap();
        assert_eq!(far.step(Direction::SOUTH), None);
        assert_eq!(far.step(Direction::EAST), None);
        assert_eq!(
            far.step(Direction::NORTH_WEST),
            Some(Location::new(6, 6).unwrap())
        );
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1").unwrap(), Location::new(0, 0).unwrap());
        assert_eq!(Location::from_str("h8").unwrap(), Location::new(7, 7).unwrap());
        assert_eq!(Location::from_str("D3").unwrap(), Location::new(2, 3).unwrap());
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::new(7, 7).unwrap().to_string(), "H8");
        assert_eq!(Location::new(0, 0).unwrap().to_string(), "A1");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "F6");
    }
}
