//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Column letters, left to right.
pub(crate) const COLUMN_LABELS: &str = "ABCDEFGH";

/// Lay out one symbol per cell as an 8x8 grid with algebraic labels on both axes.
/// `symbols` is consumed in row-major order and must yield exactly 64 items.
pub(crate) fn format_grid<I>(symbols: I, f: &mut Formatter) -> fmt::Result
where
    I: IntoIterator<Item = char>,
{
    let mut symbols = symbols.into_iter();

    write!(f, "  ")?;
    for label in COLUMN_LABELS.chars() {
        write!(f, " {}", label)?;
    }

    for row in 1..=EDGE_LENGTH {
        write!(f, "\n{} ", row)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", symbols.next().ok_or(fmt::Error)?)?;
        }
    }

    // Leftover symbols mean the caller's board was not 8x8.
    symbols.next().map_or(Ok(()), |_| Err(fmt::Error))
}
