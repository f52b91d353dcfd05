//! Board coordinates and their textual form (`A1` .. `J10`).

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, ROW_LABELS};

/// A zero-based (row, column) position that is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Returns `None` when either index is outside the board.
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Neighbour shifted by `(dr, dc)`, if it stays on the board.
    pub fn offset(&self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Coord::new(row, col)
    }

    /// All coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

/// Parse a coordinate such as `A1` or `J10`.
///
/// The first character names the row (`A`..`J`, uppercase only); the rest is
/// the column number `1`..`10` without sign or leading zero. Any other input
/// is rejected as [`BoardError::BadFormat`].
pub fn decode(text: &str) -> Result<Coord, BoardError> {
    let bad = || BoardError::BadFormat(text.to_string());
    if !(2..=3).contains(&text.len()) || !text.is_ascii() {
        return Err(bad());
    }
    let (letter, number) = text.split_at(1);
    let row = ROW_LABELS
        .iter()
        .position(|l| letter.starts_with(*l))
        .ok_or_else(bad)?;
    if number.starts_with('0') || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let col = number
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(bad)?;
    Coord::new(row, col).ok_or_else(bad)
}

/// Textual form of `coord`; the inverse of [`decode`].
pub fn encode(coord: Coord) -> String {
    coord.to_string()
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LABELS[self.row], self.col + 1)
    }
}

impl FromStr for Coord {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
