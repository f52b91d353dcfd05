//! Ship definitions, placements and sunk detection.

use core::fmt;

use serde::Serialize;

use crate::board::{Board, Cell};
use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// All cells share one row.
    Horizontal,
    /// All cells share one column.
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

/// Endpoints of a validated ship position together with its orientation.
///
/// Only the placement validator builds these, so the span between `bow` and
/// `stern` always lies on one row or one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    bow: Coord,
    stern: Coord,
    orientation: Orientation,
}

impl Placement {
    pub(crate) fn new(bow: Coord, stern: Coord, orientation: Orientation) -> Self {
        Self {
            bow,
            stern,
            orientation,
        }
    }

    /// First coordinate as entered by the player.
    pub fn bow(&self) -> Coord {
        self.bow
    }

    /// Second coordinate as entered by the player.
    pub fn stern(&self) -> Coord {
        self.stern
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Lowest and highest coordinate of the span.
    pub fn ends(&self) -> (Coord, Coord) {
        (self.bow.min(self.stern), self.bow.max(self.stern))
    }

    /// Number of cells in the span.
    pub fn len(&self) -> usize {
        span_len(self.bow, self.stern, self.orientation)
    }

    /// Occupied cells, from the lowest coordinate to the highest.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        span(self.bow, self.stern, self.orientation)
    }
}

/// Number of cells between `a` and `b` inclusive along `orientation`.
pub fn span_len(a: Coord, b: Coord, orientation: Orientation) -> usize {
    match orientation {
        Orientation::Horizontal => a.col().abs_diff(b.col()) + 1,
        Orientation::Vertical => a.row().abs_diff(b.row()) + 1,
    }
}

/// Cells between `a` and `b` inclusive.
///
/// Horizontal spans keep the row of `a` and walk the columns; vertical spans
/// keep the column of `a` and walk the rows.
pub fn span(a: Coord, b: Coord, orientation: Orientation) -> impl Iterator<Item = Coord> {
    let (fixed, lo, hi) = match orientation {
        Orientation::Horizontal => (a.row(), a.col().min(b.col()), a.col().max(b.col())),
        Orientation::Vertical => (a.col(), a.row().min(b.row()), a.row().max(b.row())),
    };
    (lo..=hi).filter_map(move |i| match orientation {
        Orientation::Horizontal => Coord::new(fixed, i),
        Orientation::Vertical => Coord::new(i, fixed),
    })
}

/// One vessel of a fleet, placed or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    placement: Option<Placement>,
}

impl Ship {
    /// An unplaced ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            placement: None,
        }
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Store the endpoints once the placement has been committed to the board.
    pub(crate) fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    /// Occupied cells; empty while the ship is unplaced.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.placement.iter().flat_map(Placement::cells)
    }

    /// A ship is sunk when every cell it occupies is marked hit on `board`.
    /// An unplaced ship is never sunk.
    pub fn is_sunk(&self, board: &Board) -> bool {
        match &self.placement {
            Some(placement) => placement.cells().all(|c| board.cell(c) == Cell::Hit),
            None => false,
        }
    }
}
