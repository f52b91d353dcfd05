//! One player's grid: ship cells, shots taken against it, and the
//! fog-of-war view handed to the opponent.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;

pub type BB = BitBoard<u128, BOARD_SIZE>;

const _: () = assert!(BOARD_SIZE * BOARD_SIZE <= u128::BITS as usize);

/// State of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// The opponent's view of a board: only hits and misses, never ships.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct FogOfWar {
    hits: BB,
    misses: BB,
}

impl FogOfWar {
    /// `Hit`, `Miss` or `Empty`; an untouched ship cell reads as `Empty`.
    pub fn cell(&self, coord: Coord) -> Cell {
        if self.hits.contains(coord) {
            Cell::Hit
        } else if self.misses.contains(coord) {
            Cell::Miss
        } else {
            Cell::Empty
        }
    }

    fn record(&mut self, coord: Coord, outcome: ShotOutcome) -> Result<(), BoardError> {
        match outcome {
            ShotOutcome::Hit => self.hits.set(coord)?,
            ShotOutcome::Miss => self.misses.set(coord)?,
        }
        Ok(())
    }
}

impl fmt::Debug for FogOfWar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FogOfWar {{\n  hits: {:?},\n  misses: {:?}\n}}",
            self.hits, self.misses
        )
    }
}

/// Main board state: ship cells, hits and misses.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    ship_map: BB,
    hits: BB,
    misses: BB,
    fog: FogOfWar,
}

impl Board {
    /// Create an empty board (no ships, no shots).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `coord`.
    pub fn cell(&self, coord: Coord) -> Cell {
        if self.hits.contains(coord) {
            Cell::Hit
        } else if self.misses.contains(coord) {
            Cell::Miss
        } else if self.ship_map.contains(coord) {
            Cell::Ship
        } else {
            Cell::Empty
        }
    }

    /// `true` only for the `Empty` state; hits, misses and ships are all
    /// non-empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cell(coord) == Cell::Empty
    }

    /// Occupancy mask of all ship cells, hit or not.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Mask of every cell that is not `Empty`.
    pub(crate) fn occupied(&self) -> BB {
        self.ship_map | self.hits | self.misses
    }

    /// Number of ship cells that have been hit.
    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Number of shots taken against this board.
    pub fn shot_count(&self) -> usize {
        self.hits.count_ones() + self.misses.count_ones()
    }

    /// The view of this board shown to the opponent.
    pub fn fog(&self) -> &FogOfWar {
        &self.fog
    }

    /// Mark every coordinate in `cells` as ship.
    ///
    /// The placement validator must have approved the cells beforehand. The
    /// board is left untouched when a cell cannot be stored.
    pub fn place_ship_cells<I>(&mut self, cells: I) -> Result<(), BoardError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let footprint = BB::from_coords(cells)?;
        debug_assert!((self.occupied() & footprint).is_empty());
        self.ship_map |= footprint;
        Ok(())
    }

    /// Resolve a shot at `coord`, updating both this board and its fog.
    ///
    /// A cell that was already hit or missed is rejected and nothing changes.
    pub fn apply_shot(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        let outcome = match self.cell(coord) {
            Cell::Hit | Cell::Miss => return Err(BoardError::AlreadyShot(coord)),
            Cell::Ship => {
                self.hits.set(coord)?;
                ShotOutcome::Hit
            }
            Cell::Empty => {
                self.misses.set(coord)?;
                ShotOutcome::Miss
            }
        };
        self.fog.record(coord, outcome)?;
        Ok(outcome)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.ship_map, self.hits, self.misses
        )
    }
}
