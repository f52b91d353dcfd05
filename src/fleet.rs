use crate::board::Board;
use crate::common::BoardError;
use crate::config::{NUM_SHIPS, SHIPS};
use crate::ship::{Placement, Ship, ShipType};

/// The fixed five-ship fleet of one player, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: [Ship; NUM_SHIPS],
    sunk: [bool; NUM_SHIPS],
    remaining: usize,
}

impl Fleet {
    /// The standard fleet with nothing placed and nothing sunk.
    pub fn new() -> Self {
        Self {
            ships: SHIPS.map(Ship::new),
            sunk: [false; NUM_SHIPS],
            remaining: NUM_SHIPS,
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Index and type of the first ship still waiting for a position.
    pub fn next_unplaced(&self) -> Option<(usize, ShipType)> {
        self.ships
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_placed())
            .map(|(i, s)| (i, s.ship_type()))
    }

    /// `true` once every ship has a position.
    pub fn is_deployed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Record the position of the next unplaced ship.
    pub(crate) fn assign(&mut self, placement: Placement) -> Result<usize, BoardError> {
        let (index, _) = self.next_unplaced().ok_or(BoardError::ShipAlreadyPlaced)?;
        self.ships[index].set_placement(placement);
        Ok(index)
    }

    /// Ships still afloat.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_sunk(&self, index: usize) -> bool {
        self.sunk.get(index).copied().unwrap_or(false)
    }

    /// Indices of ships that are sunk on `board` but not yet counted as such.
    /// Read-only; pair with [`Fleet::mark_sunk`].
    pub fn newly_sunk(&self, board: &Board) -> Vec<usize> {
        self.ships
            .iter()
            .enumerate()
            .filter(|(i, ship)| !self.sunk[*i] && ship.is_sunk(board))
            .map(|(i, _)| i)
            .collect()
    }

    /// Take the given ships out of the remaining count.
    pub fn mark_sunk(&mut self, indices: &[usize]) {
        for &i in indices {
            if let Some(flag) = self.sunk.get_mut(i) {
                if !*flag {
                    *flag = true;
                    self.remaining -= 1;
                }
            }
        }
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}
