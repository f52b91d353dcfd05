//! One participant: a name, a board and a fleet.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::placement;
use crate::ship::{Placement, ShipType};

/// What a shot did to the side that received it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Impact {
    pub outcome: ShotOutcome,
    /// The ship this shot finished off, if any.
    pub sunk: Option<ShipType>,
    /// No ship of the fleet remains afloat.
    pub fleet_destroyed: bool,
}

/// A committed ship and where it went.
pub type Deployment = Result<(ShipType, Placement), BoardError>;

#[derive(Debug, Clone)]
pub struct Side {
    name: String,
    board: Board,
    fleet: Fleet,
}

impl Side {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board: Board::new(),
            fleet: Fleet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// The ship that the next placement is for.
    pub fn pending_ship(&self) -> Option<ShipType> {
        self.fleet.next_unplaced().map(|(_, t)| t)
    }

    /// Validate and commit a placement for the pending ship.
    pub fn deploy(&mut self, cord1: &str, cord2: &str) -> Deployment {
        let ship_type = self.pending_ship().ok_or(BoardError::ShipAlreadyPlaced)?;
        let placement = placement::validate(&self.board, ship_type, cord1, cord2)?;
        self.commit(ship_type, placement)
    }

    /// Same as [`Side::deploy`] with decoded endpoints.
    pub fn deploy_coords(&mut self, a: Coord, b: Coord) -> Deployment {
        let ship_type = self.pending_ship().ok_or(BoardError::ShipAlreadyPlaced)?;
        let placement = placement::validate_coords(&self.board, ship_type, a, b)?;
        self.commit(ship_type, placement)
    }

    /// Put the pending ship at a random legal position.
    pub fn deploy_random<R: Rng>(&mut self, rng: &mut R) -> Deployment {
        let ship_type = self.pending_ship().ok_or(BoardError::ShipAlreadyPlaced)?;
        let placement = placement::random_placement(&self.board, ship_type, rng)?;
        self.commit(ship_type, placement)
    }

    fn commit(&mut self, ship_type: ShipType, placement: Placement) -> Deployment {
        self.board.place_ship_cells(placement.cells())?;
        self.fleet.assign(placement)?;
        Ok((ship_type, placement))
    }

    /// Resolve an incoming shot and update the remaining-ship count.
    pub fn receive_shot(&mut self, coord: Coord) -> Result<Impact, BoardError> {
        let outcome = self.board.apply_shot(coord)?;
        let mut sunk = None;
        if outcome == ShotOutcome::Hit {
            let newly = self.fleet.newly_sunk(&self.board);
            sunk = newly
                .first()
                .map(|&i| self.fleet.ships()[i].ship_type());
            self.fleet.mark_sunk(&newly);
        }
        Ok(Impact {
            outcome,
            sunk,
            fleet_destroyed: self.is_defeated(),
        })
    }

    /// Every ship has been placed and sunk.
    pub fn is_defeated(&self) -> bool {
        self.fleet.is_deployed() && self.fleet.remaining() == 0
    }
}
