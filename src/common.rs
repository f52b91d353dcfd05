//! Common types for Battleship: board errors, game errors and shot outcomes.

use serde::Serialize;
use thiserror::Error;

use crate::bitboard::BitBoardError;
use crate::coord::Coord;
use crate::game::Phase;

/// Result of a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShotOutcome {
    /// The shot landed on open water.
    Miss,
    /// The shot struck a ship segment.
    Hit,
}

/// Errors returned by board, placement and shot operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate text does not match `A1`..`J10`.
    #[error("Improper format of one or both of the coordinates! Got {0:?}.")]
    BadFormat(String),
    /// Shot text does not match `A1`..`J10`.
    #[error("Improper format of the target! Got {0:?}.")]
    BadTarget(String),
    /// The two endpoints are neither on one row nor on one column.
    #[error("Wrong ship orientation!")]
    BadOrientation,
    /// The span between the endpoints has the wrong number of cells.
    #[error("Wrong length of the {ship}! Expected {expected} cells, got {actual}.")]
    WrongLength {
        ship: &'static str,
        expected: usize,
        actual: usize,
    },
    /// The span covers a cell already holding a ship.
    #[error("Your ship intercepts another one.")]
    Overlap,
    /// The span touches another ship without a cell of water between them.
    #[error("Your ship is too close to another one.")]
    TooClose,
    /// The target cell was already hit or missed.
    #[error("{0} was already targeted.")]
    AlreadyShot(Coord),
    /// Every ship of the fleet is already placed.
    #[error("Every ship is already placed on the board.")]
    ShipAlreadyPlaced,
    /// No placement for the ship fits anywhere on the board.
    #[error("Unable to place ship.")]
    UnableToPlaceShip,
    /// Underlying bitboard error.
    #[error("BitBoard error: {0}.")]
    BitBoardError(#[from] BitBoardError),
}

impl BoardError {
    /// `true` for rejections caused by player input, which the caller answers
    /// by asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BoardError::BadFormat(_)
                | BoardError::BadTarget(_)
                | BoardError::BadOrientation
                | BoardError::WrongLength { .. }
                | BoardError::Overlap
                | BoardError::TooClose
                | BoardError::AlreadyShot(_)
        )
    }
}

/// Errors returned by the turn controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The action does not belong to the current phase.
    #[error("Action not allowed in phase {0:?}.")]
    WrongPhase(Phase),
    /// The game has a winner; nothing more can happen.
    #[error("The game is already over.")]
    GameOver,
}

impl GameError {
    /// `true` when the same player should simply be asked again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            GameError::Board(e) => e.is_recoverable(),
            GameError::WrongPhase(_) | GameError::GameOver => false,
        }
    }
}
