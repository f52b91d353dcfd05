use core::fmt;

use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::{
    common::{BoardError, GameError, ShotOutcome},
    coord::{decode, Coord},
    ship::{Placement, ShipType},
    side::Side,
};

/// Where the game currently stands. Player indices are 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// The given player is placing ships.
    AwaitingPlacement(usize),
    /// The given player is shooting.
    Turn(usize),
    /// The given player has won.
    GameOver(usize),
}

/// Current status of a game from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A committed ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementReport {
    pub player: usize,
    pub ship: ShipType,
    pub placement: Placement,
    /// This was the player's last ship.
    pub fleet_ready: bool,
}

/// Everything a resolved shot produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: usize,
    pub shooter_name: String,
    pub target: Coord,
    pub outcome: ShotOutcome,
    /// The ship sunk by this shot.
    pub sunk: Option<ShipType>,
    /// Set when this shot ended the game.
    pub winner: Option<usize>,
}

impl fmt::Display for ShotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.winner, self.sunk, self.outcome) {
            (Some(_), _, _) => write!(
                f,
                "You sank the last ship. You won. Congratulations!\nThe winner is {}",
                self.shooter_name
            ),
            (None, Some(_), _) => write!(f, "You sank a ship! Specify a new target"),
            (None, None, ShotOutcome::Hit) => write!(f, "You hit a ship!"),
            (None, None, ShotOutcome::Miss) => write!(f, "You missed!"),
        }
    }
}

/// Turn controller for a two-player game.
///
/// Players place their fleets one after the other, then shoot alternately
/// until one fleet is gone. A hit does not earn an extra shot.
#[derive(Debug, Clone)]
pub struct GameEngine {
    sides: [Side; 2],
    phase: Phase,
}

impl GameEngine {
    /// A fresh game; the first player places first and shoots first.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            sides: [Side::new(first), Side::new(second)],
            phase: Phase::AwaitingPlacement(0),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side of player `index` (0 or 1).
    ///
    /// # Panics
    /// If `index` is not 0 or 1.
    pub fn side(&self, index: usize) -> &Side {
        &self.sides[index]
    }

    pub fn winner(&self) -> Option<usize> {
        match self.phase {
            Phase::GameOver(w) => Some(w),
            _ => None,
        }
    }

    pub fn status(&self, player: usize) -> GameStatus {
        match self.winner() {
            None => GameStatus::InProgress,
            Some(w) if w == player => GameStatus::Won,
            Some(_) => GameStatus::Lost,
        }
    }

    /// Player and ship that the next placement is for.
    pub fn pending_placement(&self) -> Option<(usize, ShipType)> {
        match self.phase {
            Phase::AwaitingPlacement(p) => self.sides[p].pending_ship().map(|t| (p, t)),
            _ => None,
        }
    }

    fn placing_player(&self) -> Result<usize, GameError> {
        match self.phase {
            Phase::AwaitingPlacement(p) => Ok(p),
            Phase::GameOver(_) => Err(GameError::GameOver),
            phase => Err(GameError::WrongPhase(phase)),
        }
    }

    /// Place the pending ship from two coordinate strings.
    pub fn place(&mut self, cord1: &str, cord2: &str) -> Result<PlacementReport, GameError> {
        let p = self.placing_player()?;
        let (ship, placement) = self.sides[p].deploy(cord1, cord2)?;
        Ok(self.placed(p, ship, placement))
    }

    /// Place the pending ship from two decoded endpoints.
    pub fn place_coords(&mut self, a: Coord, b: Coord) -> Result<PlacementReport, GameError> {
        let p = self.placing_player()?;
        let (ship, placement) = self.sides[p].deploy_coords(a, b)?;
        Ok(self.placed(p, ship, placement))
    }

    /// Place the pending ship at a random legal position.
    pub fn place_random<R: Rng>(&mut self, rng: &mut R) -> Result<PlacementReport, GameError> {
        let p = self.placing_player()?;
        let (ship, placement) = self.sides[p].deploy_random(rng)?;
        Ok(self.placed(p, ship, placement))
    }

    fn placed(&mut self, player: usize, ship: ShipType, placement: Placement) -> PlacementReport {
        let (lo, hi) = placement.ends();
        debug!(
            "{} placed {} at {}-{} ({:?})",
            self.sides[player].name(),
            ship,
            lo,
            hi,
            placement.orientation()
        );
        let fleet_ready = self.sides[player].fleet().is_deployed();
        if fleet_ready {
            self.phase = if player == 0 {
                Phase::AwaitingPlacement(1)
            } else {
                Phase::Turn(0)
            };
            info!(
                "{} fleet ready, next phase {:?}",
                self.sides[player].name(),
                self.phase
            );
        }
        PlacementReport {
            player,
            ship,
            placement,
            fleet_ready,
        }
    }

    /// Fire at the coordinate written in `text` for the current shooter.
    pub fn shoot(&mut self, text: &str) -> Result<ShotReport, GameError> {
        self.shooting_player()?;
        let coord = decode(text).map_err(|_| BoardError::BadTarget(text.to_string()))?;
        self.fire(coord)
    }

    fn shooting_player(&self) -> Result<usize, GameError> {
        match self.phase {
            Phase::Turn(p) => Ok(p),
            Phase::GameOver(_) => Err(GameError::GameOver),
            phase => Err(GameError::WrongPhase(phase)),
        }
    }

    /// Fire at `coord` for the current shooter.
    ///
    /// A cell that was already shot is rejected with
    /// [`crate::BoardError::AlreadyShot`]; the board is untouched and the same
    /// player keeps the turn.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotReport, GameError> {
        let shooter = self.shooting_player()?;
        let defender = 1 - shooter;
        let impact = match self.sides[defender].receive_shot(coord) {
            Ok(impact) => impact,
            Err(e) => {
                debug!(
                    "{} rejected shot at {}: {}",
                    self.sides[shooter].name(),
                    coord,
                    e
                );
                return Err(e.into());
            }
        };

        let winner = impact.fleet_destroyed.then_some(shooter);
        self.phase = match winner {
            Some(w) => Phase::GameOver(w),
            None => Phase::Turn(defender),
        };

        debug!(
            "{} fired at {} -> {:?}",
            self.sides[shooter].name(),
            coord,
            impact.outcome
        );
        if let Some(ship) = impact.sunk {
            info!(
                "{} sank the {} of {}",
                self.sides[shooter].name(),
                ship,
                self.sides[defender].name()
            );
        }
        if winner.is_some() {
            info!("{} wins", self.sides[shooter].name());
        }

        Ok(ShotReport {
            shooter,
            shooter_name: self.sides[shooter].name().to_string(),
            target: coord,
            outcome: impact.outcome,
            sunk: impact.sunk,
            winner,
        })
    }
}
