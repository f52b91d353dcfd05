use crate::{
    board::{Board, FogOfWar},
    common::GameError,
    game::{PlacementReport, ShotReport},
    ship::ShipType,
};

/// Interface implemented by anything that can sit at the table: a person at
/// a terminal or a scripted sequence of moves.
///
/// Every method receives the name of the seat it is acting for, so a single
/// agent can serve both seats of a hot-seat game.
pub trait Player {
    /// Announce that `name` starts placing ships on `board`.
    fn begin_placement(&mut self, _name: &str, _board: &Board) -> anyhow::Result<()> {
        Ok(())
    }

    /// A line holding two coordinates for `ship`. An empty line asks for a
    /// random position.
    fn placement_line(&mut self, name: &str, ship: ShipType, board: &Board)
        -> anyhow::Result<String>;

    /// A line holding the coordinate to fire at.
    fn shot_line(&mut self, name: &str, own: &Board, target: &FogOfWar) -> anyhow::Result<String>;

    /// The last input was refused; another one will be requested.
    fn handle_rejection(&mut self, _name: &str, _error: &GameError) -> anyhow::Result<()> {
        Ok(())
    }

    /// A ship was committed to `board`.
    fn handle_placement(
        &mut self,
        _report: &PlacementReport,
        _board: &Board,
    ) -> anyhow::Result<()> {
        Ok(())
    }

    /// Result of this player's own shot.
    fn handle_shot_report(&mut self, _report: &ShotReport) -> anyhow::Result<()> {
        Ok(())
    }

    /// The opponent fired at this player's board.
    fn handle_opponent_shot(&mut self, _report: &ShotReport) -> anyhow::Result<()> {
        Ok(())
    }

    /// Pass control to the other seat.
    fn hand_over(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
