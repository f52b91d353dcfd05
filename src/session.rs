//! Drives a [`GameEngine`] with two agents from placement to the final shot.

use anyhow::bail;
use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::{
    common::{BoardError, GameError},
    game::{GameEngine, Phase, ShotReport},
    player::Player,
};

/// Who answers for each seat.
pub enum Seats<'a> {
    /// One agent plays both seats, as in a hot-seat terminal game.
    Shared(&'a mut dyn Player),
    /// Each seat has its own agent.
    Separate(&'a mut dyn Player, &'a mut dyn Player),
}

impl<'a> Seats<'a> {
    fn seat(&mut self, index: usize) -> &mut (dyn Player + 'a) {
        match self {
            Seats::Shared(p) => &mut **p,
            Seats::Separate(first, _) if index == 0 => &mut **first,
            Seats::Separate(_, second) => &mut **second,
        }
    }
}

/// A parsed placement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementInput {
    Coords(String, String),
    Random,
}

/// Split a placement line into its two coordinates. A blank line means
/// random placement; any other token count is a format error.
pub fn parse_placement_line(line: &str) -> Result<PlacementInput, BoardError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(PlacementInput::Random),
        [a, b] => Ok(PlacementInput::Coords(a.to_string(), b.to_string())),
        _ => Err(BoardError::BadFormat(line.trim().to_string())),
    }
}

/// Per-seat statistics of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatSummary {
    pub name: String,
    pub shots_fired: usize,
    pub hits: usize,
    pub ships_remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub winner: Option<usize>,
    pub winner_name: Option<String>,
    pub players: [SeatSummary; 2],
}

impl GameSummary {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let seat = |i: usize| {
            let target = engine.side(1 - i).board();
            SeatSummary {
                name: engine.side(i).name().to_string(),
                shots_fired: target.shot_count(),
                hits: target.hit_count(),
                ships_remaining: engine.side(i).fleet().remaining(),
            }
        };
        let winner = engine.winner();
        Self {
            winner,
            winner_name: winner.map(|w| engine.side(w).name().to_string()),
            players: [seat(0), seat(1)],
        }
    }
}

/// Play a whole game: both fleets, then alternating shots until one fleet is
/// gone. Rejected inputs are answered by asking the same seat again.
pub fn play<R: Rng>(
    engine: &mut GameEngine,
    seats: &mut Seats<'_>,
    rng: &mut R,
) -> anyhow::Result<GameSummary> {
    for seat in 0..2 {
        place_fleet(engine, seats.seat(seat), seat, rng)?;
    }

    loop {
        let shooter = match engine.phase() {
            Phase::Turn(p) => p,
            Phase::GameOver(_) => break,
            phase => bail!("cannot shoot during {:?}", phase),
        };
        let report = take_shot(engine, seats.seat(shooter), shooter)?;
        seats.seat(1 - shooter).handle_opponent_shot(&report)?;
        if report.winner.is_some() {
            break;
        }
        seats.seat(shooter).hand_over()?;
    }

    Ok(GameSummary::from_engine(engine))
}

fn place_fleet<R: Rng>(
    engine: &mut GameEngine,
    player: &mut dyn Player,
    seat: usize,
    rng: &mut R,
) -> anyhow::Result<()> {
    let name = engine.side(seat).name().to_string();
    player.begin_placement(&name, engine.side(seat).board())?;

    while let Some((p, ship)) = engine.pending_placement() {
        if p != seat {
            break;
        }
        let line = player.placement_line(&name, ship, engine.side(seat).board())?;
        let result = match parse_placement_line(&line) {
            Ok(PlacementInput::Random) => engine.place_random(rng),
            Ok(PlacementInput::Coords(a, b)) => engine.place(&a, &b),
            Err(e) => Err(GameError::from(e)),
        };
        match result {
            Ok(report) => player.handle_placement(&report, engine.side(seat).board())?,
            Err(e) if e.is_recoverable() => {
                debug!("{} placement {:?} rejected: {}", name, line, e);
                player.handle_rejection(&name, &e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    player.hand_over()
}

fn take_shot(
    engine: &mut GameEngine,
    player: &mut dyn Player,
    shooter: usize,
) -> anyhow::Result<ShotReport> {
    let name = engine.side(shooter).name().to_string();
    loop {
        let line = player.shot_line(
            &name,
            engine.side(shooter).board(),
            engine.side(1 - shooter).board().fog(),
        )?;
        match engine.shoot(line.trim()) {
            Ok(report) => {
                player.handle_shot_report(&report)?;
                return Ok(report);
            }
            Err(e) if e.is_recoverable() => {
                debug!("{} shot {:?} rejected: {}", name, line, e);
                player.handle_rejection(&name, &e)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
