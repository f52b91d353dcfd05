use std::collections::VecDeque;

use anyhow::anyhow;

use crate::{
    board::{Board, FogOfWar},
    common::GameError,
    game::{PlacementReport, ShotReport},
    player::Player,
    ship::ShipType,
};

/// Agent that answers every request with the next line of a script and keeps
/// a transcript of what it was told.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    lines: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// One move per line; blank lines are kept since they request random
    /// placement.
    pub fn from_script(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    fn next_line(&mut self, name: &str) -> anyhow::Result<String> {
        self.lines
            .pop_front()
            .ok_or_else(|| anyhow!("script for {} ran out of moves", name))
    }
}

impl Player for ScriptedPlayer {
    fn placement_line(
        &mut self,
        name: &str,
        _ship: ShipType,
        _board: &Board,
    ) -> anyhow::Result<String> {
        self.next_line(name)
    }

    fn shot_line(
        &mut self,
        name: &str,
        _own: &Board,
        _target: &FogOfWar,
    ) -> anyhow::Result<String> {
        self.next_line(name)
    }

    fn handle_rejection(&mut self, name: &str, error: &GameError) -> anyhow::Result<()> {
        self.transcript.push(format!("{}: rejected: {}", name, error));
        Ok(())
    }

    fn handle_placement(&mut self, report: &PlacementReport, _board: &Board) -> anyhow::Result<()> {
        let (lo, hi) = report.placement.ends();
        self.transcript
            .push(format!("placed {} at {} {}", report.ship, lo, hi));
        Ok(())
    }

    fn handle_shot_report(&mut self, report: &ShotReport) -> anyhow::Result<()> {
        self.transcript.push(report.to_string());
        Ok(())
    }

    fn handle_opponent_shot(&mut self, report: &ShotReport) -> anyhow::Result<()> {
        self.transcript.push(format!(
            "{} fired at {}: {:?}",
            report.shooter_name, report.target, report.outcome
        ));
        Ok(())
    }
}
