use std::io::{BufRead, Write};

use anyhow::{bail, Context};

use crate::{
    board::{Board, FogOfWar},
    common::GameError,
    game::{PlacementReport, ShotReport},
    player::Player,
    ship::ShipType,
    ui,
};

pub const HAND_OVER_PROMPT: &str = "Press Enter and pass the move to another player";
pub const GAME_OVER_BANNER: &str = "*****Game Over*****";

/// Terminal player. Both seats of a hot-seat game share one instance.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    pause: bool,
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    /// `pause` controls whether [`Player::hand_over`] waits for Enter.
    pub fn new(input: R, output: W, pause: bool) -> Self {
        Self {
            input,
            output,
            pause,
        }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if n == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn begin_placement(&mut self, name: &str, board: &Board) -> anyhow::Result<()> {
        writeln!(self.output, "{}, place your ships on the game field\n", name)?;
        writeln!(self.output, "{}", ui::render_board(board))?;
        Ok(())
    }

    fn placement_line(
        &mut self,
        _name: &str,
        ship: ShipType,
        _board: &Board,
    ) -> anyhow::Result<String> {
        writeln!(
            self.output,
            "Enter the coordinates of the {} ({} cells):\n",
            ship.name(),
            ship.length()
        )?;
        self.read_line()
    }

    fn shot_line(&mut self, name: &str, own: &Board, target: &FogOfWar) -> anyhow::Result<String> {
        writeln!(self.output, "{}", ui::render_player_view(own, target))?;
        writeln!(self.output, "{}, it's your turn:\n", name)?;
        self.read_line()
    }

    fn handle_rejection(&mut self, _name: &str, error: &GameError) -> anyhow::Result<()> {
        writeln!(self.output, "\nError! {} Try again:\n", error)?;
        Ok(())
    }

    fn handle_placement(&mut self, _report: &PlacementReport, board: &Board) -> anyhow::Result<()> {
        writeln!(self.output, "\n{}", ui::render_board(board))?;
        Ok(())
    }

    fn handle_shot_report(&mut self, report: &ShotReport) -> anyhow::Result<()> {
        writeln!(self.output, "\n{}\n", report)?;
        if report.winner.is_some() {
            writeln!(self.output, "\n{}\n\n", GAME_OVER_BANNER)?;
        }
        Ok(())
    }

    fn hand_over(&mut self) -> anyhow::Result<()> {
        if !self.pause {
            return Ok(());
        }
        writeln!(self.output, "{}", HAND_OVER_PROMPT)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }
}
