//! Text rendering of boards for the terminal front end.

use core::fmt::Write;

use crate::board::{Board, Cell, FogOfWar};
use crate::config::{BOARD_SIZE, ROW_LABELS};
use crate::coord::Coord;

/// Separator printed between the opponent's view and the player's own board.
pub const VIEW_SEPARATOR: &str = "---------------------";

/// Character shown for a cell.
pub fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '~',
        Cell::Ship => 'O',
        Cell::Hit => 'X',
        Cell::Miss => 'M',
    }
}

/// Render a grid with column numbers on top and row letters on the left.
pub fn render_grid<F>(cell_at: F) -> String
where
    F: Fn(Coord) -> Cell,
{
    let mut out = String::from(" ");
    for c in 1..=BOARD_SIZE {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for (r, label) in ROW_LABELS.iter().enumerate() {
        out.push(*label);
        for c in 0..BOARD_SIZE {
            let cell = Coord::new(r, c).map_or(Cell::Empty, &cell_at);
            out.push(' ');
            out.push(symbol(cell));
        }
        out.push('\n');
    }
    out
}

/// A player's own board, ships included.
pub fn render_board(board: &Board) -> String {
    render_grid(|c| board.cell(c))
}

/// The opponent's view of a board.
pub fn render_fog(fog: &FogOfWar) -> String {
    render_grid(|c| fog.cell(c))
}

/// What the shooter sees before firing: the target's fog on top, then their
/// own board.
pub fn render_player_view(own: &Board, target: &FogOfWar) -> String {
    format!(
        "{}{}\n{}",
        render_fog(target),
        VIEW_SEPARATOR,
        render_board(own)
    )
}
