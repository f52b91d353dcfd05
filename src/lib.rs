mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod logging;
pub mod placement;
mod player;
mod player_cli;
mod player_scripted;
pub mod session;
mod ship;
mod side;
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use fleet::*;
pub use game::*;
pub use logging::{init_logging, level_from_env};
pub use player::*;
pub use player_cli::*;
pub use player_scripted::*;
pub use session::{play, GameSummary, SeatSummary, Seats};
pub use ship::*;
pub use side::*;
