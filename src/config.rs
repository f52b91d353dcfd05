use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Aircraft Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in one fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Row letters, indexed by row.
pub const ROW_LABELS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

pub const DEFAULT_PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";
