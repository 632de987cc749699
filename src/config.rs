//! Fixed game parameters.

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 10;

/// Nominal number of ships in a fleet.
pub const FLEET_SIZE: usize = 10;

/// Shots fired by a single `rajada` command.
pub const SHOTS_PER_ROUND: usize = 3;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "NAVAL_BATTLE_LOG";

pub const BARGE_TOKEN: &str = "barca";
pub const CARAVEL_TOKEN: &str = "caravela";
pub const CARRACK_TOKEN: &str = "nau";
pub const FRIGATE_TOKEN: &str = "fragata";
pub const GALLEON_TOKEN: &str = "galeao";

/// Returns `true` if `(row, column)` lies on the playable board.
pub fn inside_board(row: i32, column: i32) -> bool {
    (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&column)
}
