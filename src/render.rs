//! Text grids of the board.

use alloc::string::String;
use alloc::vec;

use crate::config::{inside_board, BOARD_SIZE};
use crate::position::Position;

/// Character for cells not listed.
pub const EMPTY_MARKER: char = '.';
/// Marker for fired-upon cells.
pub const SHOT_MARKER: char = 'X';
/// Marker for cells occupied by the fleet.
pub const SHIP_MARKER: char = '#';

/// Render a `BOARD_SIZE`×`BOARD_SIZE` grid, row-major, one row per line,
/// with `marker` at each listed cell. Cells off the board are skipped.
pub fn board_grid<'a, I>(positions: I, marker: char) -> String
where
    I: IntoIterator<Item = &'a Position>,
{
    const SIZE: usize = BOARD_SIZE as usize;
    let mut map = vec![[EMPTY_MARKER; SIZE]; SIZE];
    for pos in positions {
        if inside_board(pos.row(), pos.column()) {
            map[pos.row() as usize][pos.column() as usize] = marker;
        }
    }
    let mut out = String::with_capacity(SIZE * (SIZE + 1));
    for row in &map {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
