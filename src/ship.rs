//! Ship kinds, their shapes and per-ship hit tracking.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use crate::common::ShipError;
use crate::compass::Compass;
use crate::config::{BARGE_TOKEN, CARAVEL_TOKEN, CARRACK_TOKEN, FRIGATE_TOKEN, GALLEON_TOKEN};
use crate::position::Position;

/// Galleon cell offsets `(row, column)` relative to the anchor, per facing.
/// These are five hand-drawn shapes, not rotations of one another.
const GALLEON_NORTH: [(i32, i32); 5] = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)];
const GALLEON_SOUTH: [(i32, i32); 5] = [(0, 0), (1, 0), (2, -1), (2, 0), (2, 1)];
const GALLEON_EAST: [(i32, i32); 5] = [(0, 0), (1, -2), (1, -1), (1, 0), (2, 0)];
const GALLEON_WEST: [(i32, i32); 5] = [(0, 0), (1, 0), (1, 1), (1, 2), (2, 0)];

/// The five kinds of ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Barge,
    Caravel,
    Carrack,
    Frigate,
    Galleon,
}

impl ShipKind {
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Barge,
        ShipKind::Caravel,
        ShipKind::Carrack,
        ShipKind::Frigate,
        ShipKind::Galleon,
    ];

    /// Look up a kind by its input token (`barca`, `caravela`, ...).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            BARGE_TOKEN => Some(ShipKind::Barge),
            CARAVEL_TOKEN => Some(ShipKind::Caravel),
            CARRACK_TOKEN => Some(ShipKind::Carrack),
            FRIGATE_TOKEN => Some(ShipKind::Frigate),
            GALLEON_TOKEN => Some(ShipKind::Galleon),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            ShipKind::Barge => BARGE_TOKEN,
            ShipKind::Caravel => CARAVEL_TOKEN,
            ShipKind::Carrack => CARRACK_TOKEN,
            ShipKind::Frigate => FRIGATE_TOKEN,
            ShipKind::Galleon => GALLEON_TOKEN,
        }
    }

    /// Category name as reported by [`Ship::category`].
    pub fn name(&self) -> &'static str {
        match self {
            ShipKind::Barge => "Barca",
            ShipKind::Caravel => "Caravela",
            ShipKind::Carrack => "Nau",
            ShipKind::Frigate => "Fragata",
            ShipKind::Galleon => "Galeao",
        }
    }

    /// Number of cells a ship of this kind occupies.
    pub fn size(&self) -> usize {
        match self {
            ShipKind::Barge => 1,
            ShipKind::Caravel => 2,
            ShipKind::Carrack => 3,
            ShipKind::Frigate => 4,
            ShipKind::Galleon => 5,
        }
    }

    /// Cells occupied by this kind at `anchor` facing `bearing`. Offsets
    /// wrap on overflow; the fleet's bounds check rejects such ships.
    fn layout(&self, bearing: Compass, anchor: &Position) -> Result<Vec<Position>, ShipError> {
        let (r, c) = (anchor.row(), anchor.column());
        let invalid = || ShipError::InvalidFacing {
            category: self.name(),
            bearing,
        };
        let cells: Vec<Position> = match self {
            // A barge accepts any facing, even an unknown one.
            ShipKind::Barge => alloc::vec![Position::new(r, c)],
            ShipKind::Caravel | ShipKind::Carrack | ShipKind::Frigate => {
                let len = self.size() as i32;
                match bearing {
                    Compass::North | Compass::South => {
                        (0..len).map(|i| Position::new(r.wrapping_add(i), c)).collect()
                    }
                    Compass::East | Compass::West => {
                        (0..len).map(|i| Position::new(r, c.wrapping_add(i))).collect()
                    }
                    Compass::Unknown => return Err(invalid()),
                }
            }
            ShipKind::Galleon => {
                let offsets = match bearing {
                    Compass::North => &GALLEON_NORTH,
                    Compass::South => &GALLEON_SOUTH,
                    Compass::East => &GALLEON_EAST,
                    Compass::West => &GALLEON_WEST,
                    Compass::Unknown => return Err(invalid()),
                };
                offsets
                    .iter()
                    .map(|&(dr, dc)| Position::new(r.wrapping_add(dr), c.wrapping_add(dc)))
                    .collect()
            }
        };
        Ok(cells)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship with its occupied cells. The cells are fixed at construction;
/// only their hit flags change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    bearing: Compass,
    anchor: Position,
    positions: Vec<Position>,
}

impl Ship {
    /// Build a ship from its category token, e.g. `"galeao"`.
    pub fn build(token: &str, bearing: Compass, anchor: Position) -> Result<Self, ShipError> {
        let kind = ShipKind::from_token(token)
            .ok_or_else(|| ShipError::UnknownCategory(token.to_string()))?;
        Ship::new(kind, bearing, anchor)
    }

    /// Build a ship of `kind` anchored at `anchor`.
    pub fn new(kind: ShipKind, bearing: Compass, anchor: Position) -> Result<Self, ShipError> {
        let anchor = Position::new(anchor.row(), anchor.column());
        let positions = kind.layout(bearing, &anchor)?;
        debug_assert_eq!(positions.len(), kind.size());
        Ok(Ship {
            kind,
            bearing,
            anchor,
            positions,
        })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Category name, e.g. `"Galeao"`.
    pub fn category(&self) -> &'static str {
        self.kind.name()
    }

    pub fn size(&self) -> usize {
        self.kind.size()
    }

    pub fn bearing(&self) -> Compass {
        self.bearing
    }

    /// Anchor cell the shape was computed from.
    pub fn position(&self) -> &Position {
        &self.anchor
    }

    /// Occupied cells, in construction order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// `true` while at least one cell is unhit.
    pub fn is_floating(&self) -> bool {
        self.positions.iter().any(|p| !p.is_hit())
    }

    pub fn top_most(&self) -> i32 {
        self.positions.iter().map(Position::row).min().unwrap_or(self.anchor.row())
    }

    pub fn bottom_most(&self) -> i32 {
        self.positions.iter().map(Position::row).max().unwrap_or(self.anchor.row())
    }

    pub fn left_most(&self) -> i32 {
        self.positions
            .iter()
            .map(Position::column)
            .min()
            .unwrap_or(self.anchor.column())
    }

    pub fn right_most(&self) -> i32 {
        self.positions
            .iter()
            .map(Position::column)
            .max()
            .unwrap_or(self.anchor.column())
    }

    pub fn occupies(&self, pos: &Position) -> bool {
        self.positions.iter().any(|p| p == pos)
    }

    /// `true` if any cell of `other` touches or overlaps this ship.
    pub fn too_close_to(&self, other: &Ship) -> bool {
        other.positions.iter().any(|p| self.too_close_to_position(p))
    }

    /// `true` if any cell of this ship is adjacent to `pos`.
    pub fn too_close_to_position(&self, pos: &Position) -> bool {
        self.positions.iter().any(|p| p.is_adjacent_to(pos))
    }

    /// Mark the owned cell equal to `pos` as hit. Returns `false` if the
    /// ship does not cover `pos`.
    pub fn shoot(&mut self, pos: &Position) -> bool {
        let mut struck = false;
        for cell in self.positions.iter_mut().filter(|p| **p == *pos) {
            cell.shoot();
            struck = true;
        }
        struck
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.category(), self.bearing, self.anchor)
    }
}
