//! Fleet of placed ships and its admission rules.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::config::{inside_board, FLEET_SIZE};
use crate::position::Position;
use crate::ship::{Ship, ShipKind};

/// Ships in admission order. Admitted ships are never removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// All admitted ships.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Admit `ship` if there is room, it lies fully on the board and it
    /// keeps at least one empty cell between itself and every admitted ship.
    ///
    /// The capacity check runs before insertion with `<=`, so a fleet
    /// accepts `FLEET_SIZE + 1` ships.
    pub fn add_ship(&mut self, ship: Ship) -> bool {
        if self.ships.len() > FLEET_SIZE {
            log::debug!("Rejected {}: fleet is full", ship);
            return false;
        }
        if !Self::is_inside_board(&ship) {
            log::debug!("Rejected {}: outside the board", ship);
            return false;
        }
        if self.collision_risk(&ship) {
            log::debug!("Rejected {}: too close to another ship", ship);
            return false;
        }
        log::debug!("Admitted {}", ship);
        self.ships.push(ship);
        true
    }

    /// Ships whose category name equals `category`, e.g. `"Galeao"`.
    pub fn ships_like(&self, category: &str) -> Vec<&Ship> {
        self.ships
            .iter()
            .filter(|s| s.category() == category)
            .collect()
    }

    /// Ships not yet sunk.
    pub fn floating_ships(&self) -> Vec<&Ship> {
        self.ships.iter().filter(|s| s.is_floating()).collect()
    }

    /// First ship (in admission order) covering `pos`.
    pub fn ship_at(&self, pos: &Position) -> Option<&Ship> {
        self.ships.iter().find(|s| s.occupies(pos))
    }

    /// Mutable counterpart of [`Fleet::ship_at`], used to land shots on the
    /// ship's own cells.
    pub fn ship_at_mut(&mut self, pos: &Position) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.occupies(pos))
    }

    /// Every cell occupied by the fleet.
    pub fn occupied_positions(&self) -> Vec<Position> {
        self.ships
            .iter()
            .flat_map(|s| s.positions().iter().copied())
            .collect()
    }

    /// Text listing of all ships, the floating ones and each category,
    /// one ship per line.
    pub fn status_report(&self) -> String {
        let mut out = String::new();
        push_ships(&mut out, self.ships.iter());
        push_ships(&mut out, self.floating_ships().into_iter());
        for kind in ShipKind::ALL.iter().rev() {
            push_ships(&mut out, self.ships_like(kind.name()).into_iter());
        }
        out
    }

    fn is_inside_board(ship: &Ship) -> bool {
        inside_board(ship.top_most(), ship.left_most())
            && inside_board(ship.bottom_most(), ship.right_most())
    }

    fn collision_risk(&self, ship: &Ship) -> bool {
        self.ships.iter().any(|s| s.too_close_to(ship))
    }
}

fn push_ships<'a>(out: &mut String, ships: impl Iterator<Item = &'a Ship>) {
    for ship in ships {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", ship);
    }
}
