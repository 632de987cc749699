//! Firing session against a single fleet.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::position::Position;
use crate::render::{board_grid, SHIP_MARKER, SHOT_MARKER};
use crate::ship::Ship;

/// Core game logic: the fleet under fire, the shot log and running counters.
#[derive(Debug, Clone)]
pub struct Game {
    fleet: Fleet,
    shots: Vec<Position>,
    invalid_shots: usize,
    repeated_shots: usize,
    hits: usize,
    sinks: usize,
}

impl Game {
    /// Start a session against `fleet` with an empty shot log.
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            shots: Vec::new(),
            invalid_shots: 0,
            repeated_shots: 0,
            hits: 0,
            sinks: 0,
        }
    }

    /// Fire at `pos`, returning the ship sunk by this exact shot.
    pub fn fire(&mut self, pos: Position) -> Option<&Ship> {
        self.fire_detailed(pos).sunk_ship()
    }

    /// Fire at `pos` and classify the shot. Malformed targets are counted,
    /// never rejected.
    pub fn fire_detailed(&mut self, pos: Position) -> ShotOutcome<'_> {
        let target = Position::new(pos.row(), pos.column());
        if !Self::valid_shot(&target) {
            self.invalid_shots += 1;
            log::debug!("Invalid shot at {}", target);
            return ShotOutcome::Invalid;
        }
        if self.repeated_shot(&target) {
            self.repeated_shots += 1;
            log::debug!("Repeated shot at {}", target);
            return ShotOutcome::Repeated;
        }
        self.shots.push(target);

        match self.fleet.ship_at_mut(&target) {
            None => ShotOutcome::Miss,
            Some(ship) => {
                ship.shoot(&target);
                self.hits += 1;
                if ship.is_floating() {
                    ShotOutcome::Hit
                } else {
                    self.sinks += 1;
                    log::info!("{} sunk by shot at {}", ship, target);
                    ShotOutcome::Sunk(ship)
                }
            }
        }
    }

    /// The fleet under fire.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Consume the session, handing the fleet back.
    pub fn into_fleet(self) -> Fleet {
        self.fleet
    }

    /// Valid shots in the order they were fired, without duplicates.
    pub fn shots(&self) -> &[Position] {
        &self.shots
    }

    pub fn invalid_shots(&self) -> usize {
        self.invalid_shots
    }

    pub fn repeated_shots(&self) -> usize {
        self.repeated_shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn sunk_ships(&self) -> usize {
        self.sinks
    }

    /// Ships still floating, recomputed on every call.
    pub fn remaining_ships(&self) -> usize {
        self.fleet.floating_ships().len()
    }

    /// Grid with every logged shot marked `X`.
    pub fn shots_grid(&self) -> String {
        board_grid(&self.shots, SHOT_MARKER)
    }

    /// Grid with every fleet cell marked `#`.
    pub fn fleet_grid(&self) -> String {
        board_grid(&self.fleet.occupied_positions(), SHIP_MARKER)
    }

    // Accepts one row and column past the last playable index.
    fn valid_shot(pos: &Position) -> bool {
        (0..=BOARD_SIZE).contains(&pos.row()) && (0..=BOARD_SIZE).contains(&pos.column())
    }

    fn repeated_shot(&self, pos: &Position) -> bool {
        self.shots.iter().any(|s| s == pos)
    }
}
