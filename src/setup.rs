//! Random fleet generation.

use rand::Rng;

use crate::common::ShipError;
use crate::compass::Compass;
use crate::config::{BOARD_SIZE, FLEET_SIZE};
use crate::fleet::Fleet;
use crate::position::Position;
use crate::ship::{Ship, ShipKind};

/// Upper bound on placement attempts for one fleet.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Build a fleet of up to `FLEET_SIZE` ships by offering random ships to
/// [`Fleet::add_ship`] until it is full or the attempts run out.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Fleet {
    let mut fleet = Fleet::new();
    let mut attempts = 0;
    while fleet.len() < FLEET_SIZE && attempts < MAX_PLACEMENT_ATTEMPTS {
        attempts += 1;
        if let Ok(ship) = random_ship(rng) {
            fleet.add_ship(ship);
        }
    }
    log::debug!("Placed {} ships in {} attempts", fleet.len(), attempts);
    fleet
}

/// A random ship of any kind; may lie partly off the board.
pub fn random_ship<R: Rng>(rng: &mut R) -> Result<Ship, ShipError> {
    let kind = ShipKind::ALL[rng.random_range(0..ShipKind::ALL.len())];
    let bearing = Compass::CARDINALS[rng.random_range(0..Compass::CARDINALS.len())];
    let anchor = Position::new(
        rng.random_range(0..BOARD_SIZE),
        rng.random_range(0..BOARD_SIZE),
    );
    Ship::new(kind, bearing, anchor)
}
