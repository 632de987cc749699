//! Common types: ship construction errors and shot outcomes.

use alloc::string::String;

use crate::compass::Compass;
use crate::ship::Ship;

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome<'a> {
    /// Coordinates failed the bounds check; only counted.
    Invalid,
    /// Cell was already in the shot log; only counted.
    Repeated,
    /// Logged, but no ship covers the cell.
    Miss,
    /// Hit a ship that is still floating.
    Hit,
    /// Hit the last intact cell of a ship.
    Sunk(&'a Ship),
}

impl<'a> ShotOutcome<'a> {
    /// The ship sunk by this shot, if any.
    pub fn sunk_ship(self) -> Option<&'a Ship> {
        match self {
            ShotOutcome::Sunk(ship) => Some(ship),
            _ => None,
        }
    }
}

/// Errors returned when building a ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// Category token is not one of the five known kinds.
    UnknownCategory(String),
    /// Facing cannot shape the requested kind.
    InvalidFacing {
        category: &'static str,
        bearing: Compass,
    },
}

impl core::fmt::Display for ShipError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShipError::UnknownCategory(token) => write!(f, "Unknown ship category '{}'", token),
            ShipError::InvalidFacing { category, bearing } => {
                write!(f, "Invalid bearing '{}' for {}", bearing, category)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShipError {}
