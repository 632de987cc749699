//! Ship facings and their single-character input tokens.

use core::fmt;

/// Cardinal facing of a ship. `Unknown` stands for unparseable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Compass {
    North,
    South,
    East,
    West,
    Unknown,
}

impl Compass {
    /// All legal construction facings.
    pub const CARDINALS: [Compass; 4] = [
        Compass::North,
        Compass::South,
        Compass::East,
        Compass::West,
    ];

    /// Parse a facing token. West is `o` (oeste); anything unrecognised
    /// maps to [`Compass::Unknown`].
    pub fn from_char(ch: char) -> Self {
        match ch {
            'n' => Compass::North,
            's' => Compass::South,
            'e' => Compass::East,
            'o' => Compass::West,
            _ => Compass::Unknown,
        }
    }

    /// Token character for this facing.
    pub fn as_char(&self) -> char {
        match self {
            Compass::North => 'n',
            Compass::South => 's',
            Compass::East => 'e',
            Compass::West => 'o',
            Compass::Unknown => 'u',
        }
    }
}

impl From<char> for Compass {
    fn from(ch: char) -> Self {
        Compass::from_char(ch)
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
