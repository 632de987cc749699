#![cfg_attr(not(feature = "std"), no_std)]

//! Rules engine for a single-fleet naval combat game: ship shapes,
//! fleet placement rules and a firing session that tallies every shot.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod compass;
pub mod config;
#[cfg(feature = "std")]
pub mod console;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod position;
pub mod render;
pub mod setup;
mod ship;

pub use common::*;
pub use compass::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::Console;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use position::*;
pub use render::board_grid;
pub use setup::random_fleet;
pub use ship::*;
