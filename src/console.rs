#![cfg(feature = "std")]

//! Text command interpreter driving a [`Game`].
//!
//! Input is a stream of whitespace-separated tokens; commands and their
//! arguments may span lines freely. Recognised commands:
//!
//! - `nova`: read ship specs `<kind> <row> <column> <facing>` until a full
//!   fleet has been admitted, then start a new session against it
//! - `estado`: list the fleet's ships
//! - `mapa`: show the fleet on the board
//! - `rajada`: read and fire a round of shots
//! - `ver`: show every valid shot fired so far
//! - `desisto`: quit

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use anyhow::{anyhow, Context};

use crate::common::ShipError;
use crate::compass::Compass;
use crate::config::{FLEET_SIZE, SHOTS_PER_ROUND};
use crate::fleet::Fleet;
use crate::game::Game;
use crate::position::Position;
use crate::ship::Ship;

pub const NEW_FLEET: &str = "nova";
pub const QUIT: &str = "desisto";
pub const FIRING_ROUND: &str = "rajada";
pub const SHOW_SHOTS: &str = "ver";
pub const SHOW_FLEET: &str = "mapa";
pub const STATUS: &str = "estado";

const GOODBYE: &str = "Fair winds!";

pub struct Console<R, W> {
    input: R,
    pending: VecDeque<String>,
    out: W,
    game: Option<Game>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            out,
            game: None,
        }
    }

    /// Session built by the last successful `nova`.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Process commands until `desisto` or end of input. A command that
    /// fails on malformed input is reported and the loop continues.
    pub fn run(&mut self) -> anyhow::Result<()> {
        while let Some(command) = self.next_token()? {
            if command == QUIT {
                break;
            }
            log::debug!("Command: {}", command);
            if let Err(e) = self.dispatch(&command) {
                log::warn!("Command '{}' failed: {:#}", command, e);
                writeln!(self.out, "Error: {:#}", e)?;
            }
        }
        writeln!(self.out, "{}", GOODBYE)?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, command: &str) -> anyhow::Result<()> {
        match command {
            NEW_FLEET => {
                let fleet = self.build_fleet()?;
                self.game = Some(Game::new(fleet));
            }
            STATUS => {
                if let Some(game) = &self.game {
                    write!(self.out, "{}", game.fleet().status_report())?;
                }
            }
            SHOW_FLEET => {
                if let Some(game) = &self.game {
                    write!(self.out, "{}", game.fleet_grid())?;
                }
            }
            FIRING_ROUND => {
                if self.game.is_some() {
                    self.firing_round()?;
                }
            }
            SHOW_SHOTS => {
                if let Some(game) = &self.game {
                    write!(self.out, "{}", game.shots_grid())?;
                }
            }
            _ => writeln!(self.out, "Unknown command '{}', try again...", command)?,
        }
        Ok(())
    }

    /// Read ships until `FLEET_SIZE + 1` have been admitted, matching the
    /// fleet's own capacity check.
    fn build_fleet(&mut self) -> anyhow::Result<Fleet> {
        let mut fleet = Fleet::new();
        while fleet.len() <= FLEET_SIZE {
            match self.read_ship()? {
                None => {
                    log::warn!("Input ended while building the fleet");
                    break;
                }
                Some(Ok(ship)) => {
                    let label = ship.to_string();
                    if !fleet.add_ship(ship) {
                        writeln!(self.out, "Could not place {}", label)?;
                    }
                }
                Some(Err(ShipError::UnknownCategory(token))) => {
                    writeln!(self.out, "Unknown ship '{}'!", token)?;
                }
                Some(Err(e)) => return Err(anyhow!(e)),
            }
        }
        writeln!(self.out, "{} ships added successfully!", fleet.len())?;
        Ok(fleet)
    }

    fn firing_round(&mut self) -> anyhow::Result<()> {
        for _ in 0..SHOTS_PER_ROUND {
            let Some(pos) = self.read_position()? else {
                break;
            };
            let Some(game) = self.game.as_mut() else {
                return Ok(());
            };
            if let Some(ship) = game.fire(pos) {
                writeln!(self.out, "{} sunk!", ship.category())?;
            }
        }
        if let Some(game) = &self.game {
            writeln!(
                self.out,
                "Hits: {} Invalid: {} Repeated: {} Remaining ships: {}",
                game.hits(),
                game.invalid_shots(),
                game.repeated_shots(),
                game.remaining_ships()
            )?;
            if game.remaining_ships() == 0 {
                writeln!(self.out, "The whole fleet is sunk!")?;
            }
        }
        Ok(())
    }

    fn read_ship(&mut self) -> anyhow::Result<Option<Result<Ship, ShipError>>> {
        let Some(kind) = self.next_token()? else {
            return Ok(None);
        };
        let Some(anchor) = self.read_position()? else {
            return Ok(None);
        };
        let Some(facing) = self.next_token()? else {
            return Ok(None);
        };
        let bearing = facing.chars().next().map_or(Compass::Unknown, Compass::from_char);
        Ok(Some(Ship::build(&kind, bearing, anchor)))
    }

    fn read_position(&mut self) -> anyhow::Result<Option<Position>> {
        let Some(row) = self.next_int()? else {
            return Ok(None);
        };
        let Some(column) = self.next_int()? else {
            return Ok(None);
        };
        Ok(Some(Position::new(row, column)))
    }

    fn next_int(&mut self) -> anyhow::Result<Option<i32>> {
        match self.next_token()? {
            None => Ok(None),
            Some(token) => token
                .parse()
                .map(Some)
                .with_context(|| format!("expected a number, got '{}'", token)),
        }
    }

    fn next_token(&mut self) -> anyhow::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
