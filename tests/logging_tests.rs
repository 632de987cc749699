#![cfg(feature = "std")]

use log::LevelFilter;
use naval_battle::level_from;

#[test]
fn level_defaults_to_info() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("loud")), LevelFilter::Info);
}

#[test]
fn level_parses_known_names() {
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
}

#[test]
fn init_is_idempotent() {
    naval_battle::init_logging();
    naval_battle::init_logging();
}
