#![cfg(feature = "std")]

use naval_battle::Console;
use std::io::Cursor;

/// Eleven barges spaced two cells apart: a full fleet.
const FULL_FLEET: &str = "\
barca 0 0 n
barca 0 2 n
barca 0 4 n
barca 0 6 n
barca 0 8 n
barca 2 0 n
barca 2 2 n
barca 2 4 n
barca 2 6 n
barca 2 8 n
barca 4 0 n
";

fn run_script(script: &str) -> (String, Option<(usize, usize)>) {
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
    console.run().unwrap();
    let summary = console
        .game()
        .map(|g| (g.fleet().len(), g.remaining_ships()));
    let out = String::from_utf8(console.into_output()).unwrap();
    (out, summary)
}

#[test]
fn builds_fleet_and_fires_a_round() {
    let script = format!("nova\n{}rajada 0 0 0 2 0 0\ndesisto\n", FULL_FLEET);
    let (out, summary) = run_script(&script);
    assert!(out.contains("11 ships added successfully!"));
    assert_eq!(out.matches("Barca sunk!").count(), 2);
    assert!(out.contains("Hits: 2 Invalid: 0 Repeated: 1 Remaining ships: 9"));
    assert!(out.ends_with("Fair winds!\n"));
    assert_eq!(summary, Some((11, 9)));
}

#[test]
fn reports_rejected_and_unknown_ships() {
    // The fleet ends one ship short, so input runs out while building it.
    let script = format!("nova\nsubmarino 5 5 n\nbarca 0 1 n\n{}", FULL_FLEET);
    let (out, summary) = run_script(&script);
    assert!(out.contains("Unknown ship 'submarino'!"));
    // (0, 1) is admitted first, so (0, 0) and (0, 2) are then too close.
    assert!(out.contains("Could not place [Barca n (0, 0)]"));
    assert!(out.contains("Could not place [Barca n (0, 2)]"));
    assert_eq!(summary.map(|(len, _)| len), Some(10));
}

#[test]
fn invalid_facing_aborts_the_fleet() {
    let (out, summary) = run_script("nova\nnau 0 0 x\ndesisto\n");
    assert!(out.contains("Error: Invalid bearing 'u' for Nau"));
    assert_eq!(summary, None);
}

#[test]
fn malformed_numbers_are_reported() {
    let (out, _) = run_script("nova\nbarca x 0 n\ndesisto\n");
    assert!(out.contains("Error: expected a number, got 'x'"));
}

#[test]
fn unknown_commands_and_early_eof() {
    let (out, summary) = run_script("foo\n");
    assert!(out.contains("Unknown command 'foo'"));
    assert!(out.ends_with("Fair winds!\n"));
    assert_eq!(summary, None);
}

#[test]
fn commands_without_a_fleet_are_ignored() {
    let (out, _) = run_script("estado mapa ver rajada desisto");
    assert_eq!(out, "Fair winds!\n");
}

#[test]
fn sinking_everything_announces_victory() {
    let script = format!(
        "nova\n{}rajada 0 0 0 2 0 4\nrajada 0 6 0 8 2 0\nrajada 2 2 2 4 2 6\nrajada 2 8 4 0 -1 3\nver\ndesisto\n",
        FULL_FLEET
    );
    let (out, summary) = run_script(&script);
    assert_eq!(out.matches("Barca sunk!").count(), 11);
    assert!(out.contains("Hits: 11 Invalid: 1 Repeated: 0 Remaining ships: 0"));
    assert!(out.contains("The whole fleet is sunk!"));
    assert!(out.contains("X.X.X.X.X.\n"));
    assert_eq!(summary, Some((11, 0)));
}

#[test]
fn status_and_map_show_the_fleet() {
    let script = format!("nova\n{}estado\nmapa\ndesisto\n", FULL_FLEET);
    let (out, _) = run_script(&script);
    assert!(out.contains("[Barca n (4, 0)]"));
    assert!(out.contains("#.#.#.#.#.\n"));
    assert!(out.contains("#.........\n"));
}

#[test]
fn extreme_anchor_is_rejected_not_fatal() {
    let (out, summary) = run_script("nova\ngaleao 2147483647 0 n\n");
    assert!(out.contains("Could not place [Galeao n (2147483647, 0)]"));
    assert!(out.contains("0 ships added successfully!"));
    assert_eq!(summary, Some((0, 0)));
}
