use naval_battle::{Compass, Fleet, Game, Position, Ship, ShotOutcome, BOARD_SIZE};

fn fleet_of(specs: &[(&str, Compass, i32, i32)]) -> Fleet {
    let mut fleet = Fleet::new();
    for &(token, bearing, row, col) in specs {
        let ship = Ship::build(token, bearing, Position::new(row, col)).unwrap();
        assert!(fleet.add_ship(ship), "{} at ({}, {}) rejected", token, row, col);
    }
    fleet
}

#[test]
fn barge_sinks_on_first_hit() {
    let mut game = Game::new(fleet_of(&[("barca", Compass::South, 5, 5)]));
    assert_eq!(game.remaining_ships(), 1);
    let sunk = game.fire(Position::new(5, 5)).map(|s| s.category());
    assert_eq!(sunk, Some("Barca"));
    assert_eq!(game.hits(), 1);
    assert_eq!(game.sunk_ships(), 1);
    assert_eq!(game.remaining_ships(), 0);
}

#[test]
fn sink_is_reported_only_on_the_final_hit() {
    let mut game = Game::new(fleet_of(&[("nau", Compass::East, 2, 2)]));
    assert!(game.fire(Position::new(2, 2)).is_none());
    assert!(game.fire(Position::new(2, 3)).is_none());
    let sunk = game.fire(Position::new(2, 4)).cloned();
    assert_eq!(sunk.map(|s| s.category()), Some("Nau"));
    // firing again at a sunk ship is just a repeat
    assert!(game.fire(Position::new(2, 4)).is_none());
    assert_eq!(game.hits(), 3);
    assert_eq!(game.sunk_ships(), 1);
    assert_eq!(game.repeated_shots(), 1);
}

#[test]
fn repeated_shots_are_counted_not_double_hit() {
    let mut game = Game::new(fleet_of(&[("fragata", Compass::South, 0, 0)]));
    assert_eq!(game.fire_detailed(Position::new(0, 0)), ShotOutcome::Hit);
    assert_eq!(game.fire_detailed(Position::new(0, 0)), ShotOutcome::Repeated);
    assert_eq!(game.fire_detailed(Position::new(5, 5)), ShotOutcome::Miss);
    assert_eq!(game.fire_detailed(Position::new(5, 5)), ShotOutcome::Repeated);
    assert_eq!(game.hits(), 1);
    assert_eq!(game.repeated_shots(), 2);
    assert_eq!(game.shots(), &[Position::new(0, 0), Position::new(5, 5)]);
}

#[test]
fn out_of_range_shots_are_invalid() {
    let mut game = Game::new(fleet_of(&[("barca", Compass::North, 0, 0)]));
    for (r, c) in [(-1, 0), (0, -1), (BOARD_SIZE + 1, 0), (0, BOARD_SIZE + 1)] {
        assert_eq!(game.fire_detailed(Position::new(r, c)), ShotOutcome::Invalid);
    }
    assert_eq!(game.invalid_shots(), 4);
    assert!(game.shots().is_empty());
    assert_eq!(game.repeated_shots(), 0);
}

#[test]
fn one_past_the_board_is_accepted() {
    let mut game = Game::new(fleet_of(&[("barca", Compass::North, 0, 0)]));
    let edge = Position::new(BOARD_SIZE, BOARD_SIZE);
    assert_eq!(game.fire_detailed(edge), ShotOutcome::Miss);
    assert_eq!(game.invalid_shots(), 0);
    assert_eq!(game.shots(), &[edge]);
    // rendering skips the off-board shot
    assert!(!game.shots_grid().contains('X'));
}

#[test]
fn whole_fleet_can_be_sunk() {
    let mut game = Game::new(fleet_of(&[
        ("galeao", Compass::North, 0, 0),
        ("caravela", Compass::East, 5, 5),
        ("barca", Compass::North, 9, 0),
    ]));
    assert_eq!(game.remaining_ships(), 3);
    let targets: Vec<Position> = game.fleet().occupied_positions();
    let mut sinks = 0;
    for target in targets {
        if game.fire(target).is_some() {
            sinks += 1;
        }
    }
    assert_eq!(sinks, 3);
    assert_eq!(game.sunk_ships(), 3);
    assert_eq!(game.hits(), 8);
    assert_eq!(game.remaining_ships(), 0);
    assert!(game.fleet().floating_ships().is_empty());
}

#[test]
fn sunk_outcome_carries_the_ship() {
    let mut game = Game::new(fleet_of(&[("caravela", Compass::North, 3, 3)]));
    assert_eq!(game.fire_detailed(Position::new(3, 3)), ShotOutcome::Hit);
    match game.fire_detailed(Position::new(4, 3)) {
        ShotOutcome::Sunk(ship) => {
            assert_eq!(ship.category(), "Caravela");
            assert!(!ship.is_floating());
        }
        other => panic!("expected a sink, got {:?}", other),
    }
}

#[test]
fn shots_land_on_the_fleet_ships() {
    let mut game = Game::new(fleet_of(&[("nau", Compass::South, 1, 1)]));
    game.fire(Position::new(2, 1));
    let fleet = game.into_fleet();
    let hit: Vec<bool> = fleet.ships()[0].positions().iter().map(|p| p.is_hit()).collect();
    assert_eq!(hit, vec![false, true, false]);
}

#[test]
fn grids_mark_shots_and_fleet() {
    let mut game = Game::new(fleet_of(&[("caravela", Compass::East, 0, 0)]));
    game.fire(Position::new(0, 0));
    game.fire(Position::new(9, 9));

    let shots = game.shots_grid();
    let rows: Vec<&str> = shots.lines().collect();
    assert_eq!(rows.len(), BOARD_SIZE as usize);
    assert_eq!(rows[0], "X.........");
    assert_eq!(rows[9], ".........X");

    let fleet = game.fleet_grid();
    let rows: Vec<&str> = fleet.lines().collect();
    assert_eq!(rows[0], "##........");
    assert!(rows[1..].iter().all(|r| *r == ".........."));
}
