#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use naval_battle::{init_logging, random_fleet, Console, Game, Position, BOARD_SIZE};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Read fleet and firing commands from stdin.
    Play,
    /// Bombard a random fleet with random shots until it sinks.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut console = Console::new(stdin.lock(), stdout.lock());
            console.run()?;
        }
        Commands::Demo { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            run_demo(&mut rng);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn run_demo(rng: &mut SmallRng) {
    let fleet = random_fleet(rng);
    println!("Fleet of {} ships:", fleet.len());
    let mut game = Game::new(fleet);
    print!("{}", game.fleet_grid());

    // Shots range one past the board so the invalid tally gets exercised.
    while game.remaining_ships() > 0 {
        let pos = Position::new(
            rng.random_range(-1..=BOARD_SIZE),
            rng.random_range(-1..=BOARD_SIZE),
        );
        if let Some(ship) = game.fire(pos) {
            println!("{} sunk at {}", ship, pos);
        }
    }

    println!();
    print!("{}", game.shots_grid());
    println!(
        "Shots: {} Hits: {} Invalid: {} Repeated: {} Sunk: {}",
        game.shots().len(),
        game.hits(),
        game.invalid_shots(),
        game.repeated_shots(),
        game.sunk_ships()
    );
}
