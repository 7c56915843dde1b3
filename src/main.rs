use battle_group::prelude::*;
use battle_group::BOARD_SIZE;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every targeting decision.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game against a randomly placed local fleet.
    Play {
        #[arg(long, help = "Fix the targeting RNG seed (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Fix the fleet placement seed")]
        fleet_seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = StrategyKind::Probability)]
        strategy: StrategyKind,
        /// Print the probability field before every hunting shot.
        #[arg(long)]
        show_density: bool,
    },
    /// Play many seeded games per strategy and summarize shot counts.
    Compare {
        #[arg(long, default_value_t = 100)]
        games: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

fn play(seed: u64, fleet_seed: u64, strategy: StrategyKind, show_density: bool) -> anyhow::Result<()> {
    println!(
        "Playing with {} targeting (seed {}, fleet seed {})",
        strategy.name(),
        seed,
        fleet_seed
    );
    let mut fleet_rng = SmallRng::seed_from_u64(fleet_seed);
    let board = Board::random(&mut fleet_rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut battle = Battle::new(TargetingEngine::new(strategy, seed), board);

    while !battle.is_over() {
        if show_density && battle.engine().mode() == Mode::Hunting {
            print_probability_board(&battle.engine().probability_field());
        }
        match battle.step().map_err(|e| anyhow::anyhow!(e))? {
            Some(shot) => println!("{:>3}: {} -> {}", battle.engine().shots().len(), shot.coordinate, shot.outcome),
            None => break,
        }
    }

    print_shot_board(battle.engine().shots());
    let report = battle.report();
    if report.won {
        println!("\nCongratulations! You won in {} shots.", report.shots);
    } else {
        println!("\nOut of turns after {} shots. Time to upgrade those tactics.", report.shots);
    }
    Ok(())
}

fn compare(games: u64, seed: u64) -> anyhow::Result<()> {
    println!("Comparing strategies over {} games on a {}x{} board", games, BOARD_SIZE, BOARD_SIZE);
    for kind in StrategyKind::ALL {
        let mut total = 0usize;
        let mut best = usize::MAX;
        let mut worst = 0usize;
        for game in 0..games {
            let mut fleet_rng = SmallRng::seed_from_u64(seed.wrapping_add(game));
            let board = Board::random(&mut fleet_rng).map_err(|e| anyhow::anyhow!(e))?;
            let engine = TargetingEngine::new(kind, seed.wrapping_add(game).wrapping_mul(31));
            let report = Battle::new(engine, board)
                .run()
                .map_err(|e| anyhow::anyhow!(e))?;
            if !report.won {
                anyhow::bail!("{} targeting failed to sink the fleet in game {}", kind.name(), game);
            }
            total += report.shots;
            best = best.min(report.shots);
            worst = worst.max(report.shots);
        }
        if games > 0 {
            println!(
                "{:>12}: average {:.1} shots (best {}, worst {})",
                kind.name(),
                total as f64 / games as f64,
                best,
                worst
            );
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info });

    match cli.command {
        Commands::Play {
            seed,
            fleet_seed,
            strategy,
            show_density,
        } => play(seed_or_random(seed), seed_or_random(fleet_seed), strategy, show_density),
        Commands::Compare { games, seed } => compare(games, seed),
    }
}
