use battle_group::{init_logging, Battle, Board, StrategyKind, TargetingEngine};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Info);

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <fleet_seed> <engine_seed>", args[0]);
        std::process::exit(1);
    }
    let fleet_seed: u64 = args[1].parse()?;
    let engine_seed: u64 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(fleet_seed);
    let board = Board::random(&mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut results = Vec::new();
    for kind in StrategyKind::ALL {
        let report = Battle::new(TargetingEngine::new(kind, engine_seed), board)
            .run()
            .map_err(|e| anyhow::anyhow!(e))?;
        results.push(report);
    }

    let best = results
        .iter()
        .filter(|r| r.won)
        .min_by_key(|r| r.shots)
        .map(|r| r.strategy);

    let result = json!({
        "fleet_seed": fleet_seed,
        "engine_seed": engine_seed,
        "results": results,
        "best": best,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
