use battle_group::{Battle, Board, StrategyKind, TargetingEngine, MAX_TURNS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn play(kind: StrategyKind, seed: u64) -> battle_group::BattleReport {
    let mut rng = SmallRng::seed_from_u64(seed);
    let board = Board::random(&mut rng).unwrap();
    Battle::new(TargetingEngine::new(kind, seed), board)
        .run()
        .unwrap()
}

#[test]
fn test_both_strategies_sink_the_fleet() {
    for kind in StrategyKind::ALL {
        for seed in 0..10 {
            let report = play(kind, seed);
            assert!(report.won, "{:?} lost with seed {}", kind, seed);
            assert!(report.shots <= MAX_TURNS);
            assert_eq!(report.hits, 17);
            assert_eq!(report.hits + report.misses, report.shots);
        }
    }
}

#[test]
fn test_density_hunting_beats_random_fire() {
    let games = 20;
    let total: usize = (0..games).map(|seed| play(StrategyKind::Probability, seed).shots).sum();
    // random fire needs about 95 shots on average
    assert!(total / (games as usize) < 70, "average {} shots", total / games as usize);
}

#[test]
fn test_turn_budget_stops_the_battle() {
    let mut rng = SmallRng::seed_from_u64(9);
    let board = Board::random(&mut rng).unwrap();
    let mut battle = Battle::new(TargetingEngine::new(StrategyKind::Probability, 9), board)
        .with_turn_budget(10);
    let report = battle.run().unwrap();
    assert_eq!(report.shots, 10);
    assert!(!report.won);
    assert!(battle.is_over());
    assert_eq!(battle.board().fired().len(), 10);
}
