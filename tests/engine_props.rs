use battle_group::{Battle, Board, Mode, StrategyKind, TargetingEngine};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn check_invariants(engine: &TargetingEngine) -> Result<(), TestCaseError> {
    let shots = engine.shots();
    let queue = engine.candidates();
    for (i, c) in queue.iter().enumerate() {
        prop_assert!(c.valid());
        prop_assert!(!shots.contains(*c));
        prop_assert!(!queue[i + 1..].contains(c));
    }
    if engine.strategy_name() == "probability" {
        prop_assert_eq!(engine.mode() == Mode::Hunting, engine.unresolved_hits().is_empty());
        if engine.mode() == Mode::Hunting {
            prop_assert!(queue.is_empty());
        }
    }
    prop_assert_eq!(shots.fired().len(), shots.len());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn battles_never_repeat_a_shot(
        fleet_seed in any::<u64>(),
        engine_seed in any::<u64>(),
        parity in any::<bool>(),
    ) {
        let kind = if parity { StrategyKind::Parity } else { StrategyKind::Probability };
        let mut rng = SmallRng::seed_from_u64(fleet_seed);
        let board = Board::random(&mut rng).unwrap();
        let mut battle = Battle::new(TargetingEngine::new(kind, engine_seed), board);

        while !battle.is_over() {
            let shot = battle.step().unwrap();
            prop_assert!(shot.is_some());
            check_invariants(battle.engine())?;
        }
        let report = battle.report();
        prop_assert!(report.won);
        prop_assert_eq!(battle.engine().report().shots_unique, true);
        prop_assert_eq!(battle.engine().fleet().len(), 0);
    }
}
