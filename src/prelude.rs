//! Commonly used types and utilities for ease of import.

pub use crate::{
    calc_probability, Battle, BattleReport, Board, Coordinate, Mode, ShotOutcome, StrategyKind,
    TargetingEngine, TargetingStrategy,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_probability_board, print_shot_board};
