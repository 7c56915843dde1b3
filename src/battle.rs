//! Local game loop: one engine firing at one in-process board.

use core::fmt;

use log::info;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::MAX_TURNS;
use crate::engine::TargetingEngine;
use crate::history::Shot;

/// Drives a [`TargetingEngine`] against a [`Board`] until the fleet is sunk
/// or the turn budget is spent.
#[derive(Debug)]
pub struct Battle {
    engine: TargetingEngine,
    board: Board,
    turn_budget: usize,
}

/// Debrief of a finished battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BattleReport {
    pub strategy: &'static str,
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
    pub won: bool,
}

impl Battle {
    pub fn new(engine: TargetingEngine, board: Board) -> Self {
        Self {
            engine,
            board,
            turn_budget: MAX_TURNS,
        }
    }

    /// Limit the number of shots the engine may take.
    pub fn with_turn_budget(mut self, turns: usize) -> Self {
        self.turn_budget = turns;
        self
    }

    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_over(&self) -> bool {
        self.board.all_sunk() || self.engine.shots().len() >= self.turn_budget
    }

    /// Play a single turn. Returns `None` when the engine has nothing left to
    /// fire on.
    pub fn step(&mut self) -> Result<Option<Shot>, BoardError> {
        let Some(coordinate) = self.engine.next_coordinate() else {
            return Ok(None);
        };
        let outcome = self.board.fire(coordinate)?;
        self.engine.report_outcome(coordinate, outcome);
        Ok(Some(Shot {
            coordinate,
            outcome,
        }))
    }

    /// Play until the battle is over and report the result.
    pub fn run(&mut self) -> Result<BattleReport, BoardError> {
        while !self.is_over() {
            if self.step()?.is_none() {
                break;
            }
        }
        let report = self.report();
        info!("{}", report);
        Ok(report)
    }

    pub fn report(&self) -> BattleReport {
        let shots = self.engine.shots();
        BattleReport {
            strategy: self.engine.strategy_name(),
            shots: shots.len(),
            hits: shots.hit_count(),
            misses: shots.miss_count(),
            won: self.board.all_sunk(),
        }
    }
}

impl fmt::Display for BattleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.won {
            write!(
                f,
                "{} targeting won in {} shots ({} hits, {} misses)",
                self.strategy, self.shots, self.hits, self.misses
            )
        } else {
            write!(
                f,
                "{} targeting ran out of turns after {} shots ({} hits)",
                self.strategy, self.shots, self.hits
            )
        }
    }
}
