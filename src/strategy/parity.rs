//! Checkerboard hunting with neighbour follow-up.
//!
//! Every ship of length two or more covers at least one cell with an even
//! `row + col`, so hunting only walks those cells in shuffled order. Each hit
//! moves the unshot neighbours of the shot into a focused list that is drained
//! before hunting resumes.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::common::TargetingError;
use crate::coordinate::Coordinate;
use crate::history::{RemainingFleet, Shot, ShotHistory};
use crate::state::Mode;

use super::{any_unshot, TargetingStrategy};

#[derive(Debug, Clone, Default)]
pub struct ParityTargeting {
    /// Shuffled checkerboard cells; built on first use.
    targets: Option<Vec<Coordinate>>,
    focused: VecDeque<Coordinate>,
}

impl ParityTargeting {
    pub fn new() -> Self {
        Self::default()
    }

    fn checkerboard(rng: &mut SmallRng) -> Vec<Coordinate> {
        let mut cells: Vec<Coordinate> = Coordinate::all()
            .filter(|c| (c.row + c.col) % 2 == 0)
            .collect();
        cells.shuffle(rng);
        cells
    }
}

impl TargetingStrategy for ParityTargeting {
    fn name(&self) -> &'static str {
        "parity"
    }

    fn mode(&self) -> Mode {
        if self.focused.is_empty() {
            Mode::Hunting
        } else {
            Mode::Targeting
        }
    }

    fn next_target(
        &mut self,
        shots: &ShotHistory,
        _fleet: &RemainingFleet,
        rng: &mut SmallRng,
    ) -> Option<Coordinate> {
        while let Some(coord) = self.focused.pop_front() {
            if !shots.contains(coord) {
                return Some(coord);
            }
        }
        let targets = self
            .targets
            .get_or_insert_with(|| Self::checkerboard(rng));
        while let Some(coord) = targets.pop() {
            if !shots.contains(coord) {
                return Some(coord);
            }
        }
        any_unshot(shots, rng)
    }

    fn assess(
        &mut self,
        shot: Shot,
        shots: &ShotHistory,
        _fleet: &RemainingFleet,
    ) -> Result<(), TargetingError> {
        self.focused.retain(|c| !shots.contains(*c));
        if !shot.outcome.is_hit() {
            return Ok(());
        }
        for coord in shot.coordinate.adjacent() {
            if shots.contains(coord) || self.focused.contains(&coord) {
                continue;
            }
            if let Some(targets) = self.targets.as_mut() {
                targets.retain(|c| *c != coord);
            }
            self.focused.push_back(coord);
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.focused.clear();
    }

    fn candidates(&self) -> Vec<Coordinate> {
        self.focused.iter().copied().collect()
    }
}
