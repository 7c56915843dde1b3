//! Density-driven hunting with a hunt/target state machine.
//!
//! While hunting, the probability field is rebuilt from the full shot history
//! and one of its densest unshot cells is fired on, ties broken at random.
//! Hits switch to targeting: the candidate queue is fed with neighbours of an
//! isolated hit (densest first) and with line extensions once two or more
//! hits share a row or column.

use alloc::vec::Vec;

use log::{debug, warn};
use rand::rngs::SmallRng;

use crate::common::{ShotOutcome, TargetingError};
use crate::coordinate::Coordinate;
use crate::density::{calc_probability, select_peak, ProbabilityField};
use crate::history::{RemainingFleet, Shot, ShotHistory};
use crate::state::{Mode, TargetingState};

use super::TargetingStrategy;

/// Probability-density targeting.
#[derive(Debug, Clone, Default)]
pub struct ProbabilityTargeting {
    state: TargetingState,
    /// Field from the latest hunting decision; orders neighbour candidates.
    snapshot: Option<ProbabilityField>,
}

impl ProbabilityTargeting {
    pub fn new() -> Self {
        Self::default()
    }

    fn hunt(
        &mut self,
        shots: &ShotHistory,
        fleet: &RemainingFleet,
        rng: &mut SmallRng,
    ) -> Option<Coordinate> {
        let field = calc_probability(fleet, shots);
        let pick = select_peak(&field, shots, rng);
        debug!(
            "hunting: peak density {} over {} ships, picked {:?}",
            field.max(),
            fleet.len(),
            pick
        );
        self.snapshot = Some(field);
        pick
    }

    fn density(&mut self, shots: &ShotHistory, fleet: &RemainingFleet) -> ProbabilityField {
        *self
            .snapshot
            .get_or_insert_with(|| calc_probability(fleet, shots))
    }
}

impl TargetingStrategy for ProbabilityTargeting {
    fn name(&self) -> &'static str {
        "probability"
    }

    fn mode(&self) -> Mode {
        self.state.mode()
    }

    fn next_target(
        &mut self,
        shots: &ShotHistory,
        fleet: &RemainingFleet,
        rng: &mut SmallRng,
    ) -> Option<Coordinate> {
        if self.state.mode() == Mode::Targeting {
            if let Some(coord) = self.state.pop_candidate() {
                return Some(coord);
            }
            warn!(
                "candidate queue empty with {} unresolved hits; hunting for this shot",
                self.state.hits().len()
            );
        }
        self.hunt(shots, fleet, rng)
    }

    fn assess(
        &mut self,
        shot: Shot,
        shots: &ShotHistory,
        fleet: &RemainingFleet,
    ) -> Result<(), TargetingError> {
        match shot.outcome {
            ShotOutcome::Miss => Ok(()),
            ShotOutcome::Hit => {
                let density = self.density(shots, fleet);
                self.state.record_hit(shot.coordinate, shots, &density);
                Ok(())
            }
            ShotOutcome::Sunk(length) => {
                let density = self.density(shots, fleet);
                self.state
                    .record_sunk(shot.coordinate, length, shots, &density)
            }
        }
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn unresolved_hits(&self) -> &[Coordinate] {
        self.state.hits()
    }

    fn candidates(&self) -> Vec<Coordinate> {
        self.state.queue().iter().copied().collect()
    }
}
