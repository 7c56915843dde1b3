//! Pluggable hunting algorithms.
//!
//! A [`TargetingStrategy`] picks the next cell to fire on and digests the
//! answer. The engine owns the shot history and fleet bookkeeping and hands
//! both to the strategy on every call:
//! - [`ProbabilityTargeting`]: placement-density hunting with hit follow-up
//! - [`ParityTargeting`]: checkerboard hunting with neighbour follow-up

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::rngs::SmallRng;

use crate::common::TargetingError;
use crate::config::StrategyKind;
use crate::coordinate::Coordinate;
use crate::history::{RemainingFleet, Shot, ShotHistory};
use crate::state::Mode;

/// Interface implemented by the hunting algorithms.
pub trait TargetingStrategy: Send {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    fn mode(&self) -> Mode;

    /// Choose the next cell to fire on. Never returns a cell in `shots`;
    /// `None` only when the board is exhausted.
    fn next_target(
        &mut self,
        shots: &ShotHistory,
        fleet: &RemainingFleet,
        rng: &mut SmallRng,
    ) -> Option<Coordinate>;

    /// Digest the answer to a shot. `shots` already contains `shot` and
    /// `fleet` already reflects a sinking.
    fn assess(
        &mut self,
        shot: Shot,
        shots: &ShotHistory,
        fleet: &RemainingFleet,
    ) -> Result<(), TargetingError>;

    /// Forget unresolved hits and pending candidates.
    fn reset(&mut self);

    /// Hits not yet attributed to a sunk ship.
    fn unresolved_hits(&self) -> &[Coordinate] {
        &[]
    }

    /// Pending follow-up cells, next first.
    fn candidates(&self) -> Vec<Coordinate>;
}

/// Construct the strategy selected by `kind`.
pub fn build(kind: StrategyKind) -> Box<dyn TargetingStrategy> {
    match kind {
        StrategyKind::Probability => Box::new(ProbabilityTargeting::new()),
        StrategyKind::Parity => Box::new(ParityTargeting::new()),
    }
}

/// Uniformly random unshot cell.
pub(crate) fn any_unshot(shots: &ShotHistory, rng: &mut SmallRng) -> Option<Coordinate> {
    use rand::Rng;

    let open: Vec<Coordinate> = (!shots.fired()).iter().collect();
    if open.is_empty() {
        None
    } else {
        Some(open[rng.random_range(0..open.len())])
    }
}

pub mod parity;
pub mod probability;
pub use parity::ParityTargeting;
pub use probability::ProbabilityTargeting;
