//! Targeting engine: the facade the game loop talks to.
//!
//! One [`TargetingEngine::next_coordinate`] per turn, followed by exactly one
//! [`TargetingEngine::report_outcome`] for that coordinate. Inconsistent
//! reports are logged and the engine falls back to hunting; nothing is
//! propagated to the caller.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::common::{ShotOutcome, TargetingError};
use crate::config::StrategyKind;
use crate::coordinate::Coordinate;
use crate::density::{calc_probability, ProbabilityField};
use crate::history::{RemainingFleet, Shot, ShotHistory};
use crate::state::Mode;
use crate::strategy::{self, TargetingStrategy};

pub struct TargetingEngine {
    strategy: Box<dyn TargetingStrategy>,
    shots: ShotHistory,
    fleet: RemainingFleet,
    sunk: Vec<usize>,
    pending: Option<Coordinate>,
    rng: SmallRng,
    recoveries: usize,
}

impl TargetingEngine {
    /// Engine running the `kind` strategy with a reproducible tie-break seed.
    pub fn new(kind: StrategyKind, seed: u64) -> Self {
        Self::with_strategy(strategy::build(kind), SmallRng::seed_from_u64(seed))
    }

    /// Engine around an already constructed strategy and generator.
    pub fn with_strategy(strategy: Box<dyn TargetingStrategy>, rng: SmallRng) -> Self {
        Self {
            strategy,
            shots: ShotHistory::new(),
            fleet: RemainingFleet::standard(),
            sunk: Vec::new(),
            pending: None,
            rng,
            recoveries: 0,
        }
    }

    /// Choose the cell to fire on this turn.
    ///
    /// Returns `None` only when every cell has been shot. Calling again before
    /// the outcome is reported yields the same coordinate.
    pub fn next_coordinate(&mut self) -> Option<Coordinate> {
        if let Some(pending) = self.pending {
            warn!("{} requested again before its outcome was reported", pending);
            return Some(pending);
        }
        let mode = self.strategy.mode();
        let coord = self
            .strategy
            .next_target(&self.shots, &self.fleet, &mut self.rng)?;
        debug!(
            "round {}: {} picked {} while {}",
            self.shots.len() + 1,
            self.strategy.name(),
            coord,
            mode
        );
        self.pending = Some(coord);
        Some(coord)
    }

    /// Ingest the opponent's answer for the last issued coordinate.
    pub fn report_outcome(&mut self, coord: Coordinate, outcome: ShotOutcome) {
        if let Err(err) = self.ingest(coord, outcome) {
            warn!("{}; dropping unresolved hits and hunting again", err);
            self.strategy.reset();
            self.recoveries += 1;
        }
        debug!("\n{}", self.report());
    }

    fn ingest(&mut self, coord: Coordinate, outcome: ShotOutcome) -> Result<(), TargetingError> {
        let pending = self.pending.take();
        self.shots.record(coord, outcome)?;

        if let Some(length) = outcome.sunk_length() {
            if !self.fleet.sink(length) {
                return Err(TargetingError::UnknownShipLength(length));
            }
            self.sunk.push(length);
            info!(
                "sunk a ship of length {} at {}; {} left",
                length,
                coord,
                self.fleet.len()
            );
        }

        match pending {
            Some(expected) if expected == coord => {}
            Some(expected) => {
                return Err(TargetingError::UnexpectedCoordinate { expected, got: coord })
            }
            None => return Err(TargetingError::NothingPending(coord)),
        }

        let shot = Shot {
            coordinate: coord,
            outcome,
        };
        self.strategy.assess(shot, &self.shots, &self.fleet)
    }

    pub fn mode(&self) -> Mode {
        self.strategy.mode()
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn shots(&self) -> &ShotHistory {
        &self.shots
    }

    pub fn fleet(&self) -> &RemainingFleet {
        &self.fleet
    }

    /// Coordinate issued and awaiting its outcome.
    pub fn pending(&self) -> Option<Coordinate> {
        self.pending
    }

    pub fn unresolved_hits(&self) -> &[Coordinate] {
        self.strategy.unresolved_hits()
    }

    pub fn candidates(&self) -> Vec<Coordinate> {
        self.strategy.candidates()
    }

    /// Number of inconsistent reports recovered from.
    pub fn recoveries(&self) -> usize {
        self.recoveries
    }

    /// Probability field for the current history and fleet.
    pub fn probability_field(&self) -> ProbabilityField {
        calc_probability(&self.fleet, &self.shots)
    }

    /// Snapshot of the targeting bookkeeping for logs and debriefs.
    pub fn report(&self) -> TargetingReport {
        let mut sunk = self.sunk.clone();
        sunk.sort_unstable();
        let rounds = self.shots.len();
        let hits = self.shots.hit_count();
        TargetingReport {
            round: rounds,
            strategy: self.strategy.name(),
            mode: self.strategy.mode(),
            last: self.shots.last().copied(),
            sunk,
            unresolved: self.strategy.unresolved_hits().to_vec(),
            candidates: self.strategy.candidates(),
            hit_count: hits,
            miss_count: self.shots.miss_count(),
            hit_ratio: if rounds == 0 { 0 } else { hits * 100 / rounds },
            shots_unique: self.shots.fired().len() == rounds,
        }
    }
}

impl fmt::Debug for TargetingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetingEngine")
            .field("strategy", &self.strategy.name())
            .field("mode", &self.strategy.mode())
            .field("shots", &self.shots.len())
            .field("fleet", &self.fleet.lengths())
            .field("pending", &self.pending)
            .finish()
    }
}

/// Per-round view of the engine's bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TargetingReport {
    pub round: usize,
    pub strategy: &'static str,
    pub mode: Mode,
    pub last: Option<Shot>,
    /// Lengths of ships sunk so far, ascending.
    pub sunk: Vec<usize>,
    pub unresolved: Vec<Coordinate>,
    pub candidates: Vec<Coordinate>,
    pub hit_count: usize,
    pub miss_count: usize,
    /// Hits per hundred shots, rounded down.
    pub hit_ratio: usize,
    pub shots_unique: bool,
}

struct CoordList<'a>(&'a [Coordinate]);

impl fmt::Display for CoordList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for TargetingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Targeting info ({}) - round {}", self.strategy, self.round)?;
        writeln!(f, " Mode:             {}", self.mode)?;
        match self.last {
            Some(shot) => writeln!(f, " Shot:             {} ({})", shot.coordinate, shot.outcome)?,
            None => writeln!(f, " Shot:             -")?,
        }
        writeln!(f, " Sunk ships:       {:?}", self.sunk)?;
        writeln!(f, " Hits:             {}", CoordList(&self.unresolved))?;
        writeln!(f, " Targets:          {}", CoordList(&self.candidates))?;
        writeln!(f, " Hit count:        {}", self.hit_count)?;
        writeln!(f, " Miss count:       {}", self.miss_count)?;
        writeln!(f, " Hit / miss ratio: {}%", self.hit_ratio)?;
        write!(f, " Shots unique:     {}", self.shots_unique)
    }
}
