//! Shot history and the multiset of enemy ships still afloat.

use alloc::vec::Vec;

use crate::bitboard::Mask;
use crate::common::{ShotOutcome, TargetingError};
use crate::config::FLEET_LENGTHS;
use crate::coordinate::Coordinate;

/// One fired shot and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub coordinate: Coordinate,
    pub outcome: ShotOutcome,
}

/// Append-only record of every shot fired this game.
///
/// Coordinates are unique and on the board; a mask mirrors the list for
/// constant-time membership checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotHistory {
    shots: Vec<Shot>,
    fired: Mask,
    hits: Mask,
}

impl ShotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shot, rejecting off-board or repeated coordinates.
    pub fn record(&mut self, coordinate: Coordinate, outcome: ShotOutcome) -> Result<(), TargetingError> {
        if !coordinate.valid() {
            return Err(TargetingError::OffGrid(coordinate));
        }
        if self.fired.contains(coordinate) {
            return Err(TargetingError::AlreadyShot(coordinate));
        }
        self.fired
            .insert(coordinate)
            .map_err(|_| TargetingError::OffGrid(coordinate))?;
        if outcome.is_hit() {
            self.hits
                .insert(coordinate)
                .map_err(|_| TargetingError::OffGrid(coordinate))?;
        }
        self.shots.push(Shot { coordinate, outcome });
        Ok(())
    }

    #[inline]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.fired.contains(coordinate)
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn last(&self) -> Option<&Shot> {
        self.shots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shot> {
        self.shots.iter()
    }

    /// Every fired cell.
    pub fn fired(&self) -> Mask {
        self.fired
    }

    /// Fired cells that hit a ship.
    pub fn hits(&self) -> Mask {
        self.hits
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn miss_count(&self) -> usize {
        self.shots.len() - self.hits.len()
    }
}

/// Lengths of enemy ships not yet sunk; duplicates are significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemainingFleet {
    lengths: Vec<usize>,
}

impl RemainingFleet {
    /// The standard `{5, 4, 3, 3, 2}` fleet.
    pub fn standard() -> Self {
        Self::from_lengths(FLEET_LENGTHS)
    }

    pub fn from_lengths<I: IntoIterator<Item = usize>>(lengths: I) -> Self {
        Self {
            lengths: lengths.into_iter().collect(),
        }
    }

    /// Remove exactly one ship of `length`. Returns `false` if none is afloat.
    pub fn sink(&mut self, length: usize) -> bool {
        match self.lengths.iter().position(|&l| l == length) {
            Some(idx) => {
                self.lengths.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl Default for RemainingFleet {
    fn default() -> Self {
        Self::standard()
    }
}
