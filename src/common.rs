//! Common types: shot outcomes, board errors and targeting errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coordinate::Coordinate;

/// What the opponent answered for one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShotOutcome {
    /// Shot missed all ships.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank a ship, carrying its length.
    Sunk(usize),
}

impl ShotOutcome {
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    pub fn sunk_length(self) -> Option<usize> {
        match self {
            ShotOutcome::Sunk(len) => Some(len),
            _ => None,
        }
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "miss"),
            ShotOutcome::Hit => write!(f, "hit"),
            ShotOutcome::Sunk(len) => write!(f, "sunk ({})", len),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoard(BitBoardError),
    /// Specified ship index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement leaves the board.
    ShipOutOfBounds,
    /// Shot was already fired at this position.
    AlreadyGuessed,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
    /// Shot coordinate lies off the board.
    OutOfBounds(Coordinate),
    /// Occupancy map and ship list disagree.
    UnknownShipHit,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::AlreadyGuessed => write!(f, "Shot was already fired at this position"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::OutOfBounds(c) => write!(f, "Coordinate {} is off the board", c),
            BoardError::UnknownShipHit => write!(f, "Hit cell belongs to no placed ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Inconsistencies detected while ingesting shot outcomes.
///
/// The engine logs these and falls back to hunting; they never reach the
/// caller as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingError {
    /// Reported coordinate lies off the board.
    OffGrid(Coordinate),
    /// Reported coordinate was already in the shot history.
    AlreadyShot(Coordinate),
    /// Outcome reported for a coordinate other than the one issued.
    UnexpectedCoordinate {
        expected: Coordinate,
        got: Coordinate,
    },
    /// Outcome reported while no coordinate was issued.
    NothingPending(Coordinate),
    /// Sunk length is not among the ships still afloat.
    UnknownShipLength(usize),
    /// No run of hits of the sunk length passes through the shot.
    UnresolvedSink { at: Coordinate, length: usize },
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetingError::OffGrid(c) => write!(f, "coordinate {:?} is off the board", c),
            TargetingError::AlreadyShot(c) => write!(f, "{} was already shot", c),
            TargetingError::UnexpectedCoordinate { expected, got } => {
                write!(f, "outcome reported for {} but {} was issued", got, expected)
            }
            TargetingError::NothingPending(c) => {
                write!(f, "outcome reported for {} with no shot pending", c)
            }
            TargetingError::UnknownShipLength(len) => {
                write!(f, "no ship of length {} is still afloat", len)
            }
            TargetingError::UnresolvedSink { at, length } => {
                write!(f, "no run of {} hits passes through {}", length, at)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}
