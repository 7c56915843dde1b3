//! Ship definitions and placement geometry for the self fleet.

use core::fmt;

use crate::bitboard::Mask;
use crate::common::BoardError;
use crate::config::GRID_SIZE;
use crate::coordinate::{Coordinate, Direction};

/// Orientation of a ship or of a line of hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Direction in which a ship extends from its origin.
    pub const fn forward(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::Right,
            Orientation::Vertical => Direction::Down,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board, with hits tracked in a [`Mask`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Coordinate,
    mask: Mask,
    hits: Mask,
}

impl Ship {
    /// Place a ship at `origin` extending right or down per `orientation`.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        origin: Coordinate,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        if len == 0 || len > GRID_SIZE || !origin.valid() {
            return Err(BoardError::ShipOutOfBounds);
        }
        if !origin.offset(orientation.forward(), len as i8 - 1).valid() {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut mask = Mask::new();
        for i in 0..len {
            mask.insert(origin.offset(orientation.forward(), i as i8))?;
        }

        Ok(Ship {
            ship_type,
            orientation,
            origin,
            mask,
            hits: Mask::new(),
        })
    }

    /// Record a shot; returns `true` when it lands on this ship.
    pub fn guess(&mut self, coord: Coordinate) -> bool {
        if self.mask.contains(coord) {
            let _ = self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.hits.len() == self.ship_type.length()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Covered cells from the origin outward.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.ship_type.length())
            .map(move |i| self.origin.offset(self.orientation.forward(), i as i8))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {} }}",
            self.ship_type.name(),
            self.origin,
            self.orientation,
            self.hits.len(),
        )
    }
}
