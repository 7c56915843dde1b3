//! Self-fleet board: random placement and local shot resolution.

use core::fmt;

use rand::Rng;

use crate::bitboard::Mask;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{GRID_SIZE, NUM_SHIPS, PLACEMENT_ATTEMPTS, SHIPS};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Ship placements plus the shots received so far.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    ships: [Option<Ship>; NUM_SHIPS],
    ship_map: Mask,
    fired: Mask,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: Mask::new(),
            fired: Mask::new(),
        }
    }

    /// A board with the full fleet placed at random.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for i in 0..NUM_SHIPS {
            let (origin, orient) = board.random_placement(rng, i)?;
            board.place(i, origin, orient)?;
        }
        Ok(board)
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> Mask {
        self.ship_map
    }

    /// Cells shot at so far.
    pub fn fired(&self) -> Mask {
        self.fired
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Returns `true` when no placed ship is afloat.
    pub fn all_sunk(&self) -> bool {
        self.ships().all(Ship::is_sunk)
    }

    /// Place ship `ship_index` of the standard fleet.
    pub fn place(
        &mut self,
        ship_index: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(SHIPS[ship_index], orientation, origin)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Returns a random non-overlapping origin and orientation for
    /// `ship_index`, retrying on overlap.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(Coordinate, Orientation), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let def = SHIPS[ship_index];
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Vertical => (GRID_SIZE - def.length(), GRID_SIZE - 1),
                Orientation::Horizontal => (GRID_SIZE - 1, GRID_SIZE - def.length()),
            };
            let origin = Coordinate::new(
                rng.random_range(0..=max_r) as i8,
                rng.random_range(0..=max_c) as i8,
            );
            let ship = Ship::new(def, orient, origin)?;
            if (self.ship_map & ship.mask()).is_empty() {
                return Ok((origin, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Resolve a shot against this board.
    pub fn fire(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        if !coord.valid() {
            return Err(BoardError::OutOfBounds(coord));
        }
        if !self.fired.insert(coord)? {
            return Err(BoardError::AlreadyGuessed);
        }
        if !self.ship_map.contains(coord) {
            return Ok(ShotOutcome::Miss);
        }
        let ship = self
            .ships
            .iter_mut()
            .flatten()
            .find(|s| s.mask().contains(coord))
            .ok_or(BoardError::UnknownShipHit)?;
        ship.guess(coord);
        if ship.is_sunk() {
            Ok(ShotOutcome::Sunk(ship.ship_type().length()))
        } else {
            Ok(ShotOutcome::Hit)
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("fired", &self.fired)
            .finish()
    }
}

impl fmt::Display for Board {
    /// `#` for intact ship cells, `X` for hits, `o` for misses.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let coord = Coordinate::new(r as i8, c as i8);
                let ch = match (self.ship_map.contains(coord), self.fired.contains(coord)) {
                    (true, true) => 'X',
                    (true, false) => '#',
                    (false, true) => 'o',
                    (false, false) => '.',
                };
                write!(f, "{} ", ch)?;
            }
            if r + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
