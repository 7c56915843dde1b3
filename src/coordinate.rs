//! Board cells and directional navigation.
//!
//! A [`Coordinate`] may point off the grid (neighbours of edge cells do), so
//! rows and columns are signed. Use [`Coordinate::valid`] before indexing.

use core::fmt;

use crate::config::GRID_SIZE;
use crate::ship::Orientation;

/// Column headers used when displaying a coordinate.
const HEADERS: [char; GRID_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// A row/column cell on the 10×10 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}

/// One of the four axis-aligned steps between neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// Search order shared by neighbour listing and sunk-run resolution.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Row and column delta of one step.
    #[inline]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }

    pub const fn orientation(self) -> Orientation {
        match self {
            Direction::Up | Direction::Down => Orientation::Vertical,
            Direction::Right | Direction::Left => Orientation::Horizontal,
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

impl Coordinate {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Build an in-grid coordinate from unsigned indices.
    ///
    /// Returns `None` when either index is outside the board.
    pub fn at(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self::new(row as i8, col as i8))
        } else {
            None
        }
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE).flat_map(|r| (0..GRID_SIZE).map(move |c| Coordinate::new(r as i8, c as i8)))
    }

    /// Whether the cell lies on the board.
    #[inline]
    pub fn valid(&self) -> bool {
        let n = GRID_SIZE as i8;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    /// Row and column as array indices, if on the board.
    #[inline]
    pub fn index(&self) -> Option<(usize, usize)> {
        if self.valid() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// The neighbouring cell in `dir`; may be off the grid.
    #[inline]
    pub fn step(self, dir: Direction) -> Coordinate {
        self.offset(dir, 1)
    }

    /// The cell `distance` steps away in `dir`; may be off the grid.
    #[inline]
    pub fn offset(self, dir: Direction, distance: i8) -> Coordinate {
        let (dr, dc) = dir.offset();
        Coordinate::new(
            self.row.saturating_add(dr.saturating_mul(distance)),
            self.col.saturating_add(dc.saturating_mul(distance)),
        )
    }

    pub fn up(self) -> Coordinate {
        self.step(Direction::Up)
    }

    pub fn down(self) -> Coordinate {
        self.step(Direction::Down)
    }

    pub fn right(self) -> Coordinate {
        self.step(Direction::Right)
    }

    pub fn left(self) -> Coordinate {
        self.step(Direction::Left)
    }

    /// On-grid neighbours in up, down, right, left order.
    pub fn adjacent(self) -> impl Iterator<Item = Coordinate> {
        Direction::ALL
            .into_iter()
            .map(move |dir| self.step(dir))
            .filter(Coordinate::valid)
    }
}

impl fmt::Display for Coordinate {
    /// Formats as column letter plus one-based row, e.g. `C4` for `(3, 2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index() {
            Some((r, c)) => write!(f, "{}{}", HEADERS[c], r + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
