// Placement-density fields for the opponent board.
// Every count is an integer number of valid ship placements; no normalization
// is needed because only the ordering of cells matters.

use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, AddAssign};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::GRID_SIZE;
use crate::coordinate::Coordinate;
use crate::history::{RemainingFleet, ShotHistory};
use crate::ship::Orientation;

/// A 10×10 matrix of placement counts.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Field {
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
}

/// Placement counts for a single ship length.
pub type DensityField = Field;

/// Sum of [`DensityField`]s over every ship still afloat.
pub type ProbabilityField = Field;

impl Field {
    pub const fn zero() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Value at `coord`; zero off the board.
    #[inline]
    pub fn get(&self, coord: Coordinate) -> u32 {
        match coord.index() {
            Some((r, c)) => self.cells[r][c],
            None => 0,
        }
    }

    pub fn max(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Unshot cells holding the highest value among unshot cells.
    ///
    /// Already-shot cells are excluded up front, so an all-zero field still
    /// yields only fresh cells.
    pub fn peaks(&self, shots: &ShotHistory) -> Vec<Coordinate> {
        let mut best = 0;
        let mut peaks = Vec::new();
        for coord in Coordinate::all().filter(|c| !shots.contains(*c)) {
            let v = self.get(coord);
            if peaks.is_empty() || v > best {
                best = v;
                peaks.clear();
                peaks.push(coord);
            } else if v == best {
                peaks.push(coord);
            }
        }
        peaks
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::zero()
    }
}

impl AddAssign for Field {
    fn add_assign(&mut self, rhs: Self) {
        for (row, other) in self.cells.iter_mut().zip(rhs.cells.iter()) {
            for (v, o) in row.iter_mut().zip(other.iter()) {
                *v += *o;
            }
        }
    }
}

impl Add for Field {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Field (max {}):", self.max())?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..GRID_SIZE {
            write!(f, " {:>3}", (b'A' + c as u8) as char)?;
        }
        for (r, row) in self.cells.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:2} ", r + 1)?;
            for v in row {
                write!(f, " {:>3}", v)?;
            }
        }
        Ok(())
    }
}

/// Count, for each cell, the placements of a ship of `length` covering it.
///
/// Both orientations are enumerated; a placement is discarded when any of its
/// cells has already been shot, hit or miss.
pub fn calc_density(length: usize, shots: &ShotHistory) -> DensityField {
    let mut field = Field::zero();
    if length == 0 || length > GRID_SIZE {
        return field;
    }

    for orient in [Orientation::Horizontal, Orientation::Vertical] {
        let dir = orient.forward();
        let (max_row, max_col) = match orient {
            Orientation::Horizontal => (GRID_SIZE, GRID_SIZE - length + 1),
            Orientation::Vertical => (GRID_SIZE - length + 1, GRID_SIZE),
        };
        for r in 0..max_row {
            for c in 0..max_col {
                let start = Coordinate::new(r as i8, c as i8);
                let run = (0..length).map(|k| start.offset(dir, k as i8));
                if run.clone().any(|cell| shots.contains(cell)) {
                    continue;
                }
                for cell in run {
                    if let Some((rr, cc)) = cell.index() {
                        field.cells[rr][cc] += 1;
                    }
                }
            }
        }
    }

    field
}

/// Sum the density fields of every length still in `fleet`.
///
/// Repeated lengths contribute once per ship.
pub fn calc_probability(fleet: &RemainingFleet, shots: &ShotHistory) -> ProbabilityField {
    fleet
        .lengths()
        .iter()
        .fold(Field::zero(), |acc, &len| acc + calc_density(len, shots))
}

/// Pick uniformly among the unshot cells with the highest value.
///
/// Returns `None` once every cell has been shot.
pub fn select_peak(field: &Field, shots: &ShotHistory, rng: &mut SmallRng) -> Option<Coordinate> {
    let peaks = field.peaks(shots);
    match peaks.len() {
        0 => None,
        1 => Some(peaks[0]),
        n => Some(peaks[rng.random_range(0..n)]),
    }
}
