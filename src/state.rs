//! Hunt/target state machine.
//!
//! The state tracks the hits of the ship cluster currently being worked and an
//! ordered queue of cells to try next. The mode is derived from the hits: with
//! no unresolved hit the engine hunts, otherwise it targets. The queue is
//! emptied whenever the hits are, so it is never populated while hunting.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cmp::Reverse;
use core::fmt;

use crate::common::TargetingError;
use crate::config::GRID_SIZE;
use crate::coordinate::{Coordinate, Direction};
use crate::density::Field;
use crate::history::ShotHistory;
use crate::ship::Orientation;

/// Whether the next shot comes from a global search or the candidate queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Mode {
    Hunting,
    Targeting,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Hunting => write!(f, "hunting"),
            Mode::Targeting => write!(f, "targeting"),
        }
    }
}

/// Unresolved hits plus the candidate queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetingState {
    hits: Vec<Coordinate>,
    queue: VecDeque<Coordinate>,
}

impl TargetingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        if self.hits.is_empty() {
            Mode::Hunting
        } else {
            Mode::Targeting
        }
    }

    /// Hits belonging to ships not yet reported sunk, in shot order.
    pub fn hits(&self) -> &[Coordinate] {
        &self.hits
    }

    /// Candidate queue, front first.
    pub fn queue(&self) -> &VecDeque<Coordinate> {
        &self.queue
    }

    pub fn pop_candidate(&mut self) -> Option<Coordinate> {
        self.queue.pop_front()
    }

    /// Drop every unresolved hit and candidate and go back to hunting.
    pub fn reset(&mut self) {
        self.hits.clear();
        self.queue.clear();
    }

    /// Ingest a hit that did not sink anything and refine the queue.
    ///
    /// `shots` must already contain `coord`. `density` orders the neighbours of
    /// an isolated hit, highest first.
    pub fn record_hit(&mut self, coord: Coordinate, shots: &ShotHistory, density: &Field) {
        self.push_hit(coord);
        self.queue.retain(|c| !shots.contains(*c));
        match self.alignment() {
            Some(Orientation::Vertical) => {
                let top = self.hits.iter().copied().min_by_key(|c| c.row);
                let bot = self.hits.iter().copied().max_by_key(|c| c.row);
                if let (Some(top), Some(bot)) = (top, bot) {
                    self.promote([top.up(), bot.down()], shots, |c| c.col == coord.col);
                }
            }
            Some(Orientation::Horizontal) => {
                let left = self.hits.iter().copied().min_by_key(|c| c.col);
                let right = self.hits.iter().copied().max_by_key(|c| c.col);
                if let (Some(left), Some(right)) = (left, right) {
                    self.promote([left.left(), right.right()], shots, |c| c.row == coord.row);
                }
            }
            None => self.enqueue_neighbours(coord, shots, density),
        }
    }

    /// Ingest a hit that sank a ship of `length`.
    ///
    /// The run of `length` hits through `coord` is removed from the unresolved
    /// hits. Fails with [`TargetingError::UnresolvedSink`] when no such run
    /// exists; the caller is expected to [`reset`](Self::reset).
    pub fn record_sunk(
        &mut self,
        coord: Coordinate,
        length: usize,
        shots: &ShotHistory,
        density: &Field,
    ) -> Result<(), TargetingError> {
        self.push_hit(coord);
        let run = self
            .find_sunk_run(coord, length)
            .ok_or(TargetingError::UnresolvedSink { at: coord, length })?;
        self.hits.retain(|c| !run.contains(c));

        if self.hits.is_empty() {
            self.queue.clear();
        } else if self.queue.is_empty() {
            // Another ship is still hit somewhere; restart around its cells.
            let remaining = self.hits.clone();
            for hit in remaining {
                self.enqueue_neighbours(hit, shots, density);
            }
        }
        Ok(())
    }

    fn push_hit(&mut self, coord: Coordinate) {
        if !self.hits.contains(&coord) {
            self.hits.push(coord);
        }
    }

    /// Axis shared by all unresolved hits, once there are at least two.
    fn alignment(&self) -> Option<Orientation> {
        let (first, rest) = self.hits.split_first()?;
        if rest.is_empty() {
            None
        } else if rest.iter().all(|c| c.col == first.col) {
            Some(Orientation::Vertical)
        } else if rest.iter().all(|c| c.row == first.row) {
            Some(Orientation::Horizontal)
        } else {
            None
        }
    }

    /// Move the line extensions to the front of the queue, then keep every
    /// other cell on the same line ahead of off-line cells.
    fn promote<F>(&mut self, ends: [Coordinate; 2], shots: &ShotHistory, on_line: F)
    where
        F: Fn(&Coordinate) -> bool,
    {
        let fresh: Vec<Coordinate> = ends
            .into_iter()
            .filter(|c| c.valid() && !shots.contains(*c))
            .collect();
        self.queue.retain(|c| !fresh.contains(c));
        for c in fresh.into_iter().rev() {
            self.queue.push_front(c);
        }

        let (line, off): (Vec<Coordinate>, Vec<Coordinate>) =
            self.queue.drain(..).partition(|c| on_line(c));
        self.queue.extend(line);
        self.queue.extend(off);
    }

    /// Append the unshot, unqueued neighbours of `coord`, densest first.
    fn enqueue_neighbours(&mut self, coord: Coordinate, shots: &ShotHistory, density: &Field) {
        let mut fresh: Vec<Coordinate> = coord
            .adjacent()
            .filter(|c| !shots.contains(*c) && !self.queue.contains(c))
            .collect();
        fresh.sort_by_key(|c| Reverse(density.get(*c)));
        self.queue.extend(fresh);
    }

    /// Locate `length` collinear unresolved hits that include `coord`.
    ///
    /// A maximal run of exactly `length` hits through `coord` wins, vertical
    /// before horizontal. Next comes a maximal run starting at `coord` (up,
    /// down, right, left), which lets a ship end against a collinear
    /// neighbour. Ships touching end to end on both sides fall back to the
    /// first all-hit window of `length` cells through `coord`.
    fn find_sunk_run(&self, coord: Coordinate, length: usize) -> Option<Vec<Coordinate>> {
        if length == 0 || length > self.hits.len() {
            return None;
        }
        let line = |dir: Direction, behind: usize, len: usize| -> Vec<Coordinate> {
            (0..len)
                .map(|k| coord.offset(dir, k as i8 - behind as i8))
                .collect()
        };

        for dir in [Direction::Down, Direction::Right] {
            let behind = self.reach(coord, dir.opposite());
            if behind + 1 + self.reach(coord, dir) == length {
                return Some(line(dir, behind, length));
            }
        }

        for dir in Direction::ALL {
            if self.reach(coord, dir) + 1 == length {
                return Some(line(dir, 0, length));
            }
        }

        let ends = Direction::ALL.into_iter().map(|dir| (dir, 0));
        let inner = (1..length).flat_map(|behind| {
            [Direction::Down, Direction::Right]
                .into_iter()
                .map(move |dir| (dir, behind))
        });
        ends.chain(inner)
            .map(|(dir, behind)| line(dir, behind, length))
            .find(|run| run.iter().all(|c| self.hits.contains(c)))
    }

    /// Consecutive unresolved hits beyond `coord` towards `dir`.
    fn reach(&self, coord: Coordinate, dir: Direction) -> usize {
        (1..GRID_SIZE as i8)
            .take_while(|&k| self.hits.contains(&coord.offset(dir, k)))
            .count()
    }
}
