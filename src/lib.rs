#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod battle;
mod bitboard;
mod board;
mod common;
mod config;
mod coordinate;
mod density;
mod engine;
mod history;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
mod state;
pub mod strategy;
#[cfg(feature = "std")]
mod ui;

pub use battle::*;
pub use bitboard::{BitBoard, BitBoardError, Cells, Mask};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use density::*;
pub use engine::*;
pub use history::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use state::*;
pub use strategy::{ParityTargeting, ProbabilityTargeting, TargetingStrategy};
#[cfg(feature = "std")]
pub use ui::*;
