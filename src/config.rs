use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const GRID_SIZE: usize = BOARD_SIZE as usize;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Ship lengths of the standard fleet, in placement order.
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Upper bound on shots in one game; every cell fired on once.
pub const MAX_TURNS: usize = GRID_SIZE * GRID_SIZE;

/// Random placement attempts per ship before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Hunting algorithm plugged into a [`TargetingEngine`](crate::TargetingEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum StrategyKind {
    /// Placement density hunting with hit follow-up.
    #[default]
    Probability,
    /// Checkerboard hunting with neighbour follow-up.
    Parity,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Probability, StrategyKind::Parity];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Probability => "probability",
            StrategyKind::Parity => "parity",
        }
    }
}

