#![cfg(feature = "std")]

use crate::{
    config::GRID_SIZE, coordinate::Coordinate, density::ProbabilityField,
    history::ShotHistory,
};

fn print_header() {
    std::print!("   ");
    for c in 0..GRID_SIZE {
        std::print!(" {:>3}", (b'A' + c as u8) as char);
    }
    std::println!();
}

/// Print the placement counts behind the next hunting decision.
pub fn print_probability_board(field: &ProbabilityField) {
    std::println!("\nProbability field (max {}):", field.max());
    std::println!("{}", field);
}

/// Print the opponent board as seen from our shots: `X` hit, `o` miss.
pub fn print_shot_board(shots: &ShotHistory) {
    std::println!("\nShots fired: {}", shots.len());
    print_header();
    let hits = shots.hits();
    for r in 0..GRID_SIZE {
        std::print!("{:2} ", r + 1);
        for c in 0..GRID_SIZE {
            let coord = Coordinate::new(r as i8, c as i8);
            let ch = if hits.contains(coord) {
                'X'
            } else if shots.contains(coord) {
                'o'
            } else {
                '.'
            };
            std::print!(" {:>3}", ch);
        }
        std::println!();
    }
}
