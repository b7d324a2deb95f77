//! 2025 puzzles

pub mod day_8;
