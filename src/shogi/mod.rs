//! Shogi vocabulary: sides, piece types with their movement tables, moves and board presets.

pub mod config;
pub mod moves;
pub mod piece;
pub mod side;
