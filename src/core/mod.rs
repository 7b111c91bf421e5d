//! Low-level primitives.
//!
//! - [`coord`]: direction vectors, the canonical unit steps and the side mirror.
//! - [`square`]: absolute board squares with row-major ordering.
//! - [`board`]: the grid snapshot plus the occupancy and rank helpers the rules rely on.

pub mod board;
pub mod coord;
pub mod square;
