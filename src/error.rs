//! Error types for caller contract violations.
//!
//! Rule violations (illegal drops, self-check, nifu, uchifuzume) are not errors: they are
//! reported by omission from the legal move list or as a
//! [`DropViolation`](crate::rules::drops::DropViolation).

use thiserror::Error;

use crate::core::square::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A board move whose source square holds no piece
    #[error("No piece at source square {square}")]
    EmptySource { square: Square },

    /// A square outside the grid
    #[error("Square {square} is outside the {width}x{height} board")]
    OutOfBounds {
        square: Square,
        width: i32,
        height: i32,
    },

    /// A board with no squares
    #[error("Invalid board dimensions {width}x{height} (both must be positive)")]
    InvalidDimensions { width: i32, height: i32 },

    /// Row-major cells that do not fill the grid exactly
    #[error("Board needs exactly width*height cells: expected {expected} cells, found {found}")]
    CellCountMismatch { expected: usize, found: usize },
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
