use std::ops::{Add, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::shogi::side::Side;

/// A displacement on the board, used for direction tables.
///
/// Tables are written once for a mover whose forward is `+y`; [`Coord::oriented`] mirrors
/// them for the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Mirror the vector for `side`: `x` is kept, `y` is multiplied by the side's forward sign.
    #[inline]
    pub fn oriented(self, side: Side) -> Coord {
        Coord::new(self.x, self.y * side.forward())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

// Unit vectors, as seen by a mover whose forward is +y.
pub const LEFT: Coord = Coord { x: -1, y: 0 };
pub const UP: Coord = Coord { x: 0, y: 1 };
pub const RIGHT: Coord = Coord { x: 1, y: 0 };
pub const DOWN: Coord = Coord { x: 0, y: -1 };
pub const UP_LEFT: Coord = Coord { x: -1, y: 1 };
pub const UP_RIGHT: Coord = Coord { x: 1, y: 1 };
pub const DOWN_LEFT: Coord = Coord { x: -1, y: -1 };
pub const DOWN_RIGHT: Coord = Coord { x: 1, y: -1 };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gote_mirrors_only_the_y_axis() {
        assert_eq!(UP_LEFT.oriented(Side::Sente), UP_LEFT);
        assert_eq!(UP_LEFT.oriented(Side::Gote), DOWN_LEFT);
        assert_eq!(Coord::new(1, 2).oriented(Side::Gote), Coord::new(1, -2));
        assert_eq!(LEFT.oriented(Side::Gote), LEFT);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(UP * 3 + LEFT, Coord::new(-1, 3));
        assert_eq!(DOWN_RIGHT.oriented(Side::Gote) * 2, Coord::new(2, 2));
    }
}
