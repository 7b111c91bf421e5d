use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two players. Sente moves toward `+y`, Gote toward `-y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Sente,
    Gote,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Sente => Side::Gote,
            Side::Gote => Side::Sente,
        }
    }

    /// Sign applied to the `y` component of canonical direction vectors.
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Side::Sente => 1,
            Side::Gote => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Sente => f.write_str("SENTE"),
            Side::Gote => f.write_str("GOTE"),
        }
    }
}

/// Free-function form of [`Side::opposite`].
#[inline]
pub fn opposite(side: Side) -> Side {
    side.opposite()
}
