use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::square::Square;
use crate::shogi::piece::PieceType;

/// Represents a move which either is a board move or a drop from reserve.
///
/// Moves carry no identity beyond their fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Board {
        from: Square,
        to: Square,
        piece: PieceType,
        capture: bool,
        /// The type written to `to` instead of `piece`, if the move promotes.
        promote_to: Option<PieceType>,
    },
    Drop {
        to: Square,
        piece: PieceType,
    },
}

impl Move {
    #[inline]
    pub fn board(from: Square, to: Square, piece: PieceType, capture: bool) -> Move {
        Move::Board {
            from,
            to,
            piece,
            capture,
            promote_to: None,
        }
    }

    #[inline]
    pub fn drop(to: Square, piece: PieceType) -> Move {
        Move::Drop { to, piece }
    }

    /// The same board move, landing as `promote_to`. Drops are returned unchanged.
    pub fn promoting(self, promote_to: PieceType) -> Move {
        match self {
            Move::Board {
                from,
                to,
                piece,
                capture,
                ..
            } => Move::Board {
                from,
                to,
                piece,
                capture,
                promote_to: Some(promote_to),
            },
            other @ Move::Drop { .. } => other,
        }
    }

    #[inline]
    pub fn to(&self) -> Square {
        match *self {
            Move::Board { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    #[inline]
    pub fn source(&self) -> Option<Square> {
        match *self {
            Move::Board { from, .. } => Some(from),
            Move::Drop { .. } => None,
        }
    }

    #[inline]
    pub fn piece(&self) -> PieceType {
        match *self {
            Move::Board { piece, .. } | Move::Drop { piece, .. } => piece,
        }
    }

    #[inline]
    pub fn is_drop(&self) -> bool {
        matches!(self, Move::Drop { .. })
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Board { capture: true, .. })
    }

    #[inline]
    pub fn is_pawn_drop(&self) -> bool {
        matches!(
            self,
            Move::Drop {
                piece: PieceType::Pawn,
                ..
            }
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Board {
                from,
                to,
                piece,
                capture,
                promote_to,
            } => {
                write!(f, "{piece:?} {from}{}{to}", if *capture { "x" } else { "-" })?;
                if let Some(p) = promote_to {
                    write!(f, "={p:?}")?;
                }
                Ok(())
            }
            Move::Drop { to, piece } => write!(f, "{piece:?}*{to}"),
        }
    }
}
