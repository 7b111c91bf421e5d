//! Piece types and their canonical movement tables.
//!
//! Every table is written from the point of view of a mover whose forward is `+y`
//! (see [`Coord::oriented`] for the mirror). The three direction classes are:
//!
//! - step: one square, blocked only by an allied piece on the target
//! - slide: repeated steps until the edge, an ally (exclusive) or an enemy (inclusive)
//! - knight jump: a fixed offset that ignores intervening squares

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::coord::{
    Coord, DOWN, DOWN_LEFT, DOWN_RIGHT, LEFT, RIGHT, UP, UP_LEFT, UP_RIGHT,
};
use crate::shogi::side::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Lance,
    Knight,
    Silver,
    Gold,
    Bishop,
    Rook,
    King,
    ProPawn,
    ProLance,
    ProKnight,
    ProSilver,
    /// Promoted bishop (dragon horse).
    Horse,
    /// Promoted rook (dragon king).
    Dragon,
}

impl PieceType {
    pub const ALL: [PieceType; 14] = [
        PieceType::Pawn,
        PieceType::Lance,
        PieceType::Knight,
        PieceType::Silver,
        PieceType::Gold,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::King,
        PieceType::ProPawn,
        PieceType::ProLance,
        PieceType::ProKnight,
        PieceType::ProSilver,
        PieceType::Horse,
        PieceType::Dragon,
    ];

    /// Single-square moves.
    #[inline]
    pub fn step_dirs(self) -> &'static [Coord] {
        use PieceType::*;
        match self {
            Pawn => &PAWN_STEPS,
            Silver => &SILVER_STEPS,
            Gold | ProPawn | ProLance | ProKnight | ProSilver => &GOLD_STEPS,
            King => &KING_STEPS,
            Horse => &ORTHOGONAL,
            Dragon => &DIAGONAL,
            Lance | Knight | Bishop | Rook => &[],
        }
    }

    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        use PieceType::*;
        match self {
            Lance => &LANCE_SLIDES,
            Bishop | Horse => &DIAGONAL,
            Rook | Dragon => &ORTHOGONAL,
            Pawn | Knight | Silver | Gold | King | ProPawn | ProLance | ProKnight | ProSilver => {
                &[]
            }
        }
    }

    #[inline]
    pub fn knight_jumps(self) -> &'static [Coord] {
        match self {
            PieceType::Knight => &KNIGHT_JUMPS,
            _ => &[],
        }
    }

    /// The promoted form, or `None` for pieces that do not promote.
    pub fn promoted(self) -> Option<PieceType> {
        use PieceType::*;
        match self {
            Pawn => Some(ProPawn),
            Lance => Some(ProLance),
            Knight => Some(ProKnight),
            Silver => Some(ProSilver),
            Bishop => Some(Horse),
            Rook => Some(Dragon),
            _ => None,
        }
    }

    /// The base form; base pieces map to themselves.
    pub fn unpromoted(self) -> PieceType {
        use PieceType::*;
        match self {
            ProPawn => Pawn,
            ProLance => Lance,
            ProKnight => Knight,
            ProSilver => Silver,
            Horse => Bishop,
            Dragon => Rook,
            other => other,
        }
    }

    #[inline]
    pub fn is_promoted(self) -> bool {
        self.unpromoted() != self
    }

    /// Kinds that can be held in reserve: every base piece except the king.
    #[inline]
    pub fn is_droppable_kind(self) -> bool {
        !self.is_promoted() && self != PieceType::King
    }
}

/// The content of an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub side: Side,
    pub kind: PieceType,
}

impl Piece {
    #[inline]
    pub const fn new(side: Side, kind: PieceType) -> Self {
        Self { side, kind }
    }
}

pub const PAWN_STEPS: [Coord; 1] = [UP];

pub const LANCE_SLIDES: [Coord; 1] = [UP];

pub const KNIGHT_JUMPS: [Coord; 2] = [Coord { x: -1, y: 2 }, Coord { x: 1, y: 2 }];

/// The three forward squares plus both rear diagonals.
pub const SILVER_STEPS: [Coord; 5] = [UP_LEFT, UP, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];

/// Everything but the rear diagonals.
pub const GOLD_STEPS: [Coord; 6] = [UP_LEFT, UP, UP_RIGHT, LEFT, DOWN, RIGHT];

pub const KING_STEPS: [Coord; 8] = [
    UP_LEFT, UP, UP_RIGHT, LEFT, RIGHT, DOWN_LEFT, DOWN, DOWN_RIGHT,
];

pub const ORTHOGONAL: [Coord; 4] = [LEFT, UP, RIGHT, DOWN];

pub const DIAGONAL: [Coord; 4] = [UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];
