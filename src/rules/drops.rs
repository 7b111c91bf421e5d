//! Drop placement rules.

use std::fmt;

use crate::core::board::{has_unpromoted_pawn_on_file, is_last_rank, is_last_two_ranks, Board};
use crate::shogi::moves::Move;
use crate::shogi::piece::PieceType;
use crate::shogi::side::Side;

/// Why a drop may not be played. This is a rule outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropViolation {
    /// The destination is outside the grid.
    OffBoard,
    /// The destination holds a piece.
    Occupied,
    /// A pawn or lance on the dropping side's last rank.
    DropLastRank,
    /// A knight on either of the dropping side's last two ranks.
    DropLastTwoRanks,
    /// A pawn on a file that already has an unpromoted pawn of the same side.
    Nifu,
    /// Kings are never held in reserve.
    DropKingForbidden,
}

impl DropViolation {
    /// Stable machine-readable reason.
    pub fn reason(self) -> &'static str {
        match self {
            DropViolation::OffBoard => "off_board",
            DropViolation::Occupied => "occupied",
            DropViolation::DropLastRank => "drop_last_rank",
            DropViolation::DropLastTwoRanks => "drop_last_two_ranks",
            DropViolation::Nifu => "nifu",
            DropViolation::DropKingForbidden => "drop_king_forbidden",
        }
    }
}

impl fmt::Display for DropViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Check the placement rules for a drop by `side`. Board moves always pass.
///
/// The first failing check is reported, in this order: off board, occupied, last rank,
/// last two ranks, nifu, king drop.
pub fn validate_drop_constraints(board: &Board, mv: &Move, side: Side) -> Result<(), DropViolation> {
    let Move::Drop { to, piece } = *mv else {
        return Ok(());
    };
    let height = board.height();

    if !board.contains(to) {
        return Err(DropViolation::OffBoard);
    }
    if !board.is_empty_at(to) {
        return Err(DropViolation::Occupied);
    }
    if matches!(piece, PieceType::Pawn | PieceType::Lance) && is_last_rank(to.y, side, height) {
        return Err(DropViolation::DropLastRank);
    }
    if piece == PieceType::Knight && is_last_two_ranks(to.y, side, height) {
        return Err(DropViolation::DropLastTwoRanks);
    }
    if piece == PieceType::Pawn && has_unpromoted_pawn_on_file(board, side, to.x) {
        return Err(DropViolation::Nifu);
    }
    if piece == PieceType::King {
        return Err(DropViolation::DropKingForbidden);
    }
    Ok(())
}

/// A drop of `piece` on every empty square, row-major.
///
/// No placement rule is applied here; the reserve itself is tracked by the caller.
pub fn drop_candidates(board: &Board, piece: PieceType) -> Vec<Move> {
    board
        .squares()
        .filter(|&sq| board.is_empty_at(sq))
        .map(|sq| Move::drop(sq, piece))
        .collect()
}
