use crate::core::board::Board;
use crate::core::square::Square;
use crate::shogi::piece::PieceType;
use crate::shogi::side::Side;

use super::movegen::pseudo_legal_moves;

/// The first king of `side` in row-major order, if any.
pub fn find_king(board: &Board, side: Side) -> Option<Square> {
    board
        .pieces()
        .find(|(_, p)| p.side == side && p.kind == PieceType::King)
        .map(|(sq, _)| sq)
}

/// True iff some pseudo-legal move of `attacker` lands on `target`.
pub fn is_attacked_by(board: &Board, target: Square, attacker: Side) -> bool {
    pseudo_legal_moves(board, attacker)
        .iter()
        .any(|m| m.to() == target)
}

/// Is `side`'s king attacked?
///
/// A position without a king for `side` counts as in check, so callers treat it as unsafe.
pub fn in_check(board: &Board, side: Side) -> bool {
    match find_king(board, side) {
        None => true,
        Some(king) => is_attacked_by(board, king, side.opposite()),
    }
}
