//! Legality filter: turns pseudo-legal candidates into legal moves.
//!
//! Nothing here tracks pins or attack maps. Every candidate is played on a scratch copy of
//! the board and check is re-derived from scratch, which also covers pinned pieces.

use tracing::{debug, trace};

use crate::core::board::{clone_board, Board};
use crate::error::{RulesError, RulesResult};
use crate::shogi::moves::Move;
use crate::shogi::piece::{Piece, PieceType};
use crate::shogi::side::Side;

use super::attacks::in_check;
use super::drops::{drop_candidates, validate_drop_constraints};
use super::movegen::pseudo_legal_moves;

/// Play `mv` for `side` on a copy of `board`. The input board is left untouched.
///
/// Drops place a new `side` piece on the destination. Board moves clear the source and
/// write the moving piece (or its `promote_to` type) on the destination; the mover keeps
/// the side of the piece found on the source square.
pub fn apply_move(board: &Board, mv: &Move, side: Side) -> RulesResult<Board> {
    let mut next = clone_board(board);

    match *mv {
        Move::Drop { to, piece } => {
            next.place(to, Piece::new(side, piece))?;
        }
        Move::Board {
            from,
            to,
            promote_to,
            ..
        } => {
            if !board.contains(from) {
                return Err(RulesError::OutOfBounds {
                    square: from,
                    width: board.width(),
                    height: board.height(),
                });
            }
            let moving = board
                .get(from)
                .ok_or(RulesError::EmptySource { square: from })?;
            next.set(from, None)?;
            let kind = promote_to.unwrap_or(moving.kind);
            next.place(to, Piece::new(moving.side, kind))?;
        }
    }

    Ok(next)
}

/// After a pawn drop by `attacker`, is the defender mated?
///
/// True iff the defender is in check and every pseudo-legal reply still leaves it in check.
/// Defender drops are not considered: the reserve is not part of the board.
pub fn is_pawn_drop_checkmate(board_after_drop: &Board, attacker: Side) -> RulesResult<bool> {
    let defender = attacker.opposite();
    if !in_check(board_after_drop, defender) {
        return Ok(false);
    }

    for reply in pseudo_legal_moves(board_after_drop, defender) {
        let next = apply_move(board_after_drop, &reply, defender)?;
        if !in_check(&next, defender) {
            trace!(%reply, "pawn drop check can be answered");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Keep the candidates `side` may legally play, preserving their order.
///
/// A candidate is dropped if it is a drop breaking a placement rule, if it leaves `side`'s
/// king in check, or if it is a pawn drop that mates (uchifuzume).
pub fn filter_illegal_moves(board: &Board, moves: &[Move], side: Side) -> RulesResult<Vec<Move>> {
    let mut legal = Vec::with_capacity(moves.len());

    for mv in moves {
        if let Err(violation) = validate_drop_constraints(board, mv, side) {
            trace!(%mv, %side, reason = violation.reason(), "discarding drop");
            continue;
        }

        let after = apply_move(board, mv, side)?;
        if in_check(&after, side) {
            trace!(%mv, %side, "discarding move: own king in check");
            continue;
        }

        if mv.is_pawn_drop() && is_pawn_drop_checkmate(&after, side)? {
            trace!(%mv, %side, "discarding move: pawn drop mate");
            continue;
        }

        legal.push(*mv);
    }

    debug!(
        %side,
        candidates = moves.len(),
        legal = legal.len(),
        "filtered candidate moves"
    );
    Ok(legal)
}

/// Every legal move for `side`: board moves first (row-major), then drops of each type in
/// `hand`, in the order given.
///
/// `hand` lists the piece types `side` holds in reserve; duplicates are ignored.
pub fn legal_moves(board: &Board, side: Side, hand: &[PieceType]) -> RulesResult<Vec<Move>> {
    let mut candidates = pseudo_legal_moves(board, side);

    let mut seen: Vec<PieceType> = Vec::with_capacity(hand.len());
    for &kind in hand {
        if seen.contains(&kind) {
            continue;
        }
        seen.push(kind);
        candidates.extend(drop_candidates(board, kind));
    }

    filter_illegal_moves(board, &candidates, side)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// In check with no legal move.
    Checkmate,
    /// Not in check, but no legal move either.
    NoLegalMoves,
    InCheck,
    Ongoing,
}

/// Status of the position for the side to move, given the reserve it holds.
pub fn game_status(board: &Board, side: Side, hand: &[PieceType]) -> RulesResult<GameStatus> {
    let checked = in_check(board, side);
    let has_move = !legal_moves(board, side, hand)?.is_empty();

    Ok(match (checked, has_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::NoLegalMoves,
        (true, true) => GameStatus::InCheck,
        (false, true) => GameStatus::Ongoing,
    })
}
