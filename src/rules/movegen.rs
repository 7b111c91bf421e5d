//! Pseudo-legal move generation.
//!
//! Moves respect piece movement and occupancy only. King safety and drop rules are applied
//! later by [`crate::rules::legality::filter_illegal_moves`].

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::core::square::Square;
use crate::shogi::moves::Move;
use crate::shogi::piece::Piece;
use crate::shogi::side::Side;

/// All pseudo-legal moves of the piece on `(x, y)`; empty if the square is empty.
///
/// Directions are emitted slides first, then steps, then knight jumps, each in table order.
pub fn pseudo_legal_moves_for_square(board: &Board, x: i32, y: i32) -> Vec<Move> {
    let from = Square::new(x, y);
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    gen_sliding(board, from, piece, &mut out);
    gen_single(board, from, piece, piece.kind.step_dirs(), &mut out);
    gen_single(board, from, piece, piece.kind.knight_jumps(), &mut out);
    out
}

/// Pseudo-legal moves for every piece of `side`, scanning `y` ascending then `x` ascending.
pub fn pseudo_legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::new();
    for (sq, piece) in board.pieces() {
        if piece.side == side {
            out.extend(pseudo_legal_moves_for_square(board, sq.x, sq.y));
        }
    }
    out
}

fn gen_sliding(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for &dir in piece.kind.slide_dirs() {
        let step = dir.oriented(piece.side);

        for distance in 1.. {
            let cur = from.shifted(step * distance);
            if !board.contains(cur) || board.ally_at(cur, piece.side) {
                break;
            }
            let capture = board.enemy_at(cur, piece.side);
            out.push(Move::board(from, cur, piece.kind, capture));
            if capture {
                break;
            }
        }
    }
}

/// Steps and knight jumps share one rule: only the target square matters.
fn gen_single(board: &Board, from: Square, piece: Piece, deltas: &[Coord], out: &mut Vec<Move>) {
    for &delta in deltas {
        let to = from.shifted(delta.oriented(piece.side));
        if !board.contains(to) || board.ally_at(to, piece.side) {
            continue;
        }
        out.push(Move::board(from, to, piece.kind, board.enemy_at(to, piece.side)));
    }
}
