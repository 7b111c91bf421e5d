//! Built-in reference positions (compile-time configs).
//!
//! All boards are standard 9×9. Coordinates are absolute: Sente advances toward `+y`.

use crate::core::board::Board;
use crate::core::square::Square;
use crate::error::RulesResult;
use crate::shogi::piece::{Piece, PieceType};
use crate::shogi::side::Side;

/// A position plus the side to move and the piece types that side holds in reserve.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub board: Board,
    pub to_move: Side,
    pub hand: Vec<PieceType>,
}

fn board_from(pieces: &[(i32, i32, Side, PieceType)]) -> RulesResult<Board> {
    let mut board = Board::standard();
    for &(x, y, side, kind) in pieces {
        board.place(Square::new(x, y), Piece::new(side, kind))?;
    }
    Ok(board)
}

/// Sente king on (4,0) facing a Gote rook down an open file.
pub fn rook_on_open_file() -> RulesResult<Scenario> {
    Ok(Scenario {
        name: "rook_on_open_file",
        board: board_from(&[
            (4, 0, Side::Sente, PieceType::King),
            (4, 8, Side::Gote, PieceType::Rook),
        ])?,
        to_move: Side::Sente,
        hand: Vec::new(),
    })
}

/// A Sente gold standing between its king and a Gote rook.
pub fn pinned_gold() -> RulesResult<Scenario> {
    Ok(Scenario {
        name: "pinned_gold",
        board: board_from(&[
            (4, 0, Side::Sente, PieceType::King),
            (4, 1, Side::Sente, PieceType::Gold),
            (4, 8, Side::Gote, PieceType::Rook),
            (0, 8, Side::Gote, PieceType::King),
        ])?,
        to_move: Side::Sente,
        hand: Vec::new(),
    })
}

/// Gote king cornered on (0,8). A Sente pawn on (0,7) would be protected by the silver on
/// (1,6), and the only flight squares (1,7) and (1,8) are covered by the silver and the
/// bishop on (3,6).
fn cornered_king(extra: &[(i32, i32, Side, PieceType)]) -> RulesResult<Board> {
    let mut pieces = vec![
        (8, 0, Side::Sente, PieceType::King),
        (1, 6, Side::Sente, PieceType::Silver),
        (3, 6, Side::Sente, PieceType::Bishop),
        (0, 8, Side::Gote, PieceType::King),
    ];
    pieces.extend_from_slice(extra);
    board_from(&pieces)
}

/// Sente holds a pawn; dropping it on (0,7) would mate, which the drop rule forbids.
pub fn pawn_drop_mate() -> RulesResult<Scenario> {
    Ok(Scenario {
        name: "pawn_drop_mate",
        board: cornered_king(&[])?,
        to_move: Side::Sente,
        hand: vec![PieceType::Pawn],
    })
}

/// The same mate delivered by pushing a pawn from (0,6), which is allowed.
pub fn pawn_push_mate() -> RulesResult<Scenario> {
    Ok(Scenario {
        name: "pawn_push_mate",
        board: cornered_king(&[(0, 6, Side::Sente, PieceType::Pawn)])?,
        to_move: Side::Sente,
        hand: Vec::new(),
    })
}

pub fn all() -> RulesResult<Vec<Scenario>> {
    Ok(vec![
        rook_on_open_file()?,
        pinned_gold()?,
        pawn_drop_mate()?,
        pawn_push_mate()?,
    ])
}
