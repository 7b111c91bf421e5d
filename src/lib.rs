//! Shogi move generation and legality rules.
//!
//! The crate is a pure function library over immutable [`Board`](core::board::Board)
//! snapshots:
//!
//! - [`rules::movegen`] produces pseudo-legal moves from the per-piece direction tables.
//! - [`rules::legality`] filters them: drop placement, self-check and the pawn-drop mate rule.
//!
//! Turn order, reserve bookkeeping and promotion choice belong to the caller.

pub mod core;
pub mod error;
pub mod rules;
pub mod scenarios;
pub mod shogi;

pub use self::core::board::{clone_board, Board, Cell};
pub use self::core::coord::Coord;
pub use self::core::square::Square;
pub use self::error::{RulesError, RulesResult};
pub use self::rules::attacks::{find_king, in_check};
pub use self::rules::drops::{validate_drop_constraints, DropViolation};
pub use self::rules::legality::{
    apply_move, filter_illegal_moves, game_status, is_pawn_drop_checkmate, legal_moves,
    GameStatus,
};
pub use self::rules::movegen::{pseudo_legal_moves, pseudo_legal_moves_for_square};
pub use self::shogi::config::BoardConfig;
pub use self::shogi::moves::Move;
pub use self::shogi::piece::{Piece, PieceType};
pub use self::shogi::side::{opposite, Side};
