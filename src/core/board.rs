#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::square::Square;
use crate::error::{RulesError, RulesResult};
use crate::shogi::config::BoardConfig;
use crate::shogi::piece::{Piece, PieceType};
use crate::shogi::side::Side;

/// A cell is either empty or holds exactly one piece.
pub type Cell = Option<Piece>;

/// A rectangular grid snapshot, stored row-major from `y = 0` upward.
///
/// The rules never write to a board they are given; operations that change the position
/// return a new `Board`. Cells are plain values, so a clone shares nothing with its source.
///
/// At most one king per side is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "BoardRepr")
)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

/// Unchecked wire shape of a [`Board`]; converted through [`Board::from_cells`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct BoardRepr {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardRepr> for Board {
    type Error = RulesError;

    fn try_from(repr: BoardRepr) -> RulesResult<Self> {
        Board::from_cells(repr.width, repr.height, repr.cells)
    }
}

impl Board {
    /// An empty `width × height` board.
    pub fn new(width: i32, height: i32) -> RulesResult<Self> {
        Self::check_dimensions(width, height)?;
        Ok(Self::blank(width, height))
    }

    /// A board from row-major `cells`; there must be exactly `width * height` of them.
    pub fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> RulesResult<Self> {
        Self::check_dimensions(width, height)?;
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(RulesError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn from_config(config: &BoardConfig) -> RulesResult<Self> {
        Self::new(config.width, config.height)
    }

    /// An empty board with the [`BoardConfig::standard`] dimensions.
    pub fn standard() -> Self {
        let config = BoardConfig::standard();
        Self::blank(config.width, config.height)
    }

    fn check_dimensions(width: i32, height: i32) -> RulesResult<()> {
        if width <= 0 || height <= 0 {
            return Err(RulesError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    /// Callers guarantee both dimensions are positive.
    fn blank(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.x >= 0 && sq.y >= 0 && sq.x < self.width && sq.y < self.height
    }

    #[inline]
    fn index(&self, sq: Square) -> usize {
        debug_assert!(self.contains(sq));
        (sq.y * self.width + sq.x) as usize
    }

    fn check_bounds(&self, sq: Square) -> RulesResult<()> {
        if self.contains(sq) {
            Ok(())
        } else {
            Err(RulesError::OutOfBounds {
                square: sq,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The cell at `sq`; squares outside the grid read as empty.
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        if self.contains(sq) {
            self.cells[self.index(sq)]
        } else {
            None
        }
    }

    pub fn set(&mut self, sq: Square, cell: Cell) -> RulesResult<()> {
        self.check_bounds(sq)?;
        let i = self.index(sq);
        self.cells[i] = cell;
        Ok(())
    }

    pub fn place(&mut self, sq: Square, piece: Piece) -> RulesResult<()> {
        self.set(sq, Some(piece))
    }

    /// Builder form of [`Board::place`].
    pub fn with_piece(mut self, sq: Square, side: Side, kind: PieceType) -> RulesResult<Self> {
        self.place(sq, Piece::new(side, kind))?;
        Ok(self)
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    #[inline]
    pub fn ally_at(&self, sq: Square, side: Side) -> bool {
        matches!(self.get(sq), Some(p) if p.side == side)
    }

    #[inline]
    pub fn enemy_at(&self, sq: Square, side: Side) -> bool {
        matches!(self.get(sq), Some(p) if p.side != side)
    }

    /// Every square, `y` ascending then `x` ascending.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Square::new(x, y)))
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares()
            .zip(self.cells.iter())
            .filter_map(|(sq, cell)| cell.map(|p| (sq, p)))
    }
}

/// A deep copy of `board`.
#[inline]
pub fn clone_board(board: &Board) -> Board {
    board.clone()
}

/// Sente's restricted rank is `y = 0`, Gote's is `y = height - 1`.
///
/// Used only for drop placement: pawns and lances may not be dropped here.
#[inline]
pub fn is_last_rank(y: i32, side: Side, height: i32) -> bool {
    match side {
        Side::Sente => y == 0,
        Side::Gote => y == height - 1,
    }
}

/// The restricted rank plus its neighbour; knights may not be dropped on either.
#[inline]
pub fn is_last_two_ranks(y: i32, side: Side, height: i32) -> bool {
    match side {
        Side::Sente => y <= 1,
        Side::Gote => y >= height - 2,
    }
}

/// Does `side` have an unpromoted pawn anywhere on column `file_x`?
pub fn has_unpromoted_pawn_on_file(board: &Board, side: Side, file_x: i32) -> bool {
    (0..board.height()).any(|y| {
        board.get(Square::new(file_x, y)) == Some(Piece::new(side, PieceType::Pawn))
    })
}
