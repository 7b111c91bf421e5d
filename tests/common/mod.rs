#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::Rng;
use shogi_rules::{Board, Piece, PieceType, Side, Square};

pub fn board(pieces: &[(i32, i32, Side, PieceType)]) -> Board {
    let mut b = Board::standard();
    for &(x, y, side, kind) in pieces {
        b.place(Square::new(x, y), Piece::new(side, kind)).unwrap();
    }
    b
}

/// A 9×9 position with one king per side and `extra` other pieces on distinct squares.
pub fn random_board(rng: &mut StdRng, extra: usize) -> Board {
    let mut b = Board::standard();
    let mut free: Vec<Square> = b.squares().collect();

    let mut take = |rng: &mut StdRng| {
        let i = rng.gen_range(0..free.len());
        free.swap_remove(i)
    };

    for side in [Side::Sente, Side::Gote] {
        let sq = take(&mut *rng);
        b.place(sq, Piece::new(side, PieceType::King)).unwrap();
    }
    let kinds: Vec<PieceType> = PieceType::ALL
        .into_iter()
        .filter(|&k| k != PieceType::King)
        .collect();
    for _ in 0..extra {
        let sq = take(&mut *rng);
        let side = if rng.gen_bool(0.5) { Side::Sente } else { Side::Gote };
        let kind = kinds[rng.gen_range(0..kinds.len())];
        b.place(sq, Piece::new(side, kind)).unwrap();
    }
    b
}
