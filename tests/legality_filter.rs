mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shogi_rules::{
    apply_move, clone_board, filter_illegal_moves, game_status, in_check, is_pawn_drop_checkmate,
    legal_moves, pseudo_legal_moves, GameStatus, Move, Piece, PieceType, RulesError, Side, Square,
};

use common::{board, random_board};

#[test]
fn pinned_gold_may_only_move_along_the_file() {
    let b = board(&[
        (4, 0, Side::Sente, PieceType::King),
        (4, 1, Side::Sente, PieceType::Gold),
        (4, 8, Side::Gote, PieceType::Rook),
    ]);
    let gold_moves: Vec<Move> = pseudo_legal_moves(&b, Side::Sente)
        .into_iter()
        .filter(|m| m.piece() == PieceType::Gold)
        .collect();
    let legal = filter_illegal_moves(&b, &gold_moves, Side::Sente).unwrap();
    assert_eq!(
        legal,
        vec![Move::board(
            Square::new(4, 1),
            Square::new(4, 2),
            PieceType::Gold,
            false
        )]
    );
}

#[test]
fn only_drops_that_block_the_check_survive() {
    let b = board(&[
        (4, 0, Side::Sente, PieceType::King),
        (4, 8, Side::Gote, PieceType::Rook),
    ]);
    let candidates = [
        Move::drop(Square::new(0, 3), PieceType::Gold),
        Move::drop(Square::new(4, 6), PieceType::Gold),
        Move::drop(Square::new(20, 20), PieceType::Gold),
        Move::drop(Square::new(4, 3), PieceType::Gold),
        Move::drop(Square::new(5, 3), PieceType::Gold),
    ];
    let legal = filter_illegal_moves(&b, &candidates, Side::Sente).unwrap();
    assert_eq!(
        legal,
        vec![
            Move::drop(Square::new(4, 6), PieceType::Gold),
            Move::drop(Square::new(4, 3), PieceType::Gold),
        ]
    );
}

#[test]
fn king_may_not_step_into_an_attacked_square() {
    let b = board(&[
        (4, 0, Side::Sente, PieceType::King),
        (3, 8, Side::Gote, PieceType::Lance),
    ]);
    let legal = legal_moves(&b, Side::Sente, &[]).unwrap();
    let targets: Vec<Square> = legal.iter().map(|m| m.to()).collect();
    assert!(!targets.contains(&Square::new(3, 0)));
    assert!(!targets.contains(&Square::new(3, 1)));
    assert!(targets.contains(&Square::new(5, 1)));
    assert_eq!(legal.len(), 3);
}

#[test]
fn filter_output_is_an_ordered_subset_that_keeps_the_king_safe() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..60 {
        let b = random_board(&mut rng, 16);
        for side in [Side::Sente, Side::Gote] {
            let candidates = pseudo_legal_moves(&b, side);
            let legal = filter_illegal_moves(&b, &candidates, side).unwrap();

            let mut rest = candidates.iter();
            for mv in &legal {
                assert!(rest.any(|c| c == mv), "{mv} missing or out of order");
                let after = apply_move(&b, mv, side).unwrap();
                assert!(!in_check(&after, side), "{mv} leaves the king attacked");
            }
        }
    }
}

#[test]
fn missing_king_means_no_legal_move() {
    let b = board(&[(4, 4, Side::Sente, PieceType::Gold)]);
    let candidates = pseudo_legal_moves(&b, Side::Sente);
    assert_eq!(candidates.len(), 6);
    assert!(filter_illegal_moves(&b, &candidates, Side::Sente)
        .unwrap()
        .is_empty());
}

fn cornered(extra: &[(i32, i32, Side, PieceType)]) -> Vec<(i32, i32, Side, PieceType)> {
    let mut pieces = vec![
        (8, 0, Side::Sente, PieceType::King),
        (1, 6, Side::Sente, PieceType::Silver),
        (3, 6, Side::Sente, PieceType::Bishop),
        (0, 8, Side::Gote, PieceType::King),
    ];
    pieces.extend_from_slice(extra);
    pieces
}

#[test]
fn pawn_drop_mate_is_excluded_but_pawn_push_mate_is_not() {
    let drop_board = board(&cornered(&[]));
    let drop = Move::drop(Square::new(0, 7), PieceType::Pawn);
    assert!(filter_illegal_moves(&drop_board, &[drop], Side::Sente)
        .unwrap()
        .is_empty());

    let push_board = board(&cornered(&[(0, 6, Side::Sente, PieceType::Pawn)]));
    let push = Move::board(Square::new(0, 6), Square::new(0, 7), PieceType::Pawn, false);
    assert_eq!(
        filter_illegal_moves(&push_board, &[push], Side::Sente).unwrap(),
        vec![push]
    );

    // Both paths reach the same position, and it is mate.
    let after_drop = apply_move(&drop_board, &drop, Side::Sente).unwrap();
    let after_push = apply_move(&push_board, &push, Side::Sente).unwrap();
    assert_eq!(after_drop, after_push);
    assert!(is_pawn_drop_checkmate(&after_drop, Side::Sente).unwrap());
    assert_eq!(
        game_status(&after_push, Side::Gote, &[]).unwrap(),
        GameStatus::Checkmate
    );
}

#[test]
fn pawn_drop_check_with_an_escape_is_allowed() {
    // Without the bishop the king escapes to (1,8).
    let pieces: Vec<_> = cornered(&[])
        .into_iter()
        .filter(|p| p.3 != PieceType::Bishop)
        .collect();
    let b = board(&pieces);
    let drop = Move::drop(Square::new(0, 7), PieceType::Pawn);

    let after = apply_move(&b, &drop, Side::Sente).unwrap();
    assert!(in_check(&after, Side::Gote));
    assert!(!is_pawn_drop_checkmate(&after, Side::Sente).unwrap());
    assert_eq!(
        filter_illegal_moves(&b, &[drop], Side::Sente).unwrap(),
        vec![drop]
    );
}

#[test]
fn unprotected_pawn_drop_can_be_captured() {
    let b = board(&[
        (8, 0, Side::Sente, PieceType::King),
        (0, 8, Side::Gote, PieceType::King),
        (1, 0, Side::Sente, PieceType::Rook),
    ]);
    let after = apply_move(&b, &Move::drop(Square::new(0, 7), PieceType::Pawn), Side::Sente)
        .unwrap();
    // (1,7) and (1,8) are covered by the rook, but the pawn itself is free to take.
    assert!(!is_pawn_drop_checkmate(&after, Side::Sente).unwrap());
}

#[test]
fn non_checking_pawn_drop_is_never_mate() {
    let b = board(&cornered(&[]));
    let after = apply_move(&b, &Move::drop(Square::new(5, 5), PieceType::Pawn), Side::Sente)
        .unwrap();
    assert!(!is_pawn_drop_checkmate(&after, Side::Sente).unwrap());
}

#[test]
fn legal_moves_in_the_drop_mate_position() {
    let b = board(&cornered(&[]));
    let legal = legal_moves(&b, Side::Sente, &[PieceType::Pawn]).unwrap();
    let pawn_drops: Vec<Square> = legal
        .iter()
        .filter(|m| m.is_pawn_drop())
        .map(|m| m.to())
        .collect();

    assert!(!pawn_drops.contains(&Square::new(0, 7)));
    assert!(pawn_drops.contains(&Square::new(0, 5)));
    assert!(pawn_drops.iter().all(|sq| sq.y != 0));
    assert_eq!(
        game_status(&b, Side::Sente, &[PieceType::Pawn]).unwrap(),
        GameStatus::Ongoing
    );
}

#[test]
fn clone_is_independent_of_its_source() {
    let source = board(&[
        (4, 0, Side::Sente, PieceType::King),
        (4, 8, Side::Gote, PieceType::King),
    ]);
    let mut copy = clone_board(&source);
    assert_eq!(copy, source);

    copy.place(Square::new(0, 0), Piece::new(Side::Gote, PieceType::Dragon))
        .unwrap();
    copy.set(Square::new(4, 0), None).unwrap();

    assert_ne!(copy, source);
    assert_eq!(source.get(Square::new(0, 0)), None);
    assert_eq!(
        source.get(Square::new(4, 0)),
        Some(Piece::new(Side::Sente, PieceType::King))
    );
}

#[test]
fn malformed_candidates_are_reported() {
    let b = board(&[(4, 0, Side::Sente, PieceType::King)]);
    let bogus = Move::board(Square::new(2, 2), Square::new(2, 3), PieceType::Silver, false);
    assert_eq!(
        filter_illegal_moves(&b, &[bogus], Side::Sente),
        Err(RulesError::EmptySource {
            square: Square::new(2, 2)
        })
    );
}

#[test]
fn cornered_king_without_reserve_has_no_moves() {
    let b = board(&[
        (0, 0, Side::Sente, PieceType::King),
        (2, 1, Side::Gote, PieceType::Gold),
        (1, 2, Side::Gote, PieceType::Gold),
        (8, 8, Side::Gote, PieceType::King),
    ]);
    // Gote golds move toward -y: (2,1) covers (1,0),(1,1); (1,2) covers (0,1),(1,1).
    assert!(!in_check(&b, Side::Sente));
    assert_eq!(
        game_status(&b, Side::Sente, &[]).unwrap(),
        GameStatus::NoLegalMoves
    );
    assert_eq!(
        game_status(&b, Side::Sente, &[PieceType::Silver]).unwrap(),
        GameStatus::Ongoing
    );
}
