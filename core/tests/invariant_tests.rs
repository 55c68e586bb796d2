// SPDX-License-Identifier: MIT OR Apache-2.0

//! Randomized checks of the ownership and self-capture rules
#![deny(clippy::all)]

use hotseat_core::{board::Board, is_legal, legal_destinations, Piece, PieceKind, Side, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

fn random_board(rng: &mut StdRng) -> Board {
    let mut board = Board::empty();
    for square in Square::all() {
        if rng.gen_bool(0.35) {
            let kind = KINDS[rng.gen_range(0..KINDS.len())];
            let side = if rng.gen_bool(0.5) { Side::White } else { Side::Black };
            board.place(square, Piece::new(kind, side));
        }
    }
    board
}

#[test]
fn origin_must_belong_to_side_to_move() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let board = random_board(&mut rng);
        for side in [Side::White, Side::Black] {
            for origin in Square::all() {
                let owned = matches!(board.get(origin), Some(p) if p.side == side);
                if owned {
                    continue;
                }
                for destination in Square::all() {
                    assert!(!is_legal(&board, origin, destination, side));
                }
            }
        }
    }
}

#[test]
fn never_captures_own_piece() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let board = random_board(&mut rng);
        for side in [Side::White, Side::Black] {
            for (origin, _) in board.pieces().filter(|(_, p)| p.side == side) {
                for destination in legal_destinations(&board, origin, side).squares() {
                    let target = board.get(destination);
                    assert!(
                        !matches!(target, Some(p) if p.side == side),
                        "{} -> {} lands on a friendly piece",
                        origin,
                        destination
                    );
                }
            }
        }
    }
}

#[test]
fn scanner_matches_pointwise_validation() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let board = random_board(&mut rng);
        let side = if rng.gen_bool(0.5) { Side::White } else { Side::Black };
        for origin in Square::all() {
            let map = legal_destinations(&board, origin, side);
            for destination in Square::all() {
                assert_eq!(map.get(destination), is_legal(&board, origin, destination, side));
            }
        }
    }
}

