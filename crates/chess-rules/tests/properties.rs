//! Invariants checked along random playouts.

use chess_core::{PieceKind, Side};
use chess_rules::{attempt_move, initial_position, is_attacked, Board, MoveStatus, Position};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Returns true if `side`'s king is attacked on `board`.
fn king_exposed(board: &Board, side: Side) -> bool {
    match board.king(side) {
        Some(king) => is_attacked(king.square(), &board.pseudo_legal_moves(side.opposite())),
        None => true,
    }
}

fn check_invariants(position: &Position) -> Result<(), TestCaseError> {
    for side in Side::ALL {
        let player = position.player(side);
        let kings = player
            .active_pieces()
            .iter()
            .filter(|p| p.kind() == PieceKind::King)
            .count();
        prop_assert_eq!(kings, 1);
        prop_assert!(player.active_pieces().len() <= 16);

        // legal moves are exactly the candidates that keep the king safe
        let mut legal = 0;
        for mv in player.candidate_moves() {
            let exposed = king_exposed(&position.board().apply(mv), side);
            let listed = player.legal_moves().iter().any(|m| m.is_identical(mv));
            prop_assert_eq!(listed, !exposed, "{} {}", side, mv);
            if listed {
                legal += 1;
            }
        }
        prop_assert_eq!(legal, player.legal_moves().len());
        prop_assert_eq!(player.in_checkmate(), player.in_check() && legal == 0);
        prop_assert_eq!(player.in_stalemate(), !player.in_check() && legal == 0);
    }

    // the side that just moved is never left in check
    prop_assert!(!position.player(position.side_to_move().opposite()).in_check());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_playouts_keep_invariants(choices in prop::collection::vec(any::<prop::sample::Index>(), 1..60)) {
        init_tracing();
        let mut position = initial_position();

        for choice in choices {
            check_invariants(&position)?;
            let moves = position.legal_moves(position.side_to_move());
            if moves.is_empty() {
                break;
            }
            let mv = *choice.get(moves);

            let before: Vec<_> = (0..64).map(|i| position.tile_at_index(i).unwrap()).collect();
            let pieces_before = position.active_pieces(Side::White).len()
                + position.active_pieces(Side::Black).len();

            let outcome = attempt_move(&position, &mv);
            prop_assert_eq!(outcome.status(), MoveStatus::Done);

            // the original is untouched
            let after: Vec<_> = (0..64).map(|i| position.tile_at_index(i).unwrap()).collect();
            prop_assert_eq!(&before, &after);

            let next = outcome.into_position();
            prop_assert_eq!(next.side_to_move(), position.side_to_move().opposite());

            let moved = next.tile_at(mv.to()).piece();
            prop_assert!(moved.is_some_and(|p| p.has_moved() && p.side() == mv.piece().side()));

            let pieces_after = next.active_pieces(Side::White).len()
                + next.active_pieces(Side::Black).len();
            let expected = pieces_before - usize::from(mv.is_capture());
            prop_assert_eq!(pieces_after, expected);

            position = next;
        }
    }

    #[test]
    fn queries_are_pure(plies in 0usize..12) {
        let mut position = initial_position();
        for _ in 0..plies {
            let Some(mv) = position.legal_moves(position.side_to_move()).first().copied() else {
                break;
            };
            position = attempt_move(&position, &mv).into_position();
        }
        for side in Side::ALL {
            prop_assert_eq!(position.active_pieces(side), position.active_pieces(side));
            prop_assert_eq!(position.legal_moves(side), position.legal_moves(side));
        }
        for index in 0..64 {
            prop_assert_eq!(position.tile_at_index(index), position.tile_at_index(index));
        }
    }
}
