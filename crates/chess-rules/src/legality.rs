//! Attack and check detection.

use crate::Board;
use chess_core::{Move, Side, Square};

/// Returns true if any of `moves` attacks `square`.
///
/// A move attacks its target unless it is a pawn advance or a castle,
/// neither of which can capture.
pub fn is_attacked(square: Square, moves: &[Move]) -> bool {
    moves
        .iter()
        .any(|mv| mv.to() == square && mv.threatens_target())
}

/// Returns true if `side`'s king is attacked on `board`.
///
/// A board without a king for `side` counts as attacked.
pub(crate) fn king_attacked(board: &Board, side: Side) -> bool {
    match board.king(side) {
        Some(king) => is_attacked(king.square(), &board.pseudo_legal_moves(side.opposite())),
        None => true,
    }
}

/// Returns true if executing `mv` would leave the mover's king attacked.
pub(crate) fn exposes_king(board: &Board, mv: &Move) -> bool {
    king_attacked(&board.apply(mv), mv.piece().side())
}
