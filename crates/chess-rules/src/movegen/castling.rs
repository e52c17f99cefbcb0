//! Castling availability.

use super::pawn_guards;
use crate::legality::is_attacked;
use crate::Board;
use chess_core::{Move, Piece, PieceKind, Square};

/// Generates the castling moves available to `king`.
///
/// `opponent_moves` are the opposing side's pseudo-legal moves on `board`.
/// Both castles require an unmoved king on its home square that is not in
/// check and an unmoved rook of the same side in the corner, with every
/// square between them empty. The squares the king crosses and lands on
/// must not be attacked.
pub(crate) fn castle_moves(
    board: &Board,
    king: &Piece,
    in_check: bool,
    opponent_moves: &[Move],
) -> Vec<Move> {
    let home = king.square();
    if king.has_moved() || in_check || home.file() != 4 || home.rank() != king.side().back_rank() {
        return Vec::new();
    }
    let attacked = |sq: Square| {
        is_attacked(sq, opponent_moves) || pawn_guards(board, sq, king.side().opposite())
    };

    [kingside(board, king, &attacked), queenside(board, king, &attacked)]
        .into_iter()
        .flatten()
        .collect()
}

/// King to g, rook from h to f. Both f and g must be empty and safe.
fn kingside(board: &Board, king: &Piece, attacked: &impl Fn(Square) -> bool) -> Option<Move> {
    let home = king.square();
    let f = home.offset(1)?;
    let g = home.offset(2)?;
    let rook = corner_rook(board, king, home.offset(3)?)?;

    let clear = is_empty(board, &[f, g]);
    (clear && !attacked(f) && !attacked(g)).then(|| Move::kingside_castle(*king, g, rook, f))
}

/// King to c, rook from a to d. The b square must be empty but may be attacked.
fn queenside(board: &Board, king: &Piece, attacked: &impl Fn(Square) -> bool) -> Option<Move> {
    let home = king.square();
    let d = home.offset(-1)?;
    let c = home.offset(-2)?;
    let b = home.offset(-3)?;
    let rook = corner_rook(board, king, home.offset(-4)?)?;

    let clear = is_empty(board, &[b, c, d]);
    (clear && !attacked(d) && !attacked(c)).then(|| Move::queenside_castle(*king, c, rook, d))
}

fn is_empty(board: &Board, squares: &[Square]) -> bool {
    squares.iter().all(|sq| !board.tile_at(*sq).is_occupied())
}

fn corner_rook(board: &Board, king: &Piece, corner: Square) -> Option<Piece> {
    board.piece_at(corner).filter(|rook| {
        rook.kind() == PieceKind::Rook && rook.side() == king.side() && !rook.has_moved()
    })
}
