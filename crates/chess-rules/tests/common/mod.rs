//! Shared helpers for integration tests.

#![allow(dead_code)]

use chess_core::{Piece, PieceKind, Side, Square};
use chess_rules::{Builder, Position};

/// Parses an algebraic square name.
pub fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Builds a position from a board diagram.
///
/// The diagram lists the ranks from the 8th down to the 1st, separated by
/// `/`. Letters are pieces (upper case White), digits are runs of empty
/// squares. A piece counts as unmoved only on a square it starts the game
/// on, so kings and rooks at home may castle and pawns on their starting
/// rank may double-advance.
pub fn diagram(rows: &str, to_move: Side) -> Position {
    let mut builder = Builder::new();
    for (rank, row) in rows.split('/').enumerate() {
        let mut file = 0u8;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as u8;
                continue;
            }
            let kind = PieceKind::from_designator(c).unwrap();
            let side = if c.is_ascii_uppercase() {
                Side::White
            } else {
                Side::Black
            };
            let square = Square::from_coords(file, rank as u8).unwrap();
            let piece = Piece::new(kind, side, square).with_moved(!is_home(kind, side, square));
            builder.set_piece(piece);
            file += 1;
        }
        assert_eq!(file, 8, "rank {} of the diagram is not 8 squares wide", rank);
    }
    builder.set_side_to_move(to_move);
    builder.build().unwrap()
}

fn is_home(kind: PieceKind, side: Side, square: Square) -> bool {
    match kind {
        PieceKind::Pawn => square.rank() == side.pawn_rank(),
        PieceKind::King => square.rank() == side.back_rank() && square.file() == 4,
        PieceKind::Rook => {
            square.rank() == side.back_rank() && (square.file() == 0 || square.file() == 7)
        }
        _ => square.rank() == side.back_rank(),
    }
}
