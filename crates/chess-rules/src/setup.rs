//! The standard starting position.

use chess_core::{Piece, PieceKind, Side, Square};

use crate::{Builder, Position};

/// Back-rank order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Returns the standard starting position with White to move.
pub fn initial_position() -> Position {
    initial_position_with(Side::White)
}

/// Returns the standard starting position with `first_mover` to move.
pub fn initial_position_with(first_mover: Side) -> Position {
    let mut builder = Builder::new();
    for side in Side::ALL {
        for (file, kind) in (0u8..).zip(BACK_RANK) {
            place(&mut builder, kind, side, file, side.back_rank());
            place(&mut builder, PieceKind::Pawn, side, file, side.pawn_rank());
        }
    }
    builder.set_side_to_move(first_mover);
    builder.build().expect("starting position is valid")
}

fn place(builder: &mut Builder, kind: PieceKind, side: Side, file: u8, rank: u8) {
    if let Some(square) = Square::from_coords(file, rank) {
        builder.set_piece(Piece::new(kind, side, square));
    }
}
