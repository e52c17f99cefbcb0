//! Move generation.
//!
//! This module provides pseudo-legal move generation for single pieces
//! using per-kind offset tables over the flat 64-square array. Moves are
//! not filtered for check here; see [`crate::Position`] for that.

mod castling;
pub mod perft;

pub(crate) use castling::castle_moves;
pub use perft::{perft, perft_divide};

use crate::Board;
use chess_core::{Move, Piece, PieceKind, Side, Square, Tile};

/// Knight jumps.
pub const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Diagonal rays.
pub const BISHOP_OFFSETS: [i8; 4] = [-9, -7, 7, 9];

/// Orthogonal rays.
pub const ROOK_OFFSETS: [i8; 4] = [-8, -1, 1, 8];

/// All eight neighbours, shared by queen rays and king steps.
pub const QUEEN_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Largest file change a single ray step or king step may make.
const STEP_FILE_DELTA: u8 = 1;

/// Largest file change a knight jump may make.
const KNIGHT_FILE_DELTA: u8 = 2;

/// Generates every pseudo-legal move of `piece` on `board`.
///
/// The result depends only on the piece and the board's square contents
/// (plus the en-passant pawn for pawns). Castling is not produced here:
/// it needs the opponent's attacks and is derived per side.
pub fn generate_moves(board: &Board, piece: &Piece) -> Vec<Move> {
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(board, piece),
        PieceKind::Knight => step_moves(board, piece, &KNIGHT_OFFSETS, KNIGHT_FILE_DELTA),
        PieceKind::Bishop => slide_moves(board, piece, &BISHOP_OFFSETS),
        PieceKind::Rook => slide_moves(board, piece, &ROOK_OFFSETS),
        PieceKind::Queen => slide_moves(board, piece, &QUEEN_OFFSETS),
        PieceKind::King => step_moves(board, piece, &QUEEN_OFFSETS, STEP_FILE_DELTA),
    }
}

/// Returns the square one `delta` away from `from`, rejecting steps that
/// leave the board or wrap around a side edge.
#[inline]
fn step(from: Square, delta: i8, max_file_delta: u8) -> Option<Square> {
    from.offset(delta)
        .filter(|to| from.file_distance(*to) <= max_file_delta)
}

/// Emits a quiet move onto an empty square or a capture of an opposing
/// occupant. Returns whether the square was empty.
fn push_target(board: &Board, piece: &Piece, to: Square, moves: &mut Vec<Move>) -> bool {
    match board.tile_at(to) {
        Tile::Empty => {
            moves.push(Move::quiet(*piece, to));
            true
        }
        Tile::Occupied(occupant) => {
            if occupant.side() != piece.side() {
                moves.push(Move::capture(*piece, to, occupant));
            }
            false
        }
    }
}

/// Walks each ray outward until the edge or the first occupied square.
fn slide_moves(board: &Board, piece: &Piece, offsets: &[i8]) -> Vec<Move> {
    let mut moves = Vec::new();
    for &delta in offsets {
        let mut current = piece.square();
        while let Some(next) = step(current, delta, STEP_FILE_DELTA) {
            if !push_target(board, piece, next, &mut moves) {
                break;
            }
            current = next;
        }
    }
    moves
}

/// Single jumps for knights and kings.
fn step_moves(board: &Board, piece: &Piece, offsets: &[i8], max_file_delta: u8) -> Vec<Move> {
    let mut moves = Vec::new();
    for &delta in offsets {
        if let Some(to) = step(piece.square(), delta, max_file_delta) {
            push_target(board, piece, to, &mut moves);
        }
    }
    moves
}

fn pawn_moves(board: &Board, pawn: &Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    let side = pawn.side();
    let forward = 8 * side.direction();

    if let Some(one) = pawn.square().offset(forward) {
        if !board.tile_at(one).is_occupied() {
            push_pawn_move(pawn, one, None, &mut moves);

            if !pawn.has_moved() && pawn.square().rank() == side.pawn_rank() {
                if let Some(two) = one.offset(forward) {
                    if !board.tile_at(two).is_occupied() {
                        moves.push(Move::pawn_double_advance(*pawn, two));
                    }
                }
            }
        }
    }

    for delta in [forward - 1, forward + 1] {
        let Some(to) = step(pawn.square(), delta, STEP_FILE_DELTA) else {
            continue;
        };
        match board.tile_at(to) {
            Tile::Occupied(occupant) if occupant.side() != side => {
                push_pawn_move(pawn, to, Some(occupant), &mut moves);
            }
            Tile::Occupied(_) => {}
            Tile::Empty => {
                if let Some(victim) = en_passant_victim(board, pawn, to) {
                    moves.push(Move::en_passant(*pawn, to, victim));
                }
            }
        }
    }
    moves
}

/// Emits an advance or capture, expanded into one move per promotion kind
/// when the target lies on the promotion rank.
fn push_pawn_move(pawn: &Piece, to: Square, captured: Option<Piece>, moves: &mut Vec<Move>) {
    if to.rank() == pawn.side().promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promotion(*pawn, to, captured, kind));
        }
    } else {
        match captured {
            Some(victim) => moves.push(Move::capture(*pawn, to, victim)),
            None => moves.push(Move::quiet(*pawn, to)),
        }
    }
}

/// Returns the pawn that may be taken en passant by moving `pawn` to `to`.
///
/// The victim must be the board's en-passant pawn: an opposing pawn that
/// double-advanced on the previous ply, standing beside `pawn` on the file
/// of `to`.
fn en_passant_victim(board: &Board, pawn: &Piece, to: Square) -> Option<Piece> {
    board.en_passant_pawn().filter(|victim| {
        victim.side() != pawn.side()
            && victim.kind() == PieceKind::Pawn
            && victim.square().rank() == pawn.square().rank()
            && victim.square().file() == to.file()
    })
}

/// Returns true if a pawn of `side` guards `square` diagonally.
///
/// Pawns only generate captures onto occupied squares, so empty squares
/// such as castling transit squares are checked against pawn diagonals
/// directly.
pub(crate) fn pawn_guards(board: &Board, square: Square, side: Side) -> bool {
    let back = -8 * side.direction();
    [back - 1, back + 1].into_iter().any(|delta| {
        step(square, delta, STEP_FILE_DELTA)
            .and_then(|from| board.piece_at(from))
            .is_some_and(|piece| piece.kind() == PieceKind::Pawn && piece.side() == side)
    })
}
