//! Validated positions and per-side move sets.

use std::fmt;

use chess_core::{Move, Piece, PieceKind, Side, Square, SquareError, Tile};
use thiserror::Error;
use tracing::trace;

use crate::legality::{exposes_king, is_attacked};
use crate::movegen::castle_moves;
use crate::Board;

/// Errors raised when a board cannot stand as a position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("{0} has no king")]
    MissingKing(Side),

    #[error("{side} has {count} kings (expected exactly one)")]
    MultipleKings { side: Side, count: usize },

    #[error("{0} is in check but it is not their turn")]
    OpponentInCheck(Side),
}

/// Everything derived for one side of a position.
#[derive(Debug, Clone)]
pub struct Player {
    side: Side,
    king: Piece,
    pieces: Vec<Piece>,
    pseudo_legal_moves: Vec<Move>,
    castles: Vec<Move>,
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl Player {
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn king(&self) -> Piece {
        self.king
    }

    /// Returns the side's pieces in square order.
    #[inline]
    pub fn active_pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the moves allowed by piece geometry, castling excluded.
    #[inline]
    pub fn pseudo_legal_moves(&self) -> &[Move] {
        &self.pseudo_legal_moves
    }

    #[inline]
    pub fn castles(&self) -> &[Move] {
        &self.castles
    }

    /// Returns the moves that do not leave the side's own king attacked.
    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// Pseudo-legal moves followed by castles, in generation order.
    pub fn candidate_moves(&self) -> impl Iterator<Item = &Move> {
        self.pseudo_legal_moves.iter().chain(self.castles.iter())
    }

    /// Returns true if a candidate equals `mv` (same origin and target).
    pub fn contains_move(&self, mv: &Move) -> bool {
        self.candidate_moves().any(|candidate| candidate == mv)
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn has_escape_moves(&self) -> bool {
        !self.legal_moves.is_empty()
    }

    #[inline]
    pub fn in_checkmate(&self) -> bool {
        self.in_check && !self.has_escape_moves()
    }

    #[inline]
    pub fn in_stalemate(&self) -> bool {
        !self.in_check && !self.has_escape_moves()
    }
}

/// A board together with both sides' pieces and moves.
///
/// Positions are immutable. All move sets are computed once, when the
/// position is built, so reading them never changes anything.
#[derive(Clone)]
pub struct Position {
    board: Board,
    players: [Player; 2],
}

impl Position {
    /// Validates a board and derives both players.
    ///
    /// Each side must have exactly one king, and the side that just moved
    /// must not be left in check.
    pub fn from_board(board: Board) -> Result<Self, PositionError> {
        let white_king = single_king(&board, Side::White)?;
        let black_king = single_king(&board, Side::Black)?;

        let white_moves = board.pseudo_legal_moves(Side::White);
        let black_moves = board.pseudo_legal_moves(Side::Black);

        let white = derive_player(&board, white_king, white_moves, &black_moves);
        let black = derive_player(&board, black_king, black_moves, &white.pseudo_legal_moves);

        let waiting = board.side_to_move().opposite();
        let waiting_in_check = match waiting {
            Side::White => white.in_check,
            Side::Black => black.in_check,
        };
        if waiting_in_check {
            return Err(PositionError::OpponentInCheck(waiting));
        }

        trace!(
            to_move = %board.side_to_move(),
            white_moves = white.legal_moves.len(),
            black_moves = black.legal_moves.len(),
            "position derived"
        );

        Ok(Position {
            board,
            players: [white, black],
        })
    }

    /// Returns the contents of a square.
    #[inline]
    pub fn tile_at(&self, sq: Square) -> Tile {
        self.board.tile_at(sq)
    }

    /// Returns the contents of the square at a raw index.
    ///
    /// Indices outside 0-63 are rejected rather than wrapped.
    pub fn tile_at_index(&self, index: usize) -> Result<Tile, SquareError> {
        Ok(self.tile_at(Square::try_from(index)?))
    }

    /// Returns one side's pieces in square order.
    #[inline]
    pub fn active_pieces(&self, side: Side) -> &[Piece] {
        self.player(side).active_pieces()
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.board.side_to_move()
    }

    /// Returns one side's legal moves.
    #[inline]
    pub fn legal_moves(&self, side: Side) -> &[Move] {
        self.player(side).legal_moves()
    }

    #[inline]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Returns the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> &Player {
        self.player(self.side_to_move())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the pawn that may be taken en passant on this ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.board.en_passant_pawn()
    }

    /// Executes a move without any legality check and validates the result.
    ///
    /// Use [`crate::attempt_move`] to play moves; this is the raw transition.
    pub fn execute(&self, mv: &Move) -> Result<Position, PositionError> {
        Position::from_board(self.board.apply(mv))
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for Position {}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.board, f)
    }
}

fn single_king(board: &Board, side: Side) -> Result<Piece, PositionError> {
    let mut kings = board
        .pieces(side)
        .filter(|piece| piece.kind() == PieceKind::King);
    let king = kings.next().ok_or(PositionError::MissingKing(side))?;
    let extra = kings.count();
    if extra > 0 {
        return Err(PositionError::MultipleKings {
            side,
            count: extra + 1,
        });
    }
    Ok(king)
}

fn derive_player(
    board: &Board,
    king: Piece,
    pseudo_legal_moves: Vec<Move>,
    opponent_moves: &[Move],
) -> Player {
    let side = king.side();
    let in_check = is_attacked(king.square(), opponent_moves);
    let castles = castle_moves(board, &king, in_check, opponent_moves);
    let legal_moves = pseudo_legal_moves
        .iter()
        .chain(castles.iter())
        .filter(|mv| !exposes_king(board, mv))
        .copied()
        .collect();

    Player {
        side,
        king,
        pieces: board.pieces(side).collect(),
        pseudo_legal_moves,
        castles,
        legal_moves,
        in_check,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Builder;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn king(side: Side, at: Square) -> Piece {
        Piece::new(PieceKind::King, side, at)
    }

    #[test]
    fn kings_only_position() {
        let mut builder = Builder::new();
        builder
            .set_piece(king(Side::White, Square::E1))
            .set_piece(king(Side::Black, Square::E8));
        let position = builder.build().unwrap();

        assert_eq!(position.side_to_move(), Side::White);
        assert_eq!(position.active_pieces(Side::White).len(), 1);
        assert_eq!(position.legal_moves(Side::White).len(), 5);
        assert_eq!(position.legal_moves(Side::Black).len(), 5);
        assert!(!position.current_player().in_check());
    }

    #[test]
    fn missing_king_is_rejected() {
        let mut builder = Builder::new();
        builder.set_piece(king(Side::White, Square::E1));
        assert_eq!(
            builder.build().unwrap_err(),
            PositionError::MissingKing(Side::Black)
        );
    }

    #[test]
    fn extra_king_is_rejected() {
        let mut builder = Builder::new();
        builder
            .set_piece(king(Side::White, Square::E1))
            .set_piece(king(Side::White, Square::A1))
            .set_piece(king(Side::Black, Square::E8));
        assert_eq!(
            builder.build().unwrap_err(),
            PositionError::MultipleKings {
                side: Side::White,
                count: 2
            }
        );
    }

    #[test]
    fn waiting_side_in_check_is_rejected() {
        let mut builder = Builder::new();
        builder
            .set_piece(king(Side::White, Square::E1))
            .set_piece(king(Side::Black, Square::E8))
            .set_piece(Piece::new(PieceKind::Rook, Side::White, sq("e4")))
            .set_side_to_move(Side::White);
        assert_eq!(
            builder.build().unwrap_err(),
            PositionError::OpponentInCheck(Side::Black)
        );
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut builder = Builder::new();
        builder
            .set_piece(king(Side::White, Square::E1))
            .set_piece(king(Side::Black, Square::E8))
            .set_piece(Piece::new(PieceKind::Rook, Side::Black, sq("d7")));
        let position = builder.build().unwrap();

        let white = position.player(Side::White);
        assert_eq!(white.pseudo_legal_moves().len(), 5);
        let targets: Vec<Square> = white.legal_moves().iter().map(|m| m.to()).collect();
        assert_eq!(targets.len(), 3);
        assert!(!targets.contains(&Square::D1));
        assert!(!targets.contains(&sq("d2")));
    }

    #[test]
    fn checkmate_and_stalemate_flags() {
        // back-rank mate: rook on a1 checks the boxed-in king on h1
        let mut builder = Builder::new();
        builder
            .set_piece(king(Side::White, Square::H1).with_moved(true))
            .set_piece(Piece::new(PieceKind::Pawn, Side::White, sq("g2")))
            .set_piece(Piece::new(PieceKind::Pawn, Side::White, sq("h2")))
            .set_piece(king(Side::Black, Square::E8))
            .set_piece(Piece::new(PieceKind::Rook, Side::Black, Square::A1).with_moved(true));
        let position = builder.build().unwrap();
        let white = position.current_player();
        assert!(white.in_check());
        assert!(white.in_checkmate());
        assert!(!white.in_stalemate());

        // king in the corner, queen covering every flight square
        let mut builder = Builder::new();
        builder
            .set_piece(king(Side::Black, Square::A8).with_moved(true))
            .set_piece(king(Side::White, Square::H1).with_moved(true))
            .set_piece(Piece::new(PieceKind::Queen, Side::White, sq("b6")).with_moved(true))
            .set_side_to_move(Side::Black);
        let position = builder.build().unwrap();
        let black = position.current_player();
        assert!(!black.in_check());
        assert!(black.in_stalemate());
        assert!(!black.in_checkmate());
    }

    #[test]
    fn out_of_range_index() {
        let mut builder = Builder::new();
        builder
            .set_piece(king(Side::White, Square::E1))
            .set_piece(king(Side::Black, Square::E8));
        let position = builder.build().unwrap();

        assert_eq!(position.tile_at_index(4).unwrap().piece().map(|p| p.side()), Some(Side::Black));
        assert_eq!(position.tile_at_index(64), Err(SquareError::OutOfBounds(64)));
    }

    #[test]
    fn queries_are_repeatable() {
        let mut builder = Builder::new();
        builder
            .set_piece(king(Side::White, Square::E1))
            .set_piece(king(Side::Black, Square::E8));
        let position = builder.build().unwrap();

        assert_eq!(position.tile_at(Square::E1), position.tile_at(Square::E1));
        assert_eq!(
            position.active_pieces(Side::Black),
            position.active_pieces(Side::Black)
        );
    }
}
