//! The square grid and its builder.

use std::collections::HashMap;
use std::fmt;

use chess_core::{Move, MoveKind, Piece, Side, Square, Tile};

use crate::movegen::generate_moves;
use crate::{Position, PositionError};

/// Sixty-four tiles, the side to move, and the pawn that may be taken en passant.
///
/// A board is plain data: it knows how to list pieces, generate
/// pseudo-legal moves, and execute a move into a new board, but it does not
/// validate kings or filter moves. [`Position`] layers that on top.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; Square::COUNT],
    side_to_move: Side,
    en_passant_pawn: Option<Piece>,
}

impl Board {
    /// Returns a fresh builder.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Returns the contents of a square.
    #[inline]
    pub fn tile_at(&self, sq: Square) -> Tile {
        self.tiles[sq.index() as usize]
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.tile_at(sq).piece()
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Returns the pawn that double-advanced on the previous ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// Iterates over one side's pieces in square order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.tiles
            .iter()
            .filter_map(|tile| tile.piece())
            .filter(move |piece| piece.side() == side)
    }

    /// Returns the first king of the given side, in square order.
    pub fn king(&self, side: Side) -> Option<Piece> {
        self.pieces(side).find(|piece| piece.kind().is_king())
    }

    /// Returns every pseudo-legal move of one side, castling excluded.
    pub fn pseudo_legal_moves(&self, side: Side) -> Vec<Move> {
        self.pieces(side)
            .flat_map(|piece| generate_moves(self, &piece))
            .collect()
    }

    /// Executes a move and returns the resulting board.
    ///
    /// Every piece except the mover (and the castling rook, and the captured
    /// piece) is copied unchanged. The mover lands on the target square with
    /// its has-moved flag set, and the turn passes to the opponent. No
    /// legality check is made here.
    pub fn apply(&self, mv: &Move) -> Board {
        let mover = mv.piece();
        let side = mover.side();
        let captured = mv.captured();
        let castle_rook = mv.castle_rook();

        let mut builder = Builder::new();
        for piece in self.pieces(side) {
            let is_rook = castle_rook.is_some_and(|(rook, _)| rook == piece);
            if piece != mover && !is_rook {
                builder.set_piece(piece);
            }
        }
        for piece in self.pieces(side.opposite()) {
            if Some(piece) != captured {
                builder.set_piece(piece);
            }
        }

        let mut landed = mover.moved_to(mv.to());
        if let Some(kind) = mv.promotion_kind() {
            landed = landed.promoted_to(kind);
        }
        builder.set_piece(landed);

        if let Some((rook, rook_to)) = castle_rook {
            builder.set_piece(rook.moved_to(rook_to));
        }
        if matches!(mv.kind(), MoveKind::PawnDoubleAdvance) {
            builder.set_en_passant_pawn(landed);
        }
        builder.set_side_to_move(side.opposite());
        builder.into_board()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            write!(f, "{:>3}", tile)?;
            if (i + 1) % 8 == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board({} to move)", self.side_to_move)?;
        write!(f, "{}", self)
    }
}

/// Staged construction of a board.
///
/// Pieces are keyed by their square, so placing a piece on an occupied
/// square replaces the occupant. The builder is consumed by
/// [`Builder::build`], which validates the result.
#[derive(Debug, Clone)]
pub struct Builder {
    pieces: HashMap<Square, Piece>,
    side_to_move: Side,
    en_passant_pawn: Option<Piece>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Creates an empty builder with White to move.
    pub fn new() -> Self {
        Builder {
            pieces: HashMap::new(),
            side_to_move: Side::White,
            en_passant_pawn: None,
        }
    }

    /// Places a piece on its own square.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.pieces.insert(piece.square(), piece);
        self
    }

    /// Empties a square.
    pub fn clear_square(&mut self, sq: Square) -> &mut Self {
        self.pieces.remove(&sq);
        self
    }

    pub fn set_side_to_move(&mut self, side: Side) -> &mut Self {
        self.side_to_move = side;
        self
    }

    /// Marks a pawn as capturable en passant on the next ply.
    ///
    /// Ignored unless the same pawn is on the board when it is built.
    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Consumes the builder and derives a validated position.
    pub fn build(self) -> Result<Position, PositionError> {
        Position::from_board(self.into_board())
    }

    pub(crate) fn into_board(self) -> Board {
        let mut tiles = [Tile::Empty; Square::COUNT];
        for (sq, piece) in &self.pieces {
            tiles[sq.index() as usize] = Tile::Occupied(*piece);
        }
        let en_passant_pawn = self
            .en_passant_pawn
            .filter(|pawn| self.pieces.get(&pawn.square()) == Some(pawn));

        Board {
            tiles,
            side_to_move: self.side_to_move,
            en_passant_pawn,
        }
    }
}
