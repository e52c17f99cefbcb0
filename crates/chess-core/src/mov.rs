//! Move representation.

use crate::{Piece, PieceKind, Square};
use std::fmt;
use std::hash::{Hash, Hasher};

/// What a move does beyond relocating the moving piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Move to an empty square.
    Quiet,
    /// Capture of the piece standing on the target square.
    Capture(Piece),
    /// Pawn advance of two squares from its starting rank.
    PawnDoubleAdvance,
    /// Pawn capture of a pawn that just double-advanced past the target.
    EnPassant(Piece),
    /// King moves two squares towards the h-file rook, which jumps over it.
    KingsideCastle { rook: Piece, rook_to: Square },
    /// King moves two squares towards the a-file rook, which jumps over it.
    QueensideCastle { rook: Piece, rook_to: Square },
    /// Pawn reaches the last rank, optionally capturing, and becomes `promote_to`.
    Promotion {
        captured: Option<Piece>,
        promote_to: PieceKind,
    },
}

/// A chess move.
///
/// A move carries the moving piece as it stood before the move, the target
/// square, and the [`MoveKind`] data needed to execute it. It holds no
/// reference to the board it was generated on.
///
/// Equality and hashing look only at the origin and target squares, so two
/// moves of different kinds between the same squares compare equal. Use
/// [`Move::is_identical`] for a full comparison.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    piece: Piece,
    to: Square,
    kind: MoveKind,
}

impl Move {
    /// Creates a move from its parts.
    #[inline]
    pub const fn new(piece: Piece, to: Square, kind: MoveKind) -> Self {
        Move { piece, to, kind }
    }

    #[inline]
    pub const fn quiet(piece: Piece, to: Square) -> Self {
        Self::new(piece, to, MoveKind::Quiet)
    }

    #[inline]
    pub const fn capture(piece: Piece, to: Square, captured: Piece) -> Self {
        Self::new(piece, to, MoveKind::Capture(captured))
    }

    #[inline]
    pub const fn pawn_double_advance(pawn: Piece, to: Square) -> Self {
        Self::new(pawn, to, MoveKind::PawnDoubleAdvance)
    }

    #[inline]
    pub const fn en_passant(pawn: Piece, to: Square, captured: Piece) -> Self {
        Self::new(pawn, to, MoveKind::EnPassant(captured))
    }

    #[inline]
    pub const fn kingside_castle(king: Piece, to: Square, rook: Piece, rook_to: Square) -> Self {
        Self::new(king, to, MoveKind::KingsideCastle { rook, rook_to })
    }

    #[inline]
    pub const fn queenside_castle(king: Piece, to: Square, rook: Piece, rook_to: Square) -> Self {
        Self::new(king, to, MoveKind::QueensideCastle { rook, rook_to })
    }

    #[inline]
    pub const fn promotion(
        pawn: Piece,
        to: Square,
        captured: Option<Piece>,
        promote_to: PieceKind,
    ) -> Self {
        Self::new(
            pawn,
            to,
            MoveKind::Promotion {
                captured,
                promote_to,
            },
        )
    }

    /// Returns the moving piece as it stood before the move.
    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(&self) -> Square {
        self.piece.square()
    }

    /// Returns the target square.
    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Returns the piece removed from the board by this move, if any.
    pub const fn captured(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Capture(piece) | MoveKind::EnPassant(piece) => Some(piece),
            MoveKind::Promotion { captured, .. } => captured,
            _ => None,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured().is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(
            self.kind,
            MoveKind::KingsideCastle { .. } | MoveKind::QueensideCastle { .. }
        )
    }

    /// Returns the rook and its destination for castling moves.
    pub const fn castle_rook(&self) -> Option<(Piece, Square)> {
        match self.kind {
            MoveKind::KingsideCastle { rook, rook_to }
            | MoveKind::QueensideCastle { rook, rook_to } => Some((rook, rook_to)),
            _ => None,
        }
    }

    /// Returns the promotion kind if this is a promotion.
    pub const fn promotion_kind(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { promote_to, .. } => Some(promote_to),
            _ => None,
        }
    }

    /// Returns true if the move threatens its target square.
    ///
    /// Pawn advances only ever move onto empty squares and never attack them.
    pub const fn threatens_target(&self) -> bool {
        match self.piece.kind() {
            PieceKind::Pawn => self.is_capture(),
            _ => !self.is_castle(),
        }
    }

    /// Compares every field, including the move kind.
    pub fn is_identical(&self, other: &Move) -> bool {
        self.piece == other.piece && self.to == other.to && self.kind == other.kind
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from() == other.from() && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from().hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::KingsideCastle { .. } => write!(f, "O-O"),
            MoveKind::QueensideCastle { .. } => write!(f, "O-O-O"),
            _ => {
                let sep = if self.is_capture() { "x" } else { "" };
                write!(f, "{}{}{}", self.from(), sep, self.to)?;
                if let Some(kind) = self.promotion_kind() {
                    write!(f, "{}", kind.designator().to_ascii_lowercase())?;
                }
                Ok(())
            }
        }
    }
}
