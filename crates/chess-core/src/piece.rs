//! Chess piece representation.

use crate::{Side, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to, most valuable first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Returns the index of this kind (0-5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the single-character designator (upper case).
    pub const fn designator(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parses a designator, in either case.
    pub const fn from_designator(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King)
    }

    #[inline]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceKind::Rook)
    }

    /// Returns true if this is a sliding piece (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Returns true if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece standing on a square.
///
/// Pieces are values: equality covers kind, side, square, and the
/// has-moved flag. Moving a piece yields a new value via [`Piece::moved_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    square: Square,
    has_moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side, square: Square) -> Self {
        Piece {
            kind,
            side,
            square,
            has_moved: false,
        }
    }

    /// Returns the same piece with the has-moved flag set as given.
    #[inline]
    pub const fn with_moved(self, has_moved: bool) -> Self {
        Piece { has_moved, ..self }
    }

    /// Returns the piece relocated to `square`, flagged as having moved.
    #[inline]
    pub const fn moved_to(self, square: Square) -> Self {
        Piece {
            square,
            has_moved: true,
            ..self
        }
    }

    /// Returns the piece with its kind replaced (pawn promotion).
    #[inline]
    pub const fn promoted_to(self, kind: PieceKind) -> Self {
        Piece { kind, ..self }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    #[inline]
    pub const fn square(self) -> Square {
        self.square
    }

    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Returns the board character: upper case for White, lower case for Black.
    pub const fn to_char(self) -> char {
        let c = self.kind.designator();
        match self.side {
            Side::White => c,
            Side::Black => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
