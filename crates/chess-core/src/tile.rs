//! Contents of a single board square.

use crate::Piece;
use std::fmt;

/// A board slot: either empty or holding exactly one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Tile {
    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Tile::Occupied(_))
    }

    /// Returns the occupant, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Tile::Empty => None,
            Tile::Occupied(piece) => Some(piece),
        }
    }
}

impl From<Option<Piece>> for Tile {
    fn from(piece: Option<Piece>) -> Self {
        piece.map_or(Tile::Empty, Tile::Occupied)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Pad through the formatter so board dumps can right-align cells
            Tile::Empty => f.pad("-"),
            Tile::Occupied(piece) => f.pad(&piece.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PieceKind, Side, Square};

    #[test]
    fn empty_tile() {
        let tile = Tile::default();
        assert!(!tile.is_occupied());
        assert_eq!(tile.piece(), None);
        assert_eq!(tile.to_string(), "-");
    }

    #[test]
    fn occupied_tile() {
        let pawn = Piece::new(PieceKind::Pawn, Side::Black, Square::A8);
        let tile = Tile::from(Some(pawn));
        assert!(tile.is_occupied());
        assert_eq!(tile.piece(), Some(pawn));
        assert_eq!(format!("{:>3}", tile), "  p");
    }
}
