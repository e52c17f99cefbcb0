//! Player side representation.

use serde::{Deserialize, Serialize};

/// Represents the two players in chess.
///
/// White plays up the board (towards index 0), Black plays down it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Both sides, White first.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the forward direction in ranks (-1 for White, +1 for Black).
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Returns the rank the side's pieces start on (7 for White, 0 for Black).
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// Returns the rank the side's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Returns the rank on which the side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opposite().back_rank()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_side() {
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(Side::Black.opposite(), Side::White);
    }

    #[test]
    fn side_index() {
        assert_eq!(Side::White.index(), 0);
        assert_eq!(Side::Black.index(), 1);
    }

    #[test]
    fn direction() {
        assert_eq!(Side::White.direction(), -1);
        assert_eq!(Side::Black.direction(), 1);
    }

    #[test]
    fn ranks() {
        assert_eq!(Side::White.back_rank(), 7);
        assert_eq!(Side::Black.back_rank(), 0);
        assert_eq!(Side::White.pawn_rank(), 6);
        assert_eq!(Side::Black.pawn_rank(), 1);
        assert_eq!(Side::White.promotion_rank(), 0);
        assert_eq!(Side::Black.promotion_rank(), 7);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Side::White), "White");
        assert_eq!(format!("{}", Side::Black), "Black");
    }
}
