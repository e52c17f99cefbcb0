//! Board square representation.

use std::fmt;
use thiserror::Error;

/// Errors raised when a square index or name does not denote a board slot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("square index {0} is out of bounds (expected 0..64)")]
    OutOfBounds(i32),

    #[error("invalid algebraic square: '{0}'")]
    InvalidAlgebraic(String),
}

/// A square on the chess board, indexed 0-63 in row-major order.
///
/// Index 0 is the top-left corner seen from White (a8) and index 63 is h1:
/// - a8 = 0, b8 = 1, ..., h8 = 7
/// - a7 = 8, ..., h1 = 63
///
/// `file = index % 8` and `rank = index / 8`, so rank 0 is Black's back rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Creates a square from an index, rejecting anything outside 0-63.
    #[inline]
    pub const fn new(index: u8) -> Result<Self, SquareError> {
        if index < 64 {
            Ok(Square(index))
        } else {
            Err(SquareError::OutOfBounds(index as i32))
        }
    }

    /// Creates a square from file (0-7, a-h) and rank (0-7, top to bottom).
    #[inline]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, SquareError> {
        let invalid = || SquareError::InvalidAlgebraic(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let digit = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&digit) {
            return Err(invalid());
        }
        Square::from_coords(file - b'a', b'8' - digit).ok_or_else(invalid)
    }

    /// Returns an iterator over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file (0 = a-file, 7 = h-file).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Returns the rank (0 = Black's back rank, 7 = White's back rank).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the square `delta` slots away, if it lies on the board.
    ///
    /// Only the index is bounds-checked: a step that leaves one edge and
    /// re-enters on the other still returns a square. Callers that walk the
    /// board must compare files with [`Square::file_distance`].
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Square> {
        let target = self.0 as i16 + delta as i16;
        if target >= 0 && target < 64 {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Returns the absolute difference between the files of two squares.
    #[inline]
    pub const fn file_distance(self, other: Square) -> u8 {
        self.file().abs_diff(other.file())
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file()) as char;
        let rank = (b'8' - self.rank()) as char;
        format!("{file}{rank}")
    }

    // Back-rank squares
    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl TryFrom<i32> for Square {
    type Error = SquareError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        if (0..64).contains(&index) {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::OutOfBounds(index))
        }
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < 64 {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::OutOfBounds(
                i32::try_from(index).unwrap_or(i32::MAX),
            ))
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
