//! Core types for chess.
//!
//! This crate provides the value types shared by the rules engine and its
//! front ends:
//! - [`Side`] for the two players
//! - [`Square`] for the 64 board slots, with [`SquareError`] for bounds violations
//! - [`PieceKind`] and [`Piece`] for piece representation
//! - [`Tile`] for the contents of a single square
//! - [`Move`] and [`MoveKind`] for move representation
//!
//! Every type here is an immutable value. Moving a piece never mutates it;
//! it produces a new [`Piece`] at the destination.

mod mov;
mod piece;
mod side;
mod square;
mod tile;

pub use mov::{Move, MoveKind};
pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use square::{Square, SquareError};
pub use tile::Tile;
