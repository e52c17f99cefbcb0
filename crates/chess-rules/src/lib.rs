//! Chess rules engine over an immutable 64-square board.
//!
//! This crate provides:
//! - [`Board`] and [`Builder`] - the square grid and its staged construction
//! - [`Position`] and [`Player`] - a board plus everything derived from it:
//!   active pieces, pseudo-legal and legal moves, check, castling
//! - [`generate_moves`] - per-piece pseudo-legal move generation
//! - [`attempt_move`] and [`find_move`] - the move transition contract
//! - [`RuleSet`] - the front-end facing trait, implemented by [`StandardChess`]
//! - [`Game`] - a playing session with history and take-back
//!
//! # Architecture
//!
//! Positions are never mutated. Executing a move builds a brand-new board,
//! and every [`Position`] computes both sides' legal moves when it is
//! constructed, so it is the single source of truth for what can happen
//! next. Positions may be shared freely between threads.
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_rules::{attempt_move, find_move, initial_position, MoveStatus};
//!
//! let position = initial_position();
//! assert_eq!(position.legal_moves(position.side_to_move()).len(), 20);
//!
//! let b1 = Square::B1;
//! let c3 = Square::from_algebraic("c3").unwrap();
//! let knight_move = find_move(&position, b1, c3).unwrap();
//! let outcome = attempt_move(&position, &knight_move);
//! assert_eq!(outcome.status(), MoveStatus::Done);
//! ```

mod board;
pub mod config;
mod game;
mod legality;
pub mod movegen;
mod position;
pub mod rules;
mod setup;
mod transition;

pub use board::{Board, Builder};
pub use config::{ConfigError, RulesConfig};
pub use game::{Game, GameError, GameMove};
pub use legality::is_attacked;
pub use movegen::{generate_moves, perft, perft_divide};
pub use position::{Player, Position, PositionError};
pub use rules::{GameStatus, RuleSet, StandardChess};
pub use setup::{initial_position, initial_position_with};
pub use transition::{attempt_move, find_move, MoveOutcome, MoveStatus};
