//! Rule set abstraction.
//!
//! This module provides the [`RuleSet`] trait, the surface a front end
//! talks to: it creates the starting position, lists and looks up moves,
//! attempts them, and classifies the result.

mod standard;

pub use standard::StandardChess;

use crate::{MoveOutcome, Position};
use chess_core::{Move, Side, Square};

/// State of the game from the side to move's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has legal moves and is not in check.
    Ongoing,
    /// The side to move is in check but can escape.
    Check,
    /// The side to move is in check with no escape.
    Checkmate { winner: Side },
    /// The side to move is not in check but has no legal move.
    Stalemate,
}

impl GameStatus {
    /// Returns true for checkmate and stalemate.
    #[inline]
    pub fn is_game_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Trait for the rules a game is played under.
///
/// # Example
///
/// ```
/// use chess_rules::rules::{GameStatus, RuleSet};
/// use chess_rules::StandardChess;
///
/// let rules = StandardChess::default();
/// let position = rules.initial_position();
/// assert_eq!(rules.legal_moves(&position).len(), 20);
/// assert_eq!(rules.status(&position), GameStatus::Ongoing);
/// ```
pub trait RuleSet {
    /// Returns the starting position.
    fn initial_position(&self) -> Position;

    /// Returns the legal moves of the side to move.
    fn legal_moves<'a>(&self, position: &'a Position) -> &'a [Move] {
        position.legal_moves(position.side_to_move())
    }

    /// Translates an origin and target square into a move of the side to move.
    fn find_move(&self, position: &Position, from: Square, to: Square) -> Option<Move>;

    /// Attempts a move for the side to move.
    fn attempt_move(&self, position: &Position, mv: &Move) -> MoveOutcome;

    /// Returns true if the side to move is in check.
    fn is_check(&self, position: &Position) -> bool {
        position.current_player().in_check()
    }

    /// Classifies the position.
    fn status(&self, position: &Position) -> GameStatus {
        let player = position.current_player();
        match (player.in_check(), player.has_escape_moves()) {
            (true, false) => GameStatus::Checkmate {
                winner: player.side().opposite(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }

    /// Returns true if the game is over.
    fn is_game_over(&self, position: &Position) -> bool {
        self.status(position).is_game_over()
    }
}
