//! Game session management with history tracking.
//!
//! The [`Game`] struct wraps a sequence of positions:
//! - Move history with captured pieces
//! - Position history for taking moves back
//! - Status after every move

use chess_core::{Move, Piece, Side, Square};
use thiserror::Error;
use tracing::debug;

use crate::rules::{GameStatus, RuleSet, StandardChess};
use crate::{MoveStatus, Position, RulesConfig};

/// A recorded move in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// The move as executed.
    pub mov: Move,
    /// Side that made the move.
    pub side: Side,
    /// The piece it removed from the board, if any.
    pub captured: Option<Piece>,
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move is not available in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// The move would leave the mover's king attacked.
    #[error("move leaves king in check: {0}")]
    LeavesKingInCheck(String),
    /// No move of the side to move connects the two squares.
    #[error("no move from {from} to {to}")]
    NoSuchMove { from: Square, to: Square },
    /// The game has already ended.
    #[error("game has already ended: {0:?}")]
    GameOver(GameStatus),
}

/// A chess game with history tracking.
#[derive(Debug, Clone)]
pub struct Game {
    rules: StandardChess,
    position: Position,
    /// Positions before each recorded move.
    history: Vec<Position>,
    moves: Vec<GameMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Creates a new game under the given rules configuration.
    pub fn with_config(config: RulesConfig) -> Self {
        let rules = StandardChess::new(config);
        Game {
            position: rules.initial_position(),
            rules,
            history: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Creates a game from a custom starting position.
    pub fn from_position(position: Position) -> Self {
        Game {
            rules: StandardChess::default(),
            position,
            history: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the starting position.
    pub fn start_position(&self) -> &Position {
        self.history.first().unwrap_or(&self.position)
    }

    /// Returns the legal moves of the side to move.
    pub fn legal_moves(&self) -> &[Move] {
        self.rules.legal_moves(&self.position)
    }

    pub fn status(&self) -> GameStatus {
        self.rules.status(&self.position)
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_game_over()
    }

    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of half-moves played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Returns the pieces of `side` that have been captured, in order.
    pub fn captured_pieces(&self, side: Side) -> Vec<Piece> {
        self.moves
            .iter()
            .filter_map(|record| record.captured)
            .filter(|piece| piece.side() == side)
            .collect()
    }

    /// Plays the move between two squares.
    ///
    /// Ambiguous promotions resolve to the configured default piece.
    pub fn play(&mut self, from: Square, to: Square) -> Result<&GameMove, GameError> {
        self.ensure_ongoing()?;
        let mv = self
            .rules
            .find_move(&self.position, from, to)
            .ok_or(GameError::NoSuchMove { from, to })?;
        self.play_move(mv)
    }

    /// Plays a move, rejecting it if it is not legal.
    pub fn play_move(&mut self, mv: Move) -> Result<&GameMove, GameError> {
        self.ensure_ongoing()?;
        let outcome = self.rules.attempt_move(&self.position, &mv);
        match outcome.status() {
            MoveStatus::Illegal => return Err(GameError::IllegalMove(mv.to_string())),
            MoveStatus::LeavesKingInCheck => {
                return Err(GameError::LeavesKingInCheck(mv.to_string()))
            }
            MoveStatus::Done => {}
        }

        let executed = outcome.mv();
        let record = GameMove {
            mov: executed,
            side: executed.piece().side(),
            captured: executed.captured(),
        };
        let previous = std::mem::replace(&mut self.position, outcome.into_position());
        self.history.push(previous);
        self.moves.push(record);
        debug!(mv = %executed, ply = self.moves.len(), status = ?self.status(), "move played");

        Ok(&self.moves[self.moves.len() - 1])
    }

    /// Takes back the last move, returning it.
    pub fn undo(&mut self) -> Option<GameMove> {
        let previous = self.history.pop()?;
        self.position = previous;
        let record = self.moves.pop();
        debug!(ply = self.moves.len(), "move taken back");
        record
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        let status = self.status();
        if status.is_game_over() {
            return Err(GameError::GameOver(status));
        }
        Ok(())
    }
}
