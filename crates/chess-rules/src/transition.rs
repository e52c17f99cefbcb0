//! Move lookup and attempts.

use chess_core::{Move, Square};
use tracing::debug;

use crate::legality::exposes_king;
use crate::Position;

/// How a move attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// The move was executed.
    Done,
    /// The move is not available to the side to move.
    Illegal,
    /// The move is available but would leave the mover's king attacked.
    LeavesKingInCheck,
}

impl MoveStatus {
    #[inline]
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// Result of [`attempt_move`].
///
/// On anything but [`MoveStatus::Done`] the position is the unchanged
/// original.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    position: Position,
    mv: Move,
    status: MoveStatus,
}

impl MoveOutcome {
    /// Returns the resulting position.
    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Consumes the outcome, returning the resulting position.
    #[inline]
    pub fn into_position(self) -> Position {
        self.position
    }

    /// Returns the move that was tried.
    ///
    /// When the attempt matched an available move, this is that move as
    /// generated, which may carry more detail than the one passed in.
    #[inline]
    pub fn mv(&self) -> Move {
        self.mv
    }

    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }
}

/// Attempts `mv` for the side to move.
///
/// The move is matched against the side's pseudo-legal moves and castles
/// by origin and target. An exact match wins; otherwise the first match in
/// generation order is used. The matched move is simulated and rejected
/// with [`MoveStatus::LeavesKingInCheck`] if it exposes the mover's king.
pub fn attempt_move(position: &Position, mv: &Move) -> MoveOutcome {
    let Some(candidate) = resolve(position, mv) else {
        debug!(%mv, side = %position.side_to_move(), "move not available");
        return MoveOutcome {
            position: position.clone(),
            mv: *mv,
            status: MoveStatus::Illegal,
        };
    };

    if exposes_king(position.board(), &candidate) {
        debug!(mv = %candidate, side = %position.side_to_move(), "move leaves king in check");
        return MoveOutcome {
            position: position.clone(),
            mv: candidate,
            status: MoveStatus::LeavesKingInCheck,
        };
    }

    let next = position
        .execute(&candidate)
        .expect("a move that keeps the king safe yields a valid position");
    MoveOutcome {
        position: next,
        mv: candidate,
        status: MoveStatus::Done,
    }
}

/// Finds the side to move's first move from `from` to `to`.
///
/// Promotions are generated queen first, so an ambiguous promotion lookup
/// resolves to a queen. Moves that would expose the king are still found;
/// [`attempt_move`] reports them.
pub fn find_move(position: &Position, from: Square, to: Square) -> Option<Move> {
    position
        .current_player()
        .candidate_moves()
        .find(|mv| mv.from() == from && mv.to() == to)
        .copied()
}

fn resolve(position: &Position, mv: &Move) -> Option<Move> {
    let player = position.current_player();
    if mv.piece().side() != player.side() {
        return None;
    }
    player
        .candidate_moves()
        .find(|candidate| candidate.is_identical(mv))
        .or_else(|| player.candidate_moves().find(|candidate| *candidate == mv))
        .copied()
}
