//! Standard chess rules implementation.

use super::RuleSet;
use crate::{attempt_move, find_move, initial_position_with, MoveOutcome, Position, RulesConfig};
use chess_core::{Move, Square};

/// Standard chess rules.
///
/// - Standard piece movement
/// - Castling (kingside and queenside)
/// - En passant
/// - Pawn promotion
/// - Check, checkmate, and stalemate detection
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess {
    config: RulesConfig,
}

impl StandardChess {
    pub fn new(config: RulesConfig) -> Self {
        StandardChess { config }
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}

impl RuleSet for StandardChess {
    fn initial_position(&self) -> Position {
        initial_position_with(self.config.first_mover)
    }

    /// Promotions resolve to the configured default piece.
    fn find_move(&self, position: &Position, from: Square, to: Square) -> Option<Move> {
        let first = find_move(position, from, to)?;
        if first.promotion_kind().is_none() {
            return Some(first);
        }
        let preferred = position
            .current_player()
            .candidate_moves()
            .find(|mv| *mv == &first && mv.promotion_kind() == Some(self.config.default_promotion))
            .copied();
        Some(preferred.unwrap_or(first))
    }

    fn attempt_move(&self, position: &Position, mv: &Move) -> MoveOutcome {
        attempt_move(position, mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GameStatus;
    use crate::{Builder, MoveStatus};
    use chess_core::{Piece, PieceKind, Side};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn promotion_position() -> Position {
        let mut builder = Builder::new();
        builder
            .set_piece(Piece::new(PieceKind::King, Side::White, Square::E1))
            .set_piece(Piece::new(PieceKind::King, Side::Black, Square::H8))
            .set_piece(Piece::new(PieceKind::Pawn, Side::White, sq("a7")).with_moved(true));
        builder.build().unwrap()
    }

    #[test]
    fn initial_position() {
        let rules = StandardChess::default();
        let position = rules.initial_position();
        assert_eq!(position.side_to_move(), Side::White);
        assert_eq!(rules.legal_moves(&position).len(), 20);
        assert!(!rules.is_check(&position));
        assert!(!rules.is_game_over(&position));
    }

    #[test]
    fn configured_first_mover() {
        let rules = StandardChess::new(RulesConfig {
            first_mover: Side::Black,
            ..RulesConfig::default()
        });
        assert_eq!(rules.initial_position().side_to_move(), Side::Black);
    }

    #[test]
    fn default_promotion_is_queen() {
        let rules = StandardChess::default();
        let mv = rules
            .find_move(&promotion_position(), sq("a7"), Square::A8)
            .unwrap();
        assert_eq!(mv.promotion_kind(), Some(PieceKind::Queen));
    }

    #[test]
    fn configured_promotion() {
        let rules = StandardChess::new(RulesConfig {
            default_promotion: PieceKind::Knight,
            ..RulesConfig::default()
        });
        let position = promotion_position();
        let mv = rules.find_move(&position, sq("a7"), Square::A8).unwrap();
        assert_eq!(mv.promotion_kind(), Some(PieceKind::Knight));

        let outcome = rules.attempt_move(&position, &mv);
        assert_eq!(outcome.status(), MoveStatus::Done);
        assert_eq!(
            outcome.position().tile_at(Square::A8).piece().map(|p| p.kind()),
            Some(PieceKind::Knight)
        );
    }

    #[test]
    fn fools_mate_status() {
        let rules = StandardChess::default();
        let mut position = rules.initial_position();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            assert!(!rules.is_game_over(&position));
            let mv = rules.find_move(&position, sq(from), sq(to)).unwrap();
            let outcome = rules.attempt_move(&position, &mv);
            assert_eq!(outcome.status(), MoveStatus::Done);
            position = outcome.into_position();
        }
        assert!(rules.is_check(&position));
        assert_eq!(
            rules.status(&position),
            GameStatus::Checkmate {
                winner: Side::Black
            }
        );
        assert!(rules.legal_moves(&position).is_empty());
    }
}
