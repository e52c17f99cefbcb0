//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use crate::{attempt_move, Position};

/// Counts the number of leaf nodes at the given depth.
///
/// Only moves that [`attempt_move`] accepts are followed.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.legal_moves(position.side_to_move());

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in moves {
        let next = attempt_move(position, m).into_position();
        nodes += perft(&next, depth - 1);
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let moves = position.legal_moves(position.side_to_move());
    let mut results = Vec::with_capacity(moves.len());

    for m in moves {
        let nodes = if depth > 1 {
            let next = attempt_move(position, m).into_position();
            perft(&next, depth - 1)
        } else {
            1
        };
        results.push((m.to_string(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
