//! Common test utilities for the oxo test suite.
//!
//! Provides an unpruned minimax reference implementation. It deliberately
//! avoids the engine's place/undo backtracking and instead recurses on
//! copies through the public `apply_move` API, so the two implementations
//! share as little mechanism as possible while having to agree on values.

use oxo::{Board, Move, Player};

/// Unpruned minimax with the same depth convention and scoring as the
/// engine's alpha-beta search: root at depth 0, one increment per ply.
pub struct Reference {
    maximizer: Player,
    /// Nodes visited, counted the same way as `SearchStats::nodes`
    pub nodes: u64,
}

impl Reference {
    pub fn new(maximizer: Player) -> Self {
        Reference {
            maximizer,
            nodes: 0,
        }
    }

    /// Exact minimax value of a position at the given depth
    pub fn value(&mut self, board: Board, depth: i32) -> i32 {
        self.nodes += 1;

        let outcome = board.terminal_outcome();
        if outcome.is_terminal() {
            return outcome.score(self.maximizer, depth);
        }

        let maximizing = board.to_move() == self.maximizer;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for mv in board.empty_moves() {
            let mut next = board;
            next.apply_move(mv).expect("empty cells are legal");
            let value = self.value(next, depth + 1);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }

    /// Top-level selection with the engine's row-major first-found
    /// tie-breaking
    pub fn best_move(&mut self, board: Board) -> (Move, i32) {
        assert!(
            !board.terminal_outcome().is_terminal(),
            "reference search needs a non-terminal board"
        );
        assert_eq!(board.to_move(), self.maximizer);

        let mut best: Option<(Move, i32)> = None;
        for mv in board.empty_moves() {
            let mut next = board;
            next.apply_move(mv).expect("empty cells are legal");
            let value = self.value(next, 1);
            if best.is_none_or(|(_, score)| value > score) {
                best = Some((mv, value));
            }
        }
        best.expect("non-terminal board has a move")
    }
}
