//! Alpha-beta pruned minimax search
//!
//! The search walks the full game tree over one shared mutable [`Board`]
//! using place/recurse/undo backtracking rather than copies. Two mutually
//! recursive procedures simulate the maximizing and minimizing sides;
//! depth-aware scoring prefers fast wins and slow losses. Pruning never
//! changes the chosen value, only the number of nodes visited.

use crate::board::{Board, Move, Player, WIN_SCORE};

/// Below any reachable terminal score; the worst value the maximizer can see
const SCORE_FLOOR: i32 = -(WIN_SCORE + 1);
/// Above any reachable terminal score
const SCORE_CEILING: i32 = WIN_SCORE + 1;

/// Counters accumulated over a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, counting every recursive call including terminal ones
    pub nodes: u64,
    /// Branches abandoned early by an alpha or beta cutoff
    pub cutoffs: u64,
}

/// Full-depth adversarial search for a designated maximizing player
///
/// The search assumes perfect play by both sides. It is purely synchronous
/// and single-threaded: one board instance is shared by all recursive calls
/// and restored on every exit path, including early pruning returns.
#[derive(Debug)]
pub struct Search {
    maximizer: Player,
    stats: SearchStats,
}

impl Search {
    pub fn new(maximizer: Player) -> Self {
        Search {
            maximizer,
            stats: SearchStats::default(),
        }
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Counters accumulated since construction
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The best move for the maximizer, by row-major first-found tie-breaking
    ///
    /// # Panics
    ///
    /// Panics if the board is terminal or it is not the maximizer's turn;
    /// both indicate a caller defect, not a recoverable condition.
    pub fn best_move(&mut self, board: &mut Board) -> Move {
        self.best_move_scored(board).0
    }

    /// The best move together with its minimax score
    ///
    /// Every empty cell is tried in row-major order with a full alpha-beta
    /// window, so the returned score is exact. Ties keep the first-found
    /// cell, which makes move selection deterministic.
    ///
    /// # Panics
    ///
    /// Same preconditions as [`best_move`](Self::best_move).
    pub fn best_move_scored(&mut self, board: &mut Board) -> (Move, i32) {
        self.check_preconditions(board);

        let mut best: Option<(Move, i32)> = None;
        for idx in 0..9 {
            let mv = Move::from_index(idx);
            if !board.is_empty_cell(mv) {
                continue;
            }

            board.place(mv, self.maximizer);
            let value = self.minimize(board, SCORE_FLOOR, SCORE_CEILING, 1);
            board.undo_move(mv);

            if best.is_none_or(|(_, score)| value > score) {
                best = Some((mv, value));
            }
        }

        best.expect("non-terminal board has at least one empty cell")
    }

    /// Exact scores for every legal move, in row-major order
    ///
    /// # Panics
    ///
    /// Same preconditions as [`best_move`](Self::best_move).
    pub fn move_scores(&mut self, board: &mut Board) -> Vec<(Move, i32)> {
        self.check_preconditions(board);

        let mut scores = Vec::new();
        for idx in 0..9 {
            let mv = Move::from_index(idx);
            if !board.is_empty_cell(mv) {
                continue;
            }

            board.place(mv, self.maximizer);
            let value = self.minimize(board, SCORE_FLOOR, SCORE_CEILING, 1);
            board.undo_move(mv);
            scores.push((mv, value));
        }
        scores
    }

    fn check_preconditions(&self, board: &Board) {
        assert!(
            !board.terminal_outcome().is_terminal(),
            "search invoked on a terminal board"
        );
        assert_eq!(
            board.to_move(),
            self.maximizer,
            "search invoked when it is not the maximizer's turn"
        );
    }

    /// Simulate the maximizer's turn: try each empty cell, keeping the
    /// maximum child value, cutting off once `best >= beta`.
    fn maximize(&mut self, board: &mut Board, mut alpha: i32, beta: i32, depth: i32) -> i32 {
        self.stats.nodes += 1;

        let outcome = board.terminal_outcome();
        if outcome.is_terminal() {
            return outcome.score(self.maximizer, depth);
        }

        let mut best = SCORE_FLOOR;
        for idx in 0..9 {
            let mv = Move::from_index(idx);
            if !board.is_empty_cell(mv) {
                continue;
            }

            board.place(mv, self.maximizer);
            let value = self.minimize(board, alpha, beta, depth + 1);
            board.undo_move(mv);

            best = best.max(value);
            if best >= beta {
                // Beta cutoff: the minimizing ancestor will never choose
                // this branch.
                self.stats.cutoffs += 1;
                return best;
            }
            alpha = alpha.max(best);
        }
        best
    }

    /// Simulate the minimizer's turn: symmetric to `maximize`, cutting off
    /// once `alpha >= best`.
    fn minimize(&mut self, board: &mut Board, alpha: i32, mut beta: i32, depth: i32) -> i32 {
        self.stats.nodes += 1;

        let outcome = board.terminal_outcome();
        if outcome.is_terminal() {
            return outcome.score(self.maximizer, depth);
        }

        let minimizer = self.maximizer.opponent();
        let mut best = SCORE_CEILING;
        for idx in 0..9 {
            let mv = Move::from_index(idx);
            if !board.is_empty_cell(mv) {
                continue;
            }

            board.place(mv, minimizer);
            let value = self.maximize(board, alpha, beta, depth + 1);
            board.undo_move(mv);

            best = best.min(value);
            if alpha >= best {
                // Alpha cutoff
                self.stats.cutoffs += 1;
                return best;
            }
            beta = beta.min(best);
        }
        best
    }
}
