//! Reachable-position enumeration and whole-game policy solving

use std::collections::{BTreeMap, HashSet, VecDeque};

use serde::Serialize;

use crate::{
    board::{Board, Move},
    search::Search,
};

/// The engine's verdict for one position: its chosen move and exact score
/// from the side to move's perspective
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PolicyEntry {
    pub row: usize,
    pub col: usize,
    pub score: i32,
}

/// Enumerate every board reachable by legal play from the empty board with
/// X moving first, in breadth-first order. Terminal boards are included.
pub fn reachable_boards() -> Vec<Board> {
    let mut boards = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let root = Board::new();
    visited.insert(root.encode());
    queue.push_back(root);

    while let Some(board) = queue.pop_front() {
        boards.push(board);

        if board.terminal_outcome().is_terminal() {
            continue;
        }

        for mv in board.empty_moves() {
            let mut next = board;
            next.apply_move(mv)
                .expect("empty cell enumeration yields legal moves");
            if visited.insert(next.encode()) {
                queue.push_back(next);
            }
        }
    }

    boards
}

/// Solve every reachable non-terminal position, keyed by its encoding.
///
/// The score in each entry is from the perspective of the side to move,
/// which is also the maximizer of that position's search. `progress` is
/// called once per position with the number processed and the total.
pub fn compute_optimal_policy(
    mut progress: impl FnMut(usize, usize),
) -> BTreeMap<String, PolicyEntry> {
    let boards = reachable_boards();
    let total = boards.len();
    let mut policy = BTreeMap::new();

    for (i, board) in boards.into_iter().enumerate() {
        progress(i + 1, total);
        if board.terminal_outcome().is_terminal() {
            continue;
        }

        let mut scratch = board;
        let mut search = Search::new(board.to_move());
        let (mv, score) = search.best_move_scored(&mut scratch);
        policy.insert(
            board.encode(),
            PolicyEntry {
                row: mv.row,
                col: mv.col,
                score,
            },
        );
    }

    policy
}

impl PolicyEntry {
    /// The entry's chosen move
    pub fn mv(&self) -> Move {
        Move::new(self.row, self.col)
    }
}
