//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Move, Player};

/// Winning line indices on the 3x3 board, in scan order: rows, then columns,
/// then the main diagonal, then the anti-diagonal. Terminal detection reports
/// the first complete line in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the winner, if any: the owner of the first complete line in scan
/// order. Under legal alternating play at most one player can have a
/// complete line, so the order only matters for malformed positions.
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return first.to_player();
        }
    }
    None
}

/// Check if a player has three in a row anywhere
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Find all moves that would immediately complete a line for the player
pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<Move> {
    let mut moves: Vec<Move> = WINNING_LINES
        .iter()
        .filter_map(|line| winning_move_in_line(cells, player, line))
        .map(Move::from_index)
        .collect();
    moves.sort_by_key(|mv| mv.index());
    moves.dedup();
    moves
}

/// Check if the player has an immediate winning move (two in a line with the
/// third cell empty)
pub fn has_immediate_win(cells: &[Cell; 9], player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| winning_move_in_line(cells, player, line).is_some())
}

fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
    let target = player.to_cell();
    let mut count = 0;
    let mut empty_idx = None;

    for &idx in line {
        match cells[idx] {
            Cell::Empty => {
                if empty_idx.is_some() {
                    return None;
                }
                empty_idx = Some(idx);
            }
            c if c == target => count += 1,
            _ => return None,
        }
    }

    if count == 2 { empty_idx } else { None }
}
