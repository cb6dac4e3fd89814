//! Board state representation and game rules

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// Terminal evaluation constant. Must exceed the maximum search depth (9),
/// so that a win at any depth always outscores a draw and every loss.
pub const WIN_SCORE: i32 = 10;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// A move: zero-based row and column, each in [0, 2]
///
/// `Move` values are plain coordinates; range checking happens when the move
/// is applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Row-major cell index in [0, 8]
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Move for a row-major cell index
    pub fn from_index(index: usize) -> Self {
        Move {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn in_range(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a position, recomputed on demand and never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    Ongoing,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// Score a terminal outcome from the maximizer's perspective.
    ///
    /// Wins score `WIN_SCORE - depth` (faster wins score higher), losses
    /// score `depth - WIN_SCORE` (faster losses are penalized more), draws
    /// score zero.
    ///
    /// # Panics
    ///
    /// Panics if called on `Ongoing`; scoring a non-terminal outcome is a
    /// caller defect.
    pub fn score(self, maximizer: Player, depth: i32) -> i32 {
        match self {
            Outcome::Win(winner) if winner == maximizer => WIN_SCORE - depth,
            Outcome::Win(_) => depth - WIN_SCORE,
            Outcome::Draw => 0,
            Outcome::Ongoing => panic!("score is only defined for terminal outcomes"),
        }
    }
}

/// Board state: a 3x3 grid of cells plus whose turn it is
///
/// The grid is stored flat in row-major order and indexed through [`Move`].
/// This type implements `Copy` since it is only 10 bytes; opponents and
/// tests snapshot boards freely, while the search mutates one shared
/// instance in place and backtracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
    to_move: Player,
}

impl Board {
    /// Create an empty board with X to move
    pub fn new() -> Self {
        Self::new_with_first(Player::X)
    }

    /// Create an empty board with a chosen first player
    pub fn new_with_first(first: Player) -> Self {
        Board {
            cells: [Cell::Empty; 9],
            to_move: first,
        }
    }

    /// The player whose move is next
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Cell contents at a move's coordinates
    pub fn cell(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Read-only snapshot of the grid as rows of cells, for rendering
    pub fn grid(&self) -> [[Cell; 3]; 3] {
        let mut rows = [[Cell::Empty; 3]; 3];
        for (idx, &cell) in self.cells.iter().enumerate() {
            rows[idx / 3][idx % 3] = cell;
        }
        rows
    }

    pub fn is_empty_cell(&self, mv: Move) -> bool {
        mv.in_range() && self.cells[mv.index()] == Cell::Empty
    }

    /// All empty cells in row-major order
    pub fn empty_moves(&self) -> Vec<Move> {
        (0..9)
            .filter(|&idx| self.cells[idx] == Cell::Empty)
            .map(Move::from_index)
            .collect()
    }

    /// Count of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Apply a committed move: place the current turn's symbol and advance
    /// the turn to the other player.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfBounds` or `Error::OccupiedCell` if the move is
    /// illegal. The board is unchanged on error; the caller may retry.
    pub fn apply_move(&mut self, mv: Move) -> crate::Result<()> {
        if !mv.in_range() {
            return Err(crate::Error::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if self.cells[mv.index()] != Cell::Empty {
            return Err(crate::Error::OccupiedCell {
                row: mv.row,
                col: mv.col,
            });
        }

        self.cells[mv.index()] = self.to_move.to_cell();
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Place a symbol without touching the turn field.
    ///
    /// This is the hypothetical placement used by search: paired with
    /// [`undo_move`](Self::undo_move) it keeps backtracking O(1) and
    /// turn-independent.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of range or occupied; the place/undo
    /// discipline is internal and misuse is a caller defect.
    pub fn place(&mut self, mv: Move, player: Player) {
        assert!(
            self.is_empty_cell(mv),
            "place on non-empty or out-of-range cell {mv}"
        );
        self.cells[mv.index()] = player.to_cell();
    }

    /// Clear a cell back to empty without touching the turn field.
    ///
    /// Used exclusively for search backtracking after a hypothetical
    /// [`place`](Self::place).
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of range or already empty; undoing a cell
    /// that was never placed is a caller defect.
    pub fn undo_move(&mut self, mv: Move) {
        assert!(
            mv.in_range() && self.cells[mv.index()] != Cell::Empty,
            "undo of empty or out-of-range cell {mv}"
        );
        self.cells[mv.index()] = Cell::Empty;
    }

    /// Determine the terminal outcome of the position.
    ///
    /// Scans rows, then columns, then the two diagonals; the first complete
    /// line short-circuits the rest. A full grid with no winner is a draw.
    pub fn terminal_outcome(&self) -> Outcome {
        if let Some(winner) = lines::winner(&self.cells) {
            return Outcome::Win(winner);
        }
        if self.cells.contains(&Cell::Empty) {
            Outcome::Ongoing
        } else {
            Outcome::Draw
        }
    }

    /// Parse a board from 9 cell characters in row-major order, with an
    /// optional `_X`/`_O` turn suffix. Whitespace is ignored. Without a
    /// suffix the turn is inferred from piece counts (X moves first).
    ///
    /// # Errors
    ///
    /// Returns an error if the board part is too short, contains an invalid
    /// character, has piece counts differing by more than 1, or carries a
    /// turn suffix inconsistent with the counts.
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let (board_part, suffix) = match cleaned.split_once('_') {
            Some((board, turn)) => (board, Some(turn)),
            None => (cleaned.as_str(), None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
        if x_count.abs_diff(o_count) > 1 {
            return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
        }

        let to_move = match suffix {
            Some("X") => Self::check_turn(Player::X, x_count, o_count, s)?,
            Some("O") => Self::check_turn(Player::O, x_count, o_count, s)?,
            Some(other) => {
                return Err(crate::Error::InvalidPlayerString {
                    player: other.to_string(),
                    context: s.to_string(),
                });
            }
            // X-first inference: equal counts means X is next, X one ahead
            // means O is next. O ahead needs an explicit suffix.
            None if x_count == o_count => Player::X,
            None if x_count == o_count + 1 => Player::O,
            None => {
                return Err(crate::Error::InvalidPieceCounts { x_count, o_count });
            }
        };

        Ok(Board { cells, to_move })
    }

    fn check_turn(
        player: Player,
        x_count: usize,
        o_count: usize,
        context: &str,
    ) -> crate::Result<Player> {
        let valid = match player {
            Player::X => x_count <= o_count,
            Player::O => o_count <= x_count,
        };
        if valid {
            Ok(player)
        } else {
            Err(crate::Error::InconsistentTurn {
                x_count,
                o_count,
                context: context.to_string(),
            })
        }
    }

    /// Canonical string representation: 9 cell characters plus the turn,
    /// e.g. `"XO......._X"`. Round-trips through [`from_string`](Self::from_string).
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.cells[row * 3 + col].to_char())?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty_with_x_to_move() {
        let board = Board::new();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_moves().len(), 9);
    }

    #[test]
    fn apply_move_places_and_advances_turn() {
        let mut board = Board::new();
        board.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(board.cell(Move::new(1, 1)), Cell::X);
        assert_eq!(board.to_move(), Player::O);
    }

    #[test]
    fn apply_move_rejects_occupied_cell() {
        let mut board = Board::new();
        board.apply_move(Move::new(0, 0)).unwrap();
        let before = board;
        let err = board.apply_move(Move::new(0, 0)).unwrap_err();
        assert!(matches!(err, crate::Error::OccupiedCell { row: 0, col: 0 }));
        assert_eq!(board, before, "board unchanged after illegal move");
    }

    #[test]
    fn apply_move_rejects_out_of_range() {
        let mut board = Board::new();
        let err = board.apply_move(Move::new(3, 0)).unwrap_err();
        assert!(matches!(err, crate::Error::OutOfBounds { row: 3, col: 0 }));
        let err = board.apply_move(Move::new(0, 7)).unwrap_err();
        assert!(matches!(err, crate::Error::OutOfBounds { row: 0, col: 7 }));
    }

    #[test]
    fn turn_alternates_strictly() {
        let mut board = Board::new();
        let moves = [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)];
        let expected = [Player::O, Player::X, Player::O];
        for (mv, turn) in moves.iter().zip(expected) {
            board.apply_move(*mv).unwrap();
            assert_eq!(board.to_move(), turn);
        }
    }

    #[test]
    fn place_and_undo_round_trip() {
        let mut board = Board::from_string("XO.......").unwrap();
        let before = board;
        let mv = Move::new(2, 1);

        board.place(mv, Player::X);
        assert_eq!(board.cell(mv), Cell::X);
        assert_eq!(board.to_move(), before.to_move(), "place leaves turn alone");

        board.undo_move(mv);
        assert_eq!(board, before, "undo restores cell, turn, and nothing else");
    }

    #[test]
    fn undo_after_apply_restores_cell_but_not_turn() {
        let mut board = Board::new();
        board.apply_move(Move::new(0, 2)).unwrap();
        board.undo_move(Move::new(0, 2));
        assert_eq!(board.cell(Move::new(0, 2)), Cell::Empty);
        // undo_move never touches the turn field
        assert_eq!(board.to_move(), Player::O);
    }

    #[test]
    #[should_panic(expected = "undo of empty")]
    fn undo_of_empty_cell_panics() {
        let mut board = Board::new();
        board.undo_move(Move::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "place on non-empty")]
    fn place_on_occupied_cell_panics() {
        let mut board = Board::new();
        board.place(Move::new(0, 0), Player::X);
        board.place(Move::new(0, 0), Player::O);
    }

    #[test]
    fn terminal_outcome_row_win() {
        let board = Board::from_string("XXX.OO...").unwrap();
        assert_eq!(board.terminal_outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn terminal_outcome_column_win() {
        let board = Board::from_string("OX.OX.O.X").unwrap();
        assert_eq!(board.terminal_outcome(), Outcome::Win(Player::O));
    }

    #[test]
    fn terminal_outcome_anti_diagonal_win() {
        let board = Board::from_string("X.O.OX0X.").unwrap();
        assert_eq!(board.terminal_outcome(), Outcome::Win(Player::O));
    }

    #[test]
    fn terminal_outcome_draw() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(board.terminal_outcome(), Outcome::Draw);
    }

    #[test]
    fn terminal_outcome_ongoing() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.terminal_outcome(), Outcome::Ongoing);
    }

    #[test]
    fn score_prefers_fast_wins_and_slow_losses() {
        let win = Outcome::Win(Player::X);
        assert!(win.score(Player::X, 2) > win.score(Player::X, 5));
        assert!(win.score(Player::O, 5) > win.score(Player::O, 2));
        assert_eq!(Outcome::Draw.score(Player::X, 4), 0);
        // Every win outscores a draw and every loss at depth <= 9
        assert!(win.score(Player::X, 9) > 0);
        assert!(win.score(Player::O, 9) < 0);
    }

    #[test]
    #[should_panic(expected = "terminal outcomes")]
    fn score_of_ongoing_panics() {
        let _ = Outcome::Ongoing.score(Player::X, 0);
    }

    #[test]
    fn from_string_infers_turn_from_counts() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.to_move(), Player::O);
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.to_move(), Player::X);
    }

    #[test]
    fn from_string_honors_turn_suffix() {
        let board = Board::from_string("........._O").unwrap();
        assert_eq!(board.to_move(), Player::O);
    }

    #[test]
    fn from_string_rejects_bad_input() {
        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
        assert!(Board::from_string("XXX......").is_err());
        // O ahead without a suffix cannot come from X-first play
        assert!(Board::from_string("O........").is_err());
        assert!(Board::from_string("........._Q").is_err());
        assert!(Board::from_string("X........_X").is_err());
    }

    #[test]
    fn encode_round_trips() {
        let board = Board::from_string("XO.X.O..._X").unwrap();
        assert_eq!(board.encode(), "XO.X.O..._X");
        let parsed = Board::from_string(&board.encode()).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn grid_snapshot_matches_cells() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let grid = board.grid();
        assert_eq!(grid[0], [Cell::X, Cell::O, Cell::X]);
        assert_eq!(grid[1], [Cell::Empty, Cell::O, Cell::Empty]);
        assert_eq!(grid[2], [Cell::X, Cell::Empty, Cell::Empty]);
    }

    #[test]
    fn display_renders_three_rows() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }
}
