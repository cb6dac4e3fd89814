//! Game record: a board plus its move history

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Outcome, Player};

/// One committed move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// A game in progress or finished
///
/// Wraps a [`Board`] mutated in place, records every committed move, and
/// rejects moves once the game is over. The outcome is derived from the
/// board, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<PlayedMove>,
}

impl Game {
    /// Start a game with X moving first
    pub fn new() -> Self {
        Self::new_with_first(Player::X)
    }

    /// Start a game with a chosen first player
    pub fn new_with_first(first: Player) -> Self {
        Game {
            board: Board::new_with_first(first),
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// The game's current outcome
    pub fn outcome(&self) -> Outcome {
        self.board.terminal_outcome()
    }

    /// Commit a move for the player whose turn it is.
    ///
    /// Returns the outcome after the move so drivers can decide whether to
    /// continue.
    ///
    /// # Errors
    ///
    /// `Error::GameOver` if the game has already ended; otherwise the
    /// illegal-move errors of [`Board::apply_move`]. The game is unchanged
    /// on error and the caller may retry with a different move.
    pub fn play(&mut self, mv: Move) -> crate::Result<Outcome> {
        if self.outcome().is_terminal() {
            return Err(crate::Error::GameOver);
        }

        let player = self.board.to_move();
        self.board.apply_move(mv)?;
        self.moves.push(PlayedMove { mv, player });
        Ok(self.outcome())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
