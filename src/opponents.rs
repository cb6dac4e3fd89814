//! Move-selection strategies and a non-interactive match driver

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    board::{Board, Move},
    game::Game,
    search::Search,
};

/// A strategy that picks a move for the side to move
///
/// `choose` is only called on non-terminal boards; a non-terminal board
/// always has at least one empty cell.
pub trait Opponent {
    fn name(&self) -> &'static str;

    fn choose(&mut self, board: &Board) -> Move;
}

/// Picks uniformly among empty cells, seeded for reproducibility
#[derive(Debug)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn seeded(seed: u64) -> Self {
        RandomOpponent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Opponent for RandomOpponent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, board: &Board) -> Move {
        let moves = board.empty_moves();
        moves[self.rng.random_range(0..moves.len())]
    }
}

/// Plays the alpha-beta engine's move for whichever side is to move
///
/// Searches a private copy of the board, so the caller's board is never
/// mutated. Each call builds a fresh [`Search`], keeping move selection
/// deterministic for identical boards.
#[derive(Debug, Default)]
pub struct EngineOpponent;

impl Opponent for EngineOpponent {
    fn name(&self) -> &'static str {
        "engine"
    }

    fn choose(&mut self, board: &Board) -> Move {
        let mut scratch = *board;
        Search::new(board.to_move()).best_move(&mut scratch)
    }
}

/// Play one game to completion, X moving first.
///
/// # Errors
///
/// Propagates illegal moves from either strategy; a well-behaved opponent
/// never returns one.
pub fn play_match(
    x_player: &mut dyn Opponent,
    o_player: &mut dyn Opponent,
) -> crate::Result<Game> {
    let mut game = Game::new();
    while !game.outcome().is_terminal() {
        let mv = match game.board().to_move() {
            crate::board::Player::X => x_player.choose(game.board()),
            crate::board::Player::O => o_player.choose(game.board()),
        };
        game.play(mv)?;
    }
    Ok(game)
}
