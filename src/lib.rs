//! oxo: tic-tac-toe engine with alpha-beta pruned minimax search
//!
//! This crate provides:
//! - Complete board state and rules with terminal detection
//! - Full-depth adversarial search with alpha-beta pruning and
//!   depth-aware scoring
//! - A game record for driving matches between strategies
//! - Reachable-position enumeration and whole-game policy solving
//! - A CLI for position analysis, solving, and engine evaluation

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod opponents;
pub mod policy;
pub mod search;

pub use board::{Board, Cell, Move, Outcome, Player, WIN_SCORE};
pub use error::{Error, Result};
pub use game::{Game, PlayedMove};
pub use opponents::{EngineOpponent, Opponent, RandomOpponent, play_match};
pub use policy::{PolicyEntry, compute_optimal_policy, reachable_boards};
pub use search::{Search, SearchStats};
