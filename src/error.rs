//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
///
/// All variants are recoverable conditions at the engine boundary. Programmer
/// errors (searching a terminal board, undoing an empty cell) are assertion
/// failures, not `Error` variants.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: ({row}, {col}) is out of bounds (coordinates must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("illegal move: cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (counts must differ by at most 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid player '{player}' in '{context}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, context: String },

    #[error("turn suffix inconsistent with piece counts (X={x_count}, O={o_count}) in '{context}'")]
    InconsistentTurn {
        x_count: usize,
        o_count: usize,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
