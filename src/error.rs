use thiserror::Error;

/// Errors raised by the board model and its text format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action: cell ({row}, {column}) is already occupied")]
    InvalidAction { row: usize, column: usize },

    #[error("action ({row}, {column}) is outside the 3x3 board")]
    OutOfBounds { row: usize, column: usize },

    #[error("board must have {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid cell character '{character}' at position {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("invalid piece counts: X={x_count}, O={o_count} (X must equal O or lead by one)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid player '{value}' (expected 'X' or 'O')")]
    InvalidPlayer { value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
