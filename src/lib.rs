//! Optimal tic-tac-toe play by exhaustive minimax search.
//!
//! [`board`] holds the position model and [`min_max`] the search over it.

pub mod board;
pub mod cli;
pub mod error;
pub mod min_max;

pub use board::{Action, ActionSet, Board, CellState, Player};
pub use error::{Error, Result};
pub use min_max::{minimax, ScoredMove};
