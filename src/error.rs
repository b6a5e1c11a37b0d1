//! Error taxonomy.
//!
//! Failures during a search are immediately fatal to that search call and
//! propagate to the caller; nothing is retried or swallowed.
//! `Game::str_to_move` resolves unparseable text to `None` rather than an
//! error; the interactive strategy surfaces that as
//! [`Error::UnrecognizedMove`].

use thiserror::Error;

use crate::core::CellId;

/// Errors produced by the game state and the search strategies.
#[derive(Error, Debug)]
pub enum Error {
    /// A move named a cell that is claimed, unknown, or the game is over.
    #[error("invalid move: cell {0} is not open")]
    InvalidMove(CellId),

    /// A strategy was asked for a move in a terminal position.
    #[error("no legal moves are available")]
    NoMovesAvailable,

    /// Input text did not name a currently-legal move.
    #[error("unrecognized move {0:?}")]
    UnrecognizedMove(String),

    /// Board sizes outside the supported range have no defined geometry.
    #[error("unsupported board size {0} (supported: {min}..={max})", min = crate::board::MIN_SIZE, max = crate::board::MAX_SIZE)]
    UnsupportedBoardSize(u32),

    /// Reading interactive move input failed.
    #[error("failed to read move input")]
    Io(#[from] std::io::Error),
}
