//! Core types: players, cells, moves, and the score encoding.
//!
//! These are the game-agnostic building blocks shared by the board
//! geometry, the state model, and the search engines.

pub mod cell;
pub mod player;

pub use cell::{CellId, Move, Owner};
pub use player::Player;

/// Guaranteed-outcome score from the perspective of the player to move.
///
/// Zero-sum convention: a score favorable to the player to move is exactly
/// the negation of the score favorable to the opponent one ply later.
pub type Score = i8;

/// Score of a winning position.
pub const WIN: Score = 1;

/// Score of a tied position.
pub const DRAW: Score = 0;

/// Score of a losing position.
pub const LOSS: Score = -1;
