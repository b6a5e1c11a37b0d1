//! # stonehenge
//!
//! A two-player, perfect-information, zero-sum board game ("Stonehenge")
//! together with exhaustive adversarial search engines that play it optimally.
//!
//! ## Design Principles
//!
//! 1. **Immutable Transitions**: applying a move never mutates a state; it
//!    produces a new snapshot. Persistent data structures (`im`) make this
//!    an O(1) structural-sharing operation, so a search can hold thousands
//!    of sibling states without aliasing hazards or deep copies.
//!
//! 2. **Game-Agnostic Search**: the engines only speak the [`Game`] trait.
//!    Stonehenge is the one variant provided, but nothing in `search`
//!    knows its rules.
//!
//! 3. **Two Equivalent Engines**: a recursive negamax and an explicit
//!    stack-based variant that builds the same tree with a LIFO worklist.
//!    They must agree on every input; the test suite enforces it.
//!
//! ## Modules
//!
//! - `core`: players, cells, moves, score encoding
//! - `board`: board geometry (rows and scoring-line families)
//! - `state`: immutable game state and move application
//! - `game`: the `Game` trait and the Stonehenge variant
//! - `search`: minimax strategies (recursive, iterative, random, interactive)
//! - `render`: text diagram of a board state
//! - `error`: crate error taxonomy

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod render;
pub mod search;
pub mod state;

// Re-export commonly used types
pub use crate::core::{CellId, Move, Owner, Player, Score, DRAW, LOSS, WIN};

pub use crate::board::{BoardLayout, LineFamily, LineSpec, MAX_SIZE, MIN_SIZE};

pub use crate::error::Error;

pub use crate::game::{Game, GameResult, Stonehenge};

pub use crate::state::{LineStatus, StonehengeState};

pub use crate::search::{
    InteractiveStrategy, IterativeMinimax, NodeId, RandomStrategy, RecursiveMinimax, SearchNode,
    SearchTree, Strategy,
};
