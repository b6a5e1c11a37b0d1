//! Adversarial search strategies.
//!
//! A strategy is anything that can pick a move for a game:
//!
//! - [`RecursiveMinimax`]: full-tree negamax by native recursion.
//! - [`IterativeMinimax`]: the same search driven by an explicit LIFO
//!   worklist over an arena tree — no call-stack recursion.
//! - [`RandomStrategy`]: a seeded uniformly-random opponent.
//! - [`InteractiveStrategy`]: reads a move from an input source.
//!
//! The two minimax engines are exhaustive (no pruning) and must return
//! moves of equal guaranteed outcome on every input; with their shared
//! first-maximum tie-break they in fact return the identical move.

pub mod interactive;
pub mod iterative;
pub mod random;
pub mod recursive;
pub mod tree;

pub use interactive::InteractiveStrategy;
pub use iterative::IterativeMinimax;
pub use random::RandomStrategy;
pub use recursive::RecursiveMinimax;
pub use tree::{NodeId, SearchNode, SearchTree};

use crate::core::{Score, DRAW, LOSS, WIN};
use crate::error::Error;
use crate::game::{Game, GameResult};

/// A move-selection strategy.
pub trait Strategy<G: Game> {
    /// Pick a move for the game's current state.
    ///
    /// Fails with [`Error::NoMovesAvailable`] on a terminal position;
    /// any other failure propagates unchanged.
    fn best_move(&mut self, game: &G) -> Result<G::Move, Error>;
}

/// Score of a terminal state from the perspective of the player who
/// would move next: a win for that player scores [`WIN`], a tie
/// [`DRAW`], anything else [`LOSS`].
///
/// In practice the player who just moved is the one who ended the game,
/// so terminal positions score `LOSS` for the mover-to-be — the sign
/// flips as the value folds back up one ply.
pub(crate) fn terminal_score<G: Game>(game: &G, state: &G::State) -> Score {
    match game.result(state) {
        Some(GameResult::Winner(p)) if p == game.to_move(state) => WIN,
        Some(GameResult::Draw) => DRAW,
        _ => LOSS,
    }
}
