//! Seeded uniformly-random move selection.
//!
//! Useful as a baseline opponent and for randomized playout tests. The
//! generator is ChaCha8 seeded explicitly, so a given seed replays the
//! same move sequence on the same positions.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::Error;
use crate::game::Game;

use super::Strategy;

/// Picks uniformly at random among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Create a strategy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<G: Game> Strategy<G> for RandomStrategy {
    fn best_move(&mut self, game: &G) -> Result<G::Move, Error> {
        game.possible_moves(game.state())
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoMovesAvailable)
    }
}
