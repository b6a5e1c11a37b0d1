//! Move selection from a line-oriented input source.
//!
//! Reads one line per request and parses it with the game's own
//! [`Game::str_to_move`]. The reader is generic so tests can drive the
//! strategy from an in-memory buffer instead of stdin.

use std::io::{BufRead, BufReader, Stdin};

use crate::error::Error;
use crate::game::Game;

use super::Strategy;

/// Asks an input source for each move.
#[derive(Debug)]
pub struct InteractiveStrategy<R> {
    input: R,
}

impl<R: BufRead> InteractiveStrategy<R> {
    /// Create a strategy reading from the given source.
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl InteractiveStrategy<BufReader<Stdin>> {
    /// Create a strategy reading from standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()))
    }
}

impl<G: Game, R: BufRead> Strategy<G> for InteractiveStrategy<R> {
    fn best_move(&mut self, game: &G) -> Result<G::Move, Error> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(Error::NoMovesAvailable);
        }
        game.str_to_move(&line)
            .ok_or_else(|| Error::UnrecognizedMove(line.trim().to_string()))
    }
}
