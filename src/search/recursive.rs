//! Recursive minimax (negamax).
//!
//! Explores the full game tree: every legal move is simulated, the
//! resulting position is evaluated from the opponent's perspective, and
//! the score is negated on the way back up. No pruning — exponential in
//! the number of open cells and intended for small boards only.

use crate::core::{Score, LOSS};
use crate::error::Error;
use crate::game::Game;

use super::{terminal_score, Strategy};

/// Full-tree recursive minimax.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveMinimax;

impl RecursiveMinimax {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<G: Game> Strategy<G> for RecursiveMinimax {
    fn best_move(&mut self, game: &G) -> Result<G::Move, Error> {
        let state = game.state();
        let mut best: Option<(Score, G::Move)> = None;

        for mv in game.possible_moves(state) {
            let next = game.apply(state, mv)?;
            let score = -negamax(game, &next)?;
            // First move reaching the maximum wins ties.
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, mv));
            }
        }

        best.map(|(_, mv)| mv).ok_or(Error::NoMovesAvailable)
    }
}

/// Guaranteed outcome for the player to move at `state`.
fn negamax<G: Game>(game: &G, state: &G::State) -> Result<Score, Error> {
    if game.is_over(state) {
        return Ok(terminal_score(game, state));
    }

    let mut best = LOSS - 1;
    for mv in game.possible_moves(state) {
        let next = game.apply(state, mv)?;
        let score = -negamax(game, &next)?;
        if score > best {
            best = score;
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellId, Move, Player, WIN};
    use crate::game::{GameResult, Stonehenge};

    fn mv(label: char) -> Move {
        Move::new(CellId::new(label))
    }

    #[test]
    fn test_root_value_size_one() {
        // The first player wins the size-1 board with perfect play from
        // any opening, so the root value is WIN.
        let game = Stonehenge::new(1, true).unwrap();
        assert_eq!(negamax(&game, game.state()).unwrap(), WIN);
    }

    #[test]
    fn test_best_move_size_one_opening() {
        // All three openings win; the tie-break picks the first in
        // generation order.
        let game = Stonehenge::new(1, true).unwrap();
        let chosen = RecursiveMinimax::new().best_move(&game).unwrap();
        assert_eq!(chosen, mv('A'));
    }

    #[test]
    fn test_forced_move() {
        let game = {
            let mut g = Stonehenge::new(1, true).unwrap();
            let s = g.apply(g.state(), mv('A')).unwrap();
            let s = g.apply(&s, mv('B')).unwrap();
            g.set_state(s);
            g
        };
        assert_eq!(RecursiveMinimax::new().best_move(&game).unwrap(), mv('C'));
    }

    #[test]
    fn test_terminal_position_has_no_move() {
        let mut game = Stonehenge::new(1, true).unwrap();
        for label in ['A', 'B', 'C'] {
            let s = game.apply(game.state(), mv(label)).unwrap();
            game.set_state(s);
        }
        assert!(game.is_over(game.state()));
        assert!(matches!(
            RecursiveMinimax::new().best_move(&game),
            Err(Error::NoMovesAvailable)
        ));
    }

    #[test]
    fn test_plays_itself_to_a_win() {
        // Engine vs engine on size 1 must terminate within the 3
        // available cells and report a winner consistent with the
        // captured-line counts.
        let mut game = Stonehenge::new(1, true).unwrap();
        let mut engine = RecursiveMinimax::new();
        let mut moves = 0;

        while !game.is_over(game.state()) {
            let chosen = engine.best_move(&game).unwrap();
            let next = game.apply(game.state(), chosen).unwrap();
            game.set_state(next);
            moves += 1;
            assert!(moves <= 3, "size-1 game must end within 3 moves");
        }

        let one = game.state().captured_count(Player::One);
        let two = game.state().captured_count(Player::Two);
        assert!(one > two);
        assert_eq!(game.result(game.state()), Some(GameResult::Winner(Player::One)));
    }
}
