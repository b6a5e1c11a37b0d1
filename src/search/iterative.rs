//! Iterative minimax: recursion replaced by an explicit stack.
//!
//! Computes exactly the result of the recursive engine without touching
//! the native call stack. A LIFO worklist holds tree nodes awaiting
//! work, and every node follows a two-visit protocol:
//!
//! 1. First pop, non-terminal, no children yet: spawn one child per
//!    legal move, re-push self, then push every child.
//! 2. First pop, terminal: score from the terminal rule and resolve.
//! 3. Second pop (children exist): every child has already been popped
//!    and resolved — LIFO order guarantees descendants complete before
//!    an ancestor's revisit — so fold `max(-child.score)`.
//!
//! When the worklist drains, the root's children carry final scores and
//! the best root move falls out by the same first-maximum tie-break the
//! recursive engine uses.

use crate::core::Score;
use crate::error::Error;
use crate::game::Game;

use super::tree::{NodeId, SearchNode, SearchTree};
use super::{terminal_score, Strategy};

/// Full-tree minimax on an explicit worklist.
#[derive(Clone, Copy, Debug, Default)]
pub struct IterativeMinimax;

impl IterativeMinimax {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl<G: Game> Strategy<G> for IterativeMinimax {
    fn best_move(&mut self, game: &G) -> Result<G::Move, Error> {
        // Tree and worklist live only for this call.
        let mut tree: SearchTree<G::State, G::Move> = SearchTree::new(game.state().clone());
        let mut worklist: Vec<NodeId> = vec![tree.root()];

        while let Some(id) = worklist.pop() {
            let state = tree.get(id).state.clone();

            if game.is_over(&state) {
                tree.get_mut(id).score = Some(terminal_score(game, &state));
            } else if tree.get(id).is_expanded() {
                // Second visit: fold the children, sign-flipped.
                let folded = tree
                    .get(id)
                    .children
                    .iter()
                    .map(|&child| {
                        -tree
                            .get(child)
                            .score
                            .expect("children resolve before their parent's second visit")
                    })
                    .max()
                    .expect("expanded node has at least one child");
                tree.get_mut(id).score = Some(folded);
            } else {
                // First visit: expand, revisit self after the children.
                worklist.push(id);
                for mv in game.possible_moves(&state) {
                    let child_state = game.apply(&state, mv)?;
                    let child = tree.alloc(SearchNode::child(child_state, mv));
                    tree.get_mut(id).children.push(child);
                    worklist.push(child);
                }
            }
        }

        let mut best: Option<(Score, G::Move)> = None;
        for &child in &tree.get(tree.root()).children {
            let node = tree.get(child);
            let score = -node.score.expect("root children resolve before the drain");
            let mv = node
                .produced_by
                .expect("non-root nodes record their producing move");
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, mv));
            }
        }

        best.map(|(_, mv)| mv).ok_or(Error::NoMovesAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellId, Move, Player};
    use crate::game::{GameResult, Stonehenge};
    use crate::search::RecursiveMinimax;

    fn mv(label: char) -> Move {
        Move::new(CellId::new(label))
    }

    #[test]
    fn test_best_move_size_one_opening() {
        let game = Stonehenge::new(1, true).unwrap();
        assert_eq!(IterativeMinimax::new().best_move(&game).unwrap(), mv('A'));
    }

    #[test]
    fn test_forced_move() {
        let game = {
            let mut g = Stonehenge::new(1, true).unwrap();
            let s = g.apply(g.state(), mv('B')).unwrap();
            let s = g.apply(&s, mv('A')).unwrap();
            g.set_state(s);
            g
        };
        assert_eq!(IterativeMinimax::new().best_move(&game).unwrap(), mv('C'));
    }

    #[test]
    fn test_terminal_position_has_no_move() {
        let mut game = Stonehenge::new(1, true).unwrap();
        for label in ['A', 'B', 'C'] {
            let s = game.apply(game.state(), mv(label)).unwrap();
            game.set_state(s);
        }
        assert!(matches!(
            IterativeMinimax::new().best_move(&game),
            Err(Error::NoMovesAvailable)
        ));
    }

    #[test]
    fn test_agrees_with_recursive_size_one() {
        // Both engines share the tie-break, so they agree move-for-move
        // at every reachable position, not just on guaranteed outcome.
        let mut game = Stonehenge::new(1, true).unwrap();
        while !game.is_over(game.state()) {
            let recursive = RecursiveMinimax::new().best_move(&game).unwrap();
            let iterative = IterativeMinimax::new().best_move(&game).unwrap();
            assert_eq!(recursive, iterative);
            let next = game.apply(game.state(), iterative).unwrap();
            game.set_state(next);
        }
    }

    #[test]
    fn test_agrees_with_recursive_size_two_openings() {
        let game = Stonehenge::new(2, true).unwrap();
        let recursive = RecursiveMinimax::new().best_move(&game).unwrap();
        let iterative = IterativeMinimax::new().best_move(&game).unwrap();
        assert_eq!(recursive, iterative);
    }

    #[test]
    fn test_plays_itself_to_a_win() {
        let mut game = Stonehenge::new(1, true).unwrap();
        let mut engine = IterativeMinimax::new();
        let mut moves = 0;

        while !game.is_over(game.state()) {
            let chosen = engine.best_move(&game).unwrap();
            let next = game.apply(game.state(), chosen).unwrap();
            game.set_state(next);
            moves += 1;
            assert!(moves <= 3, "size-1 game must end within 3 moves");
        }

        assert_eq!(game.result(game.state()), Some(GameResult::Winner(Player::One)));
    }
}
