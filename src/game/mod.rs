//! The `Game` trait and the Stonehenge variant.
//!
//! Strategies speak only the [`Game`] trait: current state, legal moves,
//! move application, terminal and result queries, move parsing. A game
//! variant that omits a capability simply fails to implement the trait —
//! interface conformance is checked at compile time rather than with
//! runtime "not implemented" stubs.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::board::BoardLayout;
use crate::core::{CellId, Move, Player};
use crate::error::Error;
use crate::state::StonehengeState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Equal captured-line counts; no winner.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Draw => false,
        }
    }
}

/// A two-player, perfect-information, zero-sum game.
///
/// Terminal and result queries take an explicit state — not necessarily
/// the wrapper's current one — so a search can evaluate speculative
/// positions without touching the live game.
pub trait Game {
    /// The state snapshot type. Cloning must be cheap; searches clone
    /// freely while branching.
    type State: Clone;

    /// The move type.
    type Move: Copy + Eq + std::fmt::Debug;

    /// The current state.
    fn state(&self) -> &Self::State;

    /// Replace the current state (after a move is chosen and applied).
    fn set_state(&mut self, state: Self::State);

    /// All legal moves at `state`, in a stable deterministic order.
    /// Empty exactly when the game is over at `state`.
    fn possible_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Apply a move to `state`, producing the successor.
    fn apply(&self, state: &Self::State, mv: Self::Move) -> Result<Self::State, Error>;

    /// Whether the game is over at `state`.
    fn is_over(&self, state: &Self::State) -> bool;

    /// The outcome at `state`: `None` while the game is running.
    fn result(&self, state: &Self::State) -> Option<GameResult>;

    /// The player to move at `state`.
    fn to_move(&self, state: &Self::State) -> Player;

    /// Parse text into a currently-legal move, or `None`. Never fails
    /// loudly; callers branch on validity.
    fn str_to_move(&self, text: &str) -> Option<Self::Move>;

    /// Human-readable rules summary.
    fn instructions(&self) -> &'static str;

    /// Whether `player` has won the game in its current state.
    ///
    /// False while the game is running and on a tie.
    fn is_winner(&self, player: Player) -> bool {
        self.result(self.state())
            .is_some_and(|r| r.is_winner(player))
    }
}

/// The Stonehenge game: players alternately claim cells; a scoring line
/// is captured by the first strict-majority holder; holding half of all
/// lines ends the game.
#[derive(Clone, Debug)]
pub struct Stonehenge {
    layout: Arc<BoardLayout>,
    state: StonehengeState,
    p1_starts: bool,
}

impl Stonehenge {
    /// Create a game on a board of the given size.
    pub fn new(size: u32, p1_starts: bool) -> Result<Self, Error> {
        let layout = Arc::new(BoardLayout::new(size)?);
        let first = if p1_starts { Player::One } else { Player::Two };
        let state = StonehengeState::new(Arc::clone(&layout), first);
        Ok(Self {
            layout,
            state,
            p1_starts,
        })
    }

    /// The board geometry.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Whether Player One moves first.
    #[must_use]
    pub fn p1_starts(&self) -> bool {
        self.p1_starts
    }
}

impl Game for Stonehenge {
    type State = StonehengeState;
    type Move = Move;

    fn state(&self) -> &StonehengeState {
        &self.state
    }

    fn set_state(&mut self, state: StonehengeState) {
        self.state = state;
    }

    fn possible_moves(&self, state: &StonehengeState) -> Vec<Move> {
        state.possible_moves()
    }

    fn apply(&self, state: &StonehengeState, mv: Move) -> Result<StonehengeState, Error> {
        state.apply(mv)
    }

    fn is_over(&self, state: &StonehengeState) -> bool {
        state.is_over()
    }

    fn result(&self, state: &StonehengeState) -> Option<GameResult> {
        if !state.is_over() {
            return None;
        }
        let one = state.captured_count(Player::One);
        let two = state.captured_count(Player::Two);
        Some(match one.cmp(&two) {
            Ordering::Greater => GameResult::Winner(Player::One),
            Ordering::Less => GameResult::Winner(Player::Two),
            Ordering::Equal => GameResult::Draw,
        })
    }

    fn to_move(&self, state: &StonehengeState) -> Player {
        state.turn()
    }

    fn str_to_move(&self, text: &str) -> Option<Move> {
        let mut chars = text.trim().chars();
        let label = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let mv = Move::new(CellId::new(label.to_ascii_uppercase()));
        self.state.is_valid_move(mv).then_some(mv)
    }

    fn instructions(&self) -> &'static str {
        "Players take turns claiming open cells by letter. A scoring line \
         is captured by the first player to claim a strict majority of its \
         cells and never changes hands. The first player to capture at \
         least half of all scoring lines wins."
    }
}
