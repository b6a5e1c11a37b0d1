//! Immutable game state and move application.
//!
//! ## StonehengeState
//!
//! A snapshot of the game at one point in time: whose turn it is, who
//! owns each cell, and which scoring lines have been captured. Applying
//! a move never mutates a state — it returns a new one. Cell ownership
//! and line status live in `im` persistent vectors, so the "copy" a
//! transition makes is O(1) structural sharing; a search tree can hold
//! every sibling of a position without deep copies or aliasing hazards.
//!
//! ## Capture rule
//!
//! A line of `c` cells is captured by the first player whose claimed-cell
//! count in it strictly exceeds `c / 2`. An exact half of an even-length
//! line does not capture. Capture is irreversible.
//!
//! ## Game over
//!
//! The game ends as soon as either player has captured at least
//! `ceil(T / 2)` of the `T` scoring lines, or when every cell has been
//! claimed. The winner is the player holding more captured lines; equal
//! counts are a draw.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use im::Vector;

use crate::board::{BoardLayout, LineSpec};
use crate::core::{CellId, Move, Owner, Player, Score, LOSS, WIN};
use crate::error::Error;

/// Capture status of one scoring line.
///
/// Transitions at most once, from `Open` to `CapturedBy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineStatus {
    /// Not yet captured by either player.
    Open,
    /// Captured; never changes again.
    CapturedBy(Player),
}

impl LineStatus {
    /// Check whether the line is still open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, LineStatus::Open)
    }

    /// Get the capturing player, if any.
    #[must_use]
    pub const fn captor(self) -> Option<Player> {
        match self {
            LineStatus::Open => None,
            LineStatus::CapturedBy(p) => Some(p),
        }
    }
}

/// The state of a Stonehenge game at one point in time.
#[derive(Clone, Debug)]
pub struct StonehengeState {
    layout: Arc<BoardLayout>,
    turn: Player,
    owners: Vector<Owner>,
    lines: Vector<LineStatus>,
}

impl StonehengeState {
    /// Create the initial state on the given board with `first` to move.
    #[must_use]
    pub fn new(layout: Arc<BoardLayout>, first: Player) -> Self {
        let owners = layout.cells().iter().map(|_| Owner::Unclaimed).collect();
        let lines = layout.lines().iter().map(|_| LineStatus::Open).collect();
        Self {
            layout,
            turn: first,
            owners,
            lines,
        }
    }

    /// The player to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The board geometry this state lives on.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Ownership of a cell, or `None` for an unknown identifier.
    #[must_use]
    pub fn owner(&self, cell: CellId) -> Option<Owner> {
        self.layout.index_of(cell).map(|i| self.owners[i])
    }

    /// Capture status of the line at `index` in layout order.
    #[must_use]
    pub fn line_status(&self, index: usize) -> LineStatus {
        self.lines[index]
    }

    /// Capture statuses of all lines, in layout order.
    pub fn line_statuses(&self) -> impl Iterator<Item = LineStatus> + '_ {
        self.lines.iter().copied()
    }

    /// Number of lines the given player has captured.
    #[must_use]
    pub fn captured_count(&self, player: Player) -> usize {
        self.lines
            .iter()
            .filter(|s| s.captor() == Some(player))
            .count()
    }

    /// Whether the game is over: either player holds at least half of all
    /// scoring lines (`ceil(T / 2)`), or no open cells remain. A drained
    /// board can finish below the threshold when enough even-length lines
    /// split evenly.
    #[must_use]
    pub fn is_over(&self) -> bool {
        let need = self.layout.lines_to_win();
        self.captured_count(Player::One) >= need
            || self.captured_count(Player::Two) >= need
            || self.owners.iter().all(|o| !o.is_unclaimed())
    }

    /// All legal moves: every unclaimed cell, in row order then intra-row
    /// order. Empty exactly when the game is over.
    #[must_use]
    pub fn possible_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.layout
            .rows()
            .iter()
            .flatten()
            .filter(|&&i| self.owners[i].is_unclaimed())
            .map(|&i| Move::new(self.layout.cell(i)))
            .collect()
    }

    /// Whether `mv` is legal in this state.
    #[must_use]
    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.possible_moves().contains(&mv)
    }

    /// Apply a move, producing the successor state.
    ///
    /// The named cell is claimed for the player to move, the turn flips,
    /// and every still-open line is re-evaluated for capture. Captured
    /// lines are left untouched. Returns [`Error::InvalidMove`] if the
    /// cell is unknown, already claimed, or the game is over.
    pub fn apply(&self, mv: Move) -> Result<Self, Error> {
        let index = self
            .layout
            .index_of(mv.cell())
            .ok_or(Error::InvalidMove(mv.cell()))?;
        if self.is_over() || !self.owners[index].is_unclaimed() {
            return Err(Error::InvalidMove(mv.cell()));
        }

        let mut owners = self.owners.clone();
        owners.set(index, Owner::Claimed(self.turn));

        let mut lines = self.lines.clone();
        for (i, spec) in self.layout.lines().iter().enumerate() {
            if !lines[i].is_open() {
                continue;
            }
            if let Some(captor) = line_captor(spec, &owners) {
                lines.set(i, LineStatus::CapturedBy(captor));
            }
        }

        Ok(Self {
            layout: Arc::clone(&self.layout),
            turn: self.turn.opponent(),
            owners,
            lines,
        })
    }

    /// A cheap estimate of the best outcome the player to move can
    /// guarantee, in `[LOSS, WIN]`.
    ///
    /// Not a full search: a terminal position is a loss for the mover;
    /// any move that immediately ends the game counts as a win (applying
    /// a move always hands the turn over, so the mover is the one who
    /// ended it); otherwise the estimate is the negation of this function
    /// on the first legal move's successor only. Suitable for move
    /// ordering, not for exact evaluation.
    #[must_use]
    pub fn rough_outcome(&self) -> Score {
        let moves = self.possible_moves();
        if moves.is_empty() {
            return LOSS;
        }
        for &mv in &moves {
            let next = self.apply(mv).expect("moves from possible_moves are legal");
            if next.possible_moves().is_empty() {
                return WIN;
            }
        }
        let next = self
            .apply(moves[0])
            .expect("moves from possible_moves are legal");
        -next.rough_outcome()
    }
}

/// The player holding a strict majority of a line's cells, if any.
fn line_captor(spec: &LineSpec, owners: &Vector<Owner>) -> Option<Player> {
    let mut counts = [0usize; 2];
    for &cell in &spec.cells {
        if let Owner::Claimed(p) = owners[cell] {
            counts[p.index()] += 1;
        }
    }
    let total = spec.cells.len();
    if counts[Player::One.index()] * 2 > total {
        Some(Player::One)
    } else if counts[Player::Two.index()] * 2 > total {
        Some(Player::Two)
    } else {
        None
    }
}

// Equality and hashing cover turn, ownership, and line status — not the
// shared layout — so states are usable as memoization keys.
impl PartialEq for StonehengeState {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn && self.owners == other.owners && self.lines == other.lines
    }
}

impl Eq for StonehengeState {}

impl Hash for StonehengeState {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.turn.hash(hasher);
        for owner in &self.owners {
            owner.hash(hasher);
        }
        for line in &self.lines {
            line.hash(hasher);
        }
    }
}
