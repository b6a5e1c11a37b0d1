//! Cell identifiers, claim status, and moves.
//!
//! A cell is named by a single uppercase letter assigned in row-major
//! order by the board geometry builder. A move names an as-yet-unclaimed
//! cell.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A cell identifier: a single uppercase letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub char);

impl CellId {
    /// Create a new cell identifier.
    #[must_use]
    pub const fn new(label: char) -> Self {
        Self(label)
    }

    /// Get the raw letter.
    #[must_use]
    pub const fn raw(self) -> char {
        self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Claim status of a cell.
///
/// Ownership is monotonic: once claimed a cell never reverts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Not yet claimed by either player.
    Unclaimed,
    /// Claimed by the given player.
    Claimed(Player),
}

impl Owner {
    /// Check whether the cell is still open.
    #[must_use]
    pub const fn is_unclaimed(self) -> bool {
        matches!(self, Owner::Unclaimed)
    }

    /// Get the claiming player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Owner::Unclaimed => None,
            Owner::Claimed(p) => Some(p),
        }
    }
}

/// A move: the identifier of an unclaimed cell to claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move(CellId);

impl Move {
    /// Create a move naming the given cell.
    #[must_use]
    pub const fn new(cell: CellId) -> Self {
        Self(cell)
    }

    /// The cell this move claims.
    #[must_use]
    pub const fn cell(self) -> CellId {
        self.0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
