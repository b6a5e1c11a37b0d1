//! Player identification for the two-player zero-sum model.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// The game model is strictly two-player and zero-sum; there is no
/// N-player generality here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The player who moves first by default.
    One,
    /// The second player.
    Two,
}

impl Player {
    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Get a 0-based index, for per-player arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "p1"),
            Player::Two => write!(f, "p2"),
        }
    }
}
