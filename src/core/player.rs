//! The two sides of a zero-sum game.
//!
//! ## Player
//!
//! `Max` wants the utility as high as possible, `Min` as low as possible.
//! The search threads the side to move through its recursion explicitly:
//! the root belongs to whichever side the caller names, and each ply below
//! flips it.

use serde::{Deserialize, Serialize};

use crate::rules::{Utility, INFINITY, NEG_INFINITY};

/// Side to move at a node of the game tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The maximizing player. Utilities are reported from this side's view.
    Max,
    /// The minimizing player.
    Min,
}

impl Player {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// The value this side starts from before seeing any successor.
    #[must_use]
    pub const fn worst(self) -> Utility {
        match self {
            Player::Max => NEG_INFINITY,
            Player::Min => INFINITY,
        }
    }

    /// True if `candidate` is strictly better than `incumbent` for this side.
    ///
    /// Strictness is what keeps the first of several equal values.
    #[must_use]
    pub fn prefers(self, candidate: Utility, incumbent: Utility) -> bool {
        match self {
            Player::Max => candidate > incumbent,
            Player::Min => candidate < incumbent,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Max => write!(f, "MAX"),
            Player::Min => write!(f, "MIN"),
        }
    }
}
