//! Search results and the root tie-break policy.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::rules::{Successor, Utility};

/// The successor chosen at the root, with its exact minimax value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision<M, S> {
    /// Move leading to the chosen successor.
    pub mv: M,
    /// State after the move.
    pub state: S,
    /// Minimax value of `state`, from the maximizing player's view.
    pub value: Utility,
}

impl<M, S> Decision<M, S> {
    pub fn new(successor: Successor<M, S>, value: Utility) -> Self {
        Self {
            mv: successor.mv,
            state: successor.state,
            value,
        }
    }
}

/// Picks the root successor that is best for `player`.
///
/// Successors must be offered in enumeration order. A later successor only
/// replaces the incumbent if it is strictly better, so ties go to the first.
pub(crate) struct RootSelector<M, S> {
    player: Player,
    best: Option<Decision<M, S>>,
}

impl<M, S> RootSelector<M, S> {
    pub(crate) fn new(player: Player) -> Self {
        Self { player, best: None }
    }

    /// Offer the next successor. Returns true if it became the incumbent.
    pub(crate) fn offer(&mut self, successor: Successor<M, S>, value: Utility) -> bool {
        let improves = match &self.best {
            None => true,
            Some(best) => self.player.prefers(value, best.value),
        };
        if improves {
            self.best = Some(Decision::new(successor, value));
        }
        improves
    }

    pub(crate) fn finish(self) -> Option<Decision<M, S>> {
        self.best
    }
}
