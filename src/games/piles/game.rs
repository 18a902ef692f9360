//! Pile game rules and state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Player;
use crate::error::{Error, Result};
use crate::rules::{Game, Successor, Utility};

/// Piles up to this size cannot be split.
const MAX_UNSPLITTABLE: u32 = 2;

/// Split of one pile into two unequal, non-empty piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Split {
    /// Size of the pile being split.
    pub pile: u32,
    /// Larger resulting pile.
    pub larger: u32,
    /// Smaller resulting pile.
    pub smaller: u32,
}

impl Split {
    pub fn new(pile: u32, larger: u32, smaller: u32) -> Self {
        Self {
            pile,
            larger,
            smaller,
        }
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} + {}", self.pile, self.larger, self.smaller)
    }
}

/// Pile sizes in play order, and the side to move.
///
/// Pile order is part of the state: a split removes the first pile of the
/// chosen size and appends the larger part, then the smaller.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileState {
    /// Inline for up to 8 piles; longer games spill to the heap.
    piles: SmallVec<[u32; 8]>,
    to_move: Player,
}

impl PileState {
    /// Starting position with MAX to move.
    ///
    /// Terminal states are scored against the side left to move, not by
    /// final pile-count parity. The two agree only when the pile count and
    /// the mover start in step, e.g. a single pile with MAX to move. From
    /// `new(&[5, 3])` an even final count is a MAX loss.
    pub fn new(piles: &[u32]) -> Self {
        Self::with_mover(piles, Player::Max)
    }

    /// Position with an explicit side to move. See [`PileState::new`] for
    /// how terminal states are scored.
    pub fn with_mover(piles: &[u32], to_move: Player) -> Self {
        Self {
            piles: SmallVec::from_slice(piles),
            to_move,
        }
    }

    #[must_use]
    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    /// Apply a split chosen outside the search, e.g. typed in by a person.
    ///
    /// Rejects splits of absent piles, splits into equal or empty parts and
    /// parts that do not add up to the pile.
    pub fn apply(&self, split: &Split) -> Result<PileState> {
        let Split {
            pile,
            larger,
            smaller,
        } = *split;

        let Some(index) = self.piles.iter().position(|&p| p == pile) else {
            return Err(Error::invalid_state(format!("no pile of size {pile} in {self}")));
        };
        if larger == 0 || smaller == 0 {
            return Err(Error::invalid_state(format!("empty part in split {split}")));
        }
        if larger.checked_add(smaller) != Some(pile) {
            return Err(Error::invalid_state(format!("parts of {split} do not sum to {pile}")));
        }
        if larger == smaller {
            return Err(Error::invalid_state(format!("equal parts in split {split}")));
        }

        let (larger, smaller) = (larger.max(smaller), larger.min(smaller));
        Ok(self.split_at(index, larger, smaller))
    }

    fn split_at(&self, index: usize, larger: u32, smaller: u32) -> PileState {
        let mut piles = self.piles.clone();
        piles.remove(index);
        piles.push(larger);
        piles.push(smaller);
        PileState {
            piles,
            to_move: self.to_move.opponent(),
        }
    }
}

impl std::fmt::Display for PileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({} to move)", self.piles.as_slice(), self.to_move)
    }
}

/// Pile game rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct PileGame;

impl Game for PileGame {
    type State = PileState;
    type Move = Split;

    fn is_terminal(&self, state: &PileState) -> bool {
        state.piles.iter().all(|&p| p <= MAX_UNSPLITTABLE)
    }

    fn utility(&self, state: &PileState) -> Result<Utility> {
        if !self.is_terminal(state) {
            return Err(Error::invalid_state(format!("utility of unfinished game {state}")));
        }
        // Whoever is left to move has no split and loses.
        Ok(match state.to_move {
            Player::Max => -1,
            Player::Min => 1,
        })
    }

    fn successors(&self, state: &PileState) -> Result<Vec<Successor<Split, PileState>>> {
        let mut successors = Vec::new();
        let mut seen: SmallVec<[u32; 8]> = SmallVec::new();

        for (index, &pile) in state.piles.iter().enumerate() {
            // Equal piles split into equal states; the first stands for all.
            if seen.contains(&pile) {
                continue;
            }
            seen.push(pile);

            let (mut larger, mut smaller) = (pile.saturating_sub(1), 1);
            while smaller < larger {
                successors.push(Successor::new(
                    Split::new(pile, larger, smaller),
                    state.split_at(index, larger, smaller),
                ));
                larger -= 1;
                smaller += 1;
            }
        }

        Ok(successors)
    }
}
