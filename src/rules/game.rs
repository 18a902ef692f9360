//! `Game` trait for two-player, zero-sum, perfect-information games.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Outcome value of a terminal state, from the maximizing player's view.
///
/// Positive favours `Max`, negative favours `Min`, zero is a draw.
pub type Utility = i64;

/// Upper search bound. Game utilities must stay strictly below it.
pub const INFINITY: Utility = Utility::MAX;

/// Lower search bound. Game utilities must stay strictly above it.
pub const NEG_INFINITY: Utility = Utility::MIN;

/// A legal transition: the move taken and the state it produces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Successor<M, S> {
    pub mv: M,
    pub state: S,
}

impl<M, S> Successor<M, S> {
    pub fn new(mv: M, state: S) -> Self {
        Self { mv, state }
    }
}

/// Rules of a game, as seen by the search engine.
///
/// ## Implementation Notes
///
/// - `is_terminal`: Must be pure
/// - `utility`: Only defined on terminal states; return
///   [`Error::InvalidState`] otherwise
/// - `successors`: Finite, and deterministic: equal states must yield equal
///   sequences. Order matters because ties go to the first successor.
/// - The search may share a game and its states across worker threads, hence
///   the `Sync`/`Send` bounds.
pub trait Game: Sync {
    /// One configuration of the game world.
    type State: Clone + PartialEq + Debug + Send + Sync;

    /// Label identifying the transition that produced a successor.
    type Move: Clone + PartialEq + Debug + Send + Sync;

    /// True iff no further moves are possible or the outcome is decided.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Utility of a terminal state for the maximizing player.
    fn utility(&self, state: &Self::State) -> Result<Utility>;

    /// All legal transitions from `state`, in enumeration order.
    fn successors(&self, state: &Self::State) -> Result<Vec<Successor<Self::Move, Self::State>>>;

    // === Convenience Methods ===

    /// Successors of a non-terminal state the search is about to expand.
    ///
    /// Fails with [`Error::MalformedGame`] rather than letting an empty
    /// successor list pass for a win, loss or draw.
    fn expand(
        &self,
        state: &Self::State,
        depth: usize,
    ) -> Result<Vec<Successor<Self::Move, Self::State>>> {
        let successors = self.successors(state)?;
        if successors.is_empty() {
            return Err(Error::malformed_game(depth, state));
        }
        Ok(successors)
    }
}
