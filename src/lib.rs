//! # game-search
//!
//! Adversarial game-tree search for two-player, zero-sum,
//! perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The search knows nothing about any game. Games
//!    plug in through the `Game` trait.
//!
//! 2. **Explicit Turn Order**: The side to move is threaded through the
//!    recursion as a `Player`, never inferred from the shape of a state.
//!
//! 3. **Deterministic**: Ties between equally valued moves go to the first
//!    successor in the game's enumeration order, so equal inputs always give
//!    equal decisions.
//!
//! ## Architecture
//!
//! - **Minimax**: Exhaustive search; the reference for every other result.
//!
//! - **Alpha-beta**: Prunes subtrees that cannot change the decision and
//!   returns exactly what minimax returns.
//!
//! - **Root parallelism** (feature `parallel`): Root successors searched
//!   concurrently with rayon, decisions unchanged.
//!
//! ## Modules
//!
//! - `core`: Players and deterministic RNG
//! - `rules`: The `Game` trait
//! - `search`: Minimax, alpha-beta and the `GameSearch` context
//! - `games`: Pile-splitting game and explicit game trees
//! - `error`: Error taxonomy

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameRng, Player};

pub use crate::error::{Error, Result};

pub use crate::rules::{Game, Successor, Utility, INFINITY, NEG_INFINITY};

pub use crate::search::{
    alpha_beta_decision, alpha_beta_decision_for, minimax_decision, minimax_decision_for,
    Algorithm, Decision, GameDecision, GameSearch, SearchConfig, SearchStats,
};

pub use crate::games::piles::{PileGame, PileState, Split};
pub use crate::games::tree::{NodeId, RandomTreeConfig, TreeGame, TreeNode};
