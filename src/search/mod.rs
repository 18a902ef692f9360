//! Adversarial game-tree search.
//!
//! ## Overview
//!
//! Two value propagations over any [`Game`](crate::rules::Game):
//!
//! - **Minimax**: visits every node; the reference result
//! - **Alpha-beta**: prunes subtrees that cannot change the decision,
//!   returning exactly what minimax returns
//!
//! Both pick, among equally valued root successors, the first one in the
//! game's enumeration order. With the `parallel` feature the root successors
//! can be evaluated concurrently without changing any decision.
//!
//! ## Usage
//!
//! ```rust
//! use game_search::games::piles::{PileGame, PileState};
//! use game_search::search::{GameSearch, SearchConfig};
//!
//! let mut search = GameSearch::new(PileGame, SearchConfig::default());
//! let decision = search.decide(&PileState::new(&[6])).unwrap().unwrap();
//!
//! assert_eq!((decision.mv.larger, decision.mv.smaller), (4, 2));
//! assert_eq!(decision.value, 1);
//! ```
//!
//! The free functions in [`minimax`] and [`alpha_beta`] take the game and a
//! [`SearchStats`] explicitly, for callers that do not want a context.

pub mod alpha_beta;
pub mod config;
pub mod decision;
pub mod minimax;
#[cfg(feature = "parallel")]
pub mod parallel;
#[allow(clippy::module_inception)]
pub mod search;
pub mod stats;

// Re-export main types
pub use alpha_beta::{alpha_beta_decision, alpha_beta_decision_for};
pub use config::{Algorithm, SearchConfig};
pub use decision::Decision;
pub use minimax::{minimax_decision, minimax_decision_for};
pub use search::{GameDecision, GameSearch};
pub use stats::SearchStats;
