//! Game abstraction.
//!
//! Games implement `Game` to define:
//! - The legal successors of each state, in a fixed order
//! - Which states are terminal
//! - The utility of terminal states for the maximizing player
//!
//! The search engine calls into `Game` but never interprets
//! game-specific concepts directly.

pub mod game;

pub use game::{Game, Successor, Utility, INFINITY, NEG_INFINITY};
