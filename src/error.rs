//! Error types for game-search.
//!
//! Every error here is a contract violation by a `Game` implementation or by
//! its caller. None of them is retryable, and the search never recovers from
//! one internally.

use std::fmt::Debug;

use thiserror::Error;

/// Errors raised by games and by the search engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A state was used in a way its game does not define, e.g. asking for
    /// the utility of a non-terminal state.
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    /// A non-terminal state has no successors.
    #[error("malformed game: non-terminal state at depth {depth} has no successors: {state}")]
    MalformedGame { depth: usize, state: String },
}

impl Error {
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Error::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn malformed_game(depth: usize, state: &impl Debug) -> Self {
        Error::MalformedGame {
            depth,
            state: format!("{state:?}"),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
