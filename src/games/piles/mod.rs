//! Pile-splitting game.
//!
//! A take on Grundy's game:
//! - Play starts from one or more piles of tokens
//! - On your turn: split one pile into two non-empty piles of unequal size
//! - Piles of 1 or 2 can no longer be split
//! - The player left without a legal split loses
//!
//! From a single pile with MAX to move, the outcome equals the parity rule:
//! an even final pile count is a MAX win.

mod game;

pub use game::{PileGame, PileState, Split};
