//! Reference game implementations.
//!
//! - `piles`: split-a-pile game, played to exhaustion
//! - `tree`: explicit or randomly generated game trees, for testing the
//!   search against known values

pub mod piles;
pub mod tree;
