//! Explicit game trees.
//!
//! Each node is either a leaf carrying a utility or a branch listing its
//! children in move order. Trees can be written by hand, to pin down exact
//! search behaviour, or generated from a seed, to compare algorithms across
//! many irregular shapes.

mod game;

pub use game::{NodeId, RandomTreeConfig, TreeGame, TreeNode};
