//! Core types shared by the rules and search layers.
//!
//! This module is game-agnostic: it knows which side is to move and how to
//! draw reproducible random numbers, nothing about any particular game.

pub mod player;
pub mod rng;

pub use player::Player;
pub use rng::GameRng;
