//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Which value propagation the search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Exhaustive minimax. Visits every node; the ground truth.
    Minimax,
    /// Minimax with alpha-beta pruning. Same decisions, fewer nodes.
    #[default]
    AlphaBeta,
}

/// Search configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Value propagation used by `GameSearch::decide`.
    pub algorithm: Algorithm,

    /// Evaluate root successors concurrently.
    /// Decisions are unchanged; alpha-beta loses pruning between root
    /// siblings. Needs the `parallel` feature.
    pub parallel_root: bool,
}

impl SearchConfig {
    /// Create a new config with the given algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Create a new config with root parallelism switched on or off.
    pub fn with_parallel_root(mut self, parallel: bool) -> Self {
        self.parallel_root = parallel;
        self
    }
}
