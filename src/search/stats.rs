//! Search statistics for diagnostics and pruning comparisons.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, root included.
    pub nodes_visited: u64,

    /// Terminal states whose utility was read.
    pub terminal_evaluations: u64,

    /// Alpha and beta cutoffs taken.
    pub cutoffs: u64,

    /// Deepest ply reached (root = 0).
    pub max_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record entry into a node at `depth`.
    pub fn visit(&mut self, depth: usize) {
        self.nodes_visited += 1;
        let depth = depth as u32;
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    /// Fold in counters gathered by another worker.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_visited += other.nodes_visited;
        self.terminal_evaluations += other.terminal_evaluations;
        self.cutoffs += other.cutoffs;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.time_us += other.time_us;
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
