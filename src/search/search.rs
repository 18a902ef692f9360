//! Search context tying a game to a configuration.

use std::time::Instant;

use crate::core::Player;
use crate::error::Result;
use crate::rules::Game;

use super::alpha_beta::alpha_beta_decision_for;
use super::config::{Algorithm, SearchConfig};
use super::decision::Decision;
use super::minimax::minimax_decision_for;
use super::stats::SearchStats;

/// Decision for a game `G`: its move and state types bundled.
pub type GameDecision<G> = Decision<<G as Game>::Move, <G as Game>::State>;

/// Main search context.
///
/// Generic over the game type. Owns the game and the configuration, and
/// keeps the statistics of the most recent decision.
pub struct GameSearch<G: Game> {
    /// The game rules.
    game: G,

    /// Search configuration.
    config: SearchConfig,

    /// Statistics of the last decision.
    stats: SearchStats,
}

impl<G: Game> GameSearch<G> {
    /// Create a new search context.
    pub fn new(game: G, config: SearchConfig) -> Self {
        Self {
            game,
            config,
            stats: SearchStats::default(),
        }
    }

    /// Best move for the maximizing player using the configured algorithm.
    ///
    /// Returns `Ok(None)` if `state` is terminal.
    pub fn decide(&mut self, state: &G::State) -> Result<Option<GameDecision<G>>> {
        self.decide_for(state, Player::Max)
    }

    /// Best move for `player` using the configured algorithm.
    pub fn decide_for(
        &mut self,
        state: &G::State,
        player: Player,
    ) -> Result<Option<GameDecision<G>>> {
        self.run(state, player, self.config.algorithm)
    }

    /// Best move for the maximizing player by exhaustive minimax.
    pub fn minimax_decision(&mut self, state: &G::State) -> Result<Option<GameDecision<G>>> {
        self.run(state, Player::Max, Algorithm::Minimax)
    }

    /// Best move for the maximizing player by alpha-beta search.
    pub fn alpha_beta_decision(&mut self, state: &G::State) -> Result<Option<GameDecision<G>>> {
        self.run(state, Player::Max, Algorithm::AlphaBeta)
    }

    /// Play the game out with the engine moving for both sides.
    ///
    /// `first` moves at `state`; sides alternate after every decision. The
    /// returned line is empty if `state` is already terminal, and its last
    /// state is always terminal.
    pub fn play_out(&mut self, state: &G::State, first: Player) -> Result<Vec<GameDecision<G>>> {
        let mut line = Vec::new();
        let mut current = state.clone();
        let mut player = first;

        while let Some(decision) = self.decide_for(&current, player)? {
            current = decision.state.clone();
            line.push(decision);
            player = player.opponent();
        }

        log::debug!("play-out finished after {} plies at {:?}", line.len(), current);
        Ok(line)
    }

    fn run(
        &mut self,
        state: &G::State,
        player: Player,
        algorithm: Algorithm,
    ) -> Result<Option<GameDecision<G>>> {
        let start = Instant::now();
        self.stats.reset();

        let result = if self.config.parallel_root {
            self.run_parallel(state, player, algorithm)
        } else {
            match algorithm {
                Algorithm::Minimax => minimax_decision_for(&self.game, state, player, &mut self.stats),
                Algorithm::AlphaBeta => {
                    alpha_beta_decision_for(&self.game, state, player, &mut self.stats)
                }
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;

        if let Ok(Some(decision)) = &result {
            log::debug!(
                "{:?} for {}: {:?} (value {}, {} nodes, {} cutoffs, {}us)",
                algorithm,
                player,
                decision.mv,
                decision.value,
                self.stats.nodes_visited,
                self.stats.cutoffs,
                self.stats.time_us,
            );
        }
        result
    }

    #[cfg(feature = "parallel")]
    fn run_parallel(
        &mut self,
        state: &G::State,
        player: Player,
        algorithm: Algorithm,
    ) -> Result<Option<GameDecision<G>>> {
        super::parallel::parallel_decision_for(&self.game, state, player, algorithm, &mut self.stats)
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel(
        &mut self,
        state: &G::State,
        player: Player,
        algorithm: Algorithm,
    ) -> Result<Option<GameDecision<G>>> {
        log::warn!("root parallelism requested without the `parallel` feature; searching sequentially");
        match algorithm {
            Algorithm::Minimax => minimax_decision_for(&self.game, state, player, &mut self.stats),
            Algorithm::AlphaBeta => alpha_beta_decision_for(&self.game, state, player, &mut self.stats),
        }
    }

    /// Get statistics of the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the game reference.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
