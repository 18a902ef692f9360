//! Root-parallel search.
//!
//! Each root successor is searched on its own rayon task with a full window,
//! so siblings never prune each other. Selection then walks the results in
//! enumeration order, which keeps decisions identical to the sequential
//! search while visiting at least as many nodes.

use rayon::prelude::*;

use crate::core::Player;
use crate::error::Result;
use crate::rules::{Game, INFINITY, NEG_INFINITY};

use super::config::Algorithm;
use super::decision::{Decision, RootSelector};
use super::stats::SearchStats;
use super::{alpha_beta, minimax};

/// Best move for `player` at `state`, evaluating root successors in parallel.
pub fn parallel_decision_for<G: Game>(
    game: &G,
    state: &G::State,
    player: Player,
    algorithm: Algorithm,
    stats: &mut SearchStats,
) -> Result<Option<Decision<G::Move, G::State>>> {
    stats.visit(0);
    if game.is_terminal(state) {
        return Ok(None);
    }

    let evaluated: Vec<_> = game
        .expand(state, 0)?
        .into_par_iter()
        .map(|successor| {
            let mut local = SearchStats::new();
            let value = match algorithm {
                Algorithm::Minimax => {
                    minimax::value_for(game, &successor.state, player.opponent(), 1, &mut local)
                }
                Algorithm::AlphaBeta => alpha_beta::value_for(
                    game,
                    &successor.state,
                    player.opponent(),
                    NEG_INFINITY,
                    INFINITY,
                    1,
                    &mut local,
                ),
            };
            (successor, value, local)
        })
        .collect();

    let mut selector = RootSelector::new(player);
    for (successor, value, local) in evaluated {
        stats.merge(&local);
        selector.offer(successor, value?);
    }
    Ok(selector.finish())
}
