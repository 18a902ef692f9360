//! Exhaustive minimax.
//!
//! Every node of the tree is visited, so the values computed here are the
//! ground truth the pruned search has to reproduce.

use crate::core::Player;
use crate::error::Result;
use crate::rules::{Game, Utility};

use super::decision::{Decision, RootSelector};
use super::stats::SearchStats;

/// Best move for the maximizing player at `state`.
///
/// Returns `Ok(None)` if `state` is terminal.
pub fn minimax_decision<G: Game>(
    game: &G,
    state: &G::State,
    stats: &mut SearchStats,
) -> Result<Option<Decision<G::Move, G::State>>> {
    minimax_decision_for(game, state, Player::Max, stats)
}

/// Best move for `player` at `state`.
pub fn minimax_decision_for<G: Game>(
    game: &G,
    state: &G::State,
    player: Player,
    stats: &mut SearchStats,
) -> Result<Option<Decision<G::Move, G::State>>> {
    stats.visit(0);
    if game.is_terminal(state) {
        return Ok(None);
    }

    let mut selector = RootSelector::new(player);
    for successor in game.expand(state, 0)? {
        let value = value_for(game, &successor.state, player.opponent(), 1, stats)?;
        selector.offer(successor, value);
    }
    Ok(selector.finish())
}

/// Minimax value of `state` with `to_move` about to play.
pub fn value_for<G: Game>(
    game: &G,
    state: &G::State,
    to_move: Player,
    depth: usize,
    stats: &mut SearchStats,
) -> Result<Utility> {
    match to_move {
        Player::Max => max_value(game, state, depth, stats),
        Player::Min => min_value(game, state, depth, stats),
    }
}

fn max_value<G: Game>(
    game: &G,
    state: &G::State,
    depth: usize,
    stats: &mut SearchStats,
) -> Result<Utility> {
    stats.visit(depth);
    if game.is_terminal(state) {
        stats.terminal_evaluations += 1;
        return game.utility(state);
    }

    let mut best = Player::Max.worst();
    for successor in game.expand(state, depth)? {
        best = best.max(min_value(game, &successor.state, depth + 1, stats)?);
    }
    Ok(best)
}

fn min_value<G: Game>(
    game: &G,
    state: &G::State,
    depth: usize,
    stats: &mut SearchStats,
) -> Result<Utility> {
    stats.visit(depth);
    if game.is_terminal(state) {
        stats.terminal_evaluations += 1;
        return game.utility(state);
    }

    let mut best = Player::Min.worst();
    for successor in game.expand(state, depth)? {
        best = best.min(max_value(game, &successor.state, depth + 1, stats)?);
    }
    Ok(best)
}
