//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the best value the maximizer can already guarantee on the path
//! to the root, `beta` the best the minimizer can. A node whose running best
//! crosses the opposing bound cannot affect the decision, so its remaining
//! successors are skipped.
//!
//! Pruning changes which nodes are visited, never the decision: for any
//! finite tree this returns the same move and value as
//! [`minimax_decision`](super::minimax::minimax_decision).

use crate::core::Player;
use crate::error::Result;
use crate::rules::{Game, Utility, INFINITY, NEG_INFINITY};

use super::decision::{Decision, RootSelector};
use super::stats::SearchStats;

/// Best move for the maximizing player at `state`.
///
/// Returns `Ok(None)` if `state` is terminal.
pub fn alpha_beta_decision<G: Game>(
    game: &G,
    state: &G::State,
    stats: &mut SearchStats,
) -> Result<Option<Decision<G::Move, G::State>>> {
    alpha_beta_decision_for(game, state, Player::Max, stats)
}

/// Best move for `player` at `state`.
///
/// Every root successor is evaluated. After each one the root tightens its
/// own bound, so a later successor can only come back with an exact value if
/// it is strictly better than the incumbent.
pub fn alpha_beta_decision_for<G: Game>(
    game: &G,
    state: &G::State,
    player: Player,
    stats: &mut SearchStats,
) -> Result<Option<Decision<G::Move, G::State>>> {
    stats.visit(0);
    if game.is_terminal(state) {
        return Ok(None);
    }

    let mut alpha = NEG_INFINITY;
    let mut beta = INFINITY;
    let mut selector = RootSelector::new(player);
    for successor in game.expand(state, 0)? {
        let value = value_for(game, &successor.state, player.opponent(), alpha, beta, 1, stats)?;
        selector.offer(successor, value);
        match player {
            Player::Max => alpha = alpha.max(value),
            Player::Min => beta = beta.min(value),
        }
    }
    Ok(selector.finish())
}

/// Alpha-beta value of `state` with `to_move` about to play.
///
/// Exact when the true value lies strictly inside `(alpha, beta)`; otherwise
/// a bound on the far side of the window.
pub fn value_for<G: Game>(
    game: &G,
    state: &G::State,
    to_move: Player,
    alpha: Utility,
    beta: Utility,
    depth: usize,
    stats: &mut SearchStats,
) -> Result<Utility> {
    match to_move {
        Player::Max => max_value(game, state, alpha, beta, depth, stats),
        Player::Min => min_value(game, state, alpha, beta, depth, stats),
    }
}

fn max_value<G: Game>(
    game: &G,
    state: &G::State,
    mut alpha: Utility,
    beta: Utility,
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
        best = best.max(min_value(game, &successor.state, alpha, beta, depth + 1, stats)?);
        if best >= beta {
            stats.cutoffs += 1;
            log::trace!("beta cutoff at depth {depth}: {best} >= {beta}");
            return Ok(best);
        }
        alpha = alpha.max(best);
    }
    Ok(best)
}

fn min_value<G: Game>(
    game: &G,
    state: &G::State,
    alpha: Utility,
    mut beta: Utility,
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
        best = best.min(max_value(game, &successor.state, alpha, beta, depth + 1, stats)?);
        if best <= alpha {
            stats.cutoffs += 1;
            log::trace!("alpha cutoff at depth {depth}: {best} <= {alpha}");
            return Ok(best);
        }
        beta = beta.min(best);
    }
    Ok(best)
}
