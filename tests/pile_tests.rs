//! End-to-end tests on the pile-splitting game.

use game_search::core::Player;
use game_search::games::piles::{PileGame, PileState, Split};
use game_search::rules::Game;
use game_search::search::{Algorithm, GameSearch, SearchConfig};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn engine(algorithm: Algorithm) -> GameSearch<PileGame> {
    GameSearch::new(PileGame, SearchConfig::default().with_algorithm(algorithm))
}

// =============================================================================
// First-Move Tests
// =============================================================================

#[test]
fn test_four_has_a_single_losing_split() {
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let decision = engine(algorithm)
            .decide(&PileState::new(&[4]))
            .unwrap()
            .expect("[4] can be split");

        assert_eq!(decision.mv, Split::new(4, 3, 1));
        assert_eq!(decision.state.piles(), &[3, 1]);
        assert_eq!(decision.state.to_move(), Player::Min);
        assert_eq!(decision.value, -1);
    }
}

#[test]
fn test_hand_verified_first_splits() {
    let cases = [
        (5, Split::new(5, 4, 1), 1),
        (6, Split::new(6, 4, 2), 1),
        (9, Split::new(9, 7, 2), 1),
        (10, Split::new(10, 9, 1), -1),
    ];

    for (pile, expected, value) in cases {
        let mut minimax = engine(Algorithm::Minimax);
        let mut alpha_beta = engine(Algorithm::AlphaBeta);
        let state = PileState::new(&[pile]);

        let a = minimax.decide(&state).unwrap().unwrap();
        let b = alpha_beta.decide(&state).unwrap().unwrap();

        assert_eq!(a.mv, expected, "minimax on [{pile}]");
        assert_eq!(a.value, value, "value of [{pile}]");
        assert_eq!(a, b, "alpha-beta must agree with minimax on [{pile}]");
    }
}

#[test]
fn test_all_losing_splits_tie_to_first() {
    // Every split of 7 loses; the first enumerated split is kept.
    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let decision = engine(algorithm).decide(&PileState::new(&[7])).unwrap().unwrap();
        assert_eq!(decision.mv, Split::new(7, 6, 1));
        assert_eq!(decision.value, -1);
    }
}

#[test]
fn test_sixteen_opens_with_eleven_five() {
    init_logging();

    let mut search = engine(Algorithm::AlphaBeta);
    let decision = search.decide(&PileState::new(&[16])).unwrap().unwrap();

    assert_eq!(decision.mv, Split::new(16, 11, 5));
    assert_eq!(decision.value, 1);
    assert_eq!(search.stats().nodes_visited, 21_399);
}

// =============================================================================
// Pruning Tests
// =============================================================================

#[test]
fn test_node_counts_match_hand_counts() {
    let cases = [(5, 6, 6), (8, 52, 35), (11, 1139, 267)];

    for (pile, minimax_nodes, alpha_beta_nodes) in cases {
        let state = PileState::new(&[pile]);
        let mut minimax = engine(Algorithm::Minimax);
        let mut alpha_beta = engine(Algorithm::AlphaBeta);

        minimax.decide(&state).unwrap();
        alpha_beta.decide(&state).unwrap();

        assert_eq!(minimax.stats().nodes_visited, minimax_nodes, "minimax on [{pile}]");
        assert_eq!(alpha_beta.stats().nodes_visited, alpha_beta_nodes, "alpha-beta on [{pile}]");
    }
}

#[test]
fn test_pruning_grows_with_the_tree() {
    let mut minimax = engine(Algorithm::Minimax);
    let mut alpha_beta = engine(Algorithm::AlphaBeta);
    let state = PileState::new(&[11]);

    minimax.decide(&state).unwrap();
    alpha_beta.decide(&state).unwrap();

    assert!(alpha_beta.stats().nodes_visited * 4 < minimax.stats().nodes_visited);
    assert!(alpha_beta.stats().cutoffs > 0);
}

#[test]
fn test_cutoff_without_savings_on_five() {
    // [3, 2] has a single reply, which fails low: one cutoff, nothing skipped.
    let state = PileState::new(&[5]);
    let mut minimax = engine(Algorithm::Minimax);
    let mut alpha_beta = engine(Algorithm::AlphaBeta);

    minimax.decide(&state).unwrap();
    alpha_beta.decide(&state).unwrap();

    assert_eq!(alpha_beta.stats().cutoffs, 1);
    assert_eq!(alpha_beta.stats().nodes_visited, minimax.stats().nodes_visited);
}

// =============================================================================
// Play-Out Tests
// =============================================================================

#[test]
fn test_sixteen_plays_out_to_a_max_win() {
    init_logging();

    let mut search = engine(Algorithm::AlphaBeta);
    let line = search.play_out(&PileState::new(&[16]), Player::Max).unwrap();

    let last = &line.last().expect("[16] is not terminal").state;
    assert!(PileGame.is_terminal(last));
    assert!(last.piles().iter().all(|&p| p <= 2));
    assert_eq!(last.piles().iter().sum::<u32>(), 16);

    // Optimal play from [16] is a MAX win, which the parity rule reports
    // as an even final pile count.
    let utility = PileGame.utility(last).unwrap();
    assert_eq!(utility, 1);
    assert_eq!(last.pile_count() % 2, 0);
    assert!(line.iter().all(|d| d.value == 1));
}

#[test]
fn test_play_out_moves_are_legal() {
    let mut search = engine(Algorithm::AlphaBeta);
    let start = PileState::new(&[12]);
    let line = search.play_out(&start, Player::Max).unwrap();

    let mut state = start;
    for decision in &line {
        state = state.apply(&decision.mv).unwrap();
        assert_eq!(state, decision.state);
    }
    assert!(PileGame.is_terminal(&state));
}

#[test]
fn test_play_out_is_deterministic() {
    let start = PileState::new(&[13]);
    let a = engine(Algorithm::AlphaBeta).play_out(&start, Player::Max).unwrap();
    let b = engine(Algorithm::AlphaBeta).play_out(&start, Player::Max).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_min_moving_first_mirrors_max() {
    // With MIN to move on [6], MIN wins: the value flips sign.
    let state = PileState::with_mover(&[6], Player::Min);
    let decision = engine(Algorithm::AlphaBeta)
        .decide_for(&state, Player::Min)
        .unwrap()
        .unwrap();

    assert_eq!(decision.mv, Split::new(6, 4, 2));
    assert_eq!(decision.value, -1);
}

#[test]
fn test_finished_game_has_no_decision() {
    let state = PileState::new(&[2, 1, 1]);
    assert_eq!(engine(Algorithm::Minimax).decide(&state).unwrap(), None);
}
