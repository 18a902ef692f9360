//! Property tests: alpha-beta against minimax on random game trees.

use proptest::prelude::*;

use game_search::core::Player;
use game_search::games::piles::{PileGame, PileState};
use game_search::games::tree::{RandomTreeConfig, TreeGame};
use game_search::search::{
    alpha_beta_decision_for, minimax_decision_for, Algorithm, GameSearch, SearchConfig,
    SearchStats,
};

fn tree_config() -> impl Strategy<Value = RandomTreeConfig> {
    (1u32..=6, 1usize..=4, 0.0f64..0.4, 1i64..=10).prop_map(|(depth, branching, early, spread)| {
        RandomTreeConfig::default()
            .with_depth(depth)
            .with_max_branching(branching)
            .with_early_leaf_probability(early)
            .with_utility_range(-spread, spread)
    })
}

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::Max), Just(Player::Min)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn alpha_beta_matches_minimax(config in tree_config(), seed in any::<u64>(), player in player()) {
        let game = TreeGame::random(&config, seed);
        let mut minimax_stats = SearchStats::new();
        let mut alpha_beta_stats = SearchStats::new();

        let expected = minimax_decision_for(&game, &game.root(), player, &mut minimax_stats).unwrap();
        let actual = alpha_beta_decision_for(&game, &game.root(), player, &mut alpha_beta_stats).unwrap();

        prop_assert_eq!(expected, actual);
        prop_assert!(alpha_beta_stats.nodes_visited <= minimax_stats.nodes_visited);
        prop_assert_eq!(minimax_stats.nodes_visited as usize, game.len());
    }

    #[test]
    fn decisions_are_deterministic(config in tree_config(), seed in any::<u64>()) {
        let game = TreeGame::random(&config, seed);
        let mut search = GameSearch::new(game, SearchConfig::default());
        let root = search.game().root();

        let first = search.decide(&root).unwrap();
        let first_nodes = search.stats().nodes_visited;
        let second = search.decide(&root).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_nodes, search.stats().nodes_visited);
    }

    #[test]
    fn depth_one_trees_are_never_pruned(width in 1usize..=8, seed in any::<u64>()) {
        let config = RandomTreeConfig::default()
            .with_depth(1)
            .with_max_branching(width);
        let game = TreeGame::random(&config, seed);
        let mut minimax_stats = SearchStats::new();
        let mut alpha_beta_stats = SearchStats::new();

        minimax_decision_for(&game, &game.root(), Player::Max, &mut minimax_stats).unwrap();
        alpha_beta_decision_for(&game, &game.root(), Player::Max, &mut alpha_beta_stats).unwrap();

        prop_assert_eq!(alpha_beta_stats.nodes_visited, minimax_stats.nodes_visited);
    }

    #[test]
    fn pile_decisions_agree(piles in prop::collection::vec(1u32..=6, 1..=3)) {
        let state = PileState::new(&piles);
        let mut minimax = GameSearch::new(
            PileGame,
            SearchConfig::default().with_algorithm(Algorithm::Minimax),
        );
        let mut alpha_beta = GameSearch::new(PileGame, SearchConfig::default());

        prop_assert_eq!(minimax.decide(&state).unwrap(), alpha_beta.decide(&state).unwrap());
    }
}

#[cfg(feature = "parallel")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn parallel_root_matches_sequential(config in tree_config(), seed in any::<u64>()) {
        let game = TreeGame::random(&config, seed);
        let root = game.root();
        let mut sequential = GameSearch::new(game.clone(), SearchConfig::default());
        let mut parallel = GameSearch::new(game, SearchConfig::default().with_parallel_root(true));

        prop_assert_eq!(sequential.decide(&root).unwrap(), parallel.decide(&root).unwrap());
    }
}
