//! Tree game rules and generation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::{Error, Result};
use crate::rules::{Game, Successor, Utility, INFINITY, NEG_INFINITY};

/// Node identifier. Nodes double as game states.
pub type NodeId = u32;

/// A node of an explicit game tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Terminal node with its utility for MAX.
    Leaf(Utility),
    /// Inner node; children in move order. Empty means a malformed game.
    Branch(Vec<NodeId>),
}

/// Game whose states are the nodes of a fixed tree.
///
/// Moves are child indices: move `i` at a branch leads to its `i`-th child.
#[derive(Clone, Debug, Default)]
pub struct TreeGame {
    nodes: FxHashMap<NodeId, TreeNode>,
    root: NodeId,
}

impl TreeGame {
    /// Empty tree rooted at `root`. Nodes are added with the builder methods.
    pub fn new(root: NodeId) -> Self {
        Self {
            nodes: FxHashMap::default(),
            root,
        }
    }

    /// Add a leaf.
    pub fn leaf(mut self, id: NodeId, utility: Utility) -> Self {
        self.nodes.insert(id, TreeNode::Leaf(utility));
        self
    }

    /// Add several leaves.
    pub fn leaves(mut self, leaves: &[(NodeId, Utility)]) -> Self {
        for &(id, utility) in leaves {
            self.nodes.insert(id, TreeNode::Leaf(utility));
        }
        self
    }

    /// Add a branch with children in move order.
    pub fn branch(mut self, id: NodeId, children: &[NodeId]) -> Self {
        self.nodes.insert(id, TreeNode::Branch(children.to_vec()));
        self
    }

    /// Generate a random tree. The same config and seed give the same tree.
    ///
    /// The root is always a branch when `config.depth > 0`.
    pub fn random(config: &RandomTreeConfig, seed: u64) -> Self {
        let mut game = Self::new(0);
        let mut rng = GameRng::new(seed);
        let mut next_id = 0;
        game.generate(config, &mut rng, config.depth, &mut next_id);
        game
    }

    fn generate(
        &mut self,
        config: &RandomTreeConfig,
        rng: &mut GameRng,
        remaining: u32,
        next_id: &mut NodeId,
    ) -> NodeId {
        let id = *next_id;
        *next_id += 1;

        let is_root = id == self.root;
        if remaining == 0 || (!is_root && rng.gen_bool(config.early_leaf_probability)) {
            let utility = rng.gen_range_inclusive(config.min_utility..=config.max_utility);
            self.nodes.insert(id, TreeNode::Leaf(utility));
            return id;
        }

        let width = rng.gen_range_usize(config.min_branching..=config.max_branching);
        let children = (0..width)
            .map(|_| {
                let mut subtree = rng.fork();
                self.generate(config, &mut subtree, remaining - 1, next_id)
            })
            .collect();
        self.nodes.insert(id, TreeNode::Branch(children));
        id
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn lookup(&self, id: NodeId) -> Result<&TreeNode> {
        self.nodes
            .get(&id)
            .ok_or_else(|| Error::invalid_state(format!("node {id} is not in the tree")))
    }
}

impl Game for TreeGame {
    type State = NodeId;
    type Move = usize;

    fn is_terminal(&self, state: &NodeId) -> bool {
        matches!(self.nodes.get(state), Some(TreeNode::Leaf(_)))
    }

    fn utility(&self, state: &NodeId) -> Result<Utility> {
        match self.lookup(*state)? {
            TreeNode::Leaf(utility) => Ok(*utility),
            TreeNode::Branch(_) => Err(Error::invalid_state(format!(
                "utility of inner node {state}"
            ))),
        }
    }

    fn successors(&self, state: &NodeId) -> Result<Vec<Successor<usize, NodeId>>> {
        match self.lookup(*state)? {
            TreeNode::Leaf(_) => Ok(Vec::new()),
            TreeNode::Branch(children) => Ok(children
                .iter()
                .enumerate()
                .map(|(i, &child)| Successor::new(i, child))
                .collect()),
        }
    }
}

/// Shape parameters for [`TreeGame::random`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomTreeConfig {
    /// Maximum depth; nodes at this depth are leaves.
    pub depth: u32,

    /// Fewest children of a branch (at least 1).
    pub min_branching: usize,

    /// Most children of a branch.
    pub max_branching: usize,

    /// Smallest leaf utility.
    pub min_utility: Utility,

    /// Largest leaf utility.
    pub max_utility: Utility,

    /// Chance that a non-root node above the depth limit is a leaf anyway.
    pub early_leaf_probability: f64,
}

impl Default for RandomTreeConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            min_branching: 1,
            max_branching: 3,
            min_utility: -5,
            max_utility: 5,
            early_leaf_probability: 0.1,
        }
    }
}

impl RandomTreeConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_max_branching(mut self, max_branching: usize) -> Self {
        self.max_branching = max_branching.max(self.min_branching);
        self
    }

    /// Leaf utility range, clamped strictly inside the search bounds.
    pub fn with_utility_range(mut self, min: Utility, max: Utility) -> Self {
        let clamp = |u: Utility| u.clamp(NEG_INFINITY + 1, INFINITY - 1);
        self.min_utility = clamp(min.min(max));
        self.max_utility = clamp(max.max(min));
        self
    }

    pub fn with_early_leaf_probability(mut self, probability: f64) -> Self {
        self.early_leaf_probability = probability.clamp(0.0, 1.0);
        self
    }
}
