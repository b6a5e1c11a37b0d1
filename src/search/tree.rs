//! Arena-based search tree for the iterative engine.
//!
//! Nodes live in a flat `Vec` and point at each other with `NodeId`
//! indices, which sidesteps ownership cycles and keeps allocation cheap.
//! A tree is built inside one `best_move` call and dropped with it —
//! nothing persists between searches.

use smallvec::SmallVec;

use crate::core::Score;

/// Index into the search tree's node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the search tree.
#[derive(Clone, Debug)]
pub struct SearchNode<S, M> {
    /// The game state at this node.
    pub state: S,

    /// Guaranteed outcome for the player to move at `state`, once
    /// resolved.
    pub score: Option<Score>,

    /// The move that produced this node. `None` for the root.
    pub produced_by: Option<M>,

    /// Children in move-generation order.
    /// SmallVec optimizes for typical branching factor < 8.
    pub children: SmallVec<[NodeId; 8]>,
}

impl<S, M> SearchNode<S, M> {
    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self {
            state,
            score: None,
            produced_by: None,
            children: SmallVec::new(),
        }
    }

    /// Create a child node recording the move that produced it.
    pub fn child(state: S, mv: M) -> Self {
        Self {
            state,
            score: None,
            produced_by: Some(mv),
            children: SmallVec::new(),
        }
    }

    /// Whether children have already been spawned for this node.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena holding one search invocation's tree.
#[derive(Clone, Debug)]
pub struct SearchTree<S, M> {
    nodes: Vec<SearchNode<S, M>>,
}

impl<S, M> SearchTree<S, M> {
    /// Create a tree whose root wraps the given state.
    pub fn new(root_state: S) -> Self {
        let mut nodes = Vec::with_capacity(1024);
        nodes.push(SearchNode::root(root_state));
        Self { nodes }
    }

    /// The root node ID (always 0).
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, M> {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S, M> {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode<S, M>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true after construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
