//! Per-node bookkeeping of one dominators computation.
//!
//! States live in an arena owned by the engine; a [`StateId`] is both the
//! arena index and the node's discovery id, since states are allocated in
//! strictly increasing discovery order with the root first.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// Opaque handle to the engine's state for one node.
///
/// Hosts only store and return it through
/// [`DominatorsGraph`](crate::dominators::DominatorsGraph). Internally it is
/// the node's discovery id: the root is `0`, and if `a < b` then `a` was
/// discovered before `b`, so `b` cannot dominate `a`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(usize);

impl StateId {
    /// Handle of the root, always the first node discovered.
    pub const ROOT: StateId = StateId(0);

    #[inline]
    pub(crate) const fn new(id: usize) -> Self {
        StateId(id)
    }

    /// Returns the discovery id of the node this handle belongs to.
    #[must_use]
    #[inline]
    pub const fn id(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({})", self.0)
    }
}

/// Algorithm state attached to one visited node.
#[derive(Debug)]
pub(crate) struct NodeState<N> {
    /// The host node this state belongs to
    pub node: N,
    /// Upper bound on the id of this node's immediate dominator. Only ever
    /// decreases.
    pub domid: usize,
    /// Current dominator candidate; always on this node's `src` chain.
    /// `domid < dom.id()` means the node sits on the revisit queue.
    pub dom: StateId,
    /// The node whose edge first discovered this one (its DFS-tree parent).
    pub src: StateId,
    /// Largest `src` id seen on an edge reaching this node. Ancestors above
    /// it have already recorded this node as pending.
    pub seenid: usize,
    /// Nodes reachable from this one along increasing ids that this node does
    /// not dominate. Re-validated whenever this node's dominator settles.
    pub pending: Vec<StateId>,
}

impl<N> NodeState<N> {
    /// State for the root: its own candidate and parent, so walks up the
    /// tree always stop at id 0.
    pub fn root(node: N) -> Self {
        NodeState {
            node,
            domid: 0,
            dom: StateId::ROOT,
            src: StateId::ROOT,
            seenid: 0,
            pending: Vec::new(),
        }
    }

    /// State for a node first reached over an edge from `src`.
    pub fn discovered(node: N, src: StateId) -> Self {
        NodeState {
            node,
            domid: src.id(),
            dom: src,
            src,
            seenid: src.id(),
            pending: Vec::new(),
        }
    }

    /// Whether the dominator candidate is stale relative to `domid`.
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.domid < self.dom.id()
    }
}

/// Arena of node states indexed by [`StateId`].
#[derive(Debug)]
pub(crate) struct StateArena<N> {
    states: Vec<NodeState<N>>,
}

impl<N> StateArena<N> {
    pub fn new() -> Self {
        StateArena { states: Vec::new() }
    }

    /// Allocates the next state; its handle is the next discovery id.
    pub fn push(&mut self, state: NodeState<N>) -> StateId {
        let id = StateId::new(self.states.len());
        self.states.push(state);
        id
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NodeState<N>> + '_ {
        self.states.iter()
    }
}

impl<N> Index<StateId> for StateArena<N> {
    type Output = NodeState<N>;

    #[inline]
    fn index(&self, id: StateId) -> &Self::Output {
        &self.states[id.0]
    }
}

impl<N> IndexMut<StateId> for StateArena<N> {
    #[inline]
    fn index_mut(&mut self, id: StateId) -> &mut Self::Output {
        &mut self.states[id.0]
    }
}

/// An edge whose target has not been examined yet.
///
/// The discovery phase keeps a stack of these instead of recursing, so graph
/// depth is bounded by memory rather than by the call stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Link<N> {
    pub src: StateId,
    pub dst: N,
}

impl<N> Link<N> {
    #[inline]
    pub fn new(src: StateId, dst: N) -> Self {
        Link { src, dst }
    }
}
