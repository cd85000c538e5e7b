//! Dominator trees over index-keyed graphs.
//!
//! [`compute_dominator_tree`] runs the engine over any [`Successors`] graph by
//! keeping the per-node computation slots in a side table indexed by
//! [`NodeId`], then collects the `set_dominator` callbacks into a
//! [`DominatorTree`].

use crate::{
    dominators::{compute_dominators, DominatorsGraph, StateId},
    graph::{NodeId, Successors},
};

/// Result of a dominators computation from a single root.
///
/// Each node reachable from the root, except the root itself, has exactly
/// one immediate dominator. Nodes the root cannot reach have none and are
/// not part of the tree.
///
/// # Examples
///
/// ```rust
/// use heapdom::{dominators::compute_dominator_tree, graph::DirectedGraph};
///
/// // Diamond: root -> a, root -> b, a -> join, b -> join
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let root = graph.add_node("root");
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// let join = graph.add_node("join");
/// graph.add_edge(root, a, ())?;
/// graph.add_edge(root, b, ())?;
/// graph.add_edge(a, join, ())?;
/// graph.add_edge(b, join, ())?;
///
/// let tree = compute_dominator_tree(&graph, root);
///
/// assert_eq!(tree.immediate_dominator(join), Some(root));
/// assert!(!tree.strictly_dominates(a, join));
/// assert_eq!(tree.children(root), &[a, b, join]);
/// # Ok::<(), heapdom::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DominatorTree {
    root: NodeId,
    /// Immediate dominator per node; `None` for the root and unreachable nodes
    idom: Vec<Option<NodeId>>,
    /// Immediately dominated nodes per node, ascending
    children: Vec<Vec<NodeId>>,
    reachable: usize,
}

impl DominatorTree {
    fn from_immediate_dominators(root: NodeId, idom: Vec<Option<NodeId>>) -> Self {
        let mut children = vec![Vec::new(); idom.len()];
        let mut reachable = usize::from(root.index() < idom.len());
        for (index, dominator) in idom.iter().enumerate() {
            if let Some(dominator) = dominator {
                children[dominator.index()].push(NodeId::new(index));
                reachable += 1;
            }
        }

        DominatorTree {
            root,
            idom,
            children,
            reachable,
        }
    }

    /// Returns the root the tree was computed from.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the number of nodes of the underlying graph.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.idom.len()
    }

    /// Returns the number of nodes reachable from the root, root included.
    #[inline]
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.reachable
    }

    /// Returns the immediate dominator of `node`.
    ///
    /// `None` for the root, for nodes the root cannot reach, and for ids
    /// outside the graph.
    #[inline]
    #[must_use]
    pub fn immediate_dominator(&self, node: NodeId) -> Option<NodeId> {
        self.idom.get(node.index()).copied().flatten()
    }

    /// Returns `true` if `node` is reachable from the root.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        if node == self.root {
            return node.index() < self.idom.len();
        }
        self.immediate_dominator(node).is_some()
    }

    /// Checks if node `a` dominates node `b`.
    ///
    /// A reachable node dominates itself. Nothing dominates or is dominated by
    /// an unreachable node.
    ///
    /// # Complexity
    ///
    /// O(depth) where depth is the depth of `b` in the dominator tree.
    #[must_use]
    pub fn dominates(&self, a: NodeId, b: NodeId) -> bool {
        if !self.is_reachable(a) || !self.is_reachable(b) {
            return false;
        }
        self.dominators(b).any(|dominator| dominator == a)
    }

    /// Checks if node `a` strictly dominates node `b`, i.e. dominates it and
    /// is a different node.
    #[inline]
    #[must_use]
    pub fn strictly_dominates(&self, a: NodeId, b: NodeId) -> bool {
        a != b && self.dominates(a, b)
    }

    /// Returns an iterator over the dominators of `node`, from the node itself
    /// up to and including the root.
    ///
    /// Yields nothing for an unreachable node.
    pub fn dominators(&self, node: NodeId) -> DominatorIterator<'_> {
        DominatorIterator {
            tree: self,
            current: self.is_reachable(node).then_some(node),
        }
    }

    /// Returns the depth of `node` in the dominator tree (the root is at 0),
    /// or `None` if the node is unreachable.
    #[must_use]
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        if !self.is_reachable(node) {
            return None;
        }
        Some(self.dominators(node).count() - 1)
    }

    /// Returns the nodes immediately dominated by `node`, in ascending order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.children
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Iterator over the dominators of a node, from the node up to the root.
pub struct DominatorIterator<'a> {
    tree: &'a DominatorTree,
    current: Option<NodeId>,
}

impl Iterator for DominatorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.tree.immediate_dominator(current);
        Some(current)
    }
}

/// Side-table host: computation slots and results keyed by `NodeId`.
struct IndexedHost<'g, G> {
    graph: &'g G,
    state: Vec<Option<StateId>>,
    idom: Vec<Option<NodeId>>,
}

impl<G: Successors> DominatorsGraph for IndexedHost<'_, G> {
    type Node = NodeId;

    fn computation_state(&self, node: NodeId) -> Option<StateId> {
        self.state[node.index()]
    }

    fn set_computation_state(&mut self, node: NodeId, state: Option<StateId>) {
        self.state[node.index()] = state;
    }

    fn references(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }

    fn set_dominator(&mut self, node: NodeId, dominator: NodeId) {
        self.idom[node.index()] = Some(dominator);
    }
}

/// Computes the dominator tree of `graph` rooted at `root`.
///
/// The per-node computation slots live in a dense side table, so any graph
/// exposing [`Successors`] can be analysed without reserving space in its
/// node payloads. An out-of-range `root` yields a tree in which nothing is
/// reachable.
///
/// `root` must not be the target of any edge; see
/// [`compute_dominators`] for the consequences of violating that.
pub fn compute_dominator_tree<G: Successors>(graph: &G, root: NodeId) -> DominatorTree {
    let node_count = graph.node_count();
    let mut host = IndexedHost {
        graph,
        state: vec![None; node_count],
        idom: vec![None; node_count],
    };

    if root.index() < node_count {
        compute_dominators(&mut host, root);
    }

    DominatorTree::from_immediate_dominators(root, host.idom)
}
