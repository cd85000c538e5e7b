//! Node identifier for directed graphs.
//!
//! [`NodeId`] is the handle used for every vertex of a [`DirectedGraph`](crate::graph::DirectedGraph)
//! and, through [`HeapGraph`](crate::heap::HeapGraph), for every object of a heap snapshot.
//! The newtype keeps node indices from being mixed up with discovery ids, sizes,
//! or any other integer that floats around a heap analysis.

use std::fmt;

/// A strongly-typed identifier for a node within a directed graph.
///
/// Node ids are dense: they are handed out sequentially starting from 0 as
/// nodes are added, which makes them suitable as indices into side tables
/// (per-node scratch slots, dominator arrays, sizes).
///
/// # Examples
///
/// ```rust
/// use heapdom::graph::{DirectedGraph, NodeId};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let first = graph.add_node("first");
/// let second = graph.add_node("second");
///
/// assert_eq!(first, NodeId::new(0));
/// assert_eq!(second.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a `NodeId` from a raw index.
    ///
    /// Normal usage obtains ids from [`DirectedGraph::add_node`](crate::graph::DirectedGraph::add_node)
    /// or [`HeapGraph::add_object`](crate::heap::HeapGraph::add_object); this
    /// constructor exists for tests and for hosts that maintain their own dense
    /// numbering.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw 0-based index of this node.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
