//! Trait definitions for graph abstractions.
//!
//! Algorithms in this crate are written against these traits rather than a
//! concrete graph type, so the same traversal and dominator code runs over a
//! plain [`DirectedGraph`](crate::graph::DirectedGraph), a
//! [`HeapGraph`](crate::heap::HeapGraph), or a host's own adjacency storage.
//!
//! - [`GraphBase`] - node count and node iteration
//! - [`Successors`] - outgoing edges
//! - [`Predecessors`] - incoming edges
//!
//! All adjacency queries return iterators rather than collections, so simple
//! traversals do not allocate.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph, reachable or not.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers, in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
///
/// For a directed edge `(u, v)`, node `v` is a successor of `u`. Parallel
/// edges yield the same successor more than once.
///
/// # Examples
///
/// ```rust
/// use heapdom::graph::{DirectedGraph, NodeId, Successors};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
///
/// let successors: Vec<NodeId> = graph.successors(a).collect();
/// assert_eq!(successors, vec![b, c]);
/// # Ok::<(), heapdom::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
///
/// For a directed edge `(u, v)`, node `u` is a predecessor of `v`.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessor nodes of the given node.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
