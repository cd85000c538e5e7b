//! The capability contract the dominators engine requires from a host graph.

use crate::dominators::StateId;

/// Node capabilities required by [`compute_dominators`](crate::dominators::compute_dominators).
///
/// The trait is implemented by the *owner* of the nodes (the host graph)
/// rather than by each node, so that the engine can borrow the host mutably
/// while it records state and delivers results. Node handles are cheap
/// [`Copy`] values, typically dense indices.
///
/// # Contract
///
/// - [`computation_state`](Self::computation_state) and
///   [`set_computation_state`](Self::set_computation_state) are an O(1)
///   scratch slot per node. The getter must return the most recently set
///   value; `None` means "not visited yet". Hosts must start every node at
///   `None` and must not touch the slot while a computation is running.
/// - [`references`](Self::references) enumerates the node's outgoing edges.
///   It is called at most once per reachable node. Any order is allowed and
///   the computed dominators do not depend on it, but the same call must not
///   be answered inconsistently. Hosts filter out null or otherwise
///   non-dominating references (weak references in a heap) before yielding.
/// - [`set_dominator`](Self::set_dominator) is called exactly once for every
///   node reachable from the root, except the root itself, after the
///   computation has converged.
///
/// The root must not be the target of any edge. Violating that precondition,
/// or mutating the graph during a computation, yields unspecified dominators
/// but no error.
///
/// # Examples
///
/// A side-table host over a plain adjacency list:
///
/// ```rust
/// use heapdom::dominators::{compute_dominators, DominatorsGraph, StateId};
///
/// struct Adjacency {
///     edges: Vec<Vec<usize>>,
///     state: Vec<Option<StateId>>,
///     idom: Vec<Option<usize>>,
/// }
///
/// impl DominatorsGraph for Adjacency {
///     type Node = usize;
///
///     fn computation_state(&self, node: usize) -> Option<StateId> {
///         self.state[node]
///     }
///
///     fn set_computation_state(&mut self, node: usize, state: Option<StateId>) {
///         self.state[node] = state;
///     }
///
///     fn references(&self, node: usize) -> impl Iterator<Item = usize> {
///         self.edges[node].iter().copied()
///     }
///
///     fn set_dominator(&mut self, node: usize, dominator: usize) {
///         self.idom[node] = Some(dominator);
///     }
/// }
///
/// let mut graph = Adjacency {
///     edges: vec![vec![1, 2], vec![3], vec![3], vec![]],
///     state: vec![None; 4],
///     idom: vec![None; 4],
/// };
/// compute_dominators(&mut graph, 0);
///
/// assert_eq!(graph.idom, vec![None, Some(0), Some(0), Some(0)]);
/// assert!(graph.state.iter().all(Option::is_none));
/// ```
pub trait DominatorsGraph {
    /// Handle identifying one node of the host graph.
    type Node: Copy + Eq;

    /// Returns the computation handle attached to `node`, or `None` if the
    /// node has not been visited by the running computation.
    fn computation_state(&self, node: Self::Node) -> Option<StateId>;

    /// Attaches (or, with `None`, detaches) the computation handle of `node`.
    fn set_computation_state(&mut self, node: Self::Node, state: Option<StateId>);

    /// Returns the targets of the outgoing edges of `node` that take part in
    /// dominance.
    fn references(&self, node: Self::Node) -> impl Iterator<Item = Self::Node>;

    /// Receives the immediate dominator computed for `node`.
    fn set_dominator(&mut self, node: Self::Node, dominator: Self::Node);
}
