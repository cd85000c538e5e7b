//! Graph traversal algorithms.
//!
//! These are the building blocks used around the dominators engine: reachability
//! checks for heap graphs and the node orderings needed by iterative data-flow
//! style analyses.
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | [`dfs`] | O(V + E) | Reachability, pre-order walks |
//! | [`postorder`] | O(V + E) | Bottom-up accumulation over trees |
//! | [`reverse_postorder`] | O(V + E) | Forward data-flow iteration order |
//!
//! All traversals are iterative; heap graphs contain reference chains far
//! deeper than the call stack can hold.
//!
//! # Examples
//!
//! ```rust
//! use heapdom::graph::{algorithms, DirectedGraph, NodeId};
//!
//! let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b, ())?;
//! graph.add_edge(b, c, ())?;
//!
//! let order: Vec<NodeId> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![a, b, c]);
//! assert_eq!(algorithms::reverse_postorder(&graph, a), vec![a, b, c]);
//! # Ok::<(), heapdom::Error>(())
//! ```

mod traversal;

pub use traversal::{dfs, postorder, reverse_postorder, DfsIterator};
