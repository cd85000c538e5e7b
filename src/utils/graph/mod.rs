//! Directed graph infrastructure for object-graph analysis.
//!
//! This module provides the graph substrate the rest of the crate is built on:
//!
//! - [`NodeId`] and [`EdgeId`] - strongly-typed identifiers
//! - [`DirectedGraph`] - adjacency-list multigraph with typed node and edge data
//! - [`GraphBase`], [`Successors`], [`Predecessors`] - traits the algorithms are
//!   written against
//! - [`algorithms`] - iterative traversals
//!
//! Graphs are built incrementally, then treated as immutable while an analysis
//! runs over them. The dominators engine in particular requires the edge sets
//! to stay stable for the duration of one computation.
//!
//! # Examples
//!
//! ```rust
//! use heapdom::graph::{DirectedGraph, Successors};
//!
//! // Diamond: A -> B, A -> C, B -> D, C -> D
//! let mut graph: DirectedGraph<&str, &str> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! let d = graph.add_node("D");
//!
//! graph.add_edge(a, b, "A->B")?;
//! graph.add_edge(a, c, "A->C")?;
//! graph.add_edge(b, d, "B->D")?;
//! graph.add_edge(c, d, "C->D")?;
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! assert_eq!(graph.successors(a).count(), 2);
//! # Ok::<(), heapdom::Error>(())
//! ```

mod directed;
mod edge;
mod node;
mod traits;

pub mod algorithms;

pub use directed::DirectedGraph;
pub use edge::EdgeId;
pub use node::NodeId;
pub use traits::{GraphBase, Predecessors, Successors};
