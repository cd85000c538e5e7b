//! # heapdom Prelude
//!
//! Commonly used types and traits of the heapdom library. Import this module to
//! get quick access to the graph substrate, the dominators engine and the heap
//! model.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all heapdom operations
pub use crate::Error;

/// The result type used throughout heapdom
pub use crate::Result;

// ================================================================================================
// Graph Substrate
// ================================================================================================

/// Node and edge identifiers plus the adjacency-list graph
pub use crate::graph::{DirectedGraph, EdgeId, NodeId};

/// Graph traits used by traversals and the dominator-tree adapter
pub use crate::graph::{GraphBase, Predecessors, Successors};

// ================================================================================================
// Dominators
// ================================================================================================

/// Host contract and engine entry point
pub use crate::dominators::{compute_dominators, DominatorsGraph, StateId};

/// Dominator trees over index-keyed graphs
pub use crate::dominators::{compute_dominator_tree, DominatorTree};

// ================================================================================================
// Heap Model
// ================================================================================================

/// Heap snapshot graph, its objects and reference kinds
pub use crate::heap::{HeapGraph, HeapObject, ObjectId, Reachability, ReferenceKind};

/// Text format loading
pub use crate::heap::{load_heap_graph, parse_heap_graph};
