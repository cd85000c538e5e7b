//! Immediate dominators over arbitrary rooted graphs.
//!
//! A node `d` **dominates** a node `n` if every path from the root to `n`
//! passes through `d`. The **immediate dominator** of `n` is the dominator
//! closest to `n`; linking every reachable node to its immediate dominator
//! forms the dominator tree, the structure heap analysers use to attribute
//! retained memory to the objects that keep it alive.
//!
//! # Architecture
//!
//! - [`DominatorsGraph`] - the capability contract a host graph implements:
//!   a per-node scratch slot, outgoing references, and a result callback
//! - [`compute_dominators`] - the engine; drives traversal purely through
//!   the contract and reports results through `set_dominator`
//! - [`compute_dominator_tree`] / [`DominatorTree`] - convenience wrapper for
//!   any [`Successors`](crate::graph::Successors) graph, keeping the scratch
//!   slots in a side table and collecting the results
//!
//! The engine is neither Lengauer-Tarjan nor the classic iterative data-flow
//! formulation. It assigns depth-first discovery ids, keeps an upper bound on
//! the id of each node's immediate dominator, and lowers bounds through a
//! worklist until every candidate agrees with its bound. Heap graphs with
//! millions of objects and very deep reference chains are the target: the
//! traversal is iterative, and all bookkeeping is index-based.
//!
//! # Thread Safety
//!
//! A computation is single-threaded and runs to completion. The host's
//! scratch slots belong to the engine for the duration of one call, so two
//! computations must never share a host concurrently. Sequential reuse is
//! fine: every slot is cleared before the call returns.

mod computation;
mod node;
mod state;
mod tree;

pub use computation::compute_dominators;
pub use node::DominatorsGraph;
pub use state::StateId;
pub use tree::{compute_dominator_tree, DominatorIterator, DominatorTree};
