// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # heapdom
//!
//! Immediate dominators for object-reference graphs of arbitrary size.
//!
//! Heap analysers attribute retained memory to the objects that keep it alive:
//! an object `d` dominates `n` if every path from the GC roots to `n` passes
//! through `d`. `heapdom` computes the immediate dominator of every reachable
//! node with an iterative engine that tolerates millions of nodes, reference
//! chains far deeper than any call stack, and cycles of every shape.
//!
//! ## Features
//!
//! - **Host-agnostic engine** - runs over any graph implementing the small
//!   [`dominators::DominatorsGraph`] contract; no copy of the graph is made
//! - **Index-keyed adapter** - [`dominators::compute_dominator_tree`] for any
//!   [`graph::Successors`] graph, returning a queryable [`dominators::DominatorTree`]
//! - **Heap model** - [`heap::HeapGraph`] with typed strong/weak references, GC
//!   roots under a synthetic super-root, and a plain-text loader
//! - **No recursion** - discovery and tightening use explicit stacks and queues
//!
//! ## Quick Start
//!
//! ```rust
//! use heapdom::prelude::*;
//!
//! let mut heap = HeapGraph::new();
//! let session = heap.add_object("Session", 64);
//! let buffer = heap.add_object("byte[]", 4096);
//! let listener = heap.add_object("Listener", 32);
//! heap.add_root(session)?;
//! heap.add_root(listener)?;
//! heap.add_reference(session, buffer, ReferenceKind::Strong)?;
//! heap.add_reference(listener, buffer, ReferenceKind::Weak)?;
//!
//! heap.compute_dominators();
//!
//! // The weak reference does not keep the buffer alive
//! assert_eq!(heap.immediate_dominator(buffer), Some(session));
//! # Ok::<(), heapdom::Error>(())
//! ```
//!
//! ## Bringing your own graph
//!
//! Hosts that already own their node storage implement
//! [`dominators::DominatorsGraph`] and call [`dominators::compute_dominators`]
//! directly; results arrive through `set_dominator` callbacks. See the trait
//! documentation for the full contract.
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade: one `debug` record per engine
//! phase and a `trace` record for every dominator bound that is tightened.
//! Install any logger (for example `env_logger`) to see them.

#[macro_use]
pub(crate) mod error;
pub(crate) mod utils;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use heapdom::prelude::*;
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let root = graph.add_node(());
/// let child = graph.add_node(());
/// graph.add_edge(root, child, ())?;
///
/// let tree = compute_dominator_tree(&graph, root);
/// assert_eq!(tree.immediate_dominator(child), Some(root));
/// # Ok::<(), heapdom::Error>(())
/// ```
pub mod prelude;

/// Immediate dominators: the host contract, the engine and dominator trees.
pub mod dominators;

/// Heap snapshot object graphs with GC roots and typed references.
pub mod heap;

/// Graph substrate: node and edge ids, adjacency traits, [`graph::DirectedGraph`]
/// and traversals.
pub use utils::graph;

/// `heapdom` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `heapdom` Error type
///
/// Raised while building graphs or loading them from text; the dominators
/// computation itself cannot fail.
pub use error::Error;
