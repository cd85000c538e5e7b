//! Heap snapshot object graphs.
//!
//! [`HeapGraph`] is a ready-made host for the dominators engine: objects with
//! a label and a shallow size, typed references between them, and GC roots
//! hanging off a synthetic super-root. It implements
//! [`DominatorsGraph`](crate::dominators::DominatorsGraph) directly, keeping
//! the engine's scratch slot and the results on each [`HeapObject`], and
//! hands only strong references to the engine.
//!
//! Graphs are built programmatically or loaded from a small text format with
//! [`parse_heap_graph`] / [`load_heap_graph`].
//!
//! # Examples
//!
//! ```rust
//! use heapdom::heap::{HeapGraph, ReferenceKind};
//!
//! let mut heap = HeapGraph::new();
//! let thread = heap.add_object("Thread", 96);
//! let statics = heap.add_object("Statics", 64);
//! let shared = heap.add_object("Config", 40);
//! heap.add_root(thread)?;
//! heap.add_root(statics)?;
//! heap.add_reference(thread, shared, ReferenceKind::Strong)?;
//! heap.add_reference(statics, shared, ReferenceKind::Strong)?;
//!
//! heap.compute_dominators();
//!
//! // Kept alive by two roots: only the super-root dominates it
//! assert_eq!(heap.immediate_dominator(shared), Some(heap.super_root()));
//! # Ok::<(), heapdom::Error>(())
//! ```

mod graph;
mod object;
mod reference;
mod text;

pub use graph::{HeapGraph, SUPER_ROOT_LABEL};
pub use object::{HeapObject, ObjectId};
pub use reference::{Reachability, ReferenceKind};
pub use text::{load_heap_graph, parse_heap_graph};
