//! Edge identifier for directed graphs.
//!
//! [`EdgeId`] names one reference edge of a [`DirectedGraph`](crate::graph::DirectedGraph).
//! Heap graphs are multigraphs (an object may hold several fields pointing at
//! the same target), so edges need their own identity separate from their
//! endpoints.

use std::fmt;

/// A strongly-typed identifier for an edge within a directed graph.
///
/// Edge ids are assigned sequentially from 0 by
/// [`DirectedGraph::add_edge`](crate::graph::DirectedGraph::add_edge).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates an `EdgeId` from a raw index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw 0-based index of this edge.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
