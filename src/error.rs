use thiserror::Error;

use crate::graph::NodeId;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The dominators engine itself never fails: precondition violations produce
/// unspecified results rather than errors (see [`crate::dominators`]). Errors
/// arise while *building* the object graph the engine runs over, or while
/// loading one from text.
///
/// # Error Categories
///
/// ## Graph Construction Errors
/// - [`Error::GraphError`] - A node or edge id does not belong to the graph
/// - [`Error::InvalidRoot`] - A reference would point into the synthetic root
///
/// ## Input Errors
/// - [`Error::Malformed`] - A heap-graph text file could not be parsed
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// # Examples
///
/// ```rust
/// use heapdom::{heap::{HeapGraph, ReferenceKind}, Error};
///
/// let mut heap = HeapGraph::new();
/// let a = heap.add_object("a", 16);
///
/// match heap.add_reference(a, heap.super_root(), ReferenceKind::Strong) {
///     Err(Error::InvalidRoot(node)) => assert_eq!(node, heap.super_root()),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input is damaged and could not be parsed.
    ///
    /// The message carries the offending input line; `file` and `line` point
    /// at the source location that detected the problem.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// File I/O error.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Graph construction error.
    ///
    /// Raised when an edge references a node that does not exist in the
    /// graph, or a query names a node outside of it.
    #[error("{0}")]
    GraphError(String),

    /// A reference would make the root reachable from another node.
    ///
    /// The dominators computation requires its root to have no incoming
    /// edges; hosts reject such references at construction time instead.
    #[error("Node {0} is a root and cannot be the target of a reference")]
    InvalidRoot(NodeId),
}
