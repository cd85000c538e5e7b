//! Plain-text heap graph format.
//!
//! One directive per line, `#` starts a comment:
//!
//! ```text
//! object <name> [size]       # size defaults to 0
//! ref <from> <to> [weak]     # strong unless marked weak
//! root <name>
//! ```
//!
//! Names must be declared with `object` before they are used.

use std::{collections::HashMap, path::Path};

use log::debug;
use strum::IntoEnumIterator;

use crate::{
    heap::{HeapGraph, ObjectId, ReferenceKind},
    Result,
};

/// Parses a heap graph from its text form.
///
/// # Errors
///
/// Returns [`Error::Malformed`](crate::Error::Malformed) naming the offending
/// line for unknown directives, undeclared or duplicate names, bad sizes and
/// surplus arguments.
///
/// # Examples
///
/// ```rust
/// use heapdom::heap::parse_heap_graph;
///
/// let mut heap = parse_heap_graph(
///     "object a 16\n\
///      object b 8\n\
///      root a\n\
///      ref a b\n",
/// )?;
/// heap.compute_dominators();
///
/// let a = heap.find_object("a").unwrap();
/// let b = heap.find_object("b").unwrap();
/// assert_eq!(heap.immediate_dominator(b), Some(a));
/// # Ok::<(), heapdom::Error>(())
/// ```
pub fn parse_heap_graph(input: &str) -> Result<HeapGraph> {
    let mut heap = HeapGraph::new();
    let mut names: HashMap<&str, ObjectId> = HashMap::new();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = content.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            ["object", name, rest @ ..] => {
                let size = match rest {
                    [] => 0,
                    [size] => size.parse::<u64>().map_err(|_| {
                        malformed_error!("line {}: invalid size '{}'", line, size)
                    })?,
                    _ => return Err(surplus(line, raw)),
                };
                if names.contains_key(name) {
                    return Err(malformed_error!(
                        "line {}: object '{}' declared twice",
                        line,
                        name
                    ));
                }
                names.insert(*name, heap.add_object(*name, size));
            }
            ["ref", from, to, rest @ ..] => {
                let kind = match rest {
                    [] => ReferenceKind::Strong,
                    [kind] => ReferenceKind::iter()
                        .find(|candidate| candidate.as_str() == *kind)
                        .ok_or_else(|| {
                            malformed_error!("line {}: invalid reference kind '{}'", line, kind)
                        })?,
                    _ => return Err(surplus(line, raw)),
                };
                let from = lookup(&names, from, line)?;
                let to = lookup(&names, to, line)?;
                heap.add_reference(from, to, kind)?;
            }
            ["root", name] => {
                heap.add_root(lookup(&names, name, line)?)?;
            }
            ["root", _, ..] => return Err(surplus(line, raw)),
            [directive, ..] => {
                return Err(malformed_error!(
                    "line {}: unknown or incomplete directive '{}'",
                    line,
                    directive
                ));
            }
        }
    }

    debug!(
        "Parsed heap graph: {} objects, {} references",
        heap.object_count(),
        heap.reference_count()
    );
    Ok(heap)
}

/// Reads and parses a heap graph file.
///
/// # Errors
///
/// Returns [`Error::FileError`](crate::Error::FileError) if the file cannot be
/// read, otherwise the errors of [`parse_heap_graph`].
pub fn load_heap_graph(path: impl AsRef<Path>) -> Result<HeapGraph> {
    let input = std::fs::read_to_string(path)?;
    parse_heap_graph(&input)
}

fn lookup(names: &HashMap<&str, ObjectId>, name: &str, line: usize) -> Result<ObjectId> {
    names
        .get(name)
        .copied()
        .ok_or_else(|| malformed_error!("line {}: unknown object '{}'", line, name))
}

fn surplus(line: usize, raw: &str) -> crate::Error {
    malformed_error!("line {}: too many arguments in '{}'", line, raw.trim())
}
