use std::path::Path;

use heapdom::heap::{HeapGraph, ObjectId};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, object_name, object_size, resolve_object, sorted_dominated},
    output::print_output,
};

#[derive(Debug, Serialize)]
pub struct TreeEntry {
    pub depth: usize,
    pub name: String,
    pub shallow_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominator: Option<String>,
    pub dominated: usize,
}

/// Pre-order walk of the dominator tree below `start`, children by ascending id.
pub fn collect_entries(
    heap: &HeapGraph,
    start: ObjectId,
    max_depth: Option<usize>,
) -> Vec<TreeEntry> {
    let mut entries = Vec::new();
    let mut stack = vec![(start, 0usize)];

    while let Some((object, depth)) = stack.pop() {
        let dominated = sorted_dominated(heap, object);
        entries.push(TreeEntry {
            depth,
            name: object_name(heap, object),
            shallow_size: object_size(heap, object),
            dominator: heap
                .immediate_dominator(object)
                .map(|dominator| object_name(heap, dominator)),
            dominated: dominated.len(),
        });

        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }
        for child in dominated.into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    entries
}

pub fn run(
    path: &Path,
    depth: Option<usize>,
    root: Option<&str>,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let heap = load_graph(path)?;
    let start = match root {
        Some(name) => resolve_object(&heap, name)?,
        None => heap.super_root(),
    };

    if !heap.is_reachable(start) {
        anyhow::bail!(
            "object '{}' is not strongly reachable from any GC root",
            object_name(&heap, start)
        );
    }

    let entries = collect_entries(&heap, start, depth);
    print_output(&entries, opts, |entries| {
        for entry in entries {
            let indent = "  ".repeat(entry.depth);
            if entry.dominated > 0 {
                println!(
                    "{indent}{} ({} bytes, dominates {})",
                    entry.name, entry.shallow_size, entry.dominated
                );
            } else {
                println!("{indent}{} ({} bytes)", entry.name, entry.shallow_size);
            }
        }
    })
}
