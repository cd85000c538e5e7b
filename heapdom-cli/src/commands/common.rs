use std::path::Path;

use anyhow::Context;
use heapdom::heap::{load_heap_graph, HeapGraph, ObjectId};

/// Load a heap graph file and compute its dominators.
pub fn load_graph(path: &Path) -> anyhow::Result<HeapGraph> {
    let mut heap = load_heap_graph(path)
        .with_context(|| format!("failed to load heap graph: {}", path.display()))?;
    heap.compute_dominators();
    Ok(heap)
}

/// Look up an object by name.
pub fn resolve_object(heap: &HeapGraph, name: &str) -> anyhow::Result<ObjectId> {
    heap.find_object(name)
        .with_context(|| format!("no object named '{name}'"))
}

/// Display name of an object, falling back to its id.
pub fn object_name(heap: &HeapGraph, object: ObjectId) -> String {
    heap.object(object)
        .map_or_else(|| object.to_string(), |o| o.label().to_string())
}

/// Shallow size of an object, 0 for unknown ids.
pub fn object_size(heap: &HeapGraph, object: ObjectId) -> u64 {
    heap.object(object).map_or(0, |o| o.shallow_size())
}

/// Objects `object` immediately dominates, ascending by id.
pub fn sorted_dominated(heap: &HeapGraph, object: ObjectId) -> Vec<ObjectId> {
    let mut dominated = heap.dominated(object).to_vec();
    dominated.sort_unstable();
    dominated
}
