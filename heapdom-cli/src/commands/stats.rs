use std::path::Path;

use heapdom::heap::{HeapGraph, Reachability, ReferenceKind};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, object_name, object_size},
    output::{print_output, ObjectTable},
};

#[derive(Debug, Serialize)]
pub struct HeapStats {
    pub objects: usize,
    pub roots: usize,
    pub strong_references: usize,
    pub weak_references: usize,
    pub reachable: usize,
    pub weakly_reachable: usize,
    pub unreachable: usize,
    pub reachable_size: u64,
    pub max_dominator_depth: usize,
    pub top_dominators: Vec<DominatorRank>,
}

#[derive(Debug, Serialize)]
pub struct DominatorRank {
    pub name: String,
    pub shallow_size: u64,
    /// Objects in the dominator subtree below this one, at any depth
    pub dominated_objects: usize,
}

/// Gather statistics over a heap graph whose dominators have been computed.
///
/// Counts exclude the super-root and the GC root references hanging off it.
pub fn collect_stats(heap: &HeapGraph, top: usize) -> HeapStats {
    let super_root = heap.super_root();
    let roots = heap.roots().count();

    let mut strong_references = 0;
    let mut weak_references = 0;
    for (id, _) in heap.objects().filter(|(id, _)| *id != super_root) {
        for (_, kind) in heap.references(id) {
            match kind {
                ReferenceKind::Strong => strong_references += 1,
                ReferenceKind::Weak => weak_references += 1,
            }
        }
    }

    let objects = heap.object_count() - 1;
    let mut reachable_ids = Vec::new();
    let mut weakly_reachable = 0;
    for (id, _) in heap.objects().filter(|(id, _)| *id != super_root) {
        match heap.reachability(id) {
            Reachability::Strong => reachable_ids.push(id),
            Reachability::Weak => weakly_reachable += 1,
            Reachability::Unreachable => {}
        }
    }
    let reachable_size: u64 = reachable_ids
        .iter()
        .map(|&id| object_size(heap, id))
        .sum();

    // Pre-order walk of the dominator tree from the super-root, iterative
    let mut max_dominator_depth = 0;
    let mut preorder = Vec::with_capacity(reachable_ids.len() + 1);
    let mut stack = vec![(super_root, 0usize)];
    while let Some((object, depth)) = stack.pop() {
        max_dominator_depth = max_dominator_depth.max(depth);
        preorder.push(object);
        stack.extend(heap.dominated(object).iter().map(|&child| (child, depth + 1)));
    }

    // Children come after their dominator in pre-order, so a reverse pass
    // folds every subtree into its root
    let mut subtree = vec![0usize; heap.object_count()];
    for &object in preorder.iter().rev() {
        if let Some(dominator) = heap.immediate_dominator(object) {
            subtree[dominator.index()] += subtree[object.index()] + 1;
        }
    }

    let mut ranked: Vec<_> = reachable_ids
        .iter()
        .map(|&id| (id, subtree[id.index()]))
        .filter(|&(_, dominated)| dominated > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let top_dominators = ranked
        .into_iter()
        .take(top)
        .map(|(id, dominated_objects)| DominatorRank {
            name: object_name(heap, id),
            shallow_size: object_size(heap, id),
            dominated_objects,
        })
        .collect();

    HeapStats {
        objects,
        roots,
        strong_references,
        weak_references,
        reachable: reachable_ids.len(),
        weakly_reachable,
        unreachable: objects - reachable_ids.len() - weakly_reachable,
        reachable_size,
        max_dominator_depth,
        top_dominators,
    }
}

pub fn run(path: &Path, top: usize, opts: &GlobalOptions) -> anyhow::Result<()> {
    let heap = load_graph(path)?;
    let stats = collect_stats(&heap, top);

    print_output(&stats, opts, |stats| {
        println!("Objects:             {}", stats.objects);
        println!("GC roots:            {}", stats.roots);
        println!("Strong references:   {}", stats.strong_references);
        println!("Weak references:     {}", stats.weak_references);
        println!(
            "Reachable:           {} ({} bytes)",
            stats.reachable, stats.reachable_size
        );
        println!("Weakly reachable:    {}", stats.weakly_reachable);
        println!("Unreachable:         {}", stats.unreachable);
        println!("Dominator depth:     {}", stats.max_dominator_depth);

        if !stats.top_dominators.is_empty() {
            println!();
            println!("Top dominators:");
            let mut table = ObjectTable::new(&["Size", "Dominated"]).with_margin(2);
            for rank in &stats.top_dominators {
                table.push(
                    &rank.name,
                    &[rank.shallow_size, rank.dominated_objects as u64],
                );
            }
            table.print();
        }
    })
}
