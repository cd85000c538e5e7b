use std::path::Path;

use heapdom::heap::{HeapGraph, Reachability};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, object_name, object_size, resolve_object},
    output::{print_output, ObjectTable},
};

#[derive(Debug, Serialize)]
pub struct DominatorChain {
    pub object: String,
    pub reachability: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediate_dominator: Option<String>,
    pub path: Vec<ChainEntry>,
}

#[derive(Debug, Serialize)]
pub struct ChainEntry {
    pub name: String,
    pub shallow_size: u64,
    pub depth: usize,
}

pub fn collect_chain(heap: &HeapGraph, name: &str) -> anyhow::Result<DominatorChain> {
    let object = resolve_object(heap, name)?;
    let dominators = heap.dominator_path(object);
    let top = dominators.len().saturating_sub(1);
    let path = dominators
        .into_iter()
        .enumerate()
        .map(|(i, id)| ChainEntry {
            name: object_name(heap, id),
            shallow_size: object_size(heap, id),
            depth: top - i,
        })
        .collect();

    Ok(DominatorChain {
        object: name.to_string(),
        reachability: heap.reachability(object).as_str(),
        immediate_dominator: heap
            .immediate_dominator(object)
            .map(|dominator| object_name(heap, dominator)),
        path,
    })
}

pub fn run(path: &Path, object: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let heap = load_graph(path)?;
    let chain = collect_chain(&heap, object)?;

    print_output(&chain, opts, |chain| {
        if chain.path.is_empty() {
            let weak = Reachability::Weak.as_str();
            if chain.reachability == weak {
                println!("{} is only weakly reachable and has no dominators", chain.object);
            } else {
                println!("{} is not reachable from any GC root", chain.object);
            }
            return;
        }

        let mut table = ObjectTable::new(&["Size", "Depth"]);
        for entry in &chain.path {
            table.push(&entry.name, &[entry.shallow_size, entry.depth as u64]);
        }
        table.print();
    })
}
