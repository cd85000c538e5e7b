#![no_main]

use libfuzzer_sys::fuzz_target;
use heapdom::heap::{parse_heap_graph, Reachability};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut heap) = parse_heap_graph(text) else {
        return;
    };

    heap.compute_dominators();
    for (id, _) in heap.objects() {
        assert_eq!(
            heap.reachability(id) == Reachability::Strong,
            heap.is_reachable(id)
        );
        if let Some(dominator) = heap.immediate_dominator(id) {
            assert!(heap.is_reachable(dominator));
            assert!(heap.dominated(dominator).contains(&id));
        }
    }
});
