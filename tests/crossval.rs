//! Randomized cross-validation of the dominators engine.
//!
//! Every generated graph is solved twice: once by the engine and once by the
//! classic iterative data-flow formulation
//! `dom(n) = {n} ∪ ⋂ dom(p) for p in preds(n)`, iterated in reverse postorder
//! until nothing changes. The immediate dominator of `n` is then the strict
//! dominator of `n` with the largest dominator set of its own.
//!
//! Seeds are fixed so failures are reproducible.

use heapdom::{
    dominators::compute_dominator_tree,
    graph::{algorithms::reverse_postorder, DirectedGraph, GraphBase, NodeId, Predecessors},
    heap::{HeapGraph, ReferenceKind},
};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Immediate dominators by the iterative fixed point; `None` for the root and
/// for unreachable nodes.
fn fixed_point_idoms(graph: &DirectedGraph<(), ()>, root: NodeId) -> Vec<Option<NodeId>> {
    let node_count = graph.node_count();
    let order = reverse_postorder(graph, root);

    let mut reachable = vec![false; node_count];
    for &node in &order {
        reachable[node.index()] = true;
    }

    // dom[n][d] == true iff d dominates n
    let mut dom: Vec<Vec<bool>> = (0..node_count)
        .map(|n| {
            if n == root.index() {
                (0..node_count).map(|d| d == n).collect()
            } else {
                reachable.clone()
            }
        })
        .collect();

    let mut changed = true;
    while changed {
        changed = false;
        for &node in order.iter().skip(1) {
            let mut next = reachable.clone();
            for pred in graph.predecessors(node) {
                if !reachable[pred.index()] {
                    continue;
                }
                for (d, slot) in next.iter_mut().enumerate() {
                    *slot &= dom[pred.index()][d];
                }
            }
            next[node.index()] = true;
            if next != dom[node.index()] {
                dom[node.index()] = next;
                changed = true;
            }
        }
    }

    let size = |n: usize| dom[n].iter().filter(|&&d| d).count();
    graph
        .node_ids()
        .map(|node| {
            if node == root || !reachable[node.index()] {
                return None;
            }
            (0..node_count)
                .filter(|&d| d != node.index() && dom[node.index()][d])
                .max_by_key(|&d| size(d))
                .map(NodeId::new)
        })
        .collect()
}

/// Random graph with no edge into the root. Edges are inserted in shuffled
/// order so reference order varies independently of the shape.
fn random_graph(rng: &mut StdRng, node_count: usize, edge_count: usize) -> DirectedGraph<(), ()> {
    let mut edges = Vec::with_capacity(edge_count + node_count);

    // A random spanning tree keeps most nodes reachable
    for node in 1..node_count {
        if rng.random_bool(0.9) {
            edges.push((rng.random_range(0..node), node));
        }
    }
    if node_count > 1 {
        for _ in 0..edge_count {
            edges.push((rng.random_range(0..node_count), rng.random_range(1..node_count)));
        }
    }
    edges.shuffle(rng);

    let mut graph = DirectedGraph::with_capacity(node_count, edges.len());
    for _ in 0..node_count {
        graph.add_node(());
    }
    for (src, dst) in edges {
        graph
            .add_edge(NodeId::new(src), NodeId::new(dst), ())
            .unwrap();
    }
    graph
}

fn assert_matches_fixed_point(graph: &DirectedGraph<(), ()>, context: &str) {
    let root = NodeId::new(0);
    let expected = fixed_point_idoms(graph, root);
    let tree = compute_dominator_tree(graph, root);

    for node in graph.node_ids() {
        assert_eq!(
            tree.immediate_dominator(node),
            expected[node.index()],
            "{context}: immediate dominator of {node} differs"
        );
    }
}

#[test]
fn test_sparse_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);
    for round in 0..300 {
        let node_count = rng.random_range(1..40);
        let edge_count = rng.random_range(0..node_count);
        let graph = random_graph(&mut rng, node_count, edge_count);
        assert_matches_fixed_point(&graph, &format!("sparse round {round}"));
    }
}

#[test]
fn test_dense_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0002);
    for round in 0..150 {
        let node_count = rng.random_range(2..30);
        let edge_count = rng.random_range(node_count..node_count * 4);
        let graph = random_graph(&mut rng, node_count, edge_count);
        assert_matches_fixed_point(&graph, &format!("dense round {round}"));
    }
}

#[test]
fn test_larger_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0003);
    for round in 0..10 {
        let node_count = rng.random_range(200..400);
        let edge_count = rng.random_range(node_count / 2..node_count * 2);
        let graph = random_graph(&mut rng, node_count, edge_count);
        assert_matches_fixed_point(&graph, &format!("large round {round}"));
    }
}

#[test]
fn test_back_edge_heavy_graphs() {
    // Chains with many references pointing back up the chain produce long
    // tightening cascades
    let mut rng = StdRng::seed_from_u64(0x5eed_0004);
    for round in 0..100 {
        let node_count = rng.random_range(3..50);
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let nodes: Vec<NodeId> = (0..node_count).map(|_| graph.add_node(())).collect();
        for pair in nodes.windows(2) {
            graph.add_edge(pair[0], pair[1], ()).unwrap();
        }
        for _ in 0..node_count {
            let src = rng.random_range(1..node_count);
            let dst = rng.random_range(1..=src);
            graph.add_edge(nodes[src], nodes[dst], ()).unwrap();
        }
        for _ in 0..rng.random_range(0..3) {
            let dst = rng.random_range(1..node_count);
            graph.add_edge(nodes[0], nodes[dst], ()).unwrap();
        }
        assert_matches_fixed_point(&graph, &format!("back-edge round {round}"));
    }
}

#[test]
fn test_edge_order_permutations() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0005);
    for round in 0..50 {
        let node_count = rng.random_range(5..25);
        let mut edges: Vec<(usize, usize)> = (1..node_count)
            .map(|node| (rng.random_range(0..node), node))
            .collect();
        for _ in 0..node_count * 2 {
            edges.push((rng.random_range(0..node_count), rng.random_range(1..node_count)));
        }

        let mut baseline = None;
        for _ in 0..5 {
            edges.shuffle(&mut rng);
            let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
            for _ in 0..node_count {
                graph.add_node(());
            }
            for &(src, dst) in &edges {
                graph
                    .add_edge(NodeId::new(src), NodeId::new(dst), ())
                    .unwrap();
            }

            let tree = compute_dominator_tree(&graph, NodeId::new(0));
            let idoms: Vec<Option<NodeId>> = graph
                .node_ids()
                .map(|node| tree.immediate_dominator(node))
                .collect();
            match &baseline {
                None => baseline = Some(idoms),
                Some(expected) => assert_eq!(&idoms, expected, "round {round}"),
            }
        }
    }
}

#[test]
fn test_heap_graphs_ignore_weak_references() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0006);
    for round in 0..100 {
        let object_count = rng.random_range(1..30);
        let mut heap = HeapGraph::new();
        let mut strong: DirectedGraph<(), ()> = DirectedGraph::new();
        strong.add_node(());

        let objects: Vec<_> = (0..object_count)
            .map(|i| {
                strong.add_node(());
                heap.add_object(format!("o{i}"), 8)
            })
            .collect();

        for &object in &objects {
            if rng.random_bool(0.3) {
                heap.add_root(object).unwrap();
                strong.add_edge(NodeId::new(0), object, ()).unwrap();
            }
        }
        for _ in 0..object_count * 2 {
            let from = objects[rng.random_range(0..object_count)];
            let to = objects[rng.random_range(0..object_count)];
            if rng.random_bool(0.25) {
                heap.add_reference(from, to, ReferenceKind::Weak).unwrap();
            } else {
                heap.add_reference(from, to, ReferenceKind::Strong).unwrap();
                strong.add_edge(from, to, ()).unwrap();
            }
        }

        heap.compute_dominators();
        let expected = fixed_point_idoms(&strong, NodeId::new(0));
        for (id, _) in heap.objects() {
            assert_eq!(
                heap.immediate_dominator(id),
                expected[id.index()],
                "round {round}: object {id}"
            );
        }
    }
}
