//! Iterative depth-first traversals.
//!
//! [`dfs`] returns a lazy pre-order iterator; [`postorder`] and
//! [`reverse_postorder`] return collected vectors since the order requires a
//! full traversal anyway.

use crate::graph::{NodeId, Successors};

/// Depth-first search iterator over graph nodes, in pre-order.
///
/// Each reachable node is yielded exactly once. Successors are explored in
/// the order the graph yields them.
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        if start.index() >= node_count {
            return DfsIterator {
                graph,
                stack: Vec::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; node_count];
        visited[start.index()] = true;

        DfsIterator {
            graph,
            stack: vec![start],
            visited,
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Reverse so the first successor is popped first
        let successors: Vec<NodeId> = self.graph.successors(node).collect();
        for &succ in successors.iter().rev() {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.stack.push(succ);
            }
        }

        Some(node)
    }
}

/// Returns a depth-first pre-order iterator starting from `start`.
///
/// Nodes not reachable from `start` are never yielded. An out-of-range
/// `start` yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and stack
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}

/// Computes the postorder of nodes reachable from `start`.
///
/// A node is emitted after every node first discovered through it.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
#[allow(clippy::items_after_statements)]
pub fn postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let node_count = graph.node_count();
    if start.index() >= node_count {
        return Vec::new();
    }

    let mut visited = vec![false; node_count];
    let mut result = Vec::with_capacity(node_count);

    #[derive(Clone, Copy)]
    enum Visit {
        Enter,
        Exit,
    }

    let mut stack = vec![(start, Visit::Enter)];
    while let Some((node, visit)) = stack.pop() {
        match visit {
            Visit::Enter => {
                if visited[node.index()] {
                    continue;
                }
                visited[node.index()] = true;
                stack.push((node, Visit::Exit));

                let successors: Vec<NodeId> = graph.successors(node).collect();
                for &succ in successors.iter().rev() {
                    if !visited[succ.index()] {
                        stack.push((succ, Visit::Enter));
                    }
                }
            }
            Visit::Exit => result.push(node),
        }
    }

    result
}

/// Computes the reverse postorder of nodes reachable from `start`.
///
/// In an acyclic graph every node precedes its successors, which makes this
/// the natural iteration order for forward data-flow fixed points such as
/// the textbook `dom(n) = {n} ∪ ⋂ dom(preds)` formulation.
pub fn reverse_postorder<G: Successors>(graph: &G, start: NodeId) -> Vec<NodeId> {
    let mut result = postorder(graph, start);
    result.reverse();
    result
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::{dfs, postorder, reverse_postorder},
        DirectedGraph, NodeId,
    };

    fn diamond() -> (DirectedGraph<&'static str, ()>, [NodeId; 4]) {
        let mut graph = DirectedGraph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        let d = graph.add_node("D");
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(a, c, ()).unwrap();
        graph.add_edge(b, d, ()).unwrap();
        graph.add_edge(c, d, ()).unwrap();
        (graph, [a, b, c, d])
    }

    #[test]
    fn test_dfs_diamond_visits_once() {
        let (graph, [a, b, c, d]) = diamond();
        let order: Vec<NodeId> = dfs(&graph, a).collect();
        assert_eq!(order, vec![a, b, d, c]);
    }

    #[test]
    fn test_dfs_skips_unreachable() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let _lonely = graph.add_node(());
        graph.add_edge(a, b, ()).unwrap();

        assert_eq!(dfs(&graph, a).count(), 2);
    }

    #[test]
    fn test_dfs_invalid_start() {
        let graph: DirectedGraph<(), ()> = DirectedGraph::new();
        assert_eq!(dfs(&graph, NodeId::new(3)).count(), 0);
        assert!(postorder(&graph, NodeId::new(3)).is_empty());
    }

    #[test]
    fn test_postorder_diamond() {
        let (graph, [a, b, c, d]) = diamond();
        assert_eq!(postorder(&graph, a), vec![d, b, c, a]);
        assert_eq!(reverse_postorder(&graph, a), vec![a, c, b, d]);
    }

    #[test]
    fn test_traversal_terminates_on_cycle() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge(a, b, ()).unwrap();
        graph.add_edge(b, a, ()).unwrap();

        assert_eq!(dfs(&graph, a).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(reverse_postorder(&graph, a), vec![a, b]);
    }

    #[test]
    fn test_deep_chain_no_recursion() {
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        let first = graph.add_node(());
        let mut prev = first;
        for _ in 0..100_000 {
            let next = graph.add_node(());
            graph.add_edge(prev, next, ()).unwrap();
            prev = next;
        }

        assert_eq!(dfs(&graph, first).count(), 100_001);
        assert_eq!(postorder(&graph, first).first(), Some(&prev));
    }
}
