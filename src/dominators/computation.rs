//! The dominators engine.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::dominators::{
    state::{Link, NodeState, StateArena},
    DominatorsGraph, StateId,
};

/// Computes the immediate dominator of every node reachable from `root`.
///
/// Results are delivered through [`DominatorsGraph::set_dominator`], called
/// once for every reachable node other than `root`. Unreachable nodes are never
/// visited and never receive a callback. On return every visited node's
/// computation state has been reset to `None`, so the same host can be reused
/// for a later computation, possibly from a different root.
///
/// # Algorithm
///
/// 1. **Discovery**: an explicit-stack depth-first walk assigns discovery ids
///    and takes the discovering edge's source as each node's first dominator
///    candidate. When an edge reaches an already visited node, the walk up the
///    source's DFS-tree ancestors tells how far the candidate must be pulled
///    back, and which ancestors must re-validate the node later.
/// 2. **Tightening**: nodes whose candidate is stale are popped from a FIFO
///    queue, their candidate is moved up its own chain of dominator candidates
///    to the tightened bound, and the nodes depending on them are tightened
///    and queued in turn. Bounds only ever decrease, so the queue drains.
/// 3. **Writeback**: every candidate is final; results are handed to the host
///    and all per-node state is detached.
///
/// The cost is close to linear in nodes plus edges for heap-shaped graphs.
/// No recursion is used, so arbitrarily deep reference chains are fine.
///
/// # Preconditions
///
/// `root` must not be the target of any edge, and the graph must not change
/// while the computation runs. Neither is checked: violations produce
/// unspecified dominators, not errors or panics. If a host callback panics,
/// some nodes may keep a stale state handle and the host must not be reused.
///
/// # Examples
///
/// ```rust
/// use heapdom::{
///     dominators::compute_dominator_tree,
///     graph::DirectedGraph,
/// };
///
/// // root -> a -> b -> a (cycle), root -> c
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let root = graph.add_node(());
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// let c = graph.add_node(());
/// graph.add_edge(root, a, ())?;
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, a, ())?;
/// graph.add_edge(root, c, ())?;
///
/// let tree = compute_dominator_tree(&graph, root);
/// assert_eq!(tree.immediate_dominator(a), Some(root));
/// assert_eq!(tree.immediate_dominator(b), Some(a));
/// assert_eq!(tree.immediate_dominator(c), Some(root));
/// # Ok::<(), heapdom::Error>(())
/// ```
pub fn compute_dominators<G: DominatorsGraph>(graph: &mut G, root: G::Node) {
    let mut states: StateArena<G::Node> = StateArena::new();

    // Nodes N with N.domid < N.dom.id(). A node is queued at most once per
    // transition into that condition, checked before its bound is lowered.
    let mut revisit: VecDeque<StateId> = VecDeque::new();

    let root_id = states.push(NodeState::root(root));
    graph.set_computation_state(root, Some(root_id));

    // 1. Discovery
    let mut dfs: Vec<Link<G::Node>> = graph
        .references(root)
        .map(|dst| Link::new(root_id, dst))
        .collect();

    while let Some(link) = dfs.pop() {
        let Some(dst_id) = graph.computation_state(link.dst) else {
            let dst_id = states.push(NodeState::discovered(link.dst, link.src));
            graph.set_computation_state(link.dst, Some(dst_id));
            dfs.extend(
                graph
                    .references(link.dst)
                    .map(|child| Link::new(dst_id, child)),
            );
            continue;
        };

        let revisiting = states[dst_id].is_stale();

        // Ancestors of the source newer than anything seen on an earlier
        // edge into dst do not dominate dst.
        let mut src = link.src;
        while src.id() > states[dst_id].seenid {
            states[src].pending.push(dst_id);
            src = states[src].src;
        }
        states[dst_id].seenid = link.src.id();

        // Every node on this path below `src` has an id above the bound, so
        // the dominator cannot be later than `src`.
        let domid = states[dst_id].domid;
        while src.id() > domid {
            src = states[src].src;
        }
        if src.id() < domid {
            trace!("dominators: {:?} bound {} -> {}", dst_id, domid, src.id());
            states[dst_id].domid = src.id();
            if !revisiting {
                revisit.push_back(dst_id);
            }
        }
    }

    debug!(
        "dominators: discovered {} nodes, {} queued for revisit",
        states.len(),
        revisit.len()
    );

    // 2. Tightening
    let mut revisits = 0usize;
    while let Some(node_id) = revisit.pop_front() {
        revisits += 1;

        let mut dom = states[node_id].dom;
        debug_assert!(
            states[node_id].domid < dom.id(),
            "revisited node {node_id:?} is not stale"
        );

        while dom.id() > states[node_id].domid {
            // A path reaches dom without its own dominator candidate, then
            // continues to node along increasing ids.
            let dom_dom = states[dom].dom;
            if dom_dom.id() < states[node_id].domid {
                states[node_id].domid = dom_dom.id();
            }
            states[dom].pending.push(node_id);
            dom = dom_dom;
        }
        states[node_id].dom = dom;
        states[node_id].domid = dom.id();

        for i in 0..states[node_id].pending.len() {
            let x = states[node_id].pending[i];
            if dom.id() < states[x].domid {
                trace!("dominators: {:?} bound {} -> {}", x, states[x].domid, dom.id());
                let revisiting = states[x].is_stale();
                states[x].domid = dom.id();
                if !revisiting {
                    revisit.push_back(x);
                }
            }
        }
    }

    debug!("dominators: converged after {revisits} revisits");

    // 3. Writeback
    graph.set_computation_state(root, None);
    for state in states.iter().skip(1) {
        graph.set_dominator(state.node, states[state.dom].node);
        graph.set_computation_state(state.node, None);
    }

    debug!(
        "dominators: assigned dominators to {} nodes",
        states.len() - 1
    );
}
