use log::debug;

use crate::{
    dominators::{self, DominatorsGraph, StateId},
    graph::{algorithms::dfs, DirectedGraph, EdgeId, GraphBase, Successors},
    heap::{HeapObject, ObjectId, Reachability, ReferenceKind},
    Error, Result,
};

/// Label of the synthetic object every [`HeapGraph`] starts with.
pub const SUPER_ROOT_LABEL: &str = "<super root>";

/// The object-reference graph of a heap snapshot.
///
/// Objects are added one by one and connected with typed references. GC roots
/// are modelled as strong references from a synthetic **super-root**, the
/// first object of every graph, so that one dominators computation covers all
/// roots at once. The super-root can never be the target of a reference.
///
/// Dominator results are stored on the objects themselves. They reflect the
/// graph as of the last [`compute_dominators`](Self::compute_dominators)
/// call; objects or references added afterwards are not taken into account
/// until the next call.
///
/// # Examples
///
/// ```rust
/// use heapdom::heap::{HeapGraph, ReferenceKind};
///
/// let mut heap = HeapGraph::new();
/// let cache = heap.add_object("Cache", 32);
/// let map = heap.add_object("HashMap", 48);
/// let entry = heap.add_object("Entry", 24);
/// heap.add_root(cache)?;
/// heap.add_reference(cache, map, ReferenceKind::Strong)?;
/// heap.add_reference(map, entry, ReferenceKind::Strong)?;
///
/// heap.compute_dominators();
///
/// assert_eq!(heap.immediate_dominator(entry), Some(map));
/// assert_eq!(heap.dominator_path(entry), vec![entry, map, cache, heap.super_root()]);
/// # Ok::<(), heapdom::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HeapGraph {
    graph: DirectedGraph<HeapObject, ReferenceKind>,
    super_root: ObjectId,
}

impl Default for HeapGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapGraph {
    /// Creates a graph holding only the super-root.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(1, 0)
    }

    /// Creates a graph with room for `objects` objects and `references`
    /// references, the super-root included in neither count.
    #[must_use]
    pub fn with_capacity(objects: usize, references: usize) -> Self {
        let mut graph = DirectedGraph::with_capacity(objects + 1, references);
        let super_root = graph.add_node(HeapObject::new(SUPER_ROOT_LABEL, 0));
        HeapGraph { graph, super_root }
    }

    /// Returns the synthetic object all GC roots hang off.
    #[must_use]
    pub fn super_root(&self) -> ObjectId {
        self.super_root
    }

    /// Adds an object and returns its id.
    pub fn add_object(&mut self, label: impl Into<String>, shallow_size: u64) -> ObjectId {
        self.graph.add_node(HeapObject::new(label, shallow_size))
    }

    /// Adds a reference from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoot`] if `to` is the super-root, and
    /// [`Error::GraphError`] if either object does not exist.
    pub fn add_reference(
        &mut self,
        from: ObjectId,
        to: ObjectId,
        kind: ReferenceKind,
    ) -> Result<EdgeId> {
        if to == self.super_root {
            return Err(Error::InvalidRoot(to));
        }
        self.graph.add_edge(from, to, kind)
    }

    /// Marks `object` as a GC root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRoot`] for the super-root itself and
    /// [`Error::GraphError`] if the object does not exist.
    pub fn add_root(&mut self, object: ObjectId) -> Result<EdgeId> {
        self.add_reference(self.super_root, object, ReferenceKind::Strong)
    }

    /// Returns the GC roots in the order they were added.
    pub fn roots(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.graph
            .outgoing_edges(self.super_root)
            .map(|(_, target, _)| target)
    }

    /// Returns the object with the given id.
    #[must_use]
    pub fn object(&self, object: ObjectId) -> Option<&HeapObject> {
        self.graph.node(object)
    }

    /// Returns the first object carrying `label`, skipping the super-root.
    #[must_use]
    pub fn find_object(&self, label: &str) -> Option<ObjectId> {
        self.graph
            .nodes()
            .skip(1)
            .find(|(_, object)| object.label() == label)
            .map(|(id, _)| id)
    }

    /// Returns every object with its id, super-root first.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &HeapObject)> + '_ {
        self.graph.nodes()
    }

    /// Returns the number of objects, super-root included.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of references, GC root references included.
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the outgoing references of `object` with their kinds, strong
    /// and weak alike. Unknown objects have none.
    pub fn references(
        &self,
        object: ObjectId,
    ) -> impl Iterator<Item = (ObjectId, ReferenceKind)> + '_ {
        self.graph
            .contains_node(object)
            .then(|| self.graph.outgoing_edges(object))
            .into_iter()
            .flatten()
            .map(|(_, target, kind)| (target, *kind))
    }

    /// Returns the objects referencing `object` with the reference kinds.
    pub fn referrers(
        &self,
        object: ObjectId,
    ) -> impl Iterator<Item = (ObjectId, ReferenceKind)> + '_ {
        self.graph
            .contains_node(object)
            .then(|| self.graph.incoming_edges(object))
            .into_iter()
            .flatten()
            .map(|(_, source, kind)| (source, *kind))
    }

    /// Returns the objects strongly reachable from the super-root, in
    /// depth-first pre-order. Independent of any dominators computation.
    pub fn reachable_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        dfs(self, self.super_root)
    }

    /// Computes the immediate dominator of every strongly reachable object.
    ///
    /// Results of a previous computation are discarded first, so calling this
    /// again after adding objects or references yields a fresh, consistent
    /// result.
    pub fn compute_dominators(&mut self) {
        for object in self.graph.nodes_mut() {
            object.clear_dominators();
        }

        let root = self.super_root;
        dominators::compute_dominators(self, root);
        self.classify_reachability();

        debug!(
            "Heap dominators: {} objects, {} directly dominated by the super-root",
            self.object_count(),
            self.dominated(root).len()
        );
    }

    /// Marks every object reachable over references of any kind, then splits
    /// them by whether the dominators computation reached them.
    fn classify_reachability(&mut self) {
        let mut seen = vec![false; self.graph.node_count()];
        let mut stack = vec![self.super_root];
        seen[self.super_root.index()] = true;
        while let Some(object) = stack.pop() {
            for (_, target, _) in self.graph.outgoing_edges(object) {
                if !seen[target.index()] {
                    seen[target.index()] = true;
                    stack.push(target);
                }
            }
        }

        let super_root = self.super_root;
        let mut weak = 0usize;
        for (index, object) in self.graph.nodes_mut().enumerate() {
            object.reachability = if index == super_root.index()
                || object.immediate_dominator.is_some()
            {
                Reachability::Strong
            } else if seen[index] {
                weak += 1;
                Reachability::Weak
            } else {
                Reachability::Unreachable
            };
        }

        debug!("Heap reachability: {weak} objects held only through weak references");
    }

    /// Returns the immediate dominator of `object`.
    ///
    /// `None` for the super-root, for objects that were not strongly reachable
    /// and for unknown ids.
    #[must_use]
    pub fn immediate_dominator(&self, object: ObjectId) -> Option<ObjectId> {
        self.graph
            .node(object)
            .and_then(HeapObject::immediate_dominator)
    }

    /// Returns the objects `object` immediately dominates, in the order the
    /// computation reported them.
    #[must_use]
    pub fn dominated(&self, object: ObjectId) -> &[ObjectId] {
        self.graph
            .node(object)
            .map(HeapObject::dominated)
            .unwrap_or_default()
    }

    /// Returns `true` if `object` was strongly reachable from the super-root
    /// at the last computation.
    #[must_use]
    pub fn is_reachable(&self, object: ObjectId) -> bool {
        object == self.super_root || self.immediate_dominator(object).is_some()
    }

    /// Returns how `object` was reachable from the GC roots at the last
    /// computation. Unknown ids are [`Reachability::Unreachable`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use heapdom::heap::{HeapGraph, Reachability, ReferenceKind};
    ///
    /// let mut heap = HeapGraph::new();
    /// let map = heap.add_object("WeakHashMap", 48);
    /// let key = heap.add_object("Key", 16);
    /// heap.add_root(map)?;
    /// heap.add_reference(map, key, ReferenceKind::Weak)?;
    ///
    /// heap.compute_dominators();
    ///
    /// assert_eq!(heap.reachability(map), Reachability::Strong);
    /// assert_eq!(heap.reachability(key), Reachability::Weak);
    /// # Ok::<(), heapdom::Error>(())
    /// ```
    #[must_use]
    pub fn reachability(&self, object: ObjectId) -> Reachability {
        self.graph
            .node(object)
            .map(HeapObject::reachability)
            .unwrap_or_default()
    }

    /// Returns the dominator chain of `object`: the object itself, its
    /// immediate dominator, and so on up to the super-root.
    ///
    /// Empty if the object is not reachable.
    #[must_use]
    pub fn dominator_path(&self, object: ObjectId) -> Vec<ObjectId> {
        if !self.is_reachable(object) {
            return Vec::new();
        }

        let mut path = vec![object];
        let mut current = object;
        while let Some(dominator) = self.immediate_dominator(current) {
            path.push(dominator);
            current = dominator;
        }
        path
    }

    /// Returns `true` if every strong path from the super-root to `object`
    /// passes through `dominator`. Reachable objects dominate themselves.
    #[must_use]
    pub fn dominates(&self, dominator: ObjectId, object: ObjectId) -> bool {
        self.dominator_path(object).contains(&dominator)
    }
}

impl GraphBase for HeapGraph {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = ObjectId> {
        self.graph.node_ids()
    }
}

/// Strong references only.
impl Successors for HeapGraph {
    fn successors(&self, node: ObjectId) -> impl Iterator<Item = ObjectId> {
        self.graph
            .outgoing_edges(node)
            .filter(|(_, _, kind)| kind.is_strong())
            .map(|(_, target, _)| target)
    }
}

impl DominatorsGraph for HeapGraph {
    type Node = ObjectId;

    fn computation_state(&self, node: ObjectId) -> Option<StateId> {
        self.graph.node(node).and_then(|object| object.dominators_state)
    }

    fn set_computation_state(&mut self, node: ObjectId, state: Option<StateId>) {
        if let Some(object) = self.graph.node_mut(node) {
            object.dominators_state = state;
        }
    }

    fn references(&self, node: ObjectId) -> impl Iterator<Item = ObjectId> {
        self.successors(node)
    }

    fn set_dominator(&mut self, node: ObjectId, dominator: ObjectId) {
        if let Some(object) = self.graph.node_mut(node) {
            object.immediate_dominator = Some(dominator);
        }
        if let Some(object) = self.graph.node_mut(dominator) {
            object.dominated.push(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dominators::compute_dominator_tree, graph::NodeId};

    #[test]
    fn test_new_graph_has_super_root() {
        let heap = HeapGraph::new();
        let root = heap.super_root();

        assert_eq!(heap.object_count(), 1);
        assert_eq!(heap.reference_count(), 0);
        let object = heap.object(root).unwrap();
        assert_eq!(object.label(), SUPER_ROOT_LABEL);
        assert_eq!(object.shallow_size(), 0);
        assert_eq!(heap.find_object(SUPER_ROOT_LABEL), None);
    }

    #[test]
    fn test_reference_into_super_root_rejected() {
        let mut heap = HeapGraph::new();
        let a = heap.add_object("a", 8);

        assert!(matches!(
            heap.add_reference(a, heap.super_root(), ReferenceKind::Weak),
            Err(Error::InvalidRoot(node)) if node == heap.super_root()
        ));
        assert!(matches!(
            heap.add_root(heap.super_root()),
            Err(Error::InvalidRoot(_))
        ));
        assert_eq!(heap.reference_count(), 0);
    }

    #[test]
    fn test_reference_to_unknown_object_rejected() {
        let mut heap = HeapGraph::new();
        let a = heap.add_object("a", 8);

        let result = heap.add_reference(a, NodeId::new(42), ReferenceKind::Strong);
        assert!(matches!(result, Err(Error::GraphError(_))));
        assert!(matches!(
            heap.add_root(NodeId::new(42)),
            Err(Error::GraphError(_))
        ));
    }

    #[test]
    fn test_weak_references_do_not_dominate() {
        // root -> a -> c, root -> b =weak=> c
        let mut heap = HeapGraph::new();
        let a = heap.add_object("a", 8);
        let b = heap.add_object("b", 8);
        let c = heap.add_object("c", 8);
        heap.add_root(a).unwrap();
        heap.add_root(b).unwrap();
        heap.add_reference(a, c, ReferenceKind::Strong).unwrap();
        heap.add_reference(b, c, ReferenceKind::Weak).unwrap();

        heap.compute_dominators();

        assert_eq!(heap.immediate_dominator(c), Some(a));
        assert_eq!(heap.references(b).collect::<Vec<_>>(), vec![(c, ReferenceKind::Weak)]);
    }

    #[test]
    fn test_weakly_held_object_unreachable() {
        let mut heap = HeapGraph::new();
        let a = heap.add_object("a", 8);
        let b = heap.add_object("b", 8);
        heap.add_root(a).unwrap();
        heap.add_reference(a, b, ReferenceKind::Weak).unwrap();

        heap.compute_dominators();

        assert!(heap.is_reachable(a));
        assert!(!heap.is_reachable(b));
        assert_eq!(heap.immediate_dominator(b), None);
        assert!(heap.dominator_path(b).is_empty());
        assert_eq!(heap.reachable_objects().collect::<Vec<_>>(), vec![heap.super_root(), a]);
    }

    #[test]
    fn test_reachability_levels() {
        // root -> a =weak=> b -> c, d is referenced by nothing reachable
        let mut heap = HeapGraph::new();
        let a = heap.add_object("a", 8);
        let b = heap.add_object("b", 8);
        let c = heap.add_object("c", 8);
        let d = heap.add_object("d", 8);
        heap.add_root(a).unwrap();
        heap.add_reference(a, b, ReferenceKind::Weak).unwrap();
        heap.add_reference(b, c, ReferenceKind::Strong).unwrap();
        heap.add_reference(d, a, ReferenceKind::Strong).unwrap();

        assert_eq!(heap.reachability(a), Reachability::Unreachable);
        heap.compute_dominators();

        assert_eq!(heap.reachability(heap.super_root()), Reachability::Strong);
        assert_eq!(heap.reachability(a), Reachability::Strong);
        assert_eq!(heap.reachability(b), Reachability::Weak);
        assert_eq!(heap.reachability(c), Reachability::Weak);
        assert_eq!(heap.reachability(d), Reachability::Unreachable);
        assert_eq!(heap.reachability(NodeId::new(99)), Reachability::Unreachable);
    }

    #[test]
    fn test_reachability_upgraded_by_strong_path() {
        let mut heap = HeapGraph::new();
        let a = heap.add_object("a", 8);
        let b = heap.add_object("b", 8);
        heap.add_root(a).unwrap();
        heap.add_reference(a, b, ReferenceKind::Weak).unwrap();
        heap.compute_dominators();
        assert_eq!(heap.reachability(b), Reachability::Weak);

        heap.add_root(b).unwrap();
        heap.compute_dominators();
        assert_eq!(heap.reachability(b), Reachability::Strong);
    }

    #[test]
    fn test_shared_object_dominated_by_super_root() {
        let mut heap = HeapGraph::new();
        let r1 = heap.add_object("r1", 8);
        let r2 = heap.add_object("r2", 8);
        let x = heap.add_object("x", 8);
        heap.add_root(r1).unwrap();
        heap.add_root(r2).unwrap();
        heap.add_reference(r1, x, ReferenceKind::Strong).unwrap();
        heap.add_reference(r2, x, ReferenceKind::Strong).unwrap();

        heap.compute_dominators();

        assert_eq!(heap.immediate_dominator(x), Some(heap.super_root()));
        assert_eq!(heap.roots().collect::<Vec<_>>(), vec![r1, r2]);

        let mut dominated = heap.dominated(heap.super_root()).to_vec();
        dominated.sort();
        assert_eq!(dominated, vec![r1, r2, x]);
        assert!(heap.dominated(r1).is_empty());
    }

    #[test]
    fn test_recompute_discards_previous_results() {
        let mut heap = HeapGraph::new();
        let a = heap.add_object("a", 8);
        let b = heap.add_object("b", 8);
        let c = heap.add_object("c", 8);
        heap.add_root(a).unwrap();
        heap.add_reference(a, b, ReferenceKind::Strong).unwrap();
        heap.add_reference(b, c, ReferenceKind::Strong).unwrap();

        heap.compute_dominators();
        assert_eq!(heap.immediate_dominator(c), Some(b));
        assert_eq!(heap.dominated(b), &[c]);

        // A second path to c moves it up to a
        heap.add_reference(a, c, ReferenceKind::Strong).unwrap();
        heap.compute_dominators();

        assert_eq!(heap.immediate_dominator(c), Some(a));
        assert!(heap.dominated(b).is_empty());
        let mut dominated = heap.dominated(a).to_vec();
        dominated.sort();
        assert_eq!(dominated, vec![b, c]);
        assert!(heap.objects().all(|(_, object)| object.dominators_state.is_none()));
    }

    #[test]
    fn test_dominator_path_and_dominates() {
        let mut heap = HeapGraph::new();
        let a = heap.add_object("a", 8);
        let b = heap.add_object("b", 8);
        let c = heap.add_object("c", 8);
        heap.add_root(a).unwrap();
        heap.add_reference(a, b, ReferenceKind::Strong).unwrap();
        heap.add_reference(b, c, ReferenceKind::Strong).unwrap();
        heap.add_reference(c, b, ReferenceKind::Strong).unwrap();

        heap.compute_dominators();

        let root = heap.super_root();
        assert_eq!(heap.dominator_path(c), vec![c, b, a, root]);
        assert_eq!(heap.dominator_path(root), vec![root]);
        assert!(heap.dominates(a, c));
        assert!(heap.dominates(c, c));
        assert!(!heap.dominates(c, b));
    }

    #[test]
    fn test_unknown_ids_in_queries() {
        let heap = HeapGraph::new();
        let unknown = NodeId::new(9);

        assert!(heap.object(unknown).is_none());
        assert!(heap.dominated(unknown).is_empty());
        assert_eq!(heap.references(unknown).count(), 0);
        assert_eq!(heap.referrers(unknown).count(), 0);
        assert!(!heap.is_reachable(unknown));
    }

    #[test]
    fn test_matches_side_table_tree() {
        let mut heap = HeapGraph::new();
        let objects: Vec<ObjectId> = (0..6)
            .map(|i| heap.add_object(format!("o{i}"), 4))
            .collect();
        heap.add_root(objects[0]).unwrap();
        heap.add_root(objects[3]).unwrap();
        for (from, to, kind) in [
            (0, 1, ReferenceKind::Strong),
            (1, 2, ReferenceKind::Strong),
            (3, 2, ReferenceKind::Strong),
            (2, 4, ReferenceKind::Strong),
            (4, 5, ReferenceKind::Weak),
            (1, 5, ReferenceKind::Strong),
        ] {
            heap.add_reference(objects[from], objects[to], kind).unwrap();
        }

        heap.compute_dominators();
        let tree = compute_dominator_tree(&heap, heap.super_root());

        for (id, _) in heap.objects() {
            assert_eq!(heap.immediate_dominator(id), tree.immediate_dominator(id));
        }
        assert_eq!(heap.immediate_dominator(objects[2]), Some(heap.super_root()));
        assert_eq!(heap.immediate_dominator(objects[5]), Some(objects[1]));
    }

    #[test]
    fn test_referrers_include_weak() {
        let mut heap = HeapGraph::new();
        let a = heap.add_object("a", 8);
        let b = heap.add_object("b", 8);
        heap.add_root(b).unwrap();
        heap.add_reference(a, b, ReferenceKind::Weak).unwrap();

        let referrers: Vec<_> = heap.referrers(b).collect();
        assert_eq!(
            referrers,
            vec![
                (heap.super_root(), ReferenceKind::Strong),
                (a, ReferenceKind::Weak)
            ]
        );
    }
}
