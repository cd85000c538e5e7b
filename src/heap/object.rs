use crate::{dominators::StateId, graph::NodeId, heap::Reachability};

/// Identifier of an object in a [`HeapGraph`](crate::heap::HeapGraph).
pub type ObjectId = NodeId;

/// One object of a heap snapshot.
///
/// Besides its descriptive payload an object carries the slot the dominators
/// engine uses while a computation runs, and the results it delivers.
#[derive(Debug, Clone)]
pub struct HeapObject {
    label: String,
    shallow_size: u64,
    pub(crate) dominators_state: Option<StateId>,
    pub(crate) immediate_dominator: Option<ObjectId>,
    pub(crate) dominated: Vec<ObjectId>,
    pub(crate) reachability: Reachability,
}

impl HeapObject {
    pub(crate) fn new(label: impl Into<String>, shallow_size: u64) -> Self {
        HeapObject {
            label: label.into(),
            shallow_size,
            dominators_state: None,
            immediate_dominator: None,
            dominated: Vec::new(),
            reachability: Reachability::Unreachable,
        }
    }

    /// Human readable name, usually the class name plus an address.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Size of the object itself, excluding anything it references.
    #[must_use]
    pub fn shallow_size(&self) -> u64 {
        self.shallow_size
    }

    /// Immediate dominator from the last computation, `None` for the
    /// super-root and for objects that are not strongly reachable.
    #[must_use]
    pub fn immediate_dominator(&self) -> Option<ObjectId> {
        self.immediate_dominator
    }

    /// Objects this one immediately dominates, in the order the last
    /// computation reported them.
    #[must_use]
    pub fn dominated(&self) -> &[ObjectId] {
        &self.dominated
    }

    /// Reachability from the GC roots as of the last computation.
    #[must_use]
    pub fn reachability(&self) -> Reachability {
        self.reachability
    }

    pub(crate) fn clear_dominators(&mut self) {
        self.dominators_state = None;
        self.immediate_dominator = None;
        self.dominated.clear();
        self.reachability = Reachability::Unreachable;
    }
}
