use strum::{EnumCount, EnumIter};

/// Strength of a reference between two heap objects.
///
/// Only [`ReferenceKind::Strong`] references keep their target alive. Soft,
/// weak, phantom and finalizer references all collapse to
/// [`ReferenceKind::Weak`]: they are recorded in the graph so explorers can
/// show them, but they never take part in reachability or dominance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum ReferenceKind {
    /// A regular reference that keeps its target alive
    #[default]
    Strong,
    /// A reference the garbage collector may clear
    Weak,
}

impl ReferenceKind {
    /// Returns `true` if references of this kind keep their target alive.
    #[must_use]
    pub fn is_strong(self) -> bool {
        self == ReferenceKind::Strong
    }

    /// Lowercase name as used in heap-graph text files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceKind::Strong => "strong",
            ReferenceKind::Weak => "weak",
        }
    }
}

/// How an object can be reached from the GC roots.
///
/// Ordered from most to least reachable. Only strongly reachable objects take
/// part in dominance; weakly reachable ones are kept alive by nothing but
/// references of kind [`ReferenceKind::Weak`] somewhere on every path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumIter, EnumCount,
)]
pub enum Reachability {
    /// Reachable over strong references alone
    Strong,
    /// Reachable, but only through at least one weak reference
    Weak,
    /// Not reachable from any GC root
    #[default]
    Unreachable,
}

impl Reachability {
    /// Lowercase name used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Reachability::Strong => "strong",
            Reachability::Weak => "weak",
            Reachability::Unreachable => "unreachable",
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_default_is_strong() {
        assert_eq!(ReferenceKind::default(), ReferenceKind::Strong);
        assert!(ReferenceKind::Strong.is_strong());
        assert!(!ReferenceKind::Weak.is_strong());
    }

    #[test]
    fn test_all_kinds_named() {
        let names: Vec<&str> = ReferenceKind::iter().map(ReferenceKind::as_str).collect();
        assert_eq!(names, vec!["strong", "weak"]);
        assert_eq!(ReferenceKind::COUNT, 2);
    }

    #[test]
    fn test_reachability_ordering() {
        let levels: Vec<Reachability> = Reachability::iter().collect();
        assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(Reachability::default(), Reachability::Unreachable);
        assert_eq!(Reachability::Weak.as_str(), "weak");
        assert_eq!(Reachability::COUNT, 3);
    }
}
