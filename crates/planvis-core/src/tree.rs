//! The reconstructed tree's sole persistent structure.

// ─────────────────────────────────────────────────────────────────────────────
// ParentMap
// ─────────────────────────────────────────────────────────────────────────────

/// Child-index to parent-index relation covering every event except the root.
///
/// Built once by the inferencer from a finalized event sequence and
/// read-only afterward. Index 0 is always the root and has no entry.
/// Every stored parent index is strictly smaller than its child index,
/// which makes the structure acyclic and connected by construction.
///
/// The node count is carried explicitly: a single-event sequence has one
/// node and no edges, which an edge list alone could not distinguish from
/// an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentMap {
    /// Number of events the map was built over.
    node_count: usize,
    /// `parents[i - 1]` is the parent of child `i`; the root has no slot.
    parents: Vec<usize>,
}

impl ParentMap {
    /// Build from the event count and parent assignments for children
    /// `1..node_count`.
    ///
    /// # Panics
    ///
    /// Panics if the assignment count does not match the event count, or
    /// if any assignment does not strictly decrease the index — the
    /// inferencer guarantees both; violating the latter would mean a cycle.
    pub fn from_parents(node_count: usize, parents: Vec<usize>) -> Self {
        assert_eq!(
            parents.len(),
            node_count.saturating_sub(1),
            "every node except the root needs exactly one parent"
        );
        for (slot, &parent) in parents.iter().enumerate() {
            let child = slot + 1;
            assert!(parent < child, "parent {parent} must precede child {child}");
        }
        Self { node_count, parents }
    }

    /// Parent of `child`, or `None` for the root (index 0) and for
    /// indices outside the event sequence.
    pub fn parent(&self, child: usize) -> Option<usize> {
        if child == 0 {
            return None;
        }
        self.parents.get(child - 1).copied()
    }

    /// Number of events the map covers (children plus the root), or 0
    /// for a map built over an empty sequence.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges (one per non-root event).
    pub fn edge_count(&self) -> usize {
        self.parents.len()
    }

    /// Iterate `(child, parent)` pairs in child order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .map(|(slot, &parent)| (slot + 1, parent))
    }

    /// Children of `node`, in index order.
    pub fn children(&self, node: usize) -> Vec<usize> {
        self.iter()
            .filter(|&(_, parent)| parent == node)
            .map(|(child, _)| child)
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
