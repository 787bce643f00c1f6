use serde::{Deserialize, Serialize};

/// Opaque identifier of a directed edge on the road-network graph.
///
/// The null identifier marks an unmatched position; every consumer must
/// check [`EdgeId::is_valid`] before dereferencing an edge against the
/// graph store.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    pub const fn new(identifier: u64) -> EdgeId {
        EdgeId(identifier)
    }

    pub const fn null() -> EdgeId {
        EdgeId(u64::MAX)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 != u64::MAX
    }

    pub const fn identifier(&self) -> u64 {
        self.0
    }
}

/// One edge of a drivable path, with the cost accumulated
/// at the end of the edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeCost {
    pub edge: EdgeId,
    /// Elapsed cost (seconds) to the end of this edge.
    pub cost: f64,
}

impl EdgeCost {
    pub fn new(edge: EdgeId, cost: f64) -> Self {
        EdgeCost { edge, cost }
    }
}
