use geo::Point;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Where a gap touches an edge: the snapped position and the
/// percent-distance along the edge at which the geometry is trimmed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GapMarker {
    pub position: Point,
    pub distance_along: f64,
}

/// The begin/end trim markers for one global edge index.
///
/// `begin` set means the leg geometry on this edge starts partway along it
/// (a gap ended here); `end` set means it is cut off partway (a gap starts
/// here). An absent half reads as untrimmed. The geometry builder uses
/// these to render a break without synthesizing a connecting path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDiscontinuity {
    pub begin: Option<GapMarker>,
    pub end: Option<GapMarker>,
}

/// Sparse map of trim markers, keyed by global edge index.
pub type DiscontinuityMap = FxHashMap<usize, RouteDiscontinuity>;

/// Two-phase recorder for the gaps of one continuous-trace assembly.
///
/// A gap opens where the route is cut off and closes where it resumes,
/// possibly on the same edge index. The two halves of an entry are only
/// ever merged; overwriting an already-set half, or closing a gap that was
/// never opened, is an upstream inconsistency caught in debug builds.
#[derive(Debug, Default)]
pub struct DiscontinuityBuilder {
    entries: DiscontinuityMap,
    pending: bool,
}

impl DiscontinuityBuilder {
    /// Records that a gap starts after `edge_index`: the edge's geometry is
    /// cut off at `distance_along`.
    pub fn open_at(&mut self, edge_index: usize, position: Point, distance_along: f64) {
        let entry = self.entries.entry(edge_index).or_default();
        debug_assert!(
            entry.end.is_none(),
            "a gap was already opened at edge index {edge_index}"
        );

        entry.end = Some(GapMarker {
            position,
            distance_along,
        });
        self.pending = true;
    }

    /// Records that the pending gap ends on `edge_index`: the edge's
    /// geometry resumes at `distance_along`.
    pub fn close_at(&mut self, edge_index: usize, position: Point, distance_along: f64) {
        debug_assert!(self.pending, "closed a gap that was never opened");

        let entry = self.entries.entry(edge_index).or_default();
        debug_assert!(
            entry.begin.is_none(),
            "a gap was already closed at edge index {edge_index}"
        );

        entry.begin = Some(GapMarker {
            position,
            distance_along,
        });
        self.pending = false;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_map(self) -> DiscontinuityMap {
        self.entries
    }
}
