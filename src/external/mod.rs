//! Boundary contracts the assembly engine depends on.
//!
//! Each trait specifies a collaborator by its inputs and outputs only; the
//! internals — search, scoring, tile storage, geometry construction — live
//! on the implementor's side.

use crate::options::Costing;
use crate::primitives::{
    DiscontinuityMap, EdgeCost, EdgeId, EdgeSegment, Interpretation, Leg, MatchResult, MatchedPath,
    StateId, Trace, WaypointLocation,
};

/// Exact-shape pathfinder: walks the input shape against edge end-node
/// positions to form the list of edges.
pub trait EdgeWalker {
    /// Returns the ordered edge-cost sequence covering the whole trace, or
    /// `None` when no exact path exists.
    fn form_path(
        &self,
        trace: &Trace,
        costing: &Costing,
        locations: &[WaypointLocation],
    ) -> Option<Vec<EdgeCost>>;
}

/// Probabilistic matcher scoring candidate interpretations of a noisy
/// trace.
pub trait OfflineMatcher {
    /// Matches the trace offline, returning up to `top_k` interpretations
    /// ranked best-first.
    ///
    /// Never fails: an interpretation with an empty segment list signals
    /// that no path exists for it.
    fn offline_match(&self, trace: &Trace, top_k: usize) -> Vec<Interpretation>;

    /// How many candidate edges the matcher weighed at `state`.
    fn candidate_count(&self, state: StateId) -> usize;
}

/// Reconnects an interpretation's chunked segments into drivable paths.
pub trait PathRepair {
    fn form_paths(
        &self,
        results: &[MatchResult],
        segments: &[EdgeSegment],
        costing: &Costing,
    ) -> Vec<MatchedPath>;
}

/// Builds one rendered leg (shape, attributes, elapsed time) from an edge
/// sequence and its endpoints.
pub trait LegBuilder {
    fn build_leg(
        &self,
        edges: &[EdgeCost],
        origin: &WaypointLocation,
        destination: &WaypointLocation,
        via: &[WaypointLocation],
        discontinuities: &DiscontinuityMap,
    ) -> Leg;
}

/// Edge attribute lookup against the graph-tile store.
pub trait EdgeInfo {
    /// Names attached to `edge`; `None` on a tile miss.
    fn names(&self, edge: EdgeId) -> Option<Vec<String>>;
}
