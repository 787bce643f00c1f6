use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::primitives::waypoint::CandidateEdge;

/// Serializer-facing labels for one trace point.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointAnnotation {
    /// Which route of the trip covers this point.
    pub route_index: Option<usize>,
    /// Waypoint number within that route; `None` for points that are not
    /// route endpoints.
    pub waypoint_index: Option<usize>,
    /// Candidate edges resolved for this point, populated only for formats
    /// that render match points inline.
    pub candidates: Vec<CandidateEdge>,
}

/// Per-assembly annotations, index-aligned with the trace.
///
/// These replace any in-place stamping of the request's shape array: the
/// assembler writes here, and the serializer reads the finished structure
/// out of the solution.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PointAnnotations(Vec<PointAnnotation>);

impl PointAnnotations {
    pub fn new(trace_len: usize) -> Self {
        PointAnnotations(vec![PointAnnotation::default(); trace_len])
    }

    /// Labels a point as covered by `route_index`, resetting its waypoint
    /// number to the not-a-waypoint sentinel.
    pub fn assign_route(&mut self, index: usize, route_index: usize) {
        let annotation = &mut self.0[index];
        annotation.route_index = Some(route_index);
        annotation.waypoint_index = None;
    }

    pub fn mark_waypoint(&mut self, index: usize, waypoint_index: usize) {
        self.0[index].waypoint_index = Some(waypoint_index);
    }

    pub fn candidates_mut(&mut self, index: usize) -> &mut Vec<CandidateEdge> {
        &mut self.0[index].candidates
    }
}

impl Deref for PointAnnotations {
    type Target = [PointAnnotation];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
