use geo::Point;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::primitives::edge::EdgeId;

/// Handle into the matcher's internal state container.
///
/// Carried through only so the candidate count at a trace point can be
/// reported to output formats that want it.
pub type StateId = usize;

/// The outcome of matching one trace point.
///
/// Produced once by the matcher; the assembler only annotates it by
/// filling [`edge_index`](MatchResult::edge_index).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The snapped coordinate on the matched edge.
    pub position: Point,
    /// The matched edge, or [`EdgeId::null`] when the point went unmatched.
    pub edge: EdgeId,
    /// Percent-distance along the matched edge, in `0.0..=1.0`.
    pub distance_along: f64,
    /// Distance in meters from the raw point to the snap point.
    pub distance_from: f64,

    /// Global edge index, stamped during assembly.
    pub edge_index: Option<usize>,
    /// A gap in the matched path starts after this point.
    pub begins_discontinuity: bool,
    /// A gap in the matched path ends at this point.
    pub ends_discontinuity: bool,

    pub state: Option<StateId>,
}

impl MatchResult {
    pub fn matched(position: Point, edge: EdgeId, distance_along: f64, distance_from: f64) -> Self {
        MatchResult {
            position,
            edge,
            distance_along,
            distance_from,
            edge_index: None,
            begins_discontinuity: false,
            ends_discontinuity: false,
            state: None,
        }
    }

    pub fn unmatched(position: Point) -> Self {
        MatchResult::matched(position, EdgeId::null(), 0.0, 0.0)
    }

    pub fn with_state(mut self, state: StateId) -> Self {
        self.state = Some(state);
        self
    }
}

/// The match results of one interpretation, held index-aligned with
/// the trace that produced them.
///
/// `table[i]` always corresponds to trace point `i`. The constructor
/// enforces the alignment so downstream indexing never drifts from it.
#[derive(Clone, Debug)]
pub struct MatchTable {
    results: Vec<MatchResult>,
}

impl MatchTable {
    pub fn new(trace_len: usize, results: Vec<MatchResult>) -> Self {
        debug_assert_eq!(
            trace_len,
            results.len(),
            "match results must align one-to-one with the trace"
        );
        MatchTable { results }
    }

    pub fn result(&self, index: usize) -> &MatchResult {
        &self.results[index]
    }

    pub fn result_mut(&mut self, index: usize) -> &mut MatchResult {
        &mut self.results[index]
    }

    pub fn into_results(self) -> Vec<MatchResult> {
        self.results
    }
}

impl Deref for MatchTable {
    type Target = [MatchResult];

    fn deref(&self) -> &Self::Target {
        &self.results
    }
}
