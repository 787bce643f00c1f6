use serde::{Deserialize, Serialize};

use crate::primitives::edge::EdgeCost;
use crate::primitives::result::MatchResult;
use crate::primitives::segment::EdgeSegment;

/// One internally-connected, drivable run of edges, materialised by path
/// repair from a matcher interpretation.
///
/// A single interpretation may decompose into several paths separated
/// by discontinuities.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchedPath {
    pub edges: Vec<EdgeCost>,
    pub segments: Vec<EdgeSegment>,
}

impl MatchedPath {
    pub fn new(edges: Vec<EdgeCost>, segments: Vec<EdgeSegment>) -> Self {
        MatchedPath { edges, segments }
    }
}

/// One ranked candidate reading of the trace, as reported by the matcher.
///
/// Interpretations arrive ranked best-first. An interpretation whose
/// segment list is empty signals that no path exists for it.
#[derive(Clone, Debug, Default)]
pub struct Interpretation {
    /// Raw matcher score; lower is better.
    pub score: f64,
    pub results: Vec<MatchResult>,
    pub segments: Vec<EdgeSegment>,
}

/// The scored outcome of assembling one interpretation, correlated by
/// position with the routes appended to the trip.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoredMatch {
    /// Relative confidence: `1.0` for the best interpretation, then
    /// `best_raw / this_raw` for each alternate.
    pub confidence: f64,
    pub raw_score: f64,
    pub results: Vec<MatchResult>,
}
