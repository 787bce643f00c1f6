use geo::Point;
use serde::{Deserialize, Serialize};

use crate::primitives::edge::EdgeId;
use crate::primitives::result::MatchResult;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SideOfStreet {
    Left,
    Right,
}

/// A candidate edge resolved for a waypoint location.
///
/// Also doubles as the per-point enrichment record for formats that render
/// match points inline: an empty [placeholder](CandidateEdge::placeholder)
/// stands for an additional candidate the matcher weighed, so consumers
/// can report candidate counts without the full candidate data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateEdge {
    pub edge: EdgeId,
    pub position: Point,
    pub percent_along: f64,
    /// Distance in meters between the location and this candidate.
    pub distance: f64,
    pub names: Vec<String>,
}

impl CandidateEdge {
    pub fn from_match(result: &MatchResult) -> Self {
        CandidateEdge {
            edge: result.edge,
            position: result.position,
            percent_along: result.distance_along,
            distance: result.distance_from,
            names: Vec::new(),
        }
    }

    pub fn named(result: &MatchResult, names: Vec<String>) -> Self {
        CandidateEdge {
            names,
            ..CandidateEdge::from_match(result)
        }
    }

    /// An empty candidate, signalling one more viable edge at match time.
    pub fn placeholder() -> Self {
        CandidateEdge {
            edge: EdgeId::null(),
            position: Point::new(0.0, 0.0),
            percent_along: 0.0,
            distance: 0.0,
            names: Vec::new(),
        }
    }
}

/// A synthesized or user-supplied placeholder marking a route endpoint.
///
/// The geometry builder treats every endpoint as one of these, whether it
/// came in on the request or was faked up from a match result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaypointLocation {
    pub position: Point,
    /// Epoch seconds, for time-dependent geometry building.
    pub timestamp: Option<u64>,
    pub candidates: Vec<CandidateEdge>,
    pub side_of_street: Option<SideOfStreet>,
    pub minimum_reachability: Option<u32>,

    /// Which route of a multi-route trip this waypoint belongs to.
    pub route_index: Option<usize>,
    /// Waypoint number within that route.
    pub shape_index: Option<usize>,
}

impl WaypointLocation {
    pub fn new(position: Point) -> Self {
        WaypointLocation {
            position,
            timestamp: None,
            candidates: Vec::new(),
            side_of_street: None,
            minimum_reachability: None,
            route_index: None,
            shape_index: None,
        }
    }

    /// Synthesizes a waypoint from a match result, so matched endpoints can
    /// be handed to the geometry builder uniformly with real input
    /// locations.
    ///
    /// Side-of-street and minimum reachability stay unset. A continuous
    /// match cannot tell which side of the road the traveller started from,
    /// and reachability is moot once the match has already succeeded.
    pub fn from_match(result: &MatchResult) -> Self {
        WaypointLocation {
            candidates: vec![CandidateEdge::from_match(result)],
            ..WaypointLocation::new(result.position)
        }
    }
}
