//! Request options controlling strategy selection,
//! output shaping and costing.

use serde::{Deserialize, Serialize};

use crate::primitives::WaypointLocation;

/// How the input shape relates to the road network, and therefore
/// which matching strategy the engine should run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ShapeMatch {
    /// The trace is the exact shape of a prior route; walk it edge by edge.
    EdgeWalk,
    /// The trace is approximate; snap it with the probabilistic matcher.
    MapSnap,
    /// Try the edge walk, fall back to map matching if it finds no path.
    #[default]
    WalkOrSnap,
}

/// The output shape the caller asked for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TraceAction {
    /// One or more routes, split at every discontinuity.
    #[default]
    TraceRoute,
    /// A single leg spanning the whole trace with full attribute detail,
    /// tolerating internal gaps.
    TraceAttributes,
}

/// Wire format the serializer will render the solution into.
///
/// Only [`OutputFormat::Osrm`] changes the engine's behaviour: it requires
/// the per-point candidate enrichment alongside the routed result.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Osrm,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Drive,
    Bicycle,
    Pedestrian,
}

/// Costing configuration handed through to the collaborators.
/// Evaluation of the model itself happens on their side.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Costing {
    pub mode: TravelMode,
}

/// Options for one trace request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceOptions {
    pub shape_match: ShapeMatch,
    pub action: TraceAction,
    pub format: OutputFormat,
    pub costing: Costing,

    /// Ranked interpretations to request from the matcher. Honoured only
    /// for [`TraceAction::TraceAttributes`]; discontinuities force
    /// multi-route output, which does not combine with alternates.
    pub best_paths: usize,

    /// User-supplied waypoints. The edge walk requires at least an origin
    /// and a destination.
    pub locations: Vec<WaypointLocation>,

    /// Opts the request out of the admin-region reporting that runs after
    /// a successful assembly.
    pub do_not_track: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        TraceOptions {
            shape_match: ShapeMatch::default(),
            action: TraceAction::default(),
            format: OutputFormat::default(),
            costing: Costing::default(),
            best_paths: 1,
            locations: Vec::new(),
            do_not_track: false,
        }
    }
}
