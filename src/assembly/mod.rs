//! The match-to-route assembly engine.
//!
//! Selects between the exact edge-walk matcher and the probabilistic
//! map-match pipeline, reconciles their output into edge sequences with
//! tracked discontinuities, and emits the waypoint/route/leg indexing
//! contract the downstream geometry builder relies on.

pub mod error;
mod route;
mod snap;
mod trace;
mod walk;

#[doc(inline)]
pub use error::AssemblyError;

use itertools::Itertools;
use log::{debug, warn};

use crate::external::{EdgeInfo, EdgeWalker, LegBuilder, OfflineMatcher, PathRepair};
use crate::options::{ShapeMatch, TraceOptions};
use crate::primitives::{Leg, PointAnnotations, ScoredMatch, Trace, Trip};

/// The finished product of one trace request.
#[derive(Debug)]
pub struct TraceSolution {
    pub trip: Trip,
    /// One scored entry per assembled interpretation, in rank order,
    /// correlated with the routes appended to the trip. Empty for an
    /// edge-walked request.
    pub matches: Vec<ScoredMatch>,
    /// Per-point labels for the serializer, index-aligned with the trace.
    pub annotations: PointAnnotations,
}

/// Turns a GPS trace into one or more finished routes.
///
/// All working state is request-scoped; the router itself only borrows its
/// collaborators and may be shared across concurrent requests as long as
/// they are safe for concurrent reads.
pub struct TraceRouter<'a> {
    pub(crate) walker: &'a dyn EdgeWalker,
    pub(crate) matcher: &'a dyn OfflineMatcher,
    pub(crate) repair: &'a dyn PathRepair,
    pub(crate) geometry: &'a dyn LegBuilder,
    pub(crate) edges: &'a dyn EdgeInfo,
}

impl<'a> TraceRouter<'a> {
    pub fn new(
        walker: &'a dyn EdgeWalker,
        matcher: &'a dyn OfflineMatcher,
        repair: &'a dyn PathRepair,
        geometry: &'a dyn LegBuilder,
        edges: &'a dyn EdgeInfo,
    ) -> Self {
        TraceRouter {
            walker,
            matcher,
            repair,
            geometry,
            edges,
        }
    }

    /// Runs one trace request to completion.
    ///
    /// One-shot strategy selection: the only retry that exists is the
    /// explicit walk-to-snap fallback of [`ShapeMatch::WalkOrSnap`]. A
    /// failure leaves no partial trip behind.
    pub fn trace_route(
        &self,
        trace: &Trace,
        options: &TraceOptions,
    ) -> Result<TraceSolution, AssemblyError> {
        let solution = match options.shape_match {
            ShapeMatch::EdgeWalk => {
                self.route_match(trace, options)
                    .ok_or(AssemblyError::StrategyExhausted {
                        mode: ShapeMatch::EdgeWalk,
                    })?
            }
            ShapeMatch::MapSnap => self.map_match(trace, options)?,
            ShapeMatch::WalkOrSnap => match self.route_match(trace, options) {
                Some(solution) => solution,
                None => {
                    warn!(
                        "{} algorithm failed to find exact route match; falling back to map_match...",
                        options.shape_match
                    );
                    self.map_match(trace, options)?
                }
            },
        };

        if !options.do_not_track {
            for leg in solution.trip.legs() {
                self.log_admin(leg);
            }
        }

        Ok(solution)
    }

    fn log_admin(&self, leg: &Leg) {
        if leg.admins.is_empty() {
            return;
        }

        debug!(
            "leg traversed admin regions: {}",
            leg.admins.iter().join(", ")
        );
    }
}
