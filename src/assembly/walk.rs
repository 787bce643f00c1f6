use crate::assembly::{TraceRouter, TraceSolution};
use crate::options::TraceOptions;
use crate::primitives::{DiscontinuityMap, PointAnnotations, Route, Trace, Trip};

impl TraceRouter<'_> {
    /// Forms a trip by walking the exact input shape along the network.
    ///
    /// For use when the shape is the exact shape of a prior route: the
    /// pathfinder compares the shape against edge end-node positions to
    /// form the edge list, which is fully connected by construction, so a
    /// single leg between the request's first and last waypoint covers the
    /// whole trace. Returns `None` when the pathfinder reports no path, or
    /// when the request carries fewer than two waypoints to span it with;
    /// the dispatcher decides whether to fall back.
    pub(crate) fn route_match(
        &self,
        trace: &Trace,
        options: &TraceOptions,
    ) -> Option<TraceSolution> {
        let (origin, destination) = match options.locations.as_slice() {
            [origin, .., destination] => (origin, destination),
            _ => return None,
        };

        let path = self.walker.form_path(trace, &options.costing, &options.locations)?;

        // The searched origin inherits the timing the shape carried, so a
        // time-dependent build sees the same departure as the trace.
        let mut origin = origin.clone();
        if let Some(timestamp) = trace.first().and_then(|point| point.timestamp) {
            origin.timestamp = Some(timestamp);
        }

        let leg = self.geometry.build_leg(
            &path,
            &origin,
            destination,
            &[],
            &DiscontinuityMap::default(),
        );

        let mut trip = Trip::default();
        trip.routes.push(Route::single(leg));

        Some(TraceSolution {
            trip,
            matches: Vec::new(),
            annotations: PointAnnotations::new(trace.len()),
        })
    }
}
