use crate::assembly::TraceRouter;
use crate::primitives::{
    DiscontinuityMap, MatchTable, MatchedPath, PointAnnotations, Route, Trip, WaypointLocation,
};

impl TraceRouter<'_> {
    /// Splits the repaired paths of one interpretation into independent
    /// routes at every discontinuity, numbering waypoints per route.
    ///
    /// Both the match results and the segments are topologically sorted in
    /// trace order; a path whose segments cover no match index violates
    /// that contract and aborts the process rather than producing a
    /// mis-indexed trip.
    pub(crate) fn build_route(
        &self,
        paths: &[MatchedPath],
        table: &MatchTable,
        annotations: &mut PointAnnotations,
        trip: &mut Trip,
    ) {
        let mut current: Option<Route> = None;
        let mut route_index = 0usize;
        let mut way_point_index = 0usize;

        for path in paths {
            if current.is_none() {
                way_point_index = 0;
            }
            let route = current.get_or_insert_with(Route::default);

            let origin_idx = path
                .segments
                .first()
                .and_then(|segment| segment.first_match_idx)
                .expect("repaired path covers no match indices");
            let destination_idx = path
                .segments
                .last()
                .and_then(|segment| segment.last_match_idx)
                .expect("repaired path covers no match indices");

            for index in origin_idx..=destination_idx {
                annotations.assign_route(index, route_index);
            }

            // Multi-route serializers need both the matching index and the
            // waypoint number; consecutive legs of one route share the
            // boundary waypoint.
            annotations.mark_waypoint(origin_idx, way_point_index);
            annotations.mark_waypoint(destination_idx, way_point_index + 1);

            let mut origin = WaypointLocation::from_match(table.result(origin_idx));
            origin.route_index = Some(route_index);
            origin.shape_index = Some(way_point_index);

            let mut destination = WaypointLocation::from_match(table.result(destination_idx));
            destination.route_index = Some(route_index);
            destination.shape_index = Some(way_point_index + 1);

            way_point_index += 1;

            let leg = self.geometry.build_leg(
                &path.edges,
                &origin,
                &destination,
                &[],
                &DiscontinuityMap::default(),
            );
            route.legs.push(leg);

            // A trailing discontinuity ends the current route; the next
            // path opens a new one.
            if path
                .segments
                .last()
                .is_some_and(|segment| segment.discontinuity)
            {
                if let Some(route) = current.take() {
                    trip.routes.push(route);
                }
                route_index += 1;
            }
        }

        if let Some(route) = current.take() {
            trip.routes.push(route);
        }
    }
}
