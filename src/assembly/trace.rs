use crate::assembly::{AssemblyError, TraceRouter};
use crate::primitives::{
    DiscontinuityBuilder, EdgeCost, EdgeId, MatchTable, MatchedPath, Route, Trip, WaypointLocation,
};

impl TraceRouter<'_> {
    /// Merges every repaired path of one interpretation into a single leg
    /// spanning the whole trace, recording internal gaps for the geometry
    /// builder instead of splitting on them.
    pub(crate) fn build_trace(
        &self,
        paths: &[MatchedPath],
        table: &mut MatchTable,
        trip: &mut Trip,
    ) -> Result<(), AssemblyError> {
        let mut discontinuities = DiscontinuityBuilder::default();
        let mut last_edge: Option<EdgeId> = None;
        let mut edge_index = 0usize;
        let mut origin: Option<usize> = None;
        let mut destination: Option<usize> = None;

        for path in paths {
            // Stamp the running global edge index onto the matches each
            // segment covers. The index advances on every edge-identifier
            // transition, so adjacent segments sharing one edge across a
            // path boundary keep a single index between them and an edge
            // split over two paths is never counted twice.
            for segment in &path.segments {
                if last_edge.is_some_and(|last| last != segment.edge) {
                    edge_index += 1;
                }
                last_edge = Some(segment.edge);

                for index in [segment.first_match_idx, segment.last_match_idx]
                    .into_iter()
                    .flatten()
                {
                    table.result_mut(index).edge_index = Some(edge_index);
                    origin.get_or_insert(index);
                    destination = Some(index);
                }
            }

            // A path that resumes after a gap closes it at its first match;
            // one that is cut off opens the next gap at its last match. The
            // two can land on the same edge index, in which case the entry
            // carries both halves.
            if let Some(index) = path.segments.first().and_then(|s| s.first_match_idx) {
                let first_match = table.result(index);
                if first_match.ends_discontinuity {
                    if let Some(edge_index) = first_match.edge_index {
                        discontinuities.close_at(
                            edge_index,
                            first_match.position,
                            first_match.distance_along,
                        );
                    }
                }
            }

            if let Some(index) = path.segments.last().and_then(|s| s.last_match_idx) {
                let last_match = table.result(index);
                if last_match.begins_discontinuity {
                    if let Some(edge_index) = last_match.edge_index {
                        discontinuities.open_at(
                            edge_index,
                            last_match.position,
                            last_match.distance_along,
                        );
                    }
                }
            }
        }

        // The interpretation produced no usable coverage at all.
        let (origin, destination) = origin.zip(destination).ok_or(AssemblyError::NoCoverage)?;

        let origin = WaypointLocation::from_match(table.result(origin));
        let destination = WaypointLocation::from_match(table.result(destination));

        // Smash all path edges into a single sequence, folding an edge that
        // was split across two paths back into one. The fold is keyed on
        // identifier equality, so it holds whether or not repair merged the
        // boundary already.
        let mut edges: Vec<EdgeCost> = Vec::with_capacity(edge_index + 1);
        for path in paths {
            let merge = matches!(
                (edges.last(), path.edges.first()),
                (Some(last), Some(first)) if last.edge == first.edge
            );
            edges.extend_from_slice(&path.edges[usize::from(merge)..]);
        }

        let leg = self.geometry.build_leg(
            &edges,
            &origin,
            &destination,
            &[],
            &discontinuities.into_map(),
        );
        trip.routes.push(Route::single(leg));

        Ok(())
    }
}
