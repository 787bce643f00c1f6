use log::trace;

use crate::assembly::{AssemblyError, TraceRouter, TraceSolution};
use crate::options::{OutputFormat, TraceAction, TraceOptions};
use crate::primitives::{
    CandidateEdge, Interpretation, MatchTable, PointAnnotations, ScoredMatch, Trace, Trip,
};

impl TraceRouter<'_> {
    /// Forms routes from the probabilistic matcher's ranked
    /// interpretations.
    ///
    /// Each interpretation is repaired into drivable paths and assembled
    /// either into a single gap-tolerant leg or into one route per
    /// connected stretch, depending on the requested output shape. One
    /// unusable interpretation fails the whole request; there is no
    /// partial success.
    pub(crate) fn map_match(
        &self,
        trace: &Trace,
        options: &TraceOptions,
    ) -> Result<TraceSolution, AssemblyError> {
        let mut trip = Trip::default();
        let mut annotations = PointAnnotations::new(trace.len());
        let mut matches: Vec<ScoredMatch> = Vec::new();

        if trace.is_empty() {
            return Ok(TraceSolution {
                trip,
                matches,
                annotations,
            });
        }

        // Discontinuities force multi-route output, so ranked alternates
        // only combine with the single-leg attribute action.
        let top_k = match options.action {
            TraceAction::TraceAttributes => options.best_paths.max(1),
            TraceAction::TraceRoute => 1,
        };

        let interpretations = self.matcher.offline_match(trace, top_k);
        if interpretations.is_empty() {
            return Err(AssemblyError::MapMatchFailed);
        }

        for interpretation in interpretations {
            // No path in a requested interpretation is fatal for the whole
            // request; interpretations are not independently optional.
            if interpretation.segments.is_empty() {
                return Err(AssemblyError::MapMatchFailed);
            }

            let Interpretation {
                score,
                results,
                segments,
            } = interpretation;
            let mut table = MatchTable::new(trace.len(), results);

            let paths = self.repair.form_paths(&table, &segments, &options.costing);
            trace!(
                "repaired interpretation (score {score}) into {} path(s)",
                paths.len()
            );

            // The OSRM rendering of a trace route carries both the route and
            // the match points, so the candidates are filled out here.
            if options.action == TraceAction::TraceRoute && options.format == OutputFormat::Osrm {
                self.enrich_candidates(&table, &mut annotations);
            }

            match options.action {
                TraceAction::TraceAttributes => self.build_trace(&paths, &mut table, &mut trip)?,
                TraceAction::TraceRoute => {
                    self.build_route(&paths, &table, &mut annotations, &mut trip)
                }
            }

            let confidence = match matches.first() {
                Some(best) => best.raw_score / score,
                None => 1.0,
            };

            matches.push(ScoredMatch {
                confidence,
                raw_score: score,
                results: table.into_results(),
            });
        }

        Ok(TraceSolution {
            trip,
            matches,
            annotations,
        })
    }

    /// Fills each matched point's candidate-edge list, padding with empty
    /// placeholders so consumers can report how many edges the matcher
    /// weighed at that point.
    fn enrich_candidates(&self, table: &MatchTable, annotations: &mut PointAnnotations) {
        for (index, result) in table.iter().enumerate() {
            if !result.edge.is_valid() {
                continue;
            }

            // A tile miss only costs us the edge names.
            let names = self.edges.names(result.edge).unwrap_or_default();
            annotations
                .candidates_mut(index)
                .push(CandidateEdge::named(result, names));

            let Some(state) = result.state else {
                continue;
            };
            for _ in 1..self.matcher.candidate_count(state) {
                annotations
                    .candidates_mut(index)
                    .push(CandidateEdge::placeholder());
            }
        }
    }
}
