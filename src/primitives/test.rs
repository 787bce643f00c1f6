use approx::assert_relative_eq;
use geo::Point;

use crate::primitives::*;

fn pt(x: f64) -> Point {
    Point::new(x, 0.0)
}

#[test]
fn edge_id_null_is_invalid() {
    assert!(!EdgeId::null().is_valid());
    assert!(EdgeId::new(7).is_valid());
    assert_eq!(EdgeId::new(7).identifier(), 7);
}

#[test]
fn trace_stays_ordered() {
    let trace = Trace::new([
        TracePoint::new(pt(0.0)).with_timestamp(100),
        TracePoint::new(pt(1.0)),
        TracePoint::new(pt(2.0)),
    ]);

    assert_eq!(trace.len(), 3);
    assert_eq!(trace.first().and_then(|point| point.timestamp), Some(100));
    assert_eq!(trace.linestring().0.len(), 3);
    assert_relative_eq!(trace.linestring().0[2].x, 2.0);
}

#[test]
#[should_panic(expected = "align")]
fn match_table_rejects_misaligned_results() {
    let results = vec![
        MatchResult::unmatched(pt(0.0)),
        MatchResult::unmatched(pt(1.0)),
    ];

    MatchTable::new(3, results);
}

#[test]
fn match_table_indexes_like_the_trace() {
    let results = vec![
        MatchResult::matched(pt(0.0), EdgeId::new(1), 0.25, 3.0),
        MatchResult::unmatched(pt(1.0)),
    ];
    let mut table = MatchTable::new(2, results);

    assert_eq!(table.result(0).edge, EdgeId::new(1));
    assert!(!table.result(1).edge.is_valid());

    table.result_mut(1).edge_index = Some(4);
    assert_eq!(table[1].edge_index, Some(4));
    assert_eq!(table.len(), 2);
}

#[test]
fn waypoint_from_match_restricts_fields() {
    let result = MatchResult::matched(pt(3.0), EdgeId::new(9), 0.75, 12.5);
    let waypoint = WaypointLocation::from_match(&result);

    assert_eq!(waypoint.position, pt(3.0));
    assert!(waypoint.side_of_street.is_none());
    assert!(waypoint.minimum_reachability.is_none());
    assert!(waypoint.route_index.is_none());

    let [candidate] = waypoint.candidates.as_slice() else {
        panic!("expected exactly one candidate edge");
    };
    assert_eq!(candidate.edge, EdgeId::new(9));
    assert_relative_eq!(candidate.percent_along, 0.75);
    assert_relative_eq!(candidate.distance, 12.5);
    assert!(candidate.names.is_empty());
}

#[test]
fn candidate_placeholder_is_empty() {
    let placeholder = CandidateEdge::placeholder();
    assert!(!placeholder.edge.is_valid());
    assert!(placeholder.names.is_empty());
}

#[test]
fn discontinuity_defaults_to_untrimmed() {
    let entry = RouteDiscontinuity::default();
    assert!(entry.begin.is_none());
    assert!(entry.end.is_none());
}

#[test]
fn discontinuity_halves_land_on_their_indices() {
    let mut builder = DiscontinuityBuilder::default();
    builder.open_at(1, pt(3.0), 0.9);
    builder.close_at(2, pt(4.0), 0.1);

    let map = builder.into_map();
    assert_eq!(map.len(), 2);

    let opened = map.get(&1).unwrap();
    assert!(opened.begin.is_none());
    assert_relative_eq!(opened.end.unwrap().distance_along, 0.9);

    let closed = map.get(&2).unwrap();
    assert!(closed.end.is_none());
    assert_relative_eq!(closed.begin.unwrap().distance_along, 0.1);
}

#[test]
fn discontinuity_merges_on_shared_edge_index() {
    let mut builder = DiscontinuityBuilder::default();
    builder.open_at(5, pt(3.0), 0.8);
    builder.close_at(5, pt(4.0), 0.2);

    let map = builder.into_map();
    assert_eq!(map.len(), 1);

    let entry = map.get(&5).unwrap();
    assert_relative_eq!(entry.end.unwrap().distance_along, 0.8);
    assert_relative_eq!(entry.begin.unwrap().distance_along, 0.2);
}

#[test]
#[should_panic(expected = "never opened")]
fn discontinuity_close_requires_an_open_gap() {
    let mut builder = DiscontinuityBuilder::default();
    builder.close_at(0, pt(0.0), 0.5);
}

#[test]
#[should_panic(expected = "already opened")]
fn discontinuity_never_overwrites_a_half() {
    let mut builder = DiscontinuityBuilder::default();
    builder.open_at(1, pt(0.0), 0.5);
    builder.close_at(2, pt(1.0), 0.5);
    builder.open_at(1, pt(2.0), 0.7);
}
