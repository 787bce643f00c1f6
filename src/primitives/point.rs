use geo::{LineString, Point};
use serde::{Deserialize, Serialize};

/// One GPS measurement of a trace.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub position: Point,
    /// Epoch seconds, when the device reported one.
    pub timestamp: Option<u64>,
    /// Reported accuracy radius in meters.
    pub accuracy: Option<f64>,
}

impl TracePoint {
    pub fn new(position: Point) -> Self {
        TracePoint {
            position,
            timestamp: None,
            accuracy: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// An ordered sequence of GPS measurements.
///
/// Ordering is temporal and semantically significant; every structure the
/// engine derives from a trace stays index-aligned with it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Trace(Vec<TracePoint>);

impl From<Vec<TracePoint>> for Trace {
    fn from(points: Vec<TracePoint>) -> Self {
        Trace(points)
    }
}

impl FromIterator<TracePoint> for Trace {
    fn from_iter<I: IntoIterator<Item = TracePoint>>(iter: I) -> Self {
        Trace(iter.into_iter().collect())
    }
}

impl Trace {
    pub fn new(points: impl IntoIterator<Item = TracePoint>) -> Self {
        points.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&TracePoint> {
        self.0.first()
    }

    pub fn points(&self) -> &[TracePoint] {
        &self.0
    }

    /// Converts the trace into a [`LineString`] of its raw positions.
    pub fn linestring(&self) -> LineString {
        self.0.iter().map(|point| point.position).collect()
    }
}
