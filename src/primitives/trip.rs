use geo::LineString;
use serde::{Deserialize, Serialize};

/// One continuously-drivable rendered portion of a trip, populated by the
/// external geometry builder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Leg {
    pub shape: LineString,
    /// Elapsed cost (seconds) over the whole leg.
    pub elapsed: f64,
    /// Administrative regions the leg traverses.
    pub admins: Vec<String>,
}

impl Default for Leg {
    fn default() -> Self {
        Leg {
            shape: LineString::new(Vec::new()),
            elapsed: 0.0,
            admins: Vec::new(),
        }
    }
}

/// An ordered group of legs presented to the caller as one route.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Route {
    pub legs: Vec<Leg>,
}

impl Route {
    pub fn single(leg: Leg) -> Self {
        Route { legs: vec![leg] }
    }
}

/// The finished product: an ordered sequence of routes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Trip {
    pub routes: Vec<Route>,
}

impl Trip {
    pub fn legs(&self) -> impl Iterator<Item = &Leg> {
        self.routes.iter().flat_map(|route| route.legs.iter())
    }
}
