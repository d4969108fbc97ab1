use crate::geometry::GeoPoint;
use crate::graph::RoadEdge;

use log::trace;

/// Speed assumed for a road whose limit cannot be looked up, in km/h
const FALLBACK_SPEED_KMH: f64 = 55.0;


/// Supplies the traversal cost of a single road segment
///
/// The weighted searches consult the oracle once per relaxed edge, so an
/// implementation backed by a live lookup must bound its own latency and
/// absorb its own failures; returning a fallback cost is always preferable
/// to stalling the search. Costs must be non-negative.
pub trait CostOracle {
    fn edge_cost(&self, from: &GeoPoint, edge: &RoadEdge) -> f64;
}

/// Adapts a plain closure over the edge endpoints into an oracle
pub struct FnCost<F>(pub F);

impl<F> CostOracle for FnCost<F>
where
    F: Fn(&GeoPoint, &RoadEdge) -> f64,
{
    fn edge_cost(&self, from: &GeoPoint, edge: &RoadEdge) -> f64 {
        (self.0)(from, edge)
    }
}


/// Physical length of the road segment, in km
/// Paths found under this oracle are shortest by distance
pub struct EdgeLengthCost;

impl CostOracle for EdgeLengthCost {
    fn edge_cost(&self, _from: &GeoPoint, edge: &RoadEdge) -> f64 {
        edge.length
    }
}


/// Travel time proxy: segment length divided by the speed limit at the
/// target intersection
///
/// The speed lookup is injected so callers decide where limits come from
/// (a map attribute, a cache, a remote service). A lookup that returns None
/// degrades to a fixed fallback speed; it never aborts the search. Any
/// timeout or caching policy belongs inside the lookup itself.
pub struct TravelTimeCost<L> {
    lookup: L,
    fallback_speed: f64,
}

impl<L> TravelTimeCost<L>
where
    L: Fn(&GeoPoint) -> Option<f64>,
{
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            fallback_speed: FALLBACK_SPEED_KMH,
        }
    }

    pub fn with_fallback_speed(lookup: L, fallback_speed: f64) -> Self {
        Self {
            lookup,
            fallback_speed,
        }
    }
}

impl<L> CostOracle for TravelTimeCost<L>
where
    L: Fn(&GeoPoint) -> Option<f64>,
{
    fn edge_cost(&self, _from: &GeoPoint, edge: &RoadEdge) -> f64 {
        let speed = match (self.lookup)(&edge.target) {
            Some(limit) if limit > 0.0 => limit,
            _ => {
                trace!("no speed limit for {:?}, using fallback", edge.target);
                self.fallback_speed
            }
        };
        edge.length / speed
    }
}
