use super::error::RoutingError;
use super::route::RouteResult;
use crate::sdk::geo::GeoPoint;

/// The seam between the presentation shell and the route backend. Swap in a
/// canned implementation to exercise consumers without network access.
///
/// Calls block until the response arrives and run at most once per view
/// activation. There is no retry; a caller torn down mid-flight should drop
/// the result rather than apply it.
pub trait RoutingProvider {
    /// Driving route through every waypoint in order. Needs at least two
    /// waypoints.
    fn driving_route(&self, waypoints: &[GeoPoint]) -> Result<RouteResult, RoutingError>;

    /// Walking route between two points.
    fn walking_route(&self, from: GeoPoint, to: GeoPoint) -> Result<Vec<GeoPoint>, RoutingError>;
}
