use serde::Serialize;

use super::error::RoutingError;
use super::provider::types::{OsrmRoute, RouteResponse};
use crate::sdk::geo::GeoPoint;

/// Value of `code` the route service sends on success.
pub const OSRM_CODE_OK: &str = "Ok";

/// A normalized driving route: the full path plus one polyline per
/// inter-waypoint leg. Leg count never exceeds waypoint count minus one,
/// but may be lower when the service collapses adjacent waypoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub full_coordinates: Vec<GeoPoint>,
    pub legs: Vec<Vec<GeoPoint>>,
}

impl RouteResult {
    /// Straight-line stand-in built directly from the waypoints, for when
    /// the route service is unavailable: the waypoints themselves as the
    /// full path, one two-point leg per consecutive pair.
    pub fn straight_line(waypoints: &[GeoPoint]) -> Self {
        Self {
            full_coordinates: waypoints.to_vec(),
            legs: waypoints.windows(2).map(|pair| pair.to_vec()).collect(),
        }
    }
}

/// Serializes waypoints into the `lng,lat;lng,lat` path segment the route
/// service expects.
pub fn waypoint_path(waypoints: &[GeoPoint]) -> String {
    waypoints
        .iter()
        .map(|p| format!("{},{}", p.lng, p.lat))
        .collect::<Vec<_>>()
        .join(";")
}

/// Parses a driving-profile response body into a [`RouteResult`].
///
/// The overview geometry becomes the full coordinate sequence, order
/// preserved. Each leg's step geometries are flattened into one polyline
/// and legs without any geometry are dropped. When no leg survives but the
/// overview is non-empty, the whole overview stands in as a single leg so
/// callers always have at least one leg to render.
pub fn parse_driving_response(body: &str) -> Result<RouteResult, RoutingError> {
    let response: RouteResponse = serde_json::from_str(body)?;
    let route = usable_route(response)?;

    let full_coordinates: Vec<GeoPoint> = route
        .geometry
        .coordinates
        .iter()
        .copied()
        .map(GeoPoint::from_lng_lat)
        .collect();

    let mut legs: Vec<Vec<GeoPoint>> = route
        .legs
        .iter()
        .map(|leg| {
            leg.steps
                .iter()
                .flat_map(|step| step.geometry.coordinates.iter().copied())
                .map(GeoPoint::from_lng_lat)
                .collect::<Vec<GeoPoint>>()
        })
        .filter(|leg| !leg.is_empty())
        .collect();

    if legs.is_empty() && !full_coordinates.is_empty() {
        legs.push(full_coordinates.clone());
    }

    Ok(RouteResult {
        full_coordinates,
        legs,
    })
}

/// Parses a walking-profile response body into an ordered point sequence.
pub fn parse_walking_response(body: &str) -> Result<Vec<GeoPoint>, RoutingError> {
    let response: RouteResponse = serde_json::from_str(body)?;
    let route = usable_route(response)?;
    Ok(route
        .geometry
        .coordinates
        .iter()
        .copied()
        .map(GeoPoint::from_lng_lat)
        .collect())
}

fn usable_route(response: RouteResponse) -> Result<OsrmRoute, RoutingError> {
    let RouteResponse { code, routes } = response;
    if code != OSRM_CODE_OK {
        return Err(RoutingError::RouteNotFound { code });
    }
    routes
        .into_iter()
        .next()
        .ok_or(RoutingError::RouteNotFound { code })
}
