use reqwest::blocking::Client;

use crate::sdk::config::OsrmConfig;
use crate::sdk::geo::GeoPoint;
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::route::{self, RouteResult};
use crate::sdk::routing::service::RoutingProvider;

// --- OSRM-backed provider ---
//
// Same GET shape for both profiles; only the profile segment and the
// per-step detail flag differ. No timeout beyond the client default: a
// hung request is left to the caller's loading state.

pub struct OsrmProvider {
    client: Client,
    base_url: String,
}

impl OsrmProvider {
    pub fn new(config: OsrmConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url,
        }
    }

    fn fetch(&self, url: &str) -> Result<String, RoutingError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RoutingError::Transport { status });
        }
        Ok(response.text()?)
    }
}

impl RoutingProvider for OsrmProvider {
    fn driving_route(&self, waypoints: &[GeoPoint]) -> Result<RouteResult, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::TooFewWaypoints(waypoints.len()));
        }
        let url = format!(
            "{}/route/v1/driving/{}?overview=full&geometries=geojson&steps=true",
            self.base_url,
            route::waypoint_path(waypoints)
        );
        log::debug!(
            "[PROVIDER] Fetching driving route through {} waypoints",
            waypoints.len()
        );
        let body = self.fetch(&url)?;
        route::parse_driving_response(&body)
    }

    fn walking_route(&self, from: GeoPoint, to: GeoPoint) -> Result<Vec<GeoPoint>, RoutingError> {
        let url = format!(
            "{}/route/v1/foot/{}?overview=full&geometries=geojson",
            self.base_url,
            route::waypoint_path(&[from, to])
        );
        log::debug!(
            "[PROVIDER] Fetching walking route {:?} -> {:?}",
            from,
            to
        );
        let body = self.fetch(&url)?;
        route::parse_walking_response(&body)
    }
}
