use serde::Deserialize;

// --- Wire structures for OSRM route responses ---
//
// The service is tolerant about geometry: overview, legs, and steps can all
// be absent, so every nested field defaults to empty rather than failing
// the whole parse.

#[derive(Deserialize)]
pub struct RouteResponse {
    pub code: String,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
pub struct OsrmRoute {
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
}

#[derive(Deserialize, Default)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
pub struct OsrmLeg {
    #[serde(default)]
    pub steps: Vec<OsrmStep>,
}

#[derive(Deserialize)]
pub struct OsrmStep {
    #[serde(default)]
    pub geometry: Geometry,
}
