use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    /// The service answered with a non-success HTTP status.
    #[error("route service returned HTTP {status}")]
    Transport { status: reqwest::StatusCode },

    /// A well-formed response carried no usable route.
    #[error("no route in response (service code {code:?})")]
    RouteNotFound { code: String },

    #[error("driving route needs at least two waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to parse route response: {0}")]
    Parse(#[from] serde_json::Error),
}
