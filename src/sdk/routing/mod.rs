pub mod error;
pub mod provider;
pub mod route;
pub mod service;

pub use error::RoutingError;
pub use provider::OsrmProvider;
pub use route::{parse_driving_response, parse_walking_response, waypoint_path, RouteResult};
pub use service::RoutingProvider;
