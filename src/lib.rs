pub mod sdk;

pub use sdk::bounds::{segment_bounds, StepFocus, FOCUS_MARGIN_DEG};
pub use sdk::config::OsrmConfig;
pub use sdk::deck::SlideDeck;
pub use sdk::geo::{BoundingBox, GeoPoint};
pub use sdk::itinerary::{CommuteStep, Itinerary};
pub use sdk::routing::{OsrmProvider, RouteResult, RoutingError, RoutingProvider};
