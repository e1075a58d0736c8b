use date_commute::sdk::geo::GeoPoint;
use date_commute::sdk::itinerary::Itinerary;
use date_commute::sdk::routing::{
    parse_driving_response, parse_walking_response, RouteResult, RoutingError, RoutingProvider,
};
use serde_json::json;

fn driving_body() -> String {
    // One route from Monumento to Don Rafael: overview plus a single leg
    // whose lone step repeats the same pair in reverse.
    json!({
        "code": "Ok",
        "routes": [{
            "geometry": {
                "coordinates": [[120.9833, 14.6533], [121.1546, 14.612621]]
            },
            "legs": [{
                "steps": [{
                    "geometry": {
                        "coordinates": [[121.1546, 14.612621], [120.9833, 14.6533]]
                    }
                }]
            }]
        }]
    })
    .to_string()
}

#[test]
fn driving_parse_swaps_wire_order_and_keeps_overview_order() {
    let route = parse_driving_response(&driving_body()).unwrap();

    assert_eq!(
        route.full_coordinates,
        vec![
            GeoPoint::new(14.6533, 120.9833),
            GeoPoint::new(14.612621, 121.1546),
        ]
    );
    assert_eq!(route.legs.len(), 1);
    assert_eq!(
        route.legs[0],
        vec![
            GeoPoint::new(14.612621, 121.1546),
            GeoPoint::new(14.6533, 120.9833),
        ]
    );
}

#[test]
fn leg_count_stays_under_waypoint_count() {
    // Three waypoints worth of route, two legs, one of them without steps.
    let body = json!({
        "code": "Ok",
        "routes": [{
            "geometry": { "coordinates": [[121.0, 14.6], [121.1, 14.62], [121.2, 14.61]] },
            "legs": [
                { "steps": [{ "geometry": { "coordinates": [[121.0, 14.6], [121.1, 14.62]] } }] },
                { "steps": [] }
            ]
        }]
    })
    .to_string();

    let route = parse_driving_response(&body).unwrap();
    assert_eq!(route.legs.len(), 1);
    assert!(route.legs.len() <= 3 - 1);
}

#[test]
fn missing_step_geometry_falls_back_to_a_single_synthetic_leg() {
    let body = json!({
        "code": "Ok",
        "routes": [{
            "geometry": { "coordinates": [[121.0, 14.6], [121.2, 14.61]] },
            "legs": [{ "steps": [] }, { "steps": [] }]
        }]
    })
    .to_string();

    let route = parse_driving_response(&body).unwrap();
    assert_eq!(route.legs.len(), 1);
    assert_eq!(route.legs[0], route.full_coordinates);
}

#[test]
fn empty_overview_and_legs_yield_an_empty_result() {
    let body = json!({
        "code": "Ok",
        "routes": [{}]
    })
    .to_string();

    let route = parse_driving_response(&body).unwrap();
    assert!(route.full_coordinates.is_empty());
    assert!(route.legs.is_empty());
}

#[test]
fn non_ok_code_is_route_not_found() {
    let body = json!({ "code": "NoRoute", "routes": [] }).to_string();
    let err = parse_driving_response(&body).unwrap_err();
    assert!(matches!(err, RoutingError::RouteNotFound { ref code } if code == "NoRoute"));
}

#[test]
fn ok_code_without_routes_is_route_not_found() {
    let body = json!({ "code": "Ok", "routes": [] }).to_string();
    let err = parse_driving_response(&body).unwrap_err();
    assert!(matches!(err, RoutingError::RouteNotFound { ref code } if code == "Ok"));
}

#[test]
fn malformed_body_is_a_parse_error() {
    let err = parse_driving_response("{\"code\": \"Ok\", \"routes\": ").unwrap_err();
    assert!(matches!(err, RoutingError::Parse(_)));
}

#[test]
fn walking_parse_preserves_point_order() {
    let body = json!({
        "code": "Ok",
        "routes": [{
            "geometry": {
                "coordinates": [[121.1546, 14.612621], [121.154323, 14.612596]]
            }
        }]
    })
    .to_string();

    let path = parse_walking_response(&body).unwrap();
    assert_eq!(
        path,
        vec![
            GeoPoint::new(14.612621, 121.1546),
            GeoPoint::new(14.612596, 121.154323),
        ]
    );
}

#[test]
fn walking_parse_fails_like_driving_on_no_route() {
    let body = json!({ "code": "NoSegment", "routes": [] }).to_string();
    let err = parse_walking_response(&body).unwrap_err();
    assert!(matches!(err, RoutingError::RouteNotFound { ref code } if code == "NoSegment"));
}

// --- Consumers behind the provider seam ---

struct CannedProvider {
    driving: String,
}

impl RoutingProvider for CannedProvider {
    fn driving_route(&self, waypoints: &[GeoPoint]) -> Result<RouteResult, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::TooFewWaypoints(waypoints.len()));
        }
        parse_driving_response(&self.driving)
    }

    fn walking_route(&self, _: GeoPoint, _: GeoPoint) -> Result<Vec<GeoPoint>, RoutingError> {
        Err(RoutingError::RouteNotFound {
            code: "NoRoute".to_string(),
        })
    }
}

#[test]
fn failed_fetch_leaves_the_straight_line_fallback_to_the_caller() {
    let itinerary = Itinerary::default_trip();
    let provider = CannedProvider {
        driving: json!({ "code": "NoRoute", "routes": [] }).to_string(),
    };

    let route = provider
        .driving_route(&itinerary.waypoints)
        .unwrap_or_else(|_| RouteResult::straight_line(&itinerary.waypoints));

    assert_eq!(route.full_coordinates, itinerary.waypoints);
    assert_eq!(route.legs.len(), itinerary.waypoints.len() - 1);
}

#[test]
fn single_waypoint_is_rejected_before_any_fetch() {
    let provider = CannedProvider {
        driving: driving_body(),
    };
    let err = provider
        .driving_route(&[GeoPoint::new(14.6533, 120.9833)])
        .unwrap_err();
    assert!(matches!(err, RoutingError::TooFewWaypoints(1)));
}
