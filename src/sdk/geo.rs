use serde::{Deserialize, Serialize};

/// A point on the map in display order: latitude first, longitude second.
///
/// The routing wire format uses the opposite (lng, lat) order. Conversions
/// go through [`GeoPoint::from_lng_lat`] and [`GeoPoint::to_lng_lat`] so the
/// swap happens exactly once on each side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a point from a wire-order (lng, lat) pair.
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lng: pair[0],
        }
    }

    /// Projects back to the wire-order (lng, lat) pair.
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// Axis-aligned lat/lng rectangle used to set a map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub sw: GeoPoint,
    pub ne: GeoPoint,
}

impl BoundingBox {
    /// A box of `margin` degrees half-extent in both axes around `center`.
    pub fn around(center: GeoPoint, margin: f64) -> Self {
        Self {
            sw: GeoPoint::new(center.lat - margin, center.lng - margin),
            ne: GeoPoint::new(center.lat + margin, center.lng + margin),
        }
    }

    /// Minimal box enclosing every point, or `None` for an empty slice.
    /// A single-point slice collapses to a degenerate box; callers that
    /// need a visible viewport expand it with [`BoundingBox::around`].
    pub fn enclosing(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut sw = *first;
        let mut ne = *first;
        for p in &points[1..] {
            sw.lat = sw.lat.min(p.lat);
            sw.lng = sw.lng.min(p.lng);
            ne.lat = ne.lat.max(p.lat);
            ne.lng = ne.lng.max(p.lng);
        }
        Some(Self { sw, ne })
    }
}
