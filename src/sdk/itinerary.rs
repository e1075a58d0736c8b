use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use super::geo::GeoPoint;

// --- Fixed reference points ---

/// Don Rafael Restaurant and Coffee Shop, Sumulong Highway, Antipolo.
pub const DON_RAFAEL: GeoPoint = GeoPoint::new(14.612621, 121.1546);

/// Señorita Rica café, a short walk from the restaurant.
pub const SENORITA_RICA: GeoPoint = GeoPoint::new(14.612596, 121.154323);

/// LRT 1 Monumento station, where the commute starts.
pub const MONUMENTO_STATION: GeoPoint = GeoPoint::new(14.6533, 120.9833);

/// One narrative stage of the journey. Coarser than a routing leg: the
/// catalog keeps its six entries however many legs the service returns.
#[derive(Debug, Clone, Serialize)]
pub struct CommuteStep {
    pub label: String,
    pub detail: String,
}

impl CommuteStep {
    fn new(label: &str, detail: &str) -> Self {
        Self {
            label: label.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// The planned trip. Passed explicitly into the route fetch and the
/// viewport mapper so tests can substitute their own.
#[derive(Debug, Clone)]
pub struct Itinerary {
    pub steps: Vec<CommuteStep>,
    pub waypoints: Vec<GeoPoint>,
    pub station: GeoPoint,
    pub destination: GeoPoint,
    pub cafe: GeoPoint,
    pub date: NaiveDate,
    pub pickup: NaiveTime,
}

impl Itinerary {
    /// The Monumento → Antipolo trip the presentation walks through:
    /// LRT 1 from Monumento, transfer to LRT 2 up to Masinag, then
    /// Sumulong Highway to the restaurant.
    pub fn default_trip() -> Self {
        Self {
            steps: vec![
                CommuteStep::new("9:00 AM – I'll pick you up from your house.", "Pickup time"),
                CommuteStep::new("LRT 1 (Monumento)", "Board at Monumento station"),
                CommuteStep::new("Transfer to LRT 2", "Connect to LRT 2 line"),
                CommuteStep::new("LRT 2 Antipolo (Masinag)", "Alight at terminal station"),
                CommuteStep::new("Sumulong Highway", "Toward the restaurant"),
                CommuteStep::new(
                    "Don Rafael",
                    "Sumulong Highway, Brgy. Mambugan, Antipolo City",
                ),
            ],
            waypoints: vec![
                MONUMENTO_STATION,
                GeoPoint::new(14.618, 121.001),   // LRT 2 transfer
                GeoPoint::new(14.6256, 121.1247), // LRT 2 Antipolo (Masinag)
                GeoPoint::new(14.62, 121.14),     // Sumulong Highway
                DON_RAFAEL,
            ],
            station: MONUMENTO_STATION,
            destination: DON_RAFAEL,
            cafe: SENORITA_RICA,
            date: NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
            pickup: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        }
    }

    pub fn last_step_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}
