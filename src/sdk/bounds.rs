use super::geo::{BoundingBox, GeoPoint};
use super::itinerary::Itinerary;

/// Half-extent in degrees for viewports built around a single point.
pub const FOCUS_MARGIN_DEG: f64 = 0.006;

/// Where the map should look for a given commute step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepFocus {
    /// No viewport change; the pickup step needs no map focus.
    NoFocus,
    /// A fixed reference point, such as the boarding station.
    FixedPoint(GeoPoint),
    /// The routed leg at this index.
    LegLookup(usize),
    /// The final destination, when the last step has no dedicated leg data.
    FixedDestination,
}

impl Itinerary {
    /// Classifies a step against the number of legs the route actually has.
    ///
    /// Steps 0 and 1 are special-cased (pickup, boarding station); from
    /// step 2 on, the leg index is the step index minus two. The service
    /// may return fewer legs than the catalog implies, so an out-of-range
    /// lookup falls back to the destination on the last step and to no
    /// focus anywhere else.
    pub fn focus_for_step(&self, step_index: usize, leg_count: usize) -> StepFocus {
        match step_index {
            0 => StepFocus::NoFocus,
            1 => StepFocus::FixedPoint(self.station),
            _ => {
                let leg_index = step_index - 2;
                if leg_index < leg_count {
                    StepFocus::LegLookup(leg_index)
                } else if step_index == self.last_step_index() {
                    StepFocus::FixedDestination
                } else {
                    StepFocus::NoFocus
                }
            }
        }
    }

    /// Resolves the viewport for a step, or `None` when the map should not
    /// move.
    pub fn resolve_bounds(
        &self,
        step_index: usize,
        legs: &[Vec<GeoPoint>],
    ) -> Option<BoundingBox> {
        match self.focus_for_step(step_index, legs.len()) {
            StepFocus::NoFocus => None,
            StepFocus::FixedPoint(point) => Some(BoundingBox::around(point, FOCUS_MARGIN_DEG)),
            StepFocus::LegLookup(leg_index) => segment_bounds(&legs[leg_index]),
            StepFocus::FixedDestination => {
                Some(BoundingBox::around(self.destination, FOCUS_MARGIN_DEG))
            }
        }
    }
}

/// Viewport for one polyline: the enclosing box, except a lone point gets
/// the fixed margin so the box is never degenerate.
pub fn segment_bounds(segment: &[GeoPoint]) -> Option<BoundingBox> {
    match segment {
        [] => None,
        [only] => Some(BoundingBox::around(*only, FOCUS_MARGIN_DEG)),
        _ => BoundingBox::enclosing(segment),
    }
}
