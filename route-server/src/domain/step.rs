//! Itinerary step type.

use serde::Serialize;

/// What a step describes, in canonical travel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Walk for some minutes (or a producer-supplied description).
    Walk,
    /// Board a vehicle at a stop.
    Board,
    /// The vehicle itself.
    Vehicle,
    /// Ride to a stop and get off there (mid-journey alight).
    RideTo,
    /// Get off at the final stop.
    Alight,
}

/// One renderable line item of an itinerary.
///
/// Steps carry no identity beyond their position in the derived sequence;
/// rendering decides how each kind is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    pub label: String,
}

impl Step {
    pub fn new(kind: StepKind, label: impl Into<String>) -> Self {
        Step {
            kind,
            label: label.into(),
        }
    }
}
