//! The route record handed over by a trip feed.

use serde::Deserialize;

use super::RawValue;

/// One travel-route candidate as produced by an external trip planner.
///
/// The shape is deliberately loose: every field may be a string, a number,
/// or missing, and different producers use different field names for the
/// same slot. The serde aliases below are the explicit mapping from the
/// known producer dialects onto one fully-specified record; unknown fields
/// are ignored, so any superset deserializes cleanly.
///
/// A record describes up to two rides with walks around them:
/// walk, board stop 1, vehicle 1, (transfer), vehicle 2, alight stop 2,
/// walk. The four stop-code slots are positional in the producer data
/// (`bus_stop_code1`..`bus_stop_code4`); see
/// [`Itinerary`](super::Itinerary) for how the transfer branch pairs them
/// with stop names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RouteRecord {
    /// Walking minutes before the first ride.
    #[serde(alias = "walking_time1", alias = "walkBeforeFirstRide")]
    pub walk_before_first_ride: RawValue,

    /// Stop where the first ride is boarded.
    #[serde(alias = "bus_stop_ride1", alias = "boardStopName1")]
    pub board_stop_name1: RawValue,

    /// Code of the first board stop (first code slot).
    #[serde(alias = "bus_stop_code1", alias = "boardStopCode1")]
    pub board_stop_code1: RawValue,

    /// Label of the first vehicle.
    #[serde(alias = "bus_name1", alias = "vehicleLabel1")]
    pub vehicle_label1: RawValue,

    /// Stop where the first ride is left.
    #[serde(alias = "bus_stop_exit1", alias = "alightStopName1")]
    pub alight_stop_name1: RawValue,

    /// Code of the first alight stop (second code slot).
    #[serde(alias = "bus_stop_code2", alias = "alightStopCode1")]
    pub alight_stop_code1: RawValue,

    /// Walking minutes between the two rides.
    #[serde(alias = "walking_time2", alias = "walkBetweenLegs")]
    pub walk_between_legs: RawValue,

    /// Stop where the second ride is boarded.
    #[serde(alias = "bus_stop_ride2", alias = "boardStopName2")]
    pub board_stop_name2: RawValue,

    /// Code of the second board stop (third code slot).
    #[serde(alias = "bus_stop_code3", alias = "boardStopCode2")]
    pub board_stop_code2: RawValue,

    /// Label of the second vehicle.
    #[serde(alias = "bus_name2", alias = "vehicleLabel2")]
    pub vehicle_label2: RawValue,

    /// Stop where the second ride is left.
    #[serde(alias = "bus_stop_exit2", alias = "alightStopName2")]
    pub alight_stop_name2: RawValue,

    /// Code of the final alight stop (fourth code slot).
    #[serde(alias = "bus_stop_code4", alias = "alightStopCode2")]
    pub alight_stop_code2: RawValue,

    /// Walking minutes after the last ride.
    #[serde(alias = "walking_time3", alias = "walkAfterLastRide")]
    pub walk_after_last_ride: RawValue,

    /// Label shown on the line badge.
    #[serde(alias = "name_bus_route", alias = "lineNumber")]
    pub line_number: RawValue,

    /// Human-readable destination of the route.
    #[serde(alias = "name", alias = "destinationName")]
    pub destination_name: RawValue,

    /// Minutes until the first vehicle can be boarded.
    #[serde(alias = "min_befor_firstBus_arrive", alias = "minutesUntilFirstBoarding")]
    pub minutes_until_first_boarding: RawValue,

    /// Producer tag for which planning path emitted this record
    /// ("direct", or one of the transfer-node paths).
    #[serde(alias = "sourceNode")]
    pub source_node: RawValue,
}
