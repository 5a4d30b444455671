//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, RouteRecord, StepKind};
use crate::favorites::Favorite;

/// Request to search routes to a destination.
#[derive(Debug, Deserialize)]
pub struct SearchRoutesRequest {
    /// Free-text destination query
    pub destination: String,
}

/// A route candidate in search results.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResult {
    /// Label for the line badge ("-" when unknown)
    pub line_label: String,

    /// Destination name as supplied by the producer (may be empty)
    pub destination: String,

    /// Time until the first boarding ("" when unknown)
    pub eta_label: String,

    /// Which planning path produced this record, if not a direct route
    pub source_badge: Option<String>,

    /// Whether there are itinerary steps to expand
    pub has_detail: bool,

    /// Itinerary steps in travel order
    pub steps: Vec<StepResult>,
}

/// One itinerary step.
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    pub kind: StepKind,
    pub label: String,
}

/// Response for route search.
#[derive(Debug, Serialize)]
pub struct SearchRoutesResponse {
    /// Matching route candidates
    pub routes: Vec<RouteResult>,
}

/// Request to add a favorite.
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub name: String,
    pub from: String,
    pub to: String,
}

/// Request to change a favorite's destination.
#[derive(Debug, Deserialize)]
pub struct RenameFavoriteRequest {
    pub to: String,
}

/// Response listing favorites.
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Favorite>,
}

/// Route candidates for one favorite.
#[derive(Debug, Serialize)]
pub struct FavoriteRoutesResult {
    pub favorite: Favorite,
    pub routes: Vec<RouteResult>,
}

/// Response for the favorites bulk search.
#[derive(Debug, Serialize)]
pub struct FavoriteRoutesResponse {
    pub results: Vec<FavoriteRoutesResult>,
}

/// Request to create an account.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Request to sign in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for a successful sign-in (or sign-up).
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque session token
    pub token: String,

    /// Display name of the signed-in user
    pub full_name: String,
}

/// Request to sign out.
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub token: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteResult {
    /// Create from a raw route record.
    pub fn from_record(record: &RouteRecord) -> Self {
        let itinerary = Itinerary::from_record(record);
        let steps = itinerary
            .steps()
            .iter()
            .map(|s| StepResult {
                kind: s.kind,
                label: s.label.clone(),
            })
            .collect();

        Self {
            line_label: itinerary.line_label().to_string(),
            destination: record.destination_name.display_text(),
            eta_label: itinerary.eta_label().to_string(),
            source_badge: source_badge(record),
            has_detail: itinerary.has_detail(),
            steps,
        }
    }
}

/// Badge text for the planning path that produced a record.
///
/// Direct routes (and records without the tag) get no badge; the two
/// transfer-node paths are distinguished for debugging route quality.
pub fn source_badge(record: &RouteRecord) -> Option<String> {
    let tag = record.source_node.display_text();
    if tag.is_empty() || tag == "direct" {
        return None;
    }
    if tag == "return 2 bus path" {
        Some("NODE 2".to_string())
    } else {
        Some("NODE 1".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawValue;

    fn split_record() -> RouteRecord {
        serde_json::from_str(
            r#"{
                "name": "Dizengoff Center",
                "name_bus_route": 18,
                "min_befor_firstBus_arrive": 6,
                "walking_time1": 3,
                "bus_stop_ride1": "Herzl St 25",
                "bus_stop_code1": "20104",
                "bus_name1": "Bus 18 southbound",
                "bus_stop_exit1": "Central Station",
                "bus_stop_code2": "20371",
                "walking_time2": 5,
                "bus_stop_ride2": "North Terminal",
                "bus_stop_code3": "20440",
                "bus_name2": "Bus 142 northbound",
                "bus_stop_exit2": "Dizengoff Center",
                "bus_stop_code4": "21655",
                "walking_time3": 2
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn route_result_from_split_record() {
        let result = RouteResult::from_record(&split_record());

        assert_eq!(result.line_label, "18");
        assert_eq!(result.destination, "Dizengoff Center");
        assert_eq!(result.eta_label, "6 minutes");
        assert_eq!(result.source_badge, None);
        assert!(result.has_detail);
        assert_eq!(result.steps.len(), 9);
        assert_eq!(result.steps[0].kind, StepKind::Walk);
        assert_eq!(result.steps[3].label, "Central Station (20371)");
    }

    #[test]
    fn route_result_from_merged_record() {
        let mut record = split_record();
        record.board_stop_name2 = RawValue::Text("Central Station".into());
        let result = RouteResult::from_record(&record);

        // The alight/walk/board triple collapses into one stop step.
        assert_eq!(result.steps.len(), 7);
        let central_mentions = result
            .steps
            .iter()
            .filter(|s| s.label.starts_with("Central Station"))
            .count();
        assert_eq!(central_mentions, 1);
    }

    #[test]
    fn route_result_from_empty_record() {
        let result = RouteResult::from_record(&RouteRecord::default());

        assert_eq!(result.line_label, "-");
        assert_eq!(result.destination, "");
        assert_eq!(result.eta_label, "");
        assert!(!result.has_detail);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn source_badge_mapping() {
        let mut record = RouteRecord::default();
        assert_eq!(source_badge(&record), None);

        record.source_node = RawValue::Text("direct".into());
        assert_eq!(source_badge(&record), None);

        record.source_node = RawValue::Text("return 1 bus path".into());
        assert_eq!(source_badge(&record), Some("NODE 1".to_string()));

        record.source_node = RawValue::Text("return 2 bus path".into());
        assert_eq!(source_badge(&record), Some("NODE 2".to_string()));
    }

    #[test]
    fn steps_serialize_with_kind_tags() {
        let result = RouteResult::from_record(&split_record());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["steps"][0]["kind"], "walk");
        assert_eq!(json["steps"][1]["kind"], "board");
        assert_eq!(json["steps"][2]["kind"], "vehicle");
    }
}
