//! Itinerary derivation.
//!
//! Turns one partially-populated [`RouteRecord`] into the display-ready
//! pieces a route card needs: the line badge label, the ETA label, and an
//! ordered step sequence. The derivation is pure and infallible: missing
//! or mistyped fields degrade to omitted steps or fallback text, never to
//! an error.
//!
//! Step order always mirrors physical travel order: walk, board, ride,
//! transfer, ride, alight, walk. Fields are only ever omitted, never
//! reordered.

use serde::Serialize;

use super::{RawValue, RouteRecord, Step, StepKind};

/// Badge text for a route with no usable line number.
const LINE_PLACEHOLDER: &str = "-";

/// A display-ready itinerary derived from one route record.
///
/// Derivation is idempotent: value-identical records produce structurally
/// identical itineraries. Nothing is cached; callers re-derive whenever
/// their record changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    line_label: String,
    eta_label: String,
    steps: Vec<Step>,
}

impl Itinerary {
    /// Derive the itinerary for a record.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::{Itinerary, RouteRecord};
    ///
    /// let record: RouteRecord = serde_json::from_str(r#"{
    ///     "name_bus_route": 18,
    ///     "min_befor_firstBus_arrive": 0,
    ///     "walking_time1": 4,
    ///     "bus_stop_ride1": "Main Square",
    ///     "bus_stop_code1": "123"
    /// }"#).unwrap();
    ///
    /// let itinerary = Itinerary::from_record(&record);
    /// assert_eq!(itinerary.line_label(), "18");
    /// assert_eq!(itinerary.eta_label(), "arriving now");
    /// assert_eq!(itinerary.steps().len(), 2);
    /// assert_eq!(itinerary.steps()[1].label, "Main Square (123)");
    /// ```
    pub fn from_record(record: &RouteRecord) -> Self {
        let line = record.line_number.display_text();
        Itinerary {
            line_label: if line.is_empty() {
                LINE_PLACEHOLDER.to_string()
            } else {
                line
            },
            eta_label: format_minutes(&record.minutes_until_first_boarding),
            steps: derive_steps(record),
        }
    }

    /// Label for the line badge (placeholder dash when unknown).
    pub fn line_label(&self) -> &str {
        &self.line_label
    }

    /// Label for the time-to-boarding display (empty when unknown).
    pub fn eta_label(&self) -> &str {
        &self.eta_label
    }

    /// The derived steps, in travel order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether there is anything to expand on the route card.
    pub fn has_detail(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Format a minutes value for display.
///
/// Numeric values (native or string) at or below zero become
/// "arriving now"; positive ones become "n minutes". Non-numeric text is
/// producer-supplied and passes through verbatim. Absent values format as
/// the empty string.
pub fn format_minutes(value: &RawValue) -> String {
    match value.numeric() {
        Some(n) if n <= 0.0 => "arriving now".to_string(),
        Some(n) => format!("{n} minutes"),
        None => value.display_text(),
    }
}

/// Whether a walking segment is worth a step.
///
/// Numeric values must be strictly positive. Non-numeric text is shown as
/// long as it isn't blank; a missing value never shows.
pub fn shows_walk(value: &RawValue) -> bool {
    match value.numeric() {
        Some(n) => n > 0.0,
        None => matches!(value, RawValue::Text(s) if !s.trim().is_empty()),
    }
}

/// Derive the ordered step sequence for a record.
fn derive_steps(record: &RouteRecord) -> Vec<Step> {
    let mut steps = Vec::new();

    push_walk(&mut steps, &record.walk_before_first_ride);
    push_stop(
        &mut steps,
        StepKind::Board,
        &record.board_stop_name1,
        &record.board_stop_code1,
    );
    push_vehicle(&mut steps, &record.vehicle_label1);

    // The one place leg-1 and leg-2 stop identity are compared. Equal
    // names mean the transfer happens at a single physical stop, so the
    // alight/walk/board triple collapses into one stop step.
    let shared_transfer_stop = is_named(&record.alight_stop_name1)
        && is_named(&record.board_stop_name2)
        && record.alight_stop_name1 == record.board_stop_name2;

    if shared_transfer_stop {
        // Feeds that collapse the transfer put the shared stop's code in
        // the leg-1 alight slot, not the leg-2 board slot. Suspect
        // upstream indexing, but it is what producers send; keep the slot.
        push_stop(
            &mut steps,
            StepKind::Board,
            &record.board_stop_name2,
            &record.alight_stop_code1,
        );
    } else {
        push_stop(
            &mut steps,
            StepKind::RideTo,
            &record.alight_stop_name1,
            &record.alight_stop_code1,
        );
        push_walk(&mut steps, &record.walk_between_legs);
        push_stop(
            &mut steps,
            StepKind::Board,
            &record.board_stop_name2,
            &record.board_stop_code2,
        );
    }

    push_vehicle(&mut steps, &record.vehicle_label2);
    push_stop(
        &mut steps,
        StepKind::Alight,
        &record.alight_stop_name2,
        &record.alight_stop_code2,
    );
    push_walk(&mut steps, &record.walk_after_last_ride);

    steps
}

/// A stop field names a stop if it coerces to non-empty text.
fn is_named(value: &RawValue) -> bool {
    !value.display_text().is_empty()
}

fn push_walk(steps: &mut Vec<Step>, value: &RawValue) {
    if shows_walk(value) {
        steps.push(Step::new(StepKind::Walk, format_minutes(value)));
    }
}

fn push_vehicle(steps: &mut Vec<Step>, value: &RawValue) {
    let label = value.display_text();
    if !label.is_empty() {
        steps.push(Step::new(StepKind::Vehicle, label));
    }
}

/// Emit a stop step: the stop name, with its code in parentheses when the
/// code is non-blank after trimming. Empty names emit nothing.
fn push_stop(steps: &mut Vec<Step>, kind: StepKind, name: &RawValue, code: &RawValue) {
    let name = name.display_text();
    if name.is_empty() {
        return;
    }
    let code = code.display_text();
    let label = if code.trim().is_empty() {
        name
    } else {
        format!("{name} ({code})")
    };
    steps.push(Step::new(kind, label));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawValue {
        RawValue::Text(s.into())
    }

    fn num(n: f64) -> RawValue {
        RawValue::Number(n)
    }

    /// A fully-populated two-leg record with distinct transfer stops.
    fn split_record() -> RouteRecord {
        RouteRecord {
            walk_before_first_ride: num(3.0),
            board_stop_name1: text("Herzl St 25"),
            board_stop_code1: text("20104"),
            vehicle_label1: text("Bus 18 southbound"),
            alight_stop_name1: text("Central Station"),
            alight_stop_code1: text("20371"),
            walk_between_legs: num(5.0),
            board_stop_name2: text("North Terminal"),
            board_stop_code2: text("20440"),
            vehicle_label2: text("Bus 142 northbound"),
            alight_stop_name2: text("Dizengoff Center"),
            alight_stop_code2: text("21655"),
            walk_after_last_ride: num(2.0),
            line_number: num(18.0),
            destination_name: text("Dizengoff Center"),
            minutes_until_first_boarding: num(6.0),
            source_node: RawValue::Absent,
        }
    }

    /// Same record, but legs meet at a single shared stop.
    fn merged_record() -> RouteRecord {
        RouteRecord {
            board_stop_name2: text("Central Station"),
            ..split_record()
        }
    }

    fn kinds(itinerary: &Itinerary) -> Vec<StepKind> {
        itinerary.steps().iter().map(|s| s.kind).collect()
    }

    fn labels(itinerary: &Itinerary) -> Vec<&str> {
        itinerary.steps().iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn fully_absent_record_derives_nothing() {
        let itinerary = Itinerary::from_record(&RouteRecord::default());
        assert!(itinerary.steps().is_empty());
        assert!(!itinerary.has_detail());
        assert_eq!(itinerary.line_label(), "-");
        assert_eq!(itinerary.eta_label(), "");
    }

    #[test]
    fn split_record_emits_canonical_order() {
        let itinerary = Itinerary::from_record(&split_record());
        assert_eq!(
            kinds(&itinerary),
            vec![
                StepKind::Walk,
                StepKind::Board,
                StepKind::Vehicle,
                StepKind::RideTo,
                StepKind::Walk,
                StepKind::Board,
                StepKind::Vehicle,
                StepKind::Alight,
                StepKind::Walk,
            ]
        );
        assert_eq!(
            labels(&itinerary),
            vec![
                "3 minutes",
                "Herzl St 25 (20104)",
                "Bus 18 southbound",
                "Central Station (20371)",
                "5 minutes",
                "North Terminal (20440)",
                "Bus 142 northbound",
                "Dizengoff Center (21655)",
                "2 minutes",
            ]
        );
    }

    #[test]
    fn merged_record_emits_single_transfer_stop() {
        let itinerary = Itinerary::from_record(&merged_record());
        assert_eq!(
            kinds(&itinerary),
            vec![
                StepKind::Walk,
                StepKind::Board,
                StepKind::Vehicle,
                StepKind::Board,
                StepKind::Vehicle,
                StepKind::Alight,
                StepKind::Walk,
            ]
        );
        // Exactly one step mentions the shared stop.
        let mentions = itinerary
            .steps()
            .iter()
            .filter(|s| s.label.starts_with("Central Station"))
            .count();
        assert_eq!(mentions, 1);
    }

    #[test]
    fn merged_transfer_stop_uses_leg1_alight_code_slot() {
        let record = merged_record();
        let itinerary = Itinerary::from_record(&record);
        // The shared stop keeps the code from the leg-1 alight slot
        // ("20371"), not the leg-2 board slot ("20440").
        assert!(labels(&itinerary).contains(&"Central Station (20371)"));
        assert!(!labels(&itinerary).iter().any(|l| l.contains("20440")));
    }

    #[test]
    fn final_stop_uses_fourth_code_slot_in_both_branches() {
        for record in [split_record(), merged_record()] {
            let itinerary = Itinerary::from_record(&record);
            let last_stop = itinerary
                .steps()
                .iter()
                .find(|s| s.kind == StepKind::Alight)
                .unwrap();
            assert_eq!(last_stop.label, "Dizengoff Center (21655)");
        }
    }

    #[test]
    fn split_branch_fires_when_names_differ() {
        let record = split_record();
        let itinerary = Itinerary::from_record(&record);
        let labels = labels(&itinerary);
        let ride_to = labels.iter().position(|l| *l == "Central Station (20371)").unwrap();
        let walk = labels.iter().position(|l| *l == "5 minutes").unwrap();
        let board = labels.iter().position(|l| *l == "North Terminal (20440)").unwrap();
        assert!(ride_to < walk && walk < board);
    }

    #[test]
    fn merge_requires_both_names_present() {
        let mut record = split_record();
        record.board_stop_name2 = RawValue::Absent;
        let itinerary = Itinerary::from_record(&record);
        // Split branch: the leg-1 alight step still appears.
        assert!(kinds(&itinerary).contains(&StepKind::RideTo));

        let mut record = split_record();
        record.alight_stop_name1 = RawValue::Absent;
        record.board_stop_name2 = text("Central Station");
        let itinerary = Itinerary::from_record(&record);
        // No merge without a leg-1 name: the missing alight emits nothing
        // and the leg-2 board step uses its own code slot.
        assert!(!kinds(&itinerary).contains(&StepKind::RideTo));
        assert!(labels(&itinerary).contains(&"Central Station (20440)"));
    }

    #[test]
    fn merge_comparison_is_type_strict() {
        let mut record = split_record();
        record.alight_stop_name1 = num(5.0);
        record.board_stop_name2 = text("5");
        let itinerary = Itinerary::from_record(&record);
        // "5" (text) does not equal 5 (number): split branch.
        assert!(kinds(&itinerary).contains(&StepKind::RideTo));
    }

    #[test]
    fn zero_walk_is_suppressed() {
        let mut record = split_record();
        record.walk_before_first_ride = num(0.0);
        let itinerary = Itinerary::from_record(&record);
        assert_ne!(itinerary.steps()[0].kind, StepKind::Walk);
    }

    #[test]
    fn negative_and_absent_walks_are_suppressed() {
        let mut record = RouteRecord::default();
        record.walk_before_first_ride = num(-2.0);
        assert!(Itinerary::from_record(&record).steps().is_empty());

        record.walk_before_first_ride = RawValue::Absent;
        assert!(Itinerary::from_record(&record).steps().is_empty());
    }

    #[test]
    fn numeric_string_walks_follow_their_value() {
        let mut record = RouteRecord::default();
        record.walk_before_first_ride = text("0");
        assert!(Itinerary::from_record(&record).steps().is_empty());

        record.walk_before_first_ride = text("4");
        let itinerary = Itinerary::from_record(&record);
        assert_eq!(itinerary.steps(), &[Step::new(StepKind::Walk, "4 minutes")]);
    }

    #[test]
    fn non_numeric_walk_text_passes_through_verbatim() {
        let mut record = RouteRecord::default();
        record.walk_before_first_ride = text("a short stroll");
        let itinerary = Itinerary::from_record(&record);
        assert_eq!(
            itinerary.steps(),
            &[Step::new(StepKind::Walk, "a short stroll")]
        );
    }

    #[test]
    fn blank_walk_text_is_suppressed() {
        let mut record = RouteRecord::default();
        record.walk_between_legs = text("   ");
        assert!(Itinerary::from_record(&record).steps().is_empty());
    }

    #[test]
    fn eta_formatting() {
        assert_eq!(format_minutes(&num(0.0)), "arriving now");
        assert_eq!(format_minutes(&num(-3.0)), "arriving now");
        assert_eq!(format_minutes(&num(7.0)), "7 minutes");
        assert_eq!(format_minutes(&text("7")), "7 minutes");
        assert_eq!(format_minutes(&text("0")), "arriving now");
        assert_eq!(format_minutes(&text("about an hour")), "about an hour");
        assert_eq!(format_minutes(&RawValue::Absent), "");
    }

    #[test]
    fn blank_stop_code_gets_no_parentheses() {
        let mut record = RouteRecord::default();
        record.board_stop_name1 = text("Main Square");
        record.board_stop_code1 = text("   ");
        let itinerary = Itinerary::from_record(&record);
        assert_eq!(itinerary.steps()[0].label, "Main Square");

        record.board_stop_code1 = RawValue::Absent;
        let itinerary = Itinerary::from_record(&record);
        assert_eq!(itinerary.steps()[0].label, "Main Square");
    }

    #[test]
    fn numeric_stop_code_is_annotated() {
        let mut record = RouteRecord::default();
        record.board_stop_name1 = text("Main Square");
        record.board_stop_code1 = num(20104.0);
        let itinerary = Itinerary::from_record(&record);
        assert_eq!(itinerary.steps()[0].label, "Main Square (20104)");
    }

    #[test]
    fn empty_stop_name_emits_no_step() {
        let mut record = RouteRecord::default();
        record.board_stop_name1 = text("");
        record.board_stop_code1 = text("123");
        assert!(Itinerary::from_record(&record).steps().is_empty());
    }

    #[test]
    fn empty_vehicle_label_emits_no_step() {
        let mut record = RouteRecord::default();
        record.vehicle_label1 = text("");
        assert!(Itinerary::from_record(&record).steps().is_empty());
    }

    #[test]
    fn numeric_line_number_displays_as_text() {
        let mut record = RouteRecord::default();
        record.line_number = num(42.0);
        assert_eq!(Itinerary::from_record(&record).line_label(), "42");
    }

    #[test]
    fn derivation_is_idempotent() {
        for record in [RouteRecord::default(), split_record(), merged_record()] {
            let first = Itinerary::from_record(&record);
            let second = Itinerary::from_record(&record);
            assert_eq!(first, second);
        }
    }
}
