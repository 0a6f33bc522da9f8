use chrono::{NaiveDate, TimeZone, Utc, Weekday};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use tripsync_core::models::{
    availability::{AvailabilityRecord, AvailabilityStatus},
    ballot::{Candidate, RankedChoiceResult, RankedChoiceRound, VoteKind},
    calendar::{IcsEvent, IcsTiming},
    preferences::{Budget, Intensity, MemberPreferences, WeekendVibe},
    requests::{ResolveRequest, ResolveResponse, ScoreRequest},
    trip::FinalizedTrip,
    weekend::{TripLength, TripShape, WeekendCandidate},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_weekend_candidate_wire_format() {
    let candidate = WeekendCandidate {
        weekend_start: date(2026, 1, 16),
        weekend_end: date(2026, 1, 18),
    };

    let value = to_value(candidate).expect("Failed to serialize weekend candidate");

    assert_eq!(
        value,
        json!({ "weekendStart": "2026-01-16", "weekendEnd": "2026-01-18" })
    );
    assert_eq!(candidate.key(), "2026-01-16");
    assert_eq!(candidate.length_days(), 3);
}

#[test]
fn test_availability_record_parses_lowercase_status() {
    let record: AvailabilityRecord = from_str(
        r#"{ "weekendStart": "2026-01-16", "userId": "u1", "status": "maybe" }"#,
    )
    .expect("Failed to deserialize availability record");

    assert_eq!(record.weekend_start, date(2026, 1, 16));
    assert_eq!(record.user_id, "u1");
    assert_eq!(record.status, AvailabilityStatus::Maybe);
}

#[test]
fn test_unknown_status_is_rejected() {
    let result = from_str::<AvailabilityRecord>(
        r#"{ "weekendStart": "2026-01-16", "userId": "u1", "status": "perhaps" }"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_round_trace_omits_empty_outcomes() {
    let round = RankedChoiceRound {
        round: 1,
        totals: [("a".to_string(), 2), ("b".to_string(), 1)].into_iter().collect(),
        active_ballots: 3,
        eliminated: None,
        winner: Some("a".to_string()),
    };

    let value = to_value(&round).expect("Failed to serialize round");

    assert_eq!(
        value,
        json!({
            "round": 1,
            "totals": { "a": 2, "b": 1 },
            "activeBallots": 3,
            "winner": "a"
        })
    );
}

#[test]
fn test_no_winner_result() {
    let result = RankedChoiceResult::no_winner();

    assert_eq!(result.winner_id, None);
    assert!(result.rounds.is_empty());
    assert_eq!(
        to_value(&result).unwrap(),
        json!({ "winnerId": null, "rounds": [] })
    );
}

#[test]
fn test_resolve_request_defaults_to_no_ballots() {
    let request: ResolveRequest = from_str(
        r#"{
            "kind": "destination",
            "candidates": [{ "id": "lisbon", "createdAt": "2026-01-01T10:00:00Z" }]
        }"#,
    )
    .expect("Failed to deserialize resolve request");

    assert_eq!(request.kind, VoteKind::Destination);
    assert_eq!(
        request.candidates,
        vec![Candidate {
            id: "lisbon".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 10, 0, 0).unwrap(),
        }]
    );
    assert!(request.ballots.is_empty());
}

#[test]
fn test_resolve_response_flattens_result() {
    let response = ResolveResponse {
        kind: VoteKind::Weekend,
        result: RankedChoiceResult::no_winner(),
    };

    assert_eq!(
        to_value(&response).unwrap(),
        json!({ "kind": "weekend", "winnerId": null, "rounds": [] })
    );
}

#[test]
fn test_score_request_total_members_optional() {
    let request: ScoreRequest = from_str(
        r#"{ "candidates": [{ "weekendStart": "2026-01-16", "weekendEnd": "2026-01-18" }] }"#,
    )
    .expect("Failed to deserialize score request");

    assert_eq!(request.candidates.len(), 1);
    assert!(request.rows.is_empty());
    assert_eq!(request.total_members, None);
}

#[test]
fn test_ics_event_timing_is_flattened() {
    let event = IcsEvent::all_day("trip@tripsync", "Lisbon", date(2026, 1, 16), date(2026, 1, 19));

    let value = to_value(&event).expect("Failed to serialize event");

    assert_eq!(value["kind"], json!("all_day"));
    assert_eq!(value["start_date"], json!("2026-01-16"));
    assert_eq!(value["end_date_exclusive"], json!("2026-01-19"));

    let back: IcsEvent = serde_json::from_value(value).expect("Failed to deserialize event");
    assert_eq!(back, event);
}

#[test]
fn test_timed_event_constructor() {
    let start = Utc.with_ymd_and_hms(2026, 1, 17, 19, 30, 0).unwrap();
    let event = IcsEvent::timed("e1@tripsync", "Fado night", start, None);

    assert_eq!(
        event.timing,
        IcsTiming::Timed {
            start_time_utc: start,
            end_time_utc: None,
        }
    );
    assert_eq!(event.description, None);
}

#[rstest]
#[case(TripLength::SingleDay, 1)]
#[case(TripLength::Weekend, 3)]
#[case(TripLength::LongWeekend, 5)]
#[case(TripLength::Week, 7)]
#[case(TripLength::Custom(4), 4)]
fn test_trip_length_days(#[case] length: TripLength, #[case] days: u32) {
    assert_eq!(length.days(), days);
}

#[rstest]
#[case("weekend", TripLength::Weekend)]
#[case("single-day", TripLength::SingleDay)]
#[case("LONG_WEEKEND", TripLength::LongWeekend)]
#[case("week", TripLength::Week)]
#[case("4", TripLength::Custom(4))]
fn test_trip_length_from_str(#[case] raw: &str, #[case] expected: TripLength) {
    assert_eq!(raw.parse::<TripLength>().unwrap(), expected);
}

#[test]
fn test_trip_length_from_str_rejects_garbage() {
    assert!("fortnight".parse::<TripLength>().is_err());
}

#[test]
fn test_default_shape_is_friday_weekend() {
    let shape = TripShape::default();

    assert_eq!(shape.anchor, Weekday::Fri);
    assert_eq!(shape.length, TripLength::Weekend);
}

#[rstest]
#[case(
    json!({ "vibe": "adventure", "intensity": "hard", "activities": ["hiking"] }),
    WeekendVibe::Adventure { intensity: Intensity::Hard, activities: vec!["hiking".to_string()] }
)]
#[case(
    json!({ "vibe": "foodie", "budget": "medium" }),
    WeekendVibe::Foodie { cuisines: vec![], budget: Budget::Medium }
)]
#[case(
    json!({ "vibe": "chill", "beach": true }),
    WeekendVibe::Chill { spa: false, beach: true }
)]
fn test_weekend_vibe_is_tagged(#[case] value: serde_json::Value, #[case] expected: WeekendVibe) {
    let vibe: WeekendVibe = serde_json::from_value(value).expect("Failed to deserialize vibe");
    assert_eq!(vibe, expected);
}

#[test]
fn test_weekend_vibe_rejects_missing_variant_fields() {
    let result = serde_json::from_value::<WeekendVibe>(json!({ "vibe": "adventure" }));

    assert!(result.is_err());
}

#[test]
fn test_member_preferences() {
    let preferences: MemberPreferences = from_str(
        r#"{ "userId": "u1", "vibe": { "vibe": "party", "nightlife": true }, "budget": "low" }"#,
    )
    .expect("Failed to deserialize preferences");

    let vibe = preferences.vibe.expect("vibe should be present");
    assert_eq!(vibe.name(), "party");
    assert_eq!(preferences.budget, Some(Budget::Low));
}

#[test]
fn test_finalized_trip_events_default_empty() {
    let trip: FinalizedTrip = from_str(
        r#"{
            "id": "6f1c7a2e-3d7b-4a8e-9b1f-0c2d4e6f8a10",
            "name": "Ski weekend",
            "destination": null,
            "weekend": { "weekendStart": "2026-02-06", "weekendEnd": "2026-02-08" }
        }"#,
    )
    .expect("Failed to deserialize trip");

    assert_eq!(trip.name, "Ski weekend");
    assert!(trip.events.is_empty());
}
