use chrono::{NaiveDate, TimeZone, Utc};
use icalendar::{
    Calendar, CalendarComponent, Component,
    parser::{read_calendar, unfold},
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tripsync_core::models::{
    calendar::IcsTiming,
    trip::{FinalizedTrip, TripEvent},
    weekend::WeekendCandidate,
};
use tripsync_engine::{export_trip, export_trip_calendar};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn trip_event(title: &str, votes: u32, start_hour: Option<u32>) -> TripEvent {
    TripEvent {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        starts_at: start_hour.map(|hour| Utc.with_ymd_and_hms(2026, 1, 17, hour, 0, 0).unwrap()),
        ends_at: None,
        venue: Some("Alfama".to_string()),
        url: None,
        votes,
    }
}

#[fixture]
fn trip() -> FinalizedTrip {
    FinalizedTrip {
        id: Uuid::new_v4(),
        name: "Lisbon crew".to_string(),
        destination: Some("Lisbon".to_string()),
        weekend: WeekendCandidate {
            weekend_start: date(2026, 1, 16),
            weekend_end: date(2026, 1, 18),
        },
        events: vec![
            trip_event("Tram 28", 2, Some(10)),
            trip_event("Fado night", 5, Some(20)),
            trip_event("Pasteis tasting", 5, Some(9)),
            trip_event("Someday maybe", 9, None),
            trip_event("Sunset cruise", 1, Some(17)),
        ],
    }
}

#[rstest]
fn test_weekend_span_uses_exclusive_end(trip: FinalizedTrip) {
    let events = export_trip(&trip, 0).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].uid, format!("{}@tripsync", trip.id));
    assert_eq!(events[0].summary, "Lisbon crew (Lisbon)");
    assert_eq!(events[0].location.as_deref(), Some("Lisbon"));
    assert_eq!(
        events[0].timing,
        IcsTiming::AllDay {
            start_date: date(2026, 1, 16),
            end_date_exclusive: date(2026, 1, 19),
        }
    );
}

#[rstest]
fn test_top_events_by_votes_then_start(trip: FinalizedTrip) {
    let events = export_trip(&trip, 3).unwrap();

    let summaries: Vec<&str> = events.iter().map(|event| event.summary.as_str()).collect();
    assert_eq!(
        summaries,
        vec!["Lisbon crew (Lisbon)", "Pasteis tasting", "Fado night", "Tram 28"]
    );
    assert_eq!(events[1].location.as_deref(), Some("Alfama"));
}

#[rstest]
fn test_undated_events_are_skipped(trip: FinalizedTrip) {
    let events = export_trip(&trip, 10).unwrap();

    assert_eq!(events.len(), 5);
    assert!(events.iter().all(|event| event.summary != "Someday maybe"));
}

#[rstest]
fn test_export_calendar_text(trip: FinalizedTrip) {
    let ics = export_trip_calendar(&trip, 1, None).unwrap();

    let unfolded = unfold(&ics);
    let raw = read_calendar(&unfolded).unwrap();
    let starts: Vec<String> = raw
        .components
        .iter()
        .filter_map(|component| component.find_prop("DTSTART"))
        .map(|property| property.val.to_string())
        .collect();
    let ends: Vec<String> = raw
        .components
        .iter()
        .filter_map(|component| component.find_prop("DTEND"))
        .map(|property| property.val.to_string())
        .collect();
    assert_eq!(starts, vec!["20260116", "20260117T090000Z"]);
    assert_eq!(ends, vec!["20260119", "20260117T110000Z"]);

    let calendar: Calendar = ics.parse().unwrap();
    let summaries: Vec<String> = calendar
        .components
        .iter()
        .filter_map(|component| match component {
            CalendarComponent::Event(event) => event.get_summary().map(str::to_string),
            _ => None,
        })
        .collect();
    assert_eq!(summaries, vec!["Lisbon crew (Lisbon)", "Pasteis tasting"]);
    assert!(ics.contains("X-WR-CALNAME:Lisbon crew\r\n"));
}

#[rstest]
fn test_calendar_name_override(trip: FinalizedTrip) {
    let ics = export_trip_calendar(&trip, 0, Some("Team offsite")).unwrap();

    assert!(ics.contains("X-WR-CALNAME:Team offsite\r\n"));
}

#[test]
fn test_trip_without_destination() {
    let trip = FinalizedTrip {
        id: Uuid::new_v4(),
        name: "Mystery weekend".to_string(),
        destination: None,
        weekend: WeekendCandidate {
            weekend_start: date(2026, 2, 6),
            weekend_end: date(2026, 2, 8),
        },
        events: Vec::new(),
    };

    let events = export_trip(&trip, 5).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].summary, "Mystery weekend");
    assert_eq!(events[0].location, None);
}
