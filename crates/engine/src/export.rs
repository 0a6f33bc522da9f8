//! Builds the calendar for a locked trip: the chosen weekend as an all-day
//! span followed by the top-voted scheduled events.

use tracing::debug;
use tripsync_core::{
    errors::EngineResult,
    models::{
        calendar::IcsEvent,
        trip::{FinalizedTrip, TripEvent},
    },
};

use crate::{calendar::serialize_calendar, date_math::add_days};

const UID_DOMAIN: &str = "tripsync";

/// Turns a finalized trip into calendar events.
///
/// The first event covers the whole weekend; its inclusive end is converted
/// to the exclusive end calendar clients expect. Then up to `top_events`
/// dated trip events follow, most votes first, ties by start time then id.
/// Events without a start time are left out.
pub fn export_trip(trip: &FinalizedTrip, top_events: usize) -> EngineResult<Vec<IcsEvent>> {
    let end_exclusive = add_days(trip.weekend.weekend_end, 1)?;

    let summary = match &trip.destination {
        Some(destination) => format!("{} ({})", trip.name, destination),
        None => trip.name.clone(),
    };

    let mut span = IcsEvent::all_day(
        format!("{}@{}", trip.id, UID_DOMAIN),
        summary,
        trip.weekend.weekend_start,
        end_exclusive,
    );
    span.location = trip.destination.clone();

    let mut dated: Vec<&TripEvent> = trip
        .events
        .iter()
        .filter(|event| event.starts_at.is_some())
        .collect();

    let skipped = trip.events.len() - dated.len();
    if skipped > 0 {
        debug!("Trip {}: skipping {} events without a start time", trip.id, skipped);
    }

    dated.sort_by(|a, b| {
        b.votes
            .cmp(&a.votes)
            .then_with(|| a.starts_at.cmp(&b.starts_at))
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut events = Vec::with_capacity(1 + dated.len().min(top_events));
    events.push(span);

    for event in dated.into_iter().take(top_events) {
        let Some(starts_at) = event.starts_at else {
            continue;
        };
        let mut ics = IcsEvent::timed(
            format!("{}@{}", event.id, UID_DOMAIN),
            event.title.clone(),
            starts_at,
            event.ends_at,
        );
        ics.description = event.description.clone();
        ics.location = event.venue.clone();
        ics.url = event.url.clone();
        events.push(ics);
    }

    Ok(events)
}

/// Exports a trip straight to calendar text, named after the trip unless
/// `calendar_name` overrides it.
pub fn export_trip_calendar(
    trip: &FinalizedTrip,
    top_events: usize,
    calendar_name: Option<&str>,
) -> EngineResult<String> {
    let events = export_trip(trip, top_events)?;
    serialize_calendar(calendar_name.unwrap_or(&trip.name), &events)
}
