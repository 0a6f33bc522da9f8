//! # Calendar Serialization
//!
//! Renders trip events as an RFC5545 `VCALENDAR` that Apple, Google and
//! Outlook calendars import as-is.
//!
//! The output rules clients depend on:
//!
//! - every content line ends with CRLF, including the last one
//! - text values escape backslash, newline, comma and semicolon
//! - all-day events use `VALUE=DATE` with an exclusive end date
//! - timed events use UTC date-times and default to two hours
//! - lines longer than 74 characters (or 75 octets) are folded with CRLF + space

use chrono::{DateTime, TimeDelta, Utc};
use tripsync_core::{
    errors::{EngineError, EngineResult},
    models::calendar::{IcsEvent, IcsTiming},
};

use crate::date_math::{format_date, ics_date, ics_datetime};

pub const PRODID: &str = "-//TripSync//Group Decision Engine//EN";

const CRLF: &str = "\r\n";
const MAX_LINE_CHARS: usize = 74;
const MAX_LINE_OCTETS: usize = 75;
const DEFAULT_EVENT_HOURS: i64 = 2;

/// Serializes `events` into one calendar, stamped with the current time.
///
/// # Errors
///
/// * `EngineError::InvalidArgument` - an event has an empty UID or ends before it starts
pub fn serialize_calendar(calendar_name: &str, events: &[IcsEvent]) -> EngineResult<String> {
    serialize_calendar_at(calendar_name, events, Utc::now())
}

/// Serializes `events` with an explicit `DTSTAMP`.
pub fn serialize_calendar_at(
    calendar_name: &str,
    events: &[IcsEvent],
    stamp: DateTime<Utc>,
) -> EngineResult<String> {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{}", escape_text(calendar_name)),
    ];

    for event in events {
        push_event(&mut lines, event, stamp)?;
    }

    lines.push("END:VCALENDAR".to_string());

    let mut output = String::new();
    for line in &lines {
        output.push_str(&fold_line(line));
        output.push_str(CRLF);
    }

    Ok(output)
}

fn push_event(lines: &mut Vec<String>, event: &IcsEvent, stamp: DateTime<Utc>) -> EngineResult<()> {
    if event.uid.trim().is_empty() {
        return Err(EngineError::invalid("calendar event UID must not be empty"));
    }

    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}", escape_text(&event.uid)));
    lines.push(format!("DTSTAMP:{}", ics_datetime(stamp)));

    match &event.timing {
        IcsTiming::AllDay {
            start_date,
            end_date_exclusive,
        } => {
            if end_date_exclusive <= start_date {
                return Err(EngineError::invalid(format!(
                    "event {} must end after {}, got exclusive end {}",
                    event.uid,
                    format_date(*start_date),
                    format_date(*end_date_exclusive)
                )));
            }
            lines.push(format!("DTSTART;VALUE=DATE:{}", ics_date(*start_date)));
            lines.push(format!("DTEND;VALUE=DATE:{}", ics_date(*end_date_exclusive)));
        }
        IcsTiming::Timed {
            start_time_utc,
            end_time_utc,
        } => {
            let end = match end_time_utc {
                Some(end) if end < start_time_utc => {
                    return Err(EngineError::invalid(format!(
                        "event {} ends before it starts",
                        event.uid
                    )));
                }
                Some(end) => *end,
                None => start_time_utc
                    .checked_add_signed(TimeDelta::hours(DEFAULT_EVENT_HOURS))
                    .ok_or_else(|| {
                        EngineError::invalid(format!(
                            "event {} starts too late to add a default duration",
                            event.uid
                        ))
                    })?,
            };
            lines.push(format!("DTSTART:{}", ics_datetime(*start_time_utc)));
            lines.push(format!("DTEND:{}", ics_datetime(end)));
        }
    }

    lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));
    if let Some(description) = &event.description {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }
    if let Some(location) = &event.location {
        lines.push(format!("LOCATION:{}", escape_text(location)));
    }
    // URL is a URI value, not TEXT, so it is written verbatim.
    if let Some(url) = &event.url {
        lines.push(format!("URL:{}", url));
    }
    lines.push("END:VEVENT".to_string());

    Ok(())
}

/// Escapes a TEXT value per RFC5545 section 3.3.11.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            other => escaped.push(other),
        }
    }

    escaped
}

/// Folds a content line so no physical line exceeds 74 characters or
/// 75 octets, whichever limit is reached first.
///
/// Continuation lines start with a single space, which counts toward both
/// limits. Splits happen on character boundaries, never inside a UTF-8 sequence.
pub fn fold_line(line: &str) -> String {
    if line.chars().count() <= MAX_LINE_CHARS && line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + 3 * (line.len() / MAX_LINE_CHARS + 1));
    let mut line_chars = 0;
    let mut line_octets = 0;

    for ch in line.chars() {
        if line_chars + 1 > MAX_LINE_CHARS || line_octets + ch.len_utf8() > MAX_LINE_OCTETS {
            folded.push_str(CRLF);
            folded.push(' ');
            line_chars = 1;
            line_octets = 1;
        }
        folded.push(ch);
        line_chars += 1;
        line_octets += ch.len_utf8();
    }

    folded
}
