//! Calendar-date arithmetic used by the generators and the calendar writer.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use tripsync_core::errors::{EngineError, EngineResult};

/// Wire format for dates exchanged with collaborators.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> EngineResult<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.len() != 10 {
        return Err(EngineError::invalid(format!(
            "'{}' is not a YYYY-MM-DD date",
            input
        )));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        EngineError::invalid(format!("'{}' is not a YYYY-MM-DD date: {}", input, e))
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Adds (or with a negative count, subtracts) whole days.
pub fn add_days(date: NaiveDate, days: i64) -> EngineResult<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };

    shifted.ok_or_else(|| {
        EngineError::invalid(format!(
            "shifting {} by {} days leaves the supported calendar range",
            format_date(date),
            days
        ))
    })
}

pub fn weekday(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// Days to move forward from `from` to reach `to` (0 when they match).
pub fn days_until(from: Weekday, to: Weekday) -> u32 {
    (to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7
}

/// Moves `date` forward to the next `anchor` weekday, keeping it if it already is one.
pub fn snap_forward(date: NaiveDate, anchor: Weekday) -> EngineResult<NaiveDate> {
    add_days(date, i64::from(days_until(weekday(date), anchor)))
}

/// `YYYYMMDD`, as used by `VALUE=DATE` properties.
pub fn ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// `YYYYMMDDTHHMMSSZ`, as used by UTC date-time properties.
pub fn ics_datetime(moment: DateTime<Utc>) -> String {
    moment.format("%Y%m%dT%H%M%SZ").to_string()
}
