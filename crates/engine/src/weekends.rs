//! # Weekend Range Generation
//!
//! Produces the candidate date ranges a trip votes on. Candidates start on a
//! fixed weekday and repeat every 7 days; the classic shape is Friday to
//! Sunday, and other trip lengths reuse the same anchoring rules.

use chrono::NaiveDate;
use tracing::debug;
use tripsync_core::{
    errors::{EngineError, EngineResult},
    models::weekend::{TripShape, WeekendCandidate},
};

use crate::date_math::{add_days, format_date, parse_date, snap_forward};

/// Spacing between consecutive candidates.
const CANDIDATE_STRIDE_DAYS: i64 = 7;

/// Generates `count` Friday-to-Sunday candidates starting at or after `from`.
///
/// # Errors
///
/// * `EngineError::InvalidArgument` - `count` is zero
pub fn generate_weekends(from: NaiveDate, count: usize) -> EngineResult<Vec<WeekendCandidate>> {
    generate_ranges(from, count, TripShape::default())
}

/// Same as [`generate_weekends`] but takes the anchor as a `YYYY-MM-DD` string.
///
/// # Errors
///
/// * `EngineError::InvalidArgument` - `from` is not a calendar date or `count` is zero
pub fn generate_weekends_from_str(from: &str, count: usize) -> EngineResult<Vec<WeekendCandidate>> {
    let from = parse_date(from)?;
    generate_weekends(from, count)
}

/// Generates `count` candidates of the given shape.
///
/// The first candidate starts on the first `shape.anchor` weekday on or after
/// `from`; each later one starts 7 days after the previous. Every candidate
/// covers `shape.length.days()` days, both ends inclusive.
///
/// # Errors
///
/// * `EngineError::InvalidArgument` - `count` is zero, or the trip length is zero
///   or longer than a week (candidates would overlap)
pub fn generate_ranges(
    from: NaiveDate,
    count: usize,
    shape: TripShape,
) -> EngineResult<Vec<WeekendCandidate>> {
    if count == 0 {
        return Err(EngineError::invalid("count must be a positive integer"));
    }

    let length = shape.length.days();
    if length == 0 || i64::from(length) > CANDIDATE_STRIDE_DAYS {
        return Err(EngineError::invalid(format!(
            "trip length must be between 1 and {} days, got {}",
            CANDIDATE_STRIDE_DAYS, length
        )));
    }

    let first_start = snap_forward(from, shape.anchor)?;
    debug!(
        "Generating {} candidates of {} days from {}",
        count,
        length,
        format_date(first_start)
    );

    let mut candidates = Vec::with_capacity(count.min(512));
    let mut start = first_start;
    for index in 0..count {
        if index > 0 {
            start = add_days(start, CANDIDATE_STRIDE_DAYS)?;
        }
        let end = add_days(start, i64::from(length) - 1)?;
        candidates.push(WeekendCandidate {
            weekend_start: start,
            weekend_end: end,
        });
    }

    Ok(candidates)
}
