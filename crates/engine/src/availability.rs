//! # Availability Scoring
//!
//! Folds every member's yes/maybe/no mark into one score per weekend
//! candidate and ranks the candidates. Scores are rebuilt from the full row
//! set on every call; nothing is patched incrementally.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;
use tripsync_core::{
    errors::{EngineError, EngineResult},
    models::{
        availability::{AvailabilityRecord, AvailabilityStatus, WeekendScore},
        weekend::WeekendCandidate,
    },
};

pub const YES_WEIGHT: u32 = 2;
pub const MAYBE_WEIGHT: u32 = 1;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    yes: u32,
    maybe: u32,
    no: u32,
    unset: u32,
}

impl Tally {
    fn record(&mut self, status: AvailabilityStatus) {
        let counter = match status {
            AvailabilityStatus::Yes => &mut self.yes,
            AvailabilityStatus::Maybe => &mut self.maybe,
            AvailabilityStatus::No => &mut self.no,
            AvailabilityStatus::Unset => &mut self.unset,
        };
        *counter = counter.saturating_add(1);
    }

    fn into_score(self, weekend_start: NaiveDate, total_members: Option<u32>) -> WeekendScore {
        let answered = self.yes.saturating_add(self.maybe).saturating_add(self.no);
        let unset = match total_members {
            Some(total) => total.saturating_sub(answered),
            None => self.unset,
        };

        WeekendScore {
            weekend_start,
            yes: self.yes,
            maybe: self.maybe,
            no: self.no,
            unset,
            score: weighted_score(self.yes, self.maybe),
        }
    }
}

/// `2 * yes + maybe`.
pub fn weighted_score(yes: u32, maybe: u32) -> u32 {
    yes.saturating_mul(YES_WEIGHT)
        .saturating_add(maybe.saturating_mul(MAYBE_WEIGHT))
}

/// Scores every candidate and returns them best first.
///
/// Rows whose `weekend_start` is not a known candidate are ignored; the
/// candidate set can shrink after members have already answered.
///
/// When `total_members` is given, `unset` is the number of members without an
/// explicit yes/maybe/no row. Otherwise it counts stored `unset` rows.
///
/// Ordering: score descending, then yes-count descending, then earliest
/// weekend first. The result does not depend on the order of `rows`.
///
/// # Errors
///
/// * `EngineError::InvalidArgument` - two candidates share a `weekend_start`,
///   or a candidate ends before it starts
pub fn score_weekends(
    candidates: &[WeekendCandidate],
    rows: &[AvailabilityRecord],
    total_members: Option<u32>,
) -> EngineResult<Vec<WeekendScore>> {
    let mut tallies: BTreeMap<NaiveDate, Tally> = BTreeMap::new();
    for candidate in candidates {
        if candidate.weekend_end < candidate.weekend_start {
            return Err(EngineError::invalid(format!(
                "weekend {} ends before it starts",
                candidate.key()
            )));
        }
        if tallies.insert(candidate.weekend_start, Tally::default()).is_some() {
            return Err(EngineError::invalid(format!(
                "weekend {} appears more than once",
                candidate.key()
            )));
        }
    }

    let mut ignored = 0usize;
    for row in rows {
        match tallies.get_mut(&row.weekend_start) {
            Some(tally) => tally.record(row.status),
            None => ignored += 1,
        }
    }

    if ignored > 0 {
        debug!(
            "Ignored {} availability rows referencing weekends outside the candidate set",
            ignored
        );
    }

    let mut scores: Vec<WeekendScore> = tallies
        .into_iter()
        .map(|(weekend_start, tally)| tally.into_score(weekend_start, total_members))
        .collect();

    scores.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.yes.cmp(&a.yes))
            .then_with(|| a.weekend_start.cmp(&b.weekend_start))
    });

    Ok(scores)
}
