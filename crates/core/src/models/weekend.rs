use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// A candidate date range for a trip, keyed by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendCandidate {
    pub weekend_start: NaiveDate,
    pub weekend_end: NaiveDate,
}

impl WeekendCandidate {
    /// Key used by ballots and availability rows (`YYYY-MM-DD` of the start day).
    pub fn key(&self) -> String {
        self.weekend_start.format("%Y-%m-%d").to_string()
    }

    /// Number of calendar days covered, both ends inclusive.
    pub fn length_days(&self) -> i64 {
        (self.weekend_end - self.weekend_start).num_days() + 1
    }
}

/// Trip-length mode chosen by the organizer at trip creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "days")]
pub enum TripLength {
    SingleDay,
    #[default]
    Weekend,
    LongWeekend,
    Week,
    Custom(u32),
}

impl TripLength {
    pub fn days(&self) -> u32 {
        match self {
            TripLength::SingleDay => 1,
            TripLength::Weekend => 3,
            TripLength::LongWeekend => 5,
            TripLength::Week => 7,
            TripLength::Custom(days) => *days,
        }
    }
}

impl FromStr for TripLength {
    type Err = EngineError;

    /// Accepts a mode name (`single_day`, `weekend`, `long_weekend`, `week`)
    /// or a plain number of days.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "single_day" | "day" => Ok(TripLength::SingleDay),
            "weekend" => Ok(TripLength::Weekend),
            "long_weekend" => Ok(TripLength::LongWeekend),
            "week" => Ok(TripLength::Week),
            other => other
                .parse::<u32>()
                .map(TripLength::Custom)
                .map_err(|_| EngineError::invalid(format!("unknown trip length '{}'", s))),
        }
    }
}

/// Shape of every generated candidate: the weekday it starts on and its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripShape {
    pub anchor: Weekday,
    pub length: TripLength,
}

impl Default for TripShape {
    fn default() -> Self {
        Self {
            anchor: Weekday::Fri,
            length: TripLength::Weekend,
        }
    }
}
