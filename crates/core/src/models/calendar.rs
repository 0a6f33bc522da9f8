use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// When an event happens: whole days or a UTC time span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IcsTiming {
    AllDay {
        start_date: NaiveDate,
        /// First day *after* the event.
        end_date_exclusive: NaiveDate,
    },
    Timed {
        start_time_utc: DateTime<Utc>,
        end_time_utc: Option<DateTime<Utc>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcsEvent {
    pub uid: String,
    pub summary: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub timing: IcsTiming,
    pub location: Option<String>,
    pub url: Option<String>,
}

impl IcsEvent {
    pub fn all_day(
        uid: impl Into<String>,
        summary: impl Into<String>,
        start_date: NaiveDate,
        end_date_exclusive: NaiveDate,
    ) -> Self {
        Self {
            uid: uid.into(),
            summary: summary.into(),
            description: None,
            timing: IcsTiming::AllDay {
                start_date,
                end_date_exclusive,
            },
            location: None,
            url: None,
        }
    }

    pub fn timed(
        uid: impl Into<String>,
        summary: impl Into<String>,
        start_time_utc: DateTime<Utc>,
        end_time_utc: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            uid: uid.into(),
            summary: summary.into(),
            description: None,
            timing: IcsTiming::Timed {
                start_time_utc,
                end_time_utc,
            },
            location: None,
            url: None,
        }
    }
}
