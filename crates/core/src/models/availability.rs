use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Yes,
    Maybe,
    No,
    Unset,
}

/// One member's mark for one weekend candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    pub weekend_start: NaiveDate,
    pub user_id: String,
    pub status: AvailabilityStatus,
}

/// Aggregated marks for one candidate. Derived on every request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendScore {
    pub weekend_start: NaiveDate,
    pub yes: u32,
    pub maybe: u32,
    pub no: u32,
    pub unset: u32,
    pub score: u32,
}
