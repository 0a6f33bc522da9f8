use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::weekend::WeekendCandidate;

/// A trip whose weekend (and usually destination) has been locked in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedTrip {
    pub id: Uuid,
    pub name: String,
    pub destination: Option<String>,
    pub weekend: WeekendCandidate,
    #[serde(default)]
    pub events: Vec<TripEvent>,
}

/// An event found through search and voted onto the trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripEvent {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub votes: u32,
}
