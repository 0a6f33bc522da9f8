use serde::{Deserialize, Serialize};

use super::{
    availability::AvailabilityRecord,
    ballot::{Ballot, Candidate, RankedChoiceResult, VoteKind},
    weekend::WeekendCandidate,
};

/// Snapshot of a trip's availability, as fetched by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub candidates: Vec<WeekendCandidate>,
    #[serde(default)]
    pub rows: Vec<AvailabilityRecord>,
    pub total_members: Option<u32>,
}

/// Snapshot of one poll: its candidates and every ballot cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    pub kind: VoteKind,
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub ballots: Vec<Ballot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub kind: VoteKind,
    #[serde(flatten)]
    pub result: RankedChoiceResult,
}
