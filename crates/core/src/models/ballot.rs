use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything that can be voted on: a weekend key, a destination id, an event id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

/// Which poll a ballot belongs to. A voter has at most one ballot per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Weekend,
    Destination,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ballot {
    pub voter_id: String,
    /// Candidate ids, most preferred first.
    pub rankings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedChoiceRound {
    pub round: u32,
    pub totals: BTreeMap<String, u32>,
    pub active_ballots: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub eliminated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub winner: Option<String>,
}

/// Outcome of an instant-runoff resolution.
///
/// `winner_id` is `None` when no candidate could be chosen; the organizer
/// then picks manually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedChoiceResult {
    pub winner_id: Option<String>,
    pub rounds: Vec<RankedChoiceRound>,
}

impl RankedChoiceResult {
    pub fn no_winner() -> Self {
        Self {
            winner_id: None,
            rounds: Vec::new(),
        }
    }
}
