//! # Ranked-Choice Resolution
//!
//! Instant-runoff voting over an arbitrary candidate set. The same engine
//! decides the weekend poll and the destination poll; candidates only need
//! an id and a creation timestamp.
//!
//! ## Algorithm
//!
//! 1. Ballots are cleaned: unknown candidate ids are dropped and repeated ids
//!    keep only their first occurrence.
//! 2. A baseline first-choice tally is taken once over the full candidate set.
//!    It never changes and is only used to break ties.
//! 3. Each round counts every ballot toward its highest-ranked candidate that
//!    is still alive. A candidate holding strictly more than half of the
//!    active ballots wins. A lone survivor wins outright.
//! 4. Otherwise exactly one candidate is eliminated and the next round starts.
//!
//! ## Elimination order
//!
//! Among alive candidates the one eliminated is, in order of precedence:
//!
//! - the one with the fewest votes this round,
//! - then the one with the fewest baseline first choices,
//! - then the most recently created one (earlier `created_at` is protected),
//! - then the one with the lexicographically greatest id.
//!
//! The last rule makes the order total, so identical input always yields an
//! identical round trace.
//!
//! A round in which no ballot has a surviving choice while several candidates
//! are still alive ends the resolution with no winner; the organizer decides.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use eyre::eyre;
use tracing::debug;
use tripsync_core::{
    errors::{EngineError, EngineResult},
    models::ballot::{Ballot, Candidate, RankedChoiceResult, RankedChoiceRound},
};

/// Resolves a winner from ranked ballots.
///
/// # Errors
///
/// * `EngineError::InvalidArgument` - a candidate id is empty or repeated, or a
///   voter cast more than one ballot
/// * `EngineError::Internal` - a round with active ballots has no candidate left
///   to eliminate
pub fn resolve(candidates: &[Candidate], ballots: &[Ballot]) -> EngineResult<RankedChoiceResult> {
    validate_candidates(candidates)?;
    validate_ballots(ballots)?;

    if candidates.is_empty() {
        return Ok(RankedChoiceResult::no_winner());
    }

    let index: HashMap<&str, usize> = candidates
        .iter()
        .enumerate()
        .map(|(position, candidate)| (candidate.id.as_str(), position))
        .collect();

    let cleaned: Vec<Vec<usize>> = ballots
        .iter()
        .map(|ballot| clean_ballot(ballot, &index))
        .collect();

    let mut baseline = vec![0u32; candidates.len()];
    for first in cleaned.iter().filter_map(|rankings| rankings.first()) {
        baseline[*first] += 1;
    }

    let mut alive = vec![true; candidates.len()];
    let mut rounds = Vec::new();
    let mut round = 0u32;

    loop {
        round += 1;

        let mut totals = vec![0u32; candidates.len()];
        let mut active_ballots = 0u32;
        for rankings in &cleaned {
            if let Some(&choice) = rankings.iter().find(|&&position| alive[position]) {
                totals[choice] += 1;
                active_ballots += 1;
            }
        }

        let survivors: Vec<usize> = (0..candidates.len())
            .filter(|&position| alive[position])
            .collect();

        let mut trace = RankedChoiceRound {
            round,
            totals: survivors
                .iter()
                .map(|&position| (candidates[position].id.clone(), totals[position]))
                .collect::<BTreeMap<_, _>>(),
            active_ballots,
            eliminated: None,
            winner: None,
        };

        let majority = survivors
            .iter()
            .copied()
            .find(|&position| active_ballots > 0 && totals[position] * 2 > active_ballots);

        let winner = match (majority, survivors.as_slice()) {
            (Some(position), _) => Some(position),
            (None, [only]) => Some(*only),
            _ => None,
        };

        if let Some(position) = winner {
            let winner_id = candidates[position].id.clone();
            debug!(
                "Round {}: {} wins with {} of {} active ballots",
                round, winner_id, totals[position], active_ballots
            );
            trace.winner = Some(winner_id.clone());
            rounds.push(trace);
            return Ok(RankedChoiceResult {
                winner_id: Some(winner_id),
                rounds,
            });
        }

        if active_ballots == 0 {
            debug!(
                "Round {}: every ballot is exhausted with {} candidates alive, no winner",
                round,
                survivors.len()
            );
            rounds.push(trace);
            return Ok(RankedChoiceResult {
                winner_id: None,
                rounds,
            });
        }

        let Some(loser) = survivors
            .iter()
            .copied()
            .min_by(|&a, &b| elimination_order(candidates, &totals, &baseline, a, b))
        else {
            return Err(EngineError::Internal(eyre!(
                "round {} has active ballots but no surviving candidate",
                round
            )));
        };

        alive[loser] = false;
        debug!(
            "Round {}: eliminating {} with {} votes",
            round, candidates[loser].id, totals[loser]
        );
        trace.eliminated = Some(candidates[loser].id.clone());
        rounds.push(trace);
    }
}

/// Orders candidates so that the one to eliminate first compares lowest.
fn elimination_order(
    candidates: &[Candidate],
    totals: &[u32],
    baseline: &[u32],
    a: usize,
    b: usize,
) -> Ordering {
    totals[a]
        .cmp(&totals[b])
        .then_with(|| baseline[a].cmp(&baseline[b]))
        .then_with(|| candidates[b].created_at.cmp(&candidates[a].created_at))
        .then_with(|| candidates[b].id.cmp(&candidates[a].id))
}

/// Maps a ballot onto candidate positions, dropping unknown and repeated ids.
fn clean_ballot(ballot: &Ballot, index: &HashMap<&str, usize>) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut cleaned = Vec::with_capacity(ballot.rankings.len());

    for id in &ballot.rankings {
        match index.get(id.as_str()) {
            Some(&position) => {
                if seen.insert(position) {
                    cleaned.push(position);
                } else {
                    debug!("Ballot from {} repeats {}, keeping first rank", ballot.voter_id, id);
                }
            }
            None => debug!("Ballot from {} ranks unknown candidate {}", ballot.voter_id, id),
        }
    }

    cleaned
}

fn validate_candidates(candidates: &[Candidate]) -> EngineResult<()> {
    let mut ids = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.id.trim().is_empty() {
            return Err(EngineError::invalid("candidate id must not be empty"));
        }
        if !ids.insert(candidate.id.as_str()) {
            return Err(EngineError::invalid(format!(
                "candidate {} appears more than once",
                candidate.id
            )));
        }
    }
    Ok(())
}

fn validate_ballots(ballots: &[Ballot]) -> EngineResult<()> {
    let mut voters = HashSet::with_capacity(ballots.len());
    for ballot in ballots {
        if ballot.voter_id.trim().is_empty() {
            return Err(EngineError::invalid("ballot voter id must not be empty"));
        }
        if !voters.insert(ballot.voter_id.as_str()) {
            return Err(EngineError::invalid(format!(
                "voter {} cast more than one ballot",
                ballot.voter_id
            )));
        }
    }
    Ok(())
}
