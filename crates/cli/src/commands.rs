//! # Commands
//!
//! One runner per subcommand. Runners parse the collaborator's JSON
//! snapshot, call the engine and render the result; reading and writing
//! files is left to [`read_input`] and [`write_output`].

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use eyre::{Result, WrapErr};
use tracing::info;
use tripsync_core::models::{
    requests::{ResolveRequest, ResolveResponse, ScoreRequest},
    trip::FinalizedTrip,
    weekend::{TripLength, TripShape},
};
use tripsync_engine::{
    date_math::parse_date, export_trip_calendar, generate_ranges, resolve, score_weekends,
};

use crate::config::CliConfig;

/// Generates weekend candidates and renders them as JSON.
pub fn weekends(
    config: &CliConfig,
    from: &str,
    count: Option<usize>,
    length: TripLength,
) -> Result<String> {
    let from = parse_date(from)?;
    let count = count.unwrap_or(config.weekend_count);
    let shape = TripShape {
        length,
        ..TripShape::default()
    };

    let candidates = generate_ranges(from, count, shape)?;
    info!("Generated {} weekend candidates", candidates.len());

    Ok(serde_json::to_string_pretty(&candidates)?)
}

/// Scores a `ScoreRequest` document.
pub fn score(input: &str) -> Result<String> {
    let request: ScoreRequest =
        serde_json::from_str(input).wrap_err("Failed to parse availability snapshot")?;

    let scores = score_weekends(&request.candidates, &request.rows, request.total_members)?;
    info!(
        "Scored {} weekends from {} availability rows",
        scores.len(),
        request.rows.len()
    );

    Ok(serde_json::to_string_pretty(&scores)?)
}

/// Resolves a `ResolveRequest` document.
pub fn resolve_poll(input: &str) -> Result<String> {
    let request: ResolveRequest =
        serde_json::from_str(input).wrap_err("Failed to parse ballot snapshot")?;

    let result = resolve(&request.candidates, &request.ballots)?;
    match &result.winner_id {
        Some(winner) => info!("{:?} poll resolved to {}", request.kind, winner),
        None => info!(
            "{:?} poll has no resolvable winner after {} rounds",
            request.kind,
            result.rounds.len()
        ),
    }

    let response = ResolveResponse {
        kind: request.kind,
        result,
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

/// Exports a `FinalizedTrip` document as calendar text.
pub fn export(config: &CliConfig, input: &str) -> Result<String> {
    let trip: FinalizedTrip =
        serde_json::from_str(input).wrap_err("Failed to parse finalized trip")?;

    let calendar = export_trip_calendar(&trip, config.top_events, config.calendar_name.as_deref())?;
    info!("Exported calendar for trip {}", trip.id);

    Ok(calendar)
}

/// Reads a document from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("Failed to read from stdin")?;
        return Ok(buffer);
    }

    fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

/// Writes command output to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, output)
            .wrap_err_with(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            Ok(())
        }
    }
}
