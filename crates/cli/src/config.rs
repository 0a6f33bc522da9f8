//! # CLI Configuration Module
//!
//! Configuration for the `tripsync` binary, read from environment variables
//! (a `.env` file is loaded first by the binary).
//!
//! ## Environment Variables
//!
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `TRIPSYNC_WEEKEND_COUNT`: Candidates generated when `--count` is omitted (default: 8)
//! - `TRIPSYNC_TOP_EVENTS`: Trip events included in a calendar export (default: 5)
//! - `TRIPSYNC_CALENDAR_NAME`: Overrides the exported calendar name

use eyre::{eyre, Result, WrapErr};
use std::env;
use tracing::Level;

pub const DEFAULT_WEEKEND_COUNT: usize = 8;
pub const DEFAULT_TOP_EVENTS: usize = 5;

#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Log level for the application
    pub log_level: Level,

    /// Number of weekend candidates generated by default
    pub weekend_count: usize,

    /// Number of top-voted trip events written to an export
    pub top_events: usize,

    /// Calendar name override for exports
    pub calendar_name: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            weekend_count: DEFAULT_WEEKEND_COUNT,
            top_events: DEFAULT_TOP_EVENTS,
            calendar_name: None,
        }
    }
}

impl CliConfig {
    /// Creates a new CliConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `TRIPSYNC_WEEKEND_COUNT` is not a positive integer
    /// - `TRIPSYNC_TOP_EVENTS` is not a non-negative integer
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = parse_log_level(lookup("LOG_LEVEL").as_deref().unwrap_or("info"));

        let weekend_count = match lookup("TRIPSYNC_WEEKEND_COUNT") {
            Some(raw) => {
                let count: usize = raw
                    .trim()
                    .parse()
                    .wrap_err("Invalid TRIPSYNC_WEEKEND_COUNT value")?;
                if count == 0 {
                    return Err(eyre!("TRIPSYNC_WEEKEND_COUNT must be positive"));
                }
                count
            }
            None => DEFAULT_WEEKEND_COUNT,
        };

        let top_events = match lookup("TRIPSYNC_TOP_EVENTS") {
            Some(raw) => raw
                .trim()
                .parse()
                .wrap_err("Invalid TRIPSYNC_TOP_EVENTS value")?,
            None => DEFAULT_TOP_EVENTS,
        };

        let calendar_name = lookup("TRIPSYNC_CALENDAR_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Self {
            log_level,
            weekend_count,
            top_events,
            calendar_name,
        })
    }
}

/// Maps a level name to a tracing level, falling back to INFO.
pub fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
