//! # TripSync CLI
//!
//! Command runners around the decision engine. Each runner takes the JSON
//! snapshot a collaborator produced and returns the text to print, so the
//! binary only handles argument parsing and file I/O.

/// Configuration loaded from the environment
pub mod config;
/// Command runners for each subcommand
pub mod commands;

use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Installs the global tracing subscriber.
///
/// Logs are written to stderr so stdout only carries command output.
pub fn init_logging(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
