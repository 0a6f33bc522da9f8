use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::error;
use tripsync_cli::{
    commands::{self, read_input, write_output},
    config::CliConfig,
    init_logging,
};
use tripsync_core::models::weekend::TripLength;

#[derive(Parser)]
#[command(name = "tripsync")]
#[command(about = "Pick a trip's weekend and destination from the group's input")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate weekend candidates
    Weekends {
        /// First day to consider (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Number of candidates (defaults to TRIPSYNC_WEEKEND_COUNT)
        #[arg(short, long)]
        count: Option<usize>,

        /// single_day, weekend, long_weekend, week, or a number of days
        #[arg(short, long, default_value = "weekend")]
        length: TripLength,
    },
    /// Rank weekends from an availability snapshot
    Score {
        /// JSON snapshot, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },
    /// Resolve a ranked-choice poll
    Resolve {
        /// JSON snapshot, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
    },
    /// Export a finalized trip as an .ics calendar
    Export {
        /// JSON trip, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Where to write the calendar (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = CliConfig::from_env()?;

    // Initialize logging
    init_logging(config.log_level)?;

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Weekends {
            from,
            count,
            length,
        } => commands::weekends(&config, &from, count, length)
            .and_then(|output| write_output(None, &output)),
        Commands::Score { input } => read_input(&input)
            .and_then(|document| commands::score(&document))
            .and_then(|output| write_output(None, &output)),
        Commands::Resolve { input } => read_input(&input)
            .and_then(|document| commands::resolve_poll(&document))
            .and_then(|output| write_output(None, &output)),
        Commands::Export { input, output } => read_input(&input)
            .and_then(|document| commands::export(&config, &document))
            .and_then(|calendar| write_output(output.as_deref(), &calendar)),
    };

    if let Err(e) = &result {
        error!("Command failed: {}", e);
    }

    result
}
