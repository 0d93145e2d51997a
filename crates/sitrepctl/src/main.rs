//! Sitrep Control - CLI front-end for the incident signal extraction engine.
//!
//! Runs the same deterministic detectors the incident-logging UI calls,
//! straight from the terminal. Useful for triage spot-checks and for
//! verifying rule-table changes against real report text.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sitrepctl")]
#[command(about = "Incident signal extraction - classify radio reports from the command line", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full classification: callsign, incident type, priority, quick pass
    Classify {
        /// Report text to classify
        text: String,

        /// Emit machine-readable JSON instead of the human summary
        #[arg(long)]
        json: bool,
    },

    /// Detect callsigns in report text
    Callsign {
        /// Report text to scan
        text: String,

        /// List every distinct callsign instead of only the first
        #[arg(long)]
        all: bool,
    },

    /// Score report priority
    Priority {
        /// Report text to score
        text: String,

        /// Incident type hint, e.g. "Fire" or "Attendance"
        #[arg(long)]
        incident_type: Option<String>,

        /// Emit machine-readable JSON instead of the human summary
        #[arg(long)]
        json: bool,
    },

    /// List the incident type vocabulary with priority bounds
    Types,

    /// Validate the built-in rule tables
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { text, json } => commands::classify(&text, json),
        Commands::Callsign { text, all } => commands::callsign(&text, all),
        Commands::Priority {
            text,
            incident_type,
            json,
        } => commands::priority(&text, incident_type.as_deref(), json),
        Commands::Types => commands::types(),
        Commands::Check => commands::check(),
    }
}
