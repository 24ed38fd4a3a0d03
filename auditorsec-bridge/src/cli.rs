use auditorsec_core::tracks::DEFAULT_TRACK_ID;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "auditorsec",
    version,
    about = "AuditorSEC unified command: development tracks and strategic advisor"
)]
pub struct Cli {
    /// Path to a config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the text-generation model
    #[arg(long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Open the terminal dashboard (default)
    Dashboard,

    /// List development tracks
    Tracks {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Ask the strategic advisor once and print the formatted answer
    Ask {
        /// Track id to analyse
        #[arg(long, default_value = DEFAULT_TRACK_ID)]
        track: String,

        /// Ask for a mitigation plan for the track's critical risks
        #[arg(long, conflicts_with = "query")]
        mitigation: bool,

        /// Free-form question; omitted means the default strategic task
        query: Vec<String>,
    },

    /// Format a response file (or stdin) the way the advisor panel does
    Format {
        /// Input file; reads stdin when omitted
        path: Option<PathBuf>,

        /// Emit display blocks as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Dashboard)
    }
}
