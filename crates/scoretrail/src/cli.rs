use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scoretrail")]
#[command(version)]
#[command(about = "Daily visibility score history, streaks and forecasts")]
pub struct Cli {
    /// Data directory (defaults to ~/.scoretrail)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record today's score for a URL and print the analysis
    Record {
        url: String,

        /// Score in [0, 100]
        score: f64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyse stored history without recording
    Show {
        url: String,

        #[arg(long)]
        json: bool,
    },

    /// List stored observations, newest first
    History {
        url: String,

        /// Show statistics summary
        #[arg(long)]
        stats: bool,

        /// Max observations to list
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Print the storage key derived from a URL
    Key { url: String },

    /// Print version information
    Version,
}
