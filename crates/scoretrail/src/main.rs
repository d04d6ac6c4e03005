mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Commands::Record { url, score, json } => commands::record::run(data_dir, &url, score, json),
        Commands::Show { url, json } => commands::show::run(data_dir, &url, json),
        Commands::History { url, stats, limit } => {
            commands::history::run(data_dir, &url, stats, limit)
        }
        Commands::Key { url } => commands::key::run(&url),
        Commands::Version => commands::version::run(),
    }
}
