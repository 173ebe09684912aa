//! Wowwah CLI - command-line host for the WOW WAH filter effect.

mod commands;
mod wav;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wowwah")]
#[command(author, version, about = "WOW WAH filter effect CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a WAV file through the wah
    Process(commands::process::ProcessArgs),

    /// List parameters with their ranges and defaults
    Params,

    /// Show the humanizer vowel formant table
    Vowels,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Params => commands::params::run(),
        Commands::Vowels => commands::vowels::run(),
    }
}
